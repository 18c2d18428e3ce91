//! Content tables for the embedded-systems circuit board scene.
//!
//! Sizes are the bounding boxes of the meshes the host builds, so picking
//! matches what is drawn closely enough for hover feedback.

use crate::constants::PACKET_STEP;
use crate::object::{ObjectId, ObjectMetadata};
use crate::path::{PathAnimator, PathError};
use crate::picking::PickingService;
use crate::ray::PickShape;
use glam::Vec3;

pub const KIND_MICROCONTROLLER: &str = "microcontroller";
pub const KIND_COMPONENT: &str = "component";

/// One pickable board part.
#[derive(Clone, Copy, Debug)]
pub struct BoardPart {
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub center: [f32; 3],
    pub size: [f32; 3],
}

impl BoardPart {
    pub fn metadata(&self) -> ObjectMetadata {
        ObjectMetadata::new(self.kind, self.name, self.description)
    }

    pub fn shape(&self) -> PickShape {
        PickShape::cuboid(Vec3::from_array(self.center), Vec3::from_array(self.size))
    }
}

const RESISTOR: (&str, &str) = (
    "Resistor",
    "Passive component that implements electrical resistance",
);
const CAPACITOR: (&str, &str) = ("Capacitor", "Stores electrical energy in an electric field");
const LED: (&str, &str) = (
    "LED",
    "Light Emitting Diode that converts electricity to light",
);

const fn component(part: (&'static str, &'static str), center: [f32; 3], size: [f32; 3]) -> BoardPart {
    BoardPart {
        kind: KIND_COMPONENT,
        name: part.0,
        description: part.1,
        center,
        size,
    }
}

pub const BOARD_PARTS: [BoardPart; 11] = [
    BoardPart {
        kind: KIND_MICROCONTROLLER,
        name: "STM32H7",
        description: "High-performance ARM Cortex-M7 based MCU with advanced peripherals",
        center: [-3.0, 0.3, 0.0],
        size: [2.0, 0.2, 2.0],
    },
    BoardPart {
        kind: KIND_MICROCONTROLLER,
        name: "NRF5340",
        description: "Dual-core ARM Cortex-M33 wireless SoC with Bluetooth Low Energy capability",
        center: [3.0, 0.3, 0.0],
        size: [1.8, 0.2, 1.8],
    },
    // Resistor and capacitor bodies lie on their side (cylinder rotated about X).
    component(RESISTOR, [-2.0, 0.3, 2.0], [0.2, 0.2, 0.4]),
    component(RESISTOR, [-1.5, 0.3, 2.0], [0.2, 0.2, 0.4]),
    component(RESISTOR, [-1.0, 0.3, 2.0], [0.2, 0.2, 0.4]),
    component(CAPACITOR, [1.0, 0.3, 2.0], [0.3, 0.3, 0.3]),
    component(CAPACITOR, [1.5, 0.3, 2.0], [0.3, 0.3, 0.3]),
    component(CAPACITOR, [2.0, 0.3, 2.0], [0.3, 0.3, 0.3]),
    component(LED, [-2.0, 0.3, -2.0], [0.2, 0.2, 0.2]),
    component(LED, [-1.5, 0.3, -2.0], [0.2, 0.2, 0.2]),
    component(LED, [-1.0, 0.3, -2.0], [0.2, 0.2, 0.2]),
];

/// Data packet routes from each microcontroller along the board traces.
pub const PACKET_PATHS: [[[f32; 3]; 5]; 2] = [
    [
        [-3.0, 0.3, 0.0],
        [-3.0, 0.5, 0.0],
        [-3.0, 0.5, -2.0],
        [-1.5, 0.5, -2.0],
        [-1.5, 0.3, -2.0],
    ],
    [
        [3.0, 0.3, 0.0],
        [3.0, 0.5, 0.0],
        [3.0, 0.5, 2.0],
        [1.5, 0.5, 2.0],
        [1.5, 0.3, 2.0],
    ],
];

/// Packet colours (cyan, magenta) for hosts building the marker meshes.
pub const PACKET_COLORS: [u32; 2] = [0x00f0ff, 0xff00ff];

/// Registers every board part, returning ids in [`BOARD_PARTS`] order.
pub fn register_board(picking: &mut PickingService) -> Vec<ObjectId> {
    BOARD_PARTS
        .iter()
        .map(|part| picking.register(part.metadata(), part.shape()))
        .collect()
}

/// One animator per packet route at the default per-frame step.
pub fn packet_animators() -> Result<Vec<PathAnimator>, PathError> {
    PACKET_PATHS
        .iter()
        .map(|route| {
            let waypoints = route.iter().copied().map(Vec3::from_array).collect();
            PathAnimator::from_waypoints(waypoints, PACKET_STEP)
        })
        .collect()
}

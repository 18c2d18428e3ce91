#![cfg(target_arch = "wasm32")]
use glam::Vec3;
use showcase_core::showcase::{packet_animators, register_board, PACKET_COLORS};
use showcase_core::{
    Camera, ObjectId, ObjectMetadata, PickShape, CAMERA_ZFAR, CAMERA_ZNEAR, HIGHLIGHT_EMISSIVE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod frame;

use frame::ShowcaseState;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");
    Ok(())
}

/// Emissive colour for the hovered mesh; restore the mesh's own on leave.
#[wasm_bindgen(js_name = highlightEmissive)]
pub fn highlight_emissive() -> u32 {
    HIGHLIGHT_EMISSIVE
}

/// Marker colours for the board's data packets, in marker order.
#[wasm_bindgen(js_name = packetColors)]
pub fn packet_colors() -> Vec<u32> {
    PACKET_COLORS.to_vec()
}

/// Picking and marker animation for one 3D scene, driven by the JS host's
/// render loop. Object ids cross the boundary as JS numbers.
#[wasm_bindgen]
pub struct Showcase {
    state: Rc<RefCell<ShowcaseState>>,
}

#[wasm_bindgen]
impl Showcase {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Showcase {
        Showcase {
            state: Rc::new(RefCell::new(ShowcaseState::new())),
        }
    }

    /// Pre-populated with the circuit board parts and its two data packets.
    #[wasm_bindgen(js_name = withEmbeddedBoard)]
    pub fn with_embedded_board() -> Result<Showcase, JsValue> {
        let showcase = Showcase::new();
        {
            let mut st = showcase.state.borrow_mut();
            register_board(&mut st.picking);
            st.markers = packet_animators().map_err(|e| JsValue::from_str(&e.to_string()))?;
            log::info!(
                "[scene] board parts={} packets={}",
                st.picking.len(),
                st.markers.len()
            );
        }
        Ok(showcase)
    }

    /// Wires pointer listeners for the canvas with id `canvas_id`.
    pub fn attach(&self, canvas_id: &str) -> Result<(), JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = dom::canvas_by_id(&document, canvas_id)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        events::wire_input_handlers(&canvas, &self.state);
        Ok(())
    }

    #[wasm_bindgen(js_name = registerBox)]
    #[allow(clippy::too_many_arguments)]
    pub fn register_box(
        &self,
        kind: &str,
        name: &str,
        description: &str,
        cx: f32,
        cy: f32,
        cz: f32,
        sx: f32,
        sy: f32,
        sz: f32,
        yaw: f32,
    ) -> f64 {
        let shape = PickShape::cuboid_yaw(Vec3::new(cx, cy, cz), Vec3::new(sx, sy, sz), yaw);
        let id = self
            .state
            .borrow_mut()
            .register(ObjectMetadata::new(kind, name, description), shape);
        id.0 as f64
    }

    #[wasm_bindgen(js_name = registerSphere)]
    #[allow(clippy::too_many_arguments)]
    pub fn register_sphere(
        &self,
        kind: &str,
        name: &str,
        description: &str,
        cx: f32,
        cy: f32,
        cz: f32,
        radius: f32,
    ) -> f64 {
        let shape = PickShape::sphere(Vec3::new(cx, cy, cz), radius);
        let id = self
            .state
            .borrow_mut()
            .register(ObjectMetadata::new(kind, name, description), shape);
        id.0 as f64
    }

    /// Ids that are not whole non-negative numbers match nothing and are ignored.
    pub fn unregister(&self, id: f64) {
        let Some(id) = ObjectId::from_f64(id) else {
            log::debug!("[pick] unregister ignored for non-id value {id}");
            return;
        };
        let events = self.state.borrow_mut().unregister(id);
        frame::publish(&self.state, &events);
    }

    /// Drops every object and marker, e.g. when the scene area is torn down.
    pub fn clear(&self) {
        let events = self.state.borrow_mut().clear();
        frame::publish(&self.state, &events);
    }

    /// Adds a looping marker. `waypoints` is packed xyz triples.
    #[wasm_bindgen(js_name = addMarker)]
    pub fn add_marker(&self, waypoints: &[f32], speed: f32) -> Result<usize, JsValue> {
        let points = waypoints
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        self.state
            .borrow_mut()
            .add_marker(points, speed)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = updatePointer)]
    pub fn update_pointer(&self, x: f32, y: f32) {
        self.state.borrow_mut().update_pointer(x, y);
    }

    #[wasm_bindgen(js_name = updatePointerClient)]
    pub fn update_pointer_client(&self, client_x: f32, client_y: f32, width: f32, height: f32) {
        self.state
            .borrow_mut()
            .update_pointer_client(client_x, client_y, width, height);
    }

    /// Call once per rendered frame with the current camera pose.
    #[allow(clippy::too_many_arguments)]
    pub fn frame(
        &self,
        eye_x: f32,
        eye_y: f32,
        eye_z: f32,
        target_x: f32,
        target_y: f32,
        target_z: f32,
        fovy_degrees: f32,
        aspect: f32,
    ) {
        let camera = Camera {
            eye: Vec3::new(eye_x, eye_y, eye_z),
            target: Vec3::new(target_x, target_y, target_z),
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        };
        let events = self.state.borrow_mut().frame(&camera);
        frame::publish(&self.state, &events);
    }

    pub fn click(&self) {
        frame::click(&self.state);
    }

    /// Current marker positions as packed xyz triples.
    #[wasm_bindgen(js_name = markerPositions)]
    pub fn marker_positions(&self) -> js_sys::Float32Array {
        let positions = self.state.borrow().marker_positions();
        js_sys::Float32Array::from(bytemuck::cast_slice::<Vec3, f32>(&positions))
    }

    pub fn cursor(&self) -> String {
        self.state.borrow().picking.cursor().as_css().to_string()
    }

    pub fn highlighted(&self) -> Option<f64> {
        self.state.borrow().picking.highlighted().map(|id| id.0 as f64)
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new()
    }
}

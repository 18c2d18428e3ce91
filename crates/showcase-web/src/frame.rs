use crate::dom;
use glam::Vec3;
use showcase_core::{
    Camera, CursorStyle, ObjectId, ObjectMetadata, PathAnimator, PathError, PickEvent,
    PickEvents, PickShape, PickingService, PointerState,
};
use std::cell::RefCell;

/// Everything one scene needs per frame: picking plus the moving markers.
#[derive(Default)]
pub struct ShowcaseState {
    pub picking: PickingService,
    pub markers: Vec<PathAnimator>,
    applied_cursor: Option<CursorStyle>,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, metadata: ObjectMetadata, shape: PickShape) -> ObjectId {
        self.picking.register(metadata, shape)
    }

    pub fn unregister(&mut self, id: ObjectId) -> PickEvents {
        self.picking.unregister(id)
    }

    pub fn clear(&mut self) -> PickEvents {
        self.markers.clear();
        self.picking.clear()
    }

    pub fn add_marker(&mut self, waypoints: Vec<Vec3>, speed: f32) -> Result<usize, PathError> {
        let animator = PathAnimator::from_waypoints(waypoints, speed)?;
        self.markers.push(animator);
        Ok(self.markers.len() - 1)
    }

    pub fn update_pointer(&mut self, x: f32, y: f32) {
        self.picking.update_pointer(x, y);
    }

    /// Canvas-relative CSS pixels. Samples outside the canvas are dropped.
    pub fn update_pointer_client(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if let Some(p) = PointerState::from_client_within(x, y, width, height) {
            self.picking.update_pointer(p.x, p.y);
        }
    }

    /// One rendered frame: pick, then move every marker one step.
    pub fn frame(&mut self, camera: &Camera) -> PickEvents {
        let (_, events) = self.picking.tick(camera);
        for marker in &mut self.markers {
            marker.step();
        }
        events
    }

    pub fn marker_positions(&self) -> Vec<Vec3> {
        self.markers.iter().map(PathAnimator::current_position).collect()
    }

    /// Cursor to write if it changed since the last write.
    fn cursor_change(&mut self) -> Option<CursorStyle> {
        let cursor = self.picking.cursor();
        if self.applied_cursor == Some(cursor) {
            return None;
        }
        self.applied_cursor = Some(cursor);
        Some(cursor)
    }
}

/// Pushes notifications and the cursor affordance to the page.
///
/// Must be called with `state` not borrowed: listeners run synchronously and
/// may call back into the showcase.
pub fn publish(state: &RefCell<ShowcaseState>, events: &[PickEvent]) {
    let cursor = state.borrow_mut().cursor_change();
    if let Some(cursor) = cursor {
        dom::apply_cursor(cursor);
    }
    for ev in events {
        if let PickEvent::Click(n) = ev {
            log::info!("[click] {} '{}'", n.id, n.name);
        }
        if let Err(e) = dom::dispatch_pick_event(ev) {
            log::warn!("[pick] failed to dispatch {}: {:?}", ev.event_name(), e);
        }
    }
}

/// Click over whatever is highlighted right now.
pub fn click(state: &RefCell<ShowcaseState>) {
    let clicked = state.borrow().picking.click();
    if let Some(ev) = clicked {
        publish(state, std::slice::from_ref(&ev));
    }
}

//! Pointer picking over a dynamic set of interactive objects.
//!
//! The service owns the single "currently highlighted" slot. Hosts feed it
//! pointer samples at input rate and call [`PickingService::tick`] once per
//! rendered frame; every highlight change comes back as a leave/enter pair
//! that the UI layer turns into popups and cursor changes.

use crate::camera::Camera;
use crate::object::{InteractiveObject, ObjectId, ObjectMetadata};
use crate::pointer::PointerState;
use crate::ray::PickShape;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Payload carried by every notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickNotice {
    pub id: ObjectId,
    pub kind: String,
    pub name: String,
    pub description: String,
}

impl PickNotice {
    fn from_object(object: &InteractiveObject) -> Self {
        Self {
            id: object.id,
            kind: object.metadata.kind.clone(),
            name: object.metadata.name.clone(),
            description: object.metadata.description.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickEvent {
    Enter(PickNotice),
    Leave(PickNotice),
    Click(PickNotice),
}

impl PickEvent {
    pub fn notice(&self) -> &PickNotice {
        match self {
            Self::Enter(n) | Self::Leave(n) | Self::Click(n) => n,
        }
    }

    /// DOM event name the web layer dispatches for this notification.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Enter(_) => "object-enter",
            Self::Leave(_) => "object-leave",
            Self::Click(_) => "object-clicked",
        }
    }
}

/// At most one leave and one enter per call.
pub type PickEvents = SmallVec<[PickEvent; 2]>;

/// Nearest object under the pointer for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickResult {
    pub object: Option<ObjectId>,
    pub distance: f32,
}

impl PickResult {
    pub const MISS: Self = Self {
        object: None,
        distance: f32::INFINITY,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
}

impl CursorStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
        }
    }
}

#[derive(Debug)]
struct Entry {
    object: InteractiveObject,
    highlighted: bool,
}

#[derive(Debug, Default)]
pub struct PickingService {
    objects: FnvHashMap<ObjectId, Entry>,
    highlighted: Option<ObjectId>,
    pointer: PointerState,
    next_id: u64,
}

impl PickingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new object and hands back its freshly allocated id.
    ///
    /// Ids count up from the highest one seen. An explicit registration of
    /// `u64::MAX` does not advance the counter, so allocation carries on from
    /// where it was and skips any id that is still registered.
    pub fn register(&mut self, metadata: ObjectMetadata, shape: PickShape) -> ObjectId {
        let mut id = ObjectId(self.next_id);
        while self.objects.contains_key(&id) {
            id = ObjectId(id.0.wrapping_add(1));
        }
        self.register_object(InteractiveObject {
            id,
            metadata,
            shape,
        })
    }

    /// Registers a pre-built object. A second registration of the same id is ignored.
    pub fn register_object(&mut self, object: InteractiveObject) -> ObjectId {
        let id = object.id;
        if self.objects.contains_key(&id) {
            return id;
        }
        match id.0.checked_add(1) {
            Some(next) => self.next_id = self.next_id.max(next),
            None => log::warn!(
                "[pick] {id} is the last id; allocation continues from #{}",
                self.next_id
            ),
        }
        log::debug!("[pick] register {} '{}'", id, object.metadata.name);
        self.objects.insert(
            id,
            Entry {
                object,
                highlighted: false,
            },
        );
        id
    }

    /// Drops an object. Unregistering the highlighted object emits its leave first.
    pub fn unregister(&mut self, id: ObjectId) -> PickEvents {
        let mut events = PickEvents::new();
        let Some(entry) = self.objects.remove(&id) else {
            return events;
        };
        log::debug!("[pick] unregister {} '{}'", id, entry.object.metadata.name);
        if self.highlighted == Some(id) {
            self.highlighted = None;
            events.push(PickEvent::Leave(PickNotice::from_object(&entry.object)));
        }
        events
    }

    /// Removes every object, e.g. when a scene area is torn down.
    pub fn clear(&mut self) -> PickEvents {
        let events = self.set_highlight(None);
        self.objects.clear();
        events
    }

    /// Moves a registered object. Returns `false` for unknown ids.
    pub fn set_shape(&mut self, id: ObjectId, shape: PickShape) -> bool {
        match self.objects.get_mut(&id) {
            Some(entry) => {
                entry.object.shape = shape;
                true
            }
            None => false,
        }
    }

    /// Records a pointer sample. Picking happens on the next [`tick`](Self::tick).
    pub fn update_pointer(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("[pick] ignoring non-finite pointer component ({x}, {y})");
        }
        self.pointer = self.pointer.merged(x, y);
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Casts the pointer ray and updates the highlight.
    pub fn tick(&mut self, camera: &Camera) -> (PickResult, PickEvents) {
        let result = self.pick(camera);
        let events = self.set_highlight(result.object);
        (result, events)
    }

    /// Nearest hit under the pointer without touching highlight state.
    pub fn pick(&self, camera: &Camera) -> PickResult {
        let ray = camera.ray_through(self.pointer);
        let mut best = PickResult::MISS;
        for (id, entry) in &self.objects {
            let Some(t) = entry.object.shape.intersect(&ray) else {
                continue;
            };
            let closer = match best.object {
                None => true,
                Some(best_id) => t < best.distance || (t == best.distance && *id < best_id),
            };
            if closer {
                best = PickResult {
                    object: Some(*id),
                    distance: t,
                };
            }
        }
        best
    }

    /// Click over the current highlight; no new ray is cast.
    pub fn click(&self) -> Option<PickEvent> {
        let id = self.highlighted?;
        let entry = self.objects.get(&id)?;
        log::debug!("[pick] click {} '{}'", id, entry.object.metadata.name);
        Some(PickEvent::Click(PickNotice::from_object(&entry.object)))
    }

    pub fn highlighted(&self) -> Option<ObjectId> {
        self.highlighted
    }

    pub fn is_highlighted(&self, id: ObjectId) -> bool {
        self.objects.get(&id).is_some_and(|e| e.highlighted)
    }

    pub fn cursor(&self) -> CursorStyle {
        if self.is_pointer() {
            CursorStyle::Pointer
        } else {
            CursorStyle::Default
        }
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.highlighted.is_some()
    }

    pub fn object(&self, id: ObjectId) -> Option<&InteractiveObject> {
        self.objects.get(&id).map(|e| &e.object)
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self.objects.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn set_highlight(&mut self, next: Option<ObjectId>) -> PickEvents {
        let mut events = PickEvents::new();
        if self.highlighted == next {
            return events;
        }
        if let Some(old) = self.highlighted.take() {
            if let Some(entry) = self.objects.get_mut(&old) {
                entry.highlighted = false;
                log::debug!("[pick] leave {} '{}'", old, entry.object.metadata.name);
                events.push(PickEvent::Leave(PickNotice::from_object(&entry.object)));
            }
        }
        if let Some(new) = next {
            if let Some(entry) = self.objects.get_mut(&new) {
                entry.highlighted = true;
                self.highlighted = Some(new);
                log::debug!("[pick] enter {} '{}'", new, entry.object.metadata.name);
                events.push(PickEvent::Enter(PickNotice::from_object(&entry.object)));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn chip(name: &str) -> ObjectMetadata {
        ObjectMetadata::new("microcontroller", name, "test chip")
    }

    #[test]
    fn register_object_twice_keeps_first() {
        let mut svc = PickingService::new();
        let first = InteractiveObject {
            id: ObjectId(7),
            metadata: chip("A"),
            shape: PickShape::sphere(Vec3::ZERO, 1.0),
        };
        let mut second = first.clone();
        second.metadata = chip("B");
        svc.register_object(first);
        svc.register_object(second);
        assert_eq!(svc.len(), 1);
        assert_eq!(svc.object(ObjectId(7)).unwrap().metadata.name, "A");
        // Fresh ids never collide with explicit ones.
        let next = svc.register(chip("C"), PickShape::sphere(Vec3::X, 1.0));
        assert_eq!(next, ObjectId(8));
    }

    #[test]
    fn last_id_does_not_stall_allocation() {
        let mut svc = PickingService::new();
        let shape = PickShape::sphere(Vec3::ZERO, 1.0);
        svc.register(chip("A"), shape);
        svc.register_object(InteractiveObject {
            id: ObjectId(u64::MAX),
            metadata: chip("Max"),
            shape,
        });
        let b = svc.register(chip("B"), shape);
        let c = svc.register(chip("C"), shape);
        assert_eq!(b, ObjectId(1));
        assert_eq!(c, ObjectId(2));
        assert_eq!(svc.len(), 4);
        assert_eq!(svc.object(ObjectId(u64::MAX)).unwrap().metadata.name, "Max");
    }

    #[test]
    fn allocation_skips_ids_still_registered() {
        let mut svc = PickingService::new();
        let shape = PickShape::sphere(Vec3::ZERO, 1.0);
        svc.register_object(InteractiveObject {
            id: ObjectId(u64::MAX),
            metadata: chip("Max"),
            shape,
        });
        // Counter still at zero; a fresh id must not land on an existing one.
        let a = svc.register(chip("A"), shape);
        assert_eq!(a, ObjectId(0));
        assert_ne!(svc.register(chip("B"), shape), a);
        assert_eq!(svc.len(), 3);
    }

    #[test]
    fn highlight_flag_tracks_current_pick() {
        let mut svc = PickingService::new();
        let cam = Camera::looking_at(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO, 1.0);
        let a = svc.register(chip("A"), PickShape::sphere(Vec3::ZERO, 0.5));
        svc.tick(&cam);
        assert!(svc.is_highlighted(a));
        svc.update_pointer(1.0, 1.0);
        svc.tick(&cam);
        assert!(!svc.is_highlighted(a));
        assert_eq!(svc.cursor(), CursorStyle::Default);
    }
}

use crate::constants::{POINTER_NDC_MAX, POINTER_NDC_MIN};

/// Last known pointer position in normalized device coordinates.
///
/// `x` grows to the right and `y` grows upwards, both in \[-1, 1\]. The
/// centre of the viewport is the origin, which is also the default.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts viewport pixel coordinates (origin top-left, +y down).
    #[inline]
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        if width > 0.0 && height > 0.0 {
            Self {
                x: (client_x / width) * 2.0 - 1.0,
                y: -(client_y / height) * 2.0 + 1.0,
            }
        } else {
            Self::default()
        }
    }

    /// Like [`from_client`](Self::from_client) but `None` for samples outside
    /// the `width` x `height` rect or on a zero-sized one.
    pub fn from_client_within(
        client_x: f32,
        client_y: f32,
        width: f32,
        height: f32,
    ) -> Option<Self> {
        let inside = (0.0..=width).contains(&client_x) && (0.0..=height).contains(&client_y);
        (inside && width > 0.0 && height > 0.0)
            .then(|| Self::from_client(client_x, client_y, width, height))
    }

    /// Applies a new sample on top of `self`: non-finite components keep the
    /// previous value, finite ones are clamped into range.
    #[inline]
    pub fn merged(self, x: f32, y: f32) -> Self {
        let pick = |new: f32, old: f32| {
            if new.is_finite() {
                new.clamp(POINTER_NDC_MIN, POINTER_NDC_MAX)
            } else {
                old
            }
        };
        Self {
            x: pick(x, self.x),
            y: pick(y, self.y),
        }
    }
}

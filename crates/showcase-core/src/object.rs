use crate::ray::PickShape;
use std::fmt;

/// Opaque handle for a registered object. Never reused by one service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Id from a JS number. Rejects NaN, infinities, negatives, fractions and
    /// values beyond `u64`.
    pub fn from_f64(value: f64) -> Option<Self> {
        // 2^64, the first integer-valued f64 that no longer fits.
        const LIMIT: f64 = 18_446_744_073_709_551_616.0;
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < LIMIT {
            Some(Self(value as u64))
        } else {
            None
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Descriptive data attached at registration; immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub kind: String,
    pub name: String,
    pub description: String,
}

impl ObjectMetadata {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A pickable visual entity as seen by the picking service.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractiveObject {
    pub id: ObjectId,
    pub metadata: ObjectMetadata,
    pub shape: PickShape,
}

use glam::Vec3;

// Shared interaction tuning constants used by the core and the web facade.

// Camera defaults (match the portfolio scene camera)
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.6, 5.0];

// Path animation
pub const PACKET_STEP: f32 = 0.02; // fraction of a segment covered per frame
pub const SEGMENT_DONE_EPSILON: f32 = 1e-5; // progress this close to 1 completes the segment

// Highlight
pub const HIGHLIGHT_EMISSIVE: u32 = 0x006699; // emissive the host applies to the hovered mesh

// Pointer
pub const POINTER_NDC_MIN: f32 = -1.0;
pub const POINTER_NDC_MAX: f32 = 1.0;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from_array(CAMERA_EYE)
}

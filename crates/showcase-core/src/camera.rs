//! Per-frame camera pose handed in by the host renderer.
//!
//! The core never owns or animates the camera; it only needs enough of it to
//! turn a normalized pointer position into a world-space picking ray.

use crate::constants::{camera_eye_vec3, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::pointer::PointerState;
use crate::ray::Ray;
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_at(camera_eye_vec3(), Vec3::ZERO, 16.0 / 9.0)
    }
}

impl Camera {
    /// Camera at `eye` looking at `target` with the scene's default lens.
    pub fn looking_at(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-4), self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space ray from the eye through `pointer` (NDC, +y up).
    pub fn ray_through(&self, pointer: PointerState) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        // Near plane unprojects with far less f32 error than the far plane.
        let p_near = inv * Vec4::new(pointer.x, pointer.y, 0.0, 1.0);
        let p0: Vec3 = p_near.truncate() / p_near.w;
        Ray::new(self.eye, p0 - self.eye)
    }

    /// Projects a world point to NDC. `None` when it lies behind the eye.
    pub fn project(&self, world: Vec3) -> Option<PointerState> {
        let clip = self.projection_matrix() * self.view_matrix() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(PointerState {
            x: clip.x / clip.w,
            y: clip.y / clip.w,
        })
    }
}

//! Ray casting primitives used by the picking service.
//!
//! Distances returned by every test are measured along the ray in world
//! units, so hits from different shapes can be compared directly.

use glam::{Affine3A, Vec3};

/// A half-line starting at `origin`. `direction` is expected to be normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Geometry a registered object is picked against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickShape {
    Sphere { center: Vec3, radius: f32 },
    /// Oriented box: `half_extents` in local space, placed by `transform`.
    Box {
        transform: Affine3A,
        half_extents: Vec3,
    },
}

impl PickShape {
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere { center, radius }
    }

    /// Axis-aligned box centred at `center` with full edge lengths `size`.
    pub fn cuboid(center: Vec3, size: Vec3) -> Self {
        Self::Box {
            transform: Affine3A::from_translation(center),
            half_extents: size * 0.5,
        }
    }

    /// Box rotated by `yaw` radians around +Y, like a group turned on the board.
    pub fn cuboid_yaw(center: Vec3, size: Vec3, yaw: f32) -> Self {
        Self::Box {
            transform: Affine3A::from_rotation_translation(glam::Quat::from_rotation_y(yaw), center),
            half_extents: size * 0.5,
        }
    }

    pub fn center(&self) -> Vec3 {
        match self {
            Self::Sphere { center, .. } => *center,
            Self::Box { transform, .. } => transform.translation.into(),
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Self::Sphere { center, radius } => ray_sphere(ray.origin, ray.direction, center, radius),
            Self::Box {
                transform,
                half_extents,
            } => ray_obb(ray, &transform, half_extents),
        }
    }
}

/// Nearest non-negative hit distance. A ray starting inside reports the exit.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = Vec3::new(
        if ray_direction.x != 0.0 { 1.0 / ray_direction.x } else { f32::INFINITY },
        if ray_direction.y != 0.0 { 1.0 / ray_direction.y } else { f32::INFINITY },
        if ray_direction.z != 0.0 { 1.0 / ray_direction.z } else { f32::INFINITY },
    );

    let mut tmin = f32::NEG_INFINITY;
    let mut tmax = f32::INFINITY;
    for axis in 0..3 {
        let o = ray_origin[axis];
        if ray_direction[axis] == 0.0 {
            // Parallel to this slab: either always inside it or never.
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let (mut t0, mut t1) = ((min[axis] - o) * inv[axis], (max[axis] - o) * inv[axis]);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        tmin = tmin.max(t0);
        tmax = tmax.min(t1);
        if tmin > tmax {
            return None;
        }
    }

    if tmax < 0.0 {
        return None;
    }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

/// Ray against an oriented box. The hit distance is converted back to world units.
pub fn ray_obb(ray: &Ray, transform: &Affine3A, half_extents: Vec3) -> Option<f32> {
    let inv = transform.inverse();
    let o_local = inv.transform_point3(ray.origin);
    let d_local = inv.transform_vector3(ray.direction);
    let t_local = ray_aabb(o_local, d_local, -half_extents, half_extents)?;
    let hit_world = transform.transform_point3(o_local + d_local * t_local);
    Some((hit_world - ray.origin).length())
}

//! Looping marker motion along a fixed polyline.
//!
//! The animator is stepped explicitly with a fraction of the current segment,
//! never from a clock, so the same sequence of `advance` calls always yields
//! the same positions.
//!
//! Known limitation: one `advance` crosses at most one segment boundary.
//! Whatever overshoots the end of the current segment is discarded and the
//! marker restarts at the beginning of the next one.

use crate::constants::SEGMENT_DONE_EPSILON;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("path needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },
    #[error("path speed must be a positive finite number, got {speed}")]
    NonPositiveSpeed { speed: f32 },
}

/// Immutable ordered waypoints, at least two of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    waypoints: Vec<Vec3>,
}

impl Path {
    pub fn new(waypoints: Vec<Vec3>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        Ok(Self { waypoints })
    }

    /// Loop that returns to its first waypoint.
    pub fn closed(mut waypoints: Vec<Vec3>) -> Result<Self, PathError> {
        if let Some(&first) = waypoints.first() {
            if waypoints.len() >= 2 && waypoints.last() != Some(&first) {
                waypoints.push(first);
            }
        }
        Self::new(waypoints)
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Endpoints of segment `index`, if it exists.
    pub fn segment(&self, index: usize) -> Option<(Vec3, Vec3)> {
        let a = *self.waypoints.get(index)?;
        let b = *self.waypoints.get(index + 1)?;
        Some((a, b))
    }

    pub fn length(&self) -> f32 {
        self.waypoints.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

#[derive(Clone, Debug)]
pub struct PathAnimator {
    path: Path,
    segment_index: usize,
    segment_progress: f32,
    speed: f32,
}

impl PathAnimator {
    /// `speed` is the segment fraction covered by one [`step`](Self::step).
    pub fn new(path: Path, speed: f32) -> Result<Self, PathError> {
        check_speed(speed)?;
        Ok(Self {
            path,
            segment_index: 0,
            segment_progress: 0.0,
            speed,
        })
    }

    pub fn from_waypoints(waypoints: Vec<Vec3>, speed: f32) -> Result<Self, PathError> {
        Self::new(Path::new(waypoints)?, speed)
    }

    /// Moves forward by `delta_fraction` of the current segment.
    pub fn advance(&mut self, delta_fraction: f32) {
        if !delta_fraction.is_finite() || delta_fraction <= 0.0 {
            return;
        }
        self.segment_progress += delta_fraction;
        if self.segment_progress >= 1.0 - SEGMENT_DONE_EPSILON {
            self.segment_progress = 0.0;
            self.segment_index += 1;
            if self.segment_index >= self.path.segment_count() {
                self.segment_index = 0;
            }
        }
    }

    /// One frame at the configured speed.
    #[inline]
    pub fn step(&mut self) {
        self.advance(self.speed);
    }

    pub fn current_position(&self) -> Vec3 {
        let (a, b) = self
            .path
            .segment(self.segment_index)
            .unwrap_or((self.path.waypoints[0], self.path.waypoints[1]));
        a.lerp(b, self.segment_progress)
    }

    pub fn reset(&mut self) {
        self.segment_index = 0;
        self.segment_progress = 0.0;
    }

    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    pub fn segment_progress(&self) -> f32 {
        self.segment_progress
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<(), PathError> {
        check_speed(speed)?;
        self.speed = speed;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Infinite stream of positions, one per `step`, starting from the current
    /// state. `self` is left untouched, so calling again restarts the stream.
    pub fn positions(&self) -> PathPositions {
        PathPositions {
            animator: self.clone(),
        }
    }
}

fn check_speed(speed: f32) -> Result<(), PathError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(PathError::NonPositiveSpeed { speed })
    }
}

pub struct PathPositions {
    animator: PathAnimator,
}

impl Iterator for PathPositions {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        let pos = self.animator.current_position();
        self.animator.step();
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_path_appends_first_waypoint_once() {
        let p = Path::closed(vec![Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
        assert_eq!(p.segment_count(), 3);
        let again = Path::closed(p.waypoints().to_vec()).unwrap();
        assert_eq!(again.segment_count(), 3);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut a = PathAnimator::from_waypoints(vec![Vec3::ZERO, Vec3::X], 0.1).unwrap();
        a.advance(0.5);
        a.advance(-0.3);
        a.advance(f32::NAN);
        assert_eq!(a.segment_progress(), 0.5);
    }

    #[test]
    fn positions_stream_restarts() {
        let a = PathAnimator::from_waypoints(vec![Vec3::ZERO, Vec3::X], 0.5).unwrap();
        let first: Vec<Vec3> = a.positions().take(3).collect();
        let second: Vec<Vec3> = a.positions().take(3).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO]);
    }
}

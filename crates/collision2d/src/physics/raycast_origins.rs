//! Sweep-box geometry and raycast origin corners
//!
//! Each query derives the four corners of the sweep box from the owner's
//! current position, the shape's local offset, and the cached half-extents.
//! The half-extents are shrunk by the skin margin so probe rays start just
//! inside the visual box; the sweep adds the margin back to every probe
//! length and subtracts it from every resolved distance.

use crate::foundation::math::Vec2;
use crate::physics::shape::BoxShape;

/// The four corners of the sweep box for one query
///
/// Transient: recomputed for every check and never stored between queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastOrigins {
    /// Top-left corner
    pub top_left: Vec2,
    /// Top-right corner
    pub top_right: Vec2,
    /// Bottom-left corner
    pub bottom_left: Vec2,
    /// Bottom-right corner
    pub bottom_right: Vec2,
}

impl RaycastOrigins {
    /// Compute the corners of a box centered at `center` with the given
    /// half-extents
    pub fn from_box(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            top_left: center + Vec2::new(-half_extents.x, half_extents.y),
            top_right: center + Vec2::new(half_extents.x, half_extents.y),
            bottom_left: center + Vec2::new(-half_extents.x, -half_extents.y),
            bottom_right: center + Vec2::new(half_extents.x, -half_extents.y),
        }
    }
}

/// Half-extents of the sweep box: half the scaled shape size, shrunk by the
/// skin margin on each axis
pub fn sweep_half_extents(shape: &BoxShape, scale: Vec2, skin: f32) -> Vec2 {
    Vec2::new(
        shape.size.x * 0.5 * scale.x - skin,
        shape.size.y * 0.5 * scale.y - skin,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_from_center_and_half_extents() {
        let origins = RaycastOrigins::from_box(Vec2::new(1.0, 2.0), Vec2::new(0.5, 0.25));
        assert_eq!(origins.top_left, Vec2::new(0.5, 2.25));
        assert_eq!(origins.top_right, Vec2::new(1.5, 2.25));
        assert_eq!(origins.bottom_left, Vec2::new(0.5, 1.75));
        assert_eq!(origins.bottom_right, Vec2::new(1.5, 1.75));
    }

    #[test]
    fn test_half_extents_shrunk_by_skin() {
        let shape = BoxShape::new(2.0, 1.0);
        let half = sweep_half_extents(&shape, Vec2::new(1.0, 1.0), 0.025);
        assert_eq!(half, Vec2::new(1.0 - 0.025, 0.5 - 0.025));
    }

    #[test]
    fn test_half_extents_apply_scale_per_axis() {
        let shape = BoxShape::new(2.0, 2.0);
        let half = sweep_half_extents(&shape, Vec2::new(2.0, 0.5), 0.025);
        assert_eq!(half, Vec2::new(2.0 - 0.025, 0.5 - 0.025));
    }
}

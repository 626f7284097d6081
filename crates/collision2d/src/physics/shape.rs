//! Collider box shape

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Axis-aligned box shape attached to a collider
///
/// `size` is the full width/height in local units before the owner's scale is
/// applied; `offset` shifts the box center away from the owner's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    /// Full width and height of the box
    pub size: Vec2,
    /// Local offset of the box center from the owner position
    pub offset: Vec2,
}

impl BoxShape {
    /// Create a centered box with the given width and height
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::zeros(),
        }
    }

    /// Builder-style setter for the local center offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Whether both dimensions are strictly positive
    pub fn is_valid(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }
}

impl Default for BoxShape {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_box_is_centered() {
        let shape = BoxShape::new(2.0, 3.0);
        assert_eq!(shape.size, Vec2::new(2.0, 3.0));
        assert_eq!(shape.offset, Vec2::zeros());
        assert!(shape.is_valid());
    }

    #[test]
    fn test_with_offset() {
        let shape = BoxShape::new(1.0, 1.0).with_offset(Vec2::new(0.0, 0.25));
        assert_eq!(shape.offset, Vec2::new(0.0, 0.25));
    }

    #[test]
    fn test_degenerate_sizes_are_invalid() {
        assert!(!BoxShape::new(0.0, 1.0).is_valid());
        assert!(!BoxShape::new(1.0, -2.0).is_valid());
    }
}

//! Math utilities and types
//!
//! Provides the fundamental 2D math types used throughout the crate.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Transform representing position and scale in a 2D world
///
/// There is no rotation component: every collider in this crate is
/// axis-aligned, and the sweep math relies on that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Position in world space
    pub position: Vec2,

    /// Scale factors applied to attached shapes
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform2D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and a uniform scale factor
    pub fn from_position_scale(position: Vec2, scale: f32) -> Self {
        Self {
            position,
            scale: Vec2::new(scale, scale),
        }
    }
}

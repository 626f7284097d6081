//! # Collision2D
//!
//! Raycast-based 2D axis-aligned collision detection for tile worlds.
//!
//! The central type is [`physics::SweepCollider`]: it moves an axis-aligned
//! box through a level by casting a fan of parallel rays along the box's
//! leading edge, clamping the requested displacement so the box stops at the
//! nearest blocking surface (minus a small skin margin that keeps resting
//! contacts from jittering). Horizontal movement is always resolved before
//! vertical movement, and the vertical sweep starts from where the box will
//! be horizontally.
//!
//! ## Features
//!
//! - **Axis sweeps**: per-axis displacement clamping with directional contact
//!   flags (above/below/left/right) and obstacle handles
//! - **Exhaustive mode**: `check_all` reports every distinct obstacle touched
//!   during a movement, not just the nearest surface
//! - **Pluggable worlds**: ray queries go through the [`spatial::RaycastQuery`]
//!   trait; [`spatial::TileWorld`] is the bundled AABB implementation
//! - **Layer filtering**: `u32` collision masks in the style of
//!   [`physics::CollisionLayers`]
//!
//! ## Quick Start
//!
//! ```rust
//! use collision2d::prelude::*;
//!
//! // A solid floor strip on the environment layer.
//! let mut world = TileWorld::new();
//! world.insert(
//!     Aabb::new(Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0)),
//!     CollisionLayers::ENVIRONMENT,
//! );
//!
//! // A 1x1 actor hovering above the floor.
//! let mut collider = SweepCollider::new(
//!     BoxShape::new(1.0, 1.0),
//!     Transform2D::from_position(Vec2::new(0.0, 2.0)),
//!     ColliderConfig::default(),
//! )
//! .expect("valid collider setup");
//!
//! // Falling 5 units stops on the floor instead of tunneling through it.
//! let state = collider.check(&world, Vec2::new(0.0, -5.0));
//! assert!(state.below);
//! assert!(state.move_vector.y > -5.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod spatial;

/// Common imports for library users
pub mod prelude {
    pub use crate::config::{Config, ConfigError};
    pub use crate::foundation::math::{Transform2D, Vec2};
    pub use crate::physics::{
        BoxShape, ColliderConfig, ColliderError, CollisionLayers, CollisionState, SweepCollider,
    };
    pub use crate::spatial::{Aabb, ObstacleHandle, RayHit, RaycastQuery, TileWorld};
}

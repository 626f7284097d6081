//! Spatial primitives and world queries
//!
//! Everything the sweep collider knows about the world goes through the
//! [`RaycastQuery`] trait, so levels can swap in their own spatial structure.
//! [`TileWorld`] is the bundled implementation for static AABB geometry.

pub mod aabb;
pub mod raycast;
pub mod tile_world;

pub use aabb::Aabb;
pub use raycast::{ObstacleHandle, RayHit, RaycastQuery};
pub use tile_world::{Obstacle, TileWorld};

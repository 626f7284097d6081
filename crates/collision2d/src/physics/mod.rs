//! Collision physics for axis-aligned movement
//!
//! The [`SweepCollider`] resolves a requested per-step displacement against
//! world geometry one axis at a time, using fans of parallel raycasts along
//! the leading edge of the collider's box. There is no velocity integration
//! or contact response here; callers own the simulation loop and feed the
//! collider one movement vector per step.

pub mod layers;
pub mod raycast_origins;
pub mod shape;
pub mod sweep_collider;

pub use layers::CollisionLayers;
pub use raycast_origins::RaycastOrigins;
pub use shape::BoxShape;
pub use sweep_collider::{
    ColliderConfig, ColliderError, CollisionState, SweepCollider, RAY_COUNT, SKIN,
};

//! Abstract ray query interface for collision sweeps
//!
//! The sweep collider never does ray-vs-geometry math itself; it shapes ray
//! queries and interprets the hits. This trait is the seam that lets a game
//! back those queries with whatever spatial structure it already has (a flat
//! obstacle list, a tile grid, a quadtree).

use slotmap::new_key_type;

use crate::foundation::math::Vec2;

new_key_type! {
    /// Stable identifier for an obstacle registered with a query provider.
    ///
    /// Handles are weak references: holding one never keeps the obstacle
    /// alive, and a handle whose obstacle was removed simply stops matching.
    pub struct ObstacleHandle;
}

/// Result of a single ray query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The obstacle that was hit
    pub obstacle: ObstacleHandle,
    /// Distance from the ray origin to the hit point
    pub distance: f32,
}

/// Interface for casting rays against world geometry
///
/// `direction` is expected to be normalized; `mask` selects which obstacle
/// layers participate (an obstacle is eligible when `layer & mask != 0`).
pub trait RaycastQuery: Send + Sync {
    /// Cast a ray and return the nearest hit within `max_distance`, if any
    fn ray_cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<RayHit>;

    /// Cast a ray and return every hit within `max_distance`, sorted by
    /// ascending distance
    fn ray_cast_all(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Vec<RayHit>;
}

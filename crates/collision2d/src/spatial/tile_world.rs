//! Static AABB world backing the ray query interface
//!
//! A [`TileWorld`] is a flat collection of axis-aligned obstacles with layer
//! bits, stored in a slot map so handles stay stable across removals. Ray
//! queries are a linear scan; levels small enough for a 10-ray-per-step
//! collider do not need a broad phase, and anything bigger can provide its
//! own [`RaycastQuery`] implementation.

use slotmap::SlotMap;

use crate::foundation::math::Vec2;
use crate::spatial::aabb::Aabb;
use crate::spatial::raycast::{ObstacleHandle, RayHit, RaycastQuery};

/// A solid body registered in a [`TileWorld`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// World-space bounds
    pub aabb: Aabb,
    /// Layer bits used for mask filtering
    pub layer: u32,
}

/// Static obstacle collection with slot-map handles
#[derive(Debug, Default)]
pub struct TileWorld {
    obstacles: SlotMap<ObstacleHandle, Obstacle>,
}

impl TileWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an obstacle and return its handle
    pub fn insert(&mut self, aabb: Aabb, layer: u32) -> ObstacleHandle {
        self.obstacles.insert(Obstacle { aabb, layer })
    }

    /// Insert a square tile addressed by grid coordinates
    ///
    /// The tile occupies `[col * tile_size, (col + 1) * tile_size)` on x and
    /// the equivalent span on y.
    pub fn insert_tile(&mut self, col: i32, row: i32, tile_size: f32, layer: u32) -> ObstacleHandle {
        let min = Vec2::new(col as f32 * tile_size, row as f32 * tile_size);
        let max = min + Vec2::new(tile_size, tile_size);
        self.insert(Aabb::new(min, max), layer)
    }

    /// Remove an obstacle, returning it if the handle was live
    pub fn remove(&mut self, handle: ObstacleHandle) -> Option<Obstacle> {
        self.obstacles.remove(handle)
    }

    /// Look up an obstacle by handle
    pub fn obstacle(&self, handle: ObstacleHandle) -> Option<&Obstacle> {
        self.obstacles.get(handle)
    }

    /// Iterate over all obstacles and their handles
    pub fn iter(&self) -> impl Iterator<Item = (ObstacleHandle, &Obstacle)> {
        self.obstacles.iter()
    }

    /// Number of obstacles in the world
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether the world has no obstacles
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Remove all obstacles
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }
}

impl RaycastQuery for TileWorld {
    fn ray_cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;

        for (handle, obstacle) in &self.obstacles {
            if obstacle.layer & mask == 0 {
                continue;
            }
            if let Some(distance) = obstacle.aabb.cast_ray(origin, direction, max_distance) {
                if nearest.map_or(true, |hit| distance < hit.distance) {
                    nearest = Some(RayHit {
                        obstacle: handle,
                        distance,
                    });
                }
            }
        }

        nearest
    }

    fn ray_cast_all(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Vec<RayHit> {
        let mut hits: Vec<RayHit> = self
            .obstacles
            .iter()
            .filter(|(_, obstacle)| obstacle.layer & mask != 0)
            .filter_map(|(handle, obstacle)| {
                obstacle
                    .aabb
                    .cast_ray(origin, direction, max_distance)
                    .map(|distance| RayHit {
                        obstacle: handle,
                        distance,
                    })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal));
        hits
    }
}

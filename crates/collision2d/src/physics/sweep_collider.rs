//! Axis-sweep collision resolution
//!
//! Movement is resolved one axis at a time: a fan of parallel rays is cast
//! from the leading edge of the collider's box along the movement direction,
//! and the requested displacement is clamped so the box stops at the first
//! blocking surface found, minus the skin margin. The horizontal axis is
//! always resolved first; the vertical sweep starts from where the box will
//! end up horizontally, so diagonal movement is two sequential 1D sweeps.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::foundation::math::{Transform2D, Vec2};
use crate::physics::layers::CollisionLayers;
use crate::physics::raycast_origins::{sweep_half_extents, RaycastOrigins};
use crate::physics::shape::BoxShape;
use crate::spatial::raycast::{ObstacleHandle, RaycastQuery};

/// Number of probe rays cast along the leading edge per axis
pub const RAY_COUNT: usize = 5;

/// Skin margin in world units
///
/// The sweep box is shrunk by this much on each side, every probe ray is
/// lengthened by it, and every resolved distance has it subtracted back out.
/// The net effect is that a box at rest always stops one skin short of the
/// surface it hit, so resting contact never reports exact touching.
pub const SKIN: f32 = 0.025;

/// Outcome of a sweep query
///
/// For [`SweepCollider::check`] a single instance owned by the collider is
/// reset and refilled on every call; the returned reference is invalidated by
/// the next query. The type is `Copy`, so callers needing a stable snapshot
/// can dereference it into a local. [`SweepCollider::check_all`] instead
/// returns one freshly built value per distinct obstacle touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionState {
    /// A surface was hit above the box (moving up)
    pub above: bool,
    /// A surface was hit below the box (moving down)
    pub below: bool,
    /// A surface was hit left of the box (moving left)
    pub left: bool,
    /// A surface was hit right of the box (moving right)
    pub right: bool,
    /// Obstacle that blocked the horizontal sweep, if any
    pub obstacle_horizontal: Option<ObstacleHandle>,
    /// Obstacle that blocked the vertical sweep, if any
    pub obstacle_vertical: Option<ObstacleHandle>,
    /// The movement vector after collision resolution
    pub move_vector: Vec2,
}

impl Default for CollisionState {
    fn default() -> Self {
        Self {
            above: false,
            below: false,
            left: false,
            right: false,
            obstacle_horizontal: None,
            obstacle_vertical: None,
            move_vector: Vec2::zeros(),
        }
    }
}

impl CollisionState {
    /// True when any directional flag is set
    pub fn any(&self) -> bool {
        self.above || self.below || self.left || self.right
    }

    fn reset(&mut self, move_vector: Vec2) {
        *self = Self {
            move_vector,
            ..Self::default()
        };
    }
}

/// Sweep collider configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColliderConfig {
    /// Layers that can block this collider's movement
    pub mask: u32,
    /// The owner's own layer, used only for misconfiguration diagnostics
    pub layer: u32,
    /// Recompute the sweep-box half-extents on every query
    ///
    /// Only needed when the shape size or owner scale changes every frame;
    /// otherwise call [`SweepCollider::recompute_dimensions`] after changes.
    pub recompute_dimensions_each_query: bool,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            mask: CollisionLayers::ENVIRONMENT | CollisionLayers::PLATFORM,
            layer: CollisionLayers::ACTOR,
            recompute_dimensions_each_query: false,
        }
    }
}

impl Config for ColliderConfig {}

/// Fatal collider construction errors
///
/// Degenerate geometry makes every sweep meaningless, so these reject the
/// collider outright. An empty collision mask is deliberately NOT an error:
/// the collider is constructed disabled and reports no collisions (see
/// [`SweepCollider::new`]).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ColliderError {
    /// The box shape has a non-positive width or height
    #[error("collider box size must be positive, got {width}x{height}")]
    InvalidShape {
        /// Configured box width
        width: f32,
        /// Configured box height
        height: f32,
    },

    /// The owner transform has a non-positive scale factor
    #[error("collider scale must be positive, got ({x}, {y})")]
    InvalidScale {
        /// Scale factor on x
        x: f32,
        /// Scale factor on y
        y: f32,
    },
}

/// Raycast-based axis-aligned collision resolver
///
/// Owns the box shape, the owner's 2D transform, and the reusable
/// [`CollisionState`]. World geometry is reached through a
/// [`RaycastQuery`] passed into each query; the collider holds no reference
/// to the world between calls.
pub struct SweepCollider {
    shape: BoxShape,
    transform: Transform2D,
    config: ColliderConfig,
    enabled: bool,
    // Cached sweep-box half-extents; stale after shape/scale changes until
    // recompute_dimensions runs (a caller responsibility).
    half_extents: Vec2,
    state: CollisionState,
}

impl SweepCollider {
    /// Create a collider from a shape, the owner transform, and a config
    ///
    /// # Errors
    ///
    /// Returns [`ColliderError`] when the shape size or transform scale is
    /// not strictly positive. An empty `config.mask` is non-fatal: the
    /// collider starts disabled, logs a warning, and every query reports
    /// zero movement with no contacts.
    pub fn new(
        shape: BoxShape,
        transform: Transform2D,
        config: ColliderConfig,
    ) -> Result<Self, ColliderError> {
        if !shape.is_valid() {
            return Err(ColliderError::InvalidShape {
                width: shape.size.x,
                height: shape.size.y,
            });
        }
        if transform.scale.x <= 0.0 || transform.scale.y <= 0.0 {
            return Err(ColliderError::InvalidScale {
                x: transform.scale.x,
                y: transform.scale.y,
            });
        }

        let enabled = config.mask != CollisionLayers::NONE;
        if !enabled {
            log::warn!("sweep collider has an empty collision mask; disabling it");
        }
        if CollisionLayers::contains(config.mask, config.layer) {
            log::warn!(
                "sweep collider's own layer {:#x} is included in its collision mask {:#x}",
                config.layer,
                config.mask
            );
        }

        let half_extents = sweep_half_extents(&shape, transform.scale, SKIN);
        Ok(Self {
            shape,
            transform,
            config,
            enabled,
            half_extents,
            state: CollisionState::default(),
        })
    }

    /// Resolve a movement vector against the world using the configured mask
    ///
    /// See [`check_filtered`](Self::check_filtered).
    pub fn check(&mut self, world: &dyn RaycastQuery, move_vector: Vec2) -> &CollisionState {
        self.check_filtered(world, move_vector, self.config.mask)
    }

    /// Resolve a movement vector against the world with an explicit mask
    ///
    /// Casts up to [`RAY_COUNT`] rays per moved axis from the leading edge of
    /// the box and clamps each axis's displacement at the first blocking
    /// surface, skin margin excluded. Axes with a zero component are skipped
    /// entirely. The returned reference points at the collider's reusable
    /// state and is rewritten by the next query.
    ///
    /// Known quirk, kept for compatibility with the behavior this resolver
    /// replicates: within one axis the rays are probed in order along the
    /// leading edge, and the first ray that hits anything decides the axis.
    /// A later ray may have found a strictly nearer surface; it is never
    /// consulted. With convex, axis-aligned obstacles the first probe is the
    /// stopping surface in practice.
    pub fn check_filtered(
        &mut self,
        world: &dyn RaycastQuery,
        move_vector: Vec2,
        mask: u32,
    ) -> &CollisionState {
        if !self.enabled {
            self.state.reset(Vec2::zeros());
            return &self.state;
        }

        let origins = self.query_origins();
        self.state.reset(move_vector);

        // Horizontal sweep.
        if move_vector.x != 0.0 {
            let sign = move_vector.x.signum();
            let distance = move_vector.x.abs() + SKIN;
            let (start, end) = if sign < 0.0 {
                (origins.bottom_left, origins.top_left)
            } else {
                (origins.bottom_right, origins.top_right)
            };
            let direction = Vec2::new(sign, 0.0);

            for i in 0..RAY_COUNT {
                let t = i as f32 / (RAY_COUNT - 1) as f32;
                let origin = start.lerp(&end, t);
                if let Some(hit) = world.ray_cast(origin, direction, distance, mask) {
                    self.state.obstacle_horizontal = Some(hit.obstacle);
                    self.state.move_vector.x = (hit.distance - SKIN) * sign;
                    if sign < 0.0 {
                        self.state.left = true;
                    } else {
                        self.state.right = true;
                    }
                    break;
                }
            }
        }

        // Vertical sweep, from where the box will be horizontally.
        if move_vector.y != 0.0 {
            let sign = move_vector.y.signum();
            let distance = move_vector.y.abs() + SKIN;
            let (mut start, mut end) = if sign < 0.0 {
                (origins.bottom_right, origins.bottom_left)
            } else {
                (origins.top_right, origins.top_left)
            };
            start.x += self.state.move_vector.x;
            end.x += self.state.move_vector.x;
            let direction = Vec2::new(0.0, sign);

            for i in 0..RAY_COUNT {
                let t = i as f32 / (RAY_COUNT - 1) as f32;
                let origin = start.lerp(&end, t);
                if let Some(hit) = world.ray_cast(origin, direction, distance, mask) {
                    self.state.obstacle_vertical = Some(hit.obstacle);
                    self.state.move_vector.y = (hit.distance - SKIN) * sign;
                    if sign < 0.0 {
                        self.state.below = true;
                    } else {
                        self.state.above = true;
                    }
                    break;
                }
            }
        }

        &self.state
    }

    /// Report every distinct obstacle a movement would touch, using the
    /// configured mask
    ///
    /// See [`check_all_filtered`](Self::check_all_filtered).
    pub fn check_all(
        &mut self,
        world: &dyn RaycastQuery,
        move_vector: Vec2,
    ) -> Vec<CollisionState> {
        self.check_all_filtered(world, move_vector, self.config.mask)
    }

    /// Report every distinct obstacle a movement would touch, with an
    /// explicit mask
    ///
    /// Same ray setup as [`check_filtered`](Self::check_filtered), but every
    /// ray reports all of its hits and every obstacle seen for the first time
    /// on an axis produces one entry: the directional flag, that axis's
    /// resolved displacement, and the obstacle handle. An obstacle struck by
    /// several rays in the same sweep is reported once per axis. Entries come
    /// back in discovery order, horizontal before vertical, and the vertical
    /// sweep is shifted by the tightest horizontal resolution found. Returns
    /// an empty vector when nothing is touched or the movement is zero.
    pub fn check_all_filtered(
        &mut self,
        world: &dyn RaycastQuery,
        move_vector: Vec2,
        mask: u32,
    ) -> Vec<CollisionState> {
        let mut results = Vec::new();
        if !self.enabled {
            self.state.reset(Vec2::zeros());
            return results;
        }

        let origins = self.query_origins();
        // The shared state is reused as the working carryover: its x component
        // tracks the tightest horizontal resolution for the vertical sweep.
        self.state.reset(move_vector);

        // Horizontal sweep.
        if move_vector.x != 0.0 {
            let mut seen: HashSet<ObstacleHandle> = HashSet::new();

            let sign = move_vector.x.signum();
            let distance = move_vector.x.abs() + SKIN;
            let (start, end) = if sign < 0.0 {
                (origins.bottom_left, origins.top_left)
            } else {
                (origins.bottom_right, origins.top_right)
            };
            let direction = Vec2::new(sign, 0.0);

            for i in 0..RAY_COUNT {
                let t = i as f32 / (RAY_COUNT - 1) as f32;
                let origin = start.lerp(&end, t);
                for hit in world.ray_cast_all(origin, direction, distance, mask) {
                    if !seen.insert(hit.obstacle) {
                        continue;
                    }

                    let resolved = (hit.distance - SKIN) * sign;
                    if resolved.abs() < self.state.move_vector.x.abs() {
                        self.state.move_vector.x = resolved;
                    }

                    results.push(CollisionState {
                        left: sign < 0.0,
                        right: sign > 0.0,
                        obstacle_horizontal: Some(hit.obstacle),
                        move_vector: Vec2::new(resolved, 0.0),
                        ..CollisionState::default()
                    });
                }
            }
        }

        // Vertical sweep, from where the box will be horizontally.
        if move_vector.y != 0.0 {
            let mut seen: HashSet<ObstacleHandle> = HashSet::new();

            let sign = move_vector.y.signum();
            let distance = move_vector.y.abs() + SKIN;
            let (mut start, mut end) = if sign < 0.0 {
                (origins.bottom_right, origins.bottom_left)
            } else {
                (origins.top_right, origins.top_left)
            };
            start.x += self.state.move_vector.x;
            end.x += self.state.move_vector.x;
            let direction = Vec2::new(0.0, sign);

            for i in 0..RAY_COUNT {
                let t = i as f32 / (RAY_COUNT - 1) as f32;
                let origin = start.lerp(&end, t);
                for hit in world.ray_cast_all(origin, direction, distance, mask) {
                    if !seen.insert(hit.obstacle) {
                        continue;
                    }

                    results.push(CollisionState {
                        below: sign < 0.0,
                        above: sign > 0.0,
                        obstacle_vertical: Some(hit.obstacle),
                        move_vector: Vec2::new(0.0, (hit.distance - SKIN) * sign),
                        ..CollisionState::default()
                    });
                }
            }
        }

        results
    }

    /// Recompute the cached sweep-box half-extents from the current shape
    /// size and owner scale
    ///
    /// Must be called after [`set_shape_size`](Self::set_shape_size) or
    /// [`set_scale`](Self::set_scale) unless
    /// [`ColliderConfig::recompute_dimensions_each_query`] is set; the stale
    /// cache is used silently otherwise.
    pub fn recompute_dimensions(&mut self) {
        self.half_extents = sweep_half_extents(&self.shape, self.transform.scale, SKIN);
    }

    /// Current owner position
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Move the owner to a new world position
    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }

    /// Current owner scale
    pub fn scale(&self) -> Vec2 {
        self.transform.scale
    }

    /// Change the owner scale
    ///
    /// Takes effect on the next [`recompute_dimensions`](Self::recompute_dimensions)
    /// (or next query when recompute-each-query is configured).
    ///
    /// # Errors
    ///
    /// Rejects non-positive scale factors without modifying the collider.
    pub fn set_scale(&mut self, scale: Vec2) -> Result<(), ColliderError> {
        if scale.x <= 0.0 || scale.y <= 0.0 {
            return Err(ColliderError::InvalidScale {
                x: scale.x,
                y: scale.y,
            });
        }
        self.transform.scale = scale;
        Ok(())
    }

    /// The attached box shape
    pub fn shape(&self) -> &BoxShape {
        &self.shape
    }

    /// Change the box size
    ///
    /// Takes effect on the next [`recompute_dimensions`](Self::recompute_dimensions)
    /// (or next query when recompute-each-query is configured).
    ///
    /// # Errors
    ///
    /// Rejects non-positive dimensions without modifying the collider.
    pub fn set_shape_size(&mut self, size: Vec2) -> Result<(), ColliderError> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(ColliderError::InvalidShape {
                width: size.x,
                height: size.y,
            });
        }
        self.shape.size = size;
        Ok(())
    }

    /// State written by the most recent query
    ///
    /// After `check` this is that query's result; after `check_all` it holds
    /// the internal working state (the requested vector with the horizontal
    /// carryover applied), not a merged result.
    pub fn state(&self) -> &CollisionState {
        &self.state
    }

    /// The configured default mask
    pub fn mask(&self) -> u32 {
        self.config.mask
    }

    /// The collider configuration
    pub fn config(&self) -> &ColliderConfig {
        &self.config
    }

    /// False when the collider was constructed with an empty mask and is
    /// therefore inert
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn query_origins(&mut self) -> RaycastOrigins {
        if self.config.recompute_dimensions_each_query {
            self.recompute_dimensions();
        }
        let center = self.transform.position + self.shape.offset;
        RaycastOrigins::from_box(center, self.half_extents)
    }
}

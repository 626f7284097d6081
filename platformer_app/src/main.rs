//! Headless platformer sandbox
//!
//! Builds a small tile level, then drives an actor through it with the sweep
//! collider: gravity pulls it onto the floor, it walks right, and it hops
//! over the crates scattered in its way. Everything is logged rather than
//! rendered, so the run doubles as an end-to-end smoke test of the collision
//! stack.
//!
//! Pass a `.ron` or `.toml` config path as the first argument to override the
//! simulation parameters.

use collision2d::foundation::logging;
use collision2d::prelude::*;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const TILE_SIZE: f32 = 1.0;
const STEP_DT: f32 = 1.0 / 60.0;

/// Tunables for the sandbox run
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SandboxConfig {
    /// Downward acceleration in units per second squared (negative is down)
    gravity: f32,
    /// Constant rightward walking speed in units per second
    move_speed: f32,
    /// Vertical speed applied when hopping over an obstacle
    jump_speed: f32,
    /// Number of fixed simulation steps to run
    steps: u32,
    /// How many crates to scatter on the floor
    crate_count: u32,
    /// Seed for crate placement, fixed so runs are reproducible
    rng_seed: u64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            gravity: -20.0,
            move_speed: 4.0,
            jump_speed: 8.0,
            steps: 600,
            crate_count: 4,
            rng_seed: 7,
        }
    }
}

impl Config for SandboxConfig {}

fn build_level(config: &SandboxConfig) -> TileWorld {
    let mut world = TileWorld::new();

    // Floor strip with bounding walls on both ends.
    for col in -12..=12 {
        world.insert_tile(col, -1, TILE_SIZE, CollisionLayers::ENVIRONMENT);
    }
    for row in 0..6 {
        world.insert_tile(-12, row, TILE_SIZE, CollisionLayers::ENVIRONMENT);
        world.insert_tile(12, row, TILE_SIZE, CollisionLayers::ENVIRONMENT);
    }

    // A floating platform to bump against mid-jump.
    for col in 2..=5 {
        world.insert_tile(col, 2, TILE_SIZE, CollisionLayers::PLATFORM);
    }

    // Crates scattered on the floor.
    let mut rng = StdRng::seed_from_u64(config.rng_seed);
    for _ in 0..config.crate_count {
        let col = rng.gen_range(-9..=9);
        world.insert_tile(col, 0, TILE_SIZE, CollisionLayers::ENVIRONMENT);
    }

    world
}

fn contact_side(state: &CollisionState) -> &'static str {
    if state.below {
        "below"
    } else if state.above {
        "above"
    } else if state.left {
        "left"
    } else {
        "right"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SandboxConfig::load_from_file(path)?,
        None => SandboxConfig::default(),
    };
    info!("sandbox config: {config:?}");

    let world = build_level(&config);
    info!("level built with {} obstacles", world.len());

    let mut collider = SweepCollider::new(
        BoxShape::new(0.9, 1.8),
        Transform2D::from_position(Vec2::new(-10.0, 3.0)),
        ColliderConfig {
            mask: CollisionLayers::mask(&[
                CollisionLayers::ENVIRONMENT,
                CollisionLayers::PLATFORM,
            ]),
            layer: CollisionLayers::ACTOR,
            recompute_dimensions_each_query: false,
        },
    )?;

    let mut vertical_speed = 0.0_f32;
    let mut grounded_steps = 0_u32;

    for step in 0..config.steps {
        vertical_speed += config.gravity * STEP_DT;
        let desired = Vec2::new(config.move_speed * STEP_DT, vertical_speed * STEP_DT);

        let state = *collider.check(&world, desired);
        collider.set_position(collider.position() + state.move_vector);

        if state.below || state.above {
            vertical_speed = 0.0;
        }
        if state.below {
            grounded_steps += 1;
            // Pressed against something while grounded: hop over it.
            if state.right {
                vertical_speed = config.jump_speed;
                debug!(
                    "step {step}: hopping over obstacle {:?} at {:?}",
                    state.obstacle_horizontal,
                    collider.position()
                );
            }
        }
    }

    info!(
        "run finished at {:?}, grounded for {grounded_steps} of {} steps",
        collider.position(),
        config.steps
    );

    // Exhaustive query: everything the actor would touch settling down-right.
    let touched = collider.check_all(&world, Vec2::new(0.5, -0.5));
    info!("settling touches {} obstacle(s)", touched.len());
    for contact in &touched {
        let handle = contact.obstacle_horizontal.or(contact.obstacle_vertical);
        info!("  contact {}: {handle:?}", contact_side(contact));
    }

    Ok(())
}

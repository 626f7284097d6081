//! Collision layer system for filtering sweeps
//!
//! Obstacles carry layer bits and colliders carry a mask of the layers that
//! can block them. Filtering is one-way: an obstacle participates in a sweep
//! when its layer intersects the mover's mask.

/// Collision layer definitions using bit constants for efficient filtering
pub struct CollisionLayers;

impl CollisionLayers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    // Standard game layers (bits 0-7)
    /// Player and NPC actors
    pub const ACTOR: u32 = 1 << 0;

    /// Static level geometry (ground, walls, ceilings)
    pub const ENVIRONMENT: u32 = 1 << 1;

    /// Moving or one-way platforms
    pub const PLATFORM: u32 = 1 << 2;

    /// Damaging obstacles (spikes, lava)
    pub const HAZARD: u32 = 1 << 3;

    /// Trigger volumes (no physical blocking, detected via `check_all`)
    pub const TRIGGER: u32 = 1 << 4;

    /// Pickups and collectibles
    pub const PICKUP: u32 = 1 << 5;

    // User-defined custom layers (bits 8-15)
    pub const CUSTOM_8: u32 = 1 << 8;
    pub const CUSTOM_9: u32 = 1 << 9;
    pub const CUSTOM_10: u32 = 1 << 10;
    pub const CUSTOM_11: u32 = 1 << 11;
    pub const CUSTOM_12: u32 = 1 << 12;
    pub const CUSTOM_13: u32 = 1 << 13;
    pub const CUSTOM_14: u32 = 1 << 14;
    pub const CUSTOM_15: u32 = 1 << 15;

    /// Check whether a mask includes any of the given layer's bits
    pub fn contains(mask: u32, layer: u32) -> bool {
        mask & layer != 0
    }

    /// Helper to build a mask from multiple layers
    ///
    /// # Example
    /// ```
    /// use collision2d::physics::CollisionLayers;
    ///
    /// let blocking = CollisionLayers::mask(&[
    ///     CollisionLayers::ENVIRONMENT,
    ///     CollisionLayers::PLATFORM,
    /// ]);
    /// assert!(CollisionLayers::contains(blocking, CollisionLayers::PLATFORM));
    /// ```
    pub fn mask(layers: &[u32]) -> u32 {
        layers.iter().fold(0, |acc, &layer| acc | layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_matches_single_layer() {
        let mask = CollisionLayers::ENVIRONMENT | CollisionLayers::HAZARD;
        assert!(CollisionLayers::contains(mask, CollisionLayers::HAZARD));
        assert!(!CollisionLayers::contains(mask, CollisionLayers::ACTOR));
    }

    #[test]
    fn test_empty_mask_contains_nothing() {
        assert!(!CollisionLayers::contains(
            CollisionLayers::NONE,
            CollisionLayers::ALL
        ));
    }

    #[test]
    fn test_mask_creation() {
        let mask = CollisionLayers::mask(&[
            CollisionLayers::ACTOR,
            CollisionLayers::ENVIRONMENT,
            CollisionLayers::CUSTOM_8,
        ]);

        assert_eq!(
            mask,
            CollisionLayers::ACTOR | CollisionLayers::ENVIRONMENT | CollisionLayers::CUSTOM_8
        );
    }
}

// =============================================================================
// Effect constants
// =============================================================================
//
// Damage values are condition points per tick at local intensity 1.0.
// Chances are probability thresholds at local intensity 1.0; the roll is
// `rng < threshold * local_intensity`.

// --- Earthquake ---
pub(crate) const EARTHQUAKE_DAMAGE: f32 = 25.0;
pub(crate) const EARTHQUAKE_UTILITY_CHANCE: f32 = 0.3;
pub(crate) const EARTHQUAKE_ROAD_CHANCE: f32 = 0.1;

// --- Fire ---
pub(crate) const FIRE_TREE_CHANCE: f32 = 0.8;
pub(crate) const FIRE_PARK_CHANCE: f32 = 0.7;
pub(crate) const FIRE_DAMAGE: f32 = 35.0;
pub(crate) const FIRE_ELECTRICITY_CHANCE: f32 = 0.8;
pub(crate) const FIRE_HEALTH_LOSS: f32 = 12.0;
pub(crate) const FIRE_HAPPINESS_LOSS: f32 = 20.0;

// --- Power grid failure ---
pub(crate) const POWER_FAILURE_ELECTRICITY_CHANCE: f32 = 1.0;
pub(crate) const POWER_FAILURE_FACTORY_DAMAGE: f32 = 15.0;

// --- Gas leak ---
pub(crate) const GAS_EXPLOSION_CHANCE: f32 = 0.5;
pub(crate) const GAS_EXPLOSION_DAMAGE: f32 = 60.0;

// --- Industrial accident ---
pub(crate) const INDUSTRIAL_FACTORY_DAMAGE: f32 = 60.0;
pub(crate) const INDUSTRIAL_OTHER_DAMAGE: f32 = 20.0;
pub(crate) const INDUSTRIAL_UTILITY_CHANCE: f32 = 0.7;
pub(crate) const INDUSTRIAL_VEGETATION_CHANCE: f32 = 0.4;

/// Occupant losses shared by gas leaks and industrial accidents (toxic exposure).
pub(crate) const TOXIC_HEALTH_LOSS: f32 = 8.0;
pub(crate) const TOXIC_HAPPINESS_LOSS: f32 = 15.0;

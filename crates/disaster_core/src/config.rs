/// Default grid dimensions for a freshly created city.
pub const GRID_WIDTH: usize = 256;
pub const GRID_HEIGHT: usize = 256;

/// Seed used by `SimRng::default()`.
pub const DEFAULT_RNG_SEED: u64 = 42;

//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Tick counter and anything that prepares per-tick state.
//! * **Simulation** – Trigger intake and disaster ticking. Disasters mutate
//!   the shared `WorldGrid` in registry order, so every system that writes
//!   the grid during a tick must be ordered relative to `tick_disasters`.
//! * **PostSim** – Read-only consumers of disaster notifications (journals,
//!   HUD feeds). They never mutate simulation state.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
    PostSim,
}

pub(crate) fn configure_simulation_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            SimulationSet::PreSim,
            SimulationSet::Simulation,
            SimulationSet::PostSim,
        )
            .chain(),
    );
}

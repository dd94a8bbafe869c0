use bevy::prelude::*;

pub mod buildings;
pub mod config;
pub mod disasters;
pub mod grid;
pub mod sim_rng;
pub mod simulation_sets;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented each FixedUpdate.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn advance_tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

/// Headless disaster simulation: tick counter, phase ordering and the
/// disaster subsystem. The host app supplies `WorldGrid` (a default 256x256
/// grid is created if it does not) and drives `FixedUpdate`.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        simulation_sets::configure_simulation_sets(app);
        app.init_resource::<TickCounter>()
            .add_systems(
                FixedUpdate,
                advance_tick_counter.in_set(SimulationSet::PreSim),
            )
            .add_plugins(disasters::DisastersPlugin);
    }
}

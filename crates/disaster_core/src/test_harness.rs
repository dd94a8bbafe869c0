//! # TestCity — headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so disaster behavior can be
//! exercised through the same systems the game runs, without a window.

use bevy::prelude::*;

use crate::buildings::Building;
use crate::disasters::{
    DisasterEnded, DisasterManager, DisasterStarted, DisasterType, TriggerDisaster,
};
use crate::grid::{Cell, TreeType, WorldGrid};
use crate::sim_rng::SimRng;
use crate::{SimulationPlugin, TickCounter};

/// A headless Bevy App for integration testing.
///
/// Use builder methods to set up city state, then call `tick()` to advance the
/// simulation and assert on the resulting world.
pub struct TestCity {
    app: App,
}

impl Default for TestCity {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCity {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A blank 256x256 grid with default seed.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(WorldGrid::default());
        app.add_plugins(SimulationPlugin);
        Self { app }
    }

    /// A blank grid of the given size.
    pub fn with_size(width: usize, height: usize) -> Self {
        let mut city = Self::new();
        city.app.insert_resource(WorldGrid::new(width, height));
        city
    }

    // -----------------------------------------------------------------------
    // World Setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Reseed the simulation RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.app.insert_resource(SimRng::from_seed_u64(seed));
        self
    }

    pub fn with_building(mut self, x: usize, y: usize, building: Building) -> Self {
        self.edit_cell(x, y, |cell| cell.building = Some(building));
        self
    }

    pub fn with_trees(mut self, x: usize, y: usize, count: u8) -> Self {
        self.edit_cell(x, y, |cell| {
            cell.trees = count;
            cell.tree_type = TreeType::Deciduous;
        });
        self
    }

    pub fn with_park(mut self, x: usize, y: usize) -> Self {
        self.edit_cell(x, y, |cell| cell.is_park = true);
        self
    }

    pub fn with_road(mut self, x: usize, y: usize) -> Self {
        self.edit_cell(x, y, |cell| cell.has_road = true);
        self
    }

    fn edit_cell(&mut self, x: usize, y: usize, edit: impl FnOnce(&mut Cell)) {
        let mut grid = self.app.world_mut().resource_mut::<WorldGrid>();
        edit(WorldGrid::get_mut(&mut grid, x, y));
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Queue a trigger request; it is processed on the next tick.
    pub fn trigger(
        &mut self,
        disaster_type: DisasterType,
        intensity: f32,
        duration: u32,
        x: i32,
        y: i32,
        radius: f32,
    ) {
        let _ = self.app.world_mut().send_event(TriggerDisaster {
            disaster_type,
            intensity,
            duration,
            x,
            y,
            radius,
        });
    }

    /// Run the FixedUpdate schedule `n` times.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn manager(&self) -> &DisasterManager {
        self.resource::<DisasterManager>()
    }

    pub fn grid(&self) -> &WorldGrid {
        self.resource::<WorldGrid>()
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        self.grid().get(x, y)
    }

    pub fn tick_count(&self) -> u64 {
        self.resource::<TickCounter>().0
    }

    /// Every `DisasterEnded` sent so far.
    pub fn ended_events(&self) -> Vec<DisasterEnded> {
        let events = self.app.world().resource::<Events<DisasterEnded>>();
        let mut reader = events.get_cursor();
        reader.read(events).cloned().collect()
    }

    /// Every `DisasterStarted` sent so far.
    pub fn started_events(&self) -> Vec<DisasterStarted> {
        let events = self.app.world().resource::<Events<DisasterStarted>>();
        let mut reader = events.get_cursor();
        reader.read(events).cloned().collect()
    }
}

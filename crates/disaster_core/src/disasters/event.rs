use rand::RngCore;

use crate::grid::{Cell, WorldGrid};

use super::effects::{effect_for, roll};
use super::manager::BurningTiles;
use super::params::DisasterParams;
use super::types::{DisasterId, DisasterStatus, DisasterType, SpawnRequest};

/// One disaster occurrence.
///
/// Epicenter, radius and base intensity are fixed at creation; only the tick
/// counter advances. Once `current_tick` reaches `duration` the event is
/// terminal for good, and its end is reported on exactly one update.
#[derive(Debug, Clone, PartialEq)]
pub struct DisasterEvent {
    id: DisasterId,
    disaster_type: DisasterType,
    epicenter_x: i32,
    epicenter_y: i32,
    radius: f32,
    intensity: f32,
    duration: u32,
    current_tick: u32,
    parent: Option<DisasterId>,
    end_reported: bool,
}

/// Result of advancing one event by one tick.
#[derive(Debug, Default)]
pub(crate) struct EventTick {
    pub spawns: Vec<SpawnRequest>,
    /// Set only on the tick the event became terminal.
    pub ended: bool,
    pub tiles_affected: usize,
}

impl DisasterEvent {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: DisasterId,
        disaster_type: DisasterType,
        intensity: f32,
        duration: u32,
        x: i32,
        y: i32,
        radius: f32,
        parent: Option<DisasterId>,
    ) -> Self {
        Self {
            id,
            disaster_type,
            epicenter_x: x,
            epicenter_y: y,
            radius,
            intensity,
            duration,
            current_tick: 0,
            parent,
            end_reported: false,
        }
    }

    // -------------------------------------------------------------------------
    // Telemetry
    // -------------------------------------------------------------------------

    pub fn id(&self) -> DisasterId {
        self.id
    }

    pub fn disaster_type(&self) -> DisasterType {
        self.disaster_type
    }

    pub fn name(&self) -> &'static str {
        self.disaster_type.name()
    }

    pub fn epicenter(&self) -> (i32, i32) {
        (self.epicenter_x, self.epicenter_y)
    }

    /// Radius as triggered, before any boundary handling.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn current_tick(&self) -> u32 {
        self.current_tick
    }

    pub fn parent(&self) -> Option<DisasterId> {
        self.parent
    }

    pub fn is_active(&self) -> bool {
        self.current_tick < self.duration
    }

    /// Fraction of the duration elapsed, in [0, 1]. Zero-duration events report 1.
    pub fn progress(&self) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }
        (self.current_tick as f32 / self.duration as f32).min(1.0)
    }

    pub fn status(&self) -> DisasterStatus {
        DisasterStatus {
            id: self.id,
            disaster_type: self.disaster_type,
            name: self.name().to_string(),
            epicenter: self.epicenter(),
            radius: self.radius,
            intensity: self.intensity,
            current_tick: self.current_tick,
            duration: self.duration,
            active: self.is_active(),
            parent: self.parent,
        }
    }

    // -------------------------------------------------------------------------
    // Spatial falloff
    // -------------------------------------------------------------------------

    /// Radius used for the area of effect. Negative and NaN radii collapse
    /// to zero, which limits the event to its epicenter.
    pub fn effective_radius(&self) -> f32 {
        self.radius.max(0.0)
    }

    /// Falloff-adjusted intensity at `(x, y)`, or `None` if the tile lies
    /// outside the area of effect.
    ///
    /// Linear: full base intensity at the epicenter, exactly zero at the rim.
    /// Never negative.
    pub fn local_intensity(&self, x: i32, y: i32) -> Option<f32> {
        let dx = (x as f64 - self.epicenter_x as f64) as f32;
        let dy = (y as f64 - self.epicenter_y as f64) as f32;
        let r = self.effective_radius();
        if r == 0.0 {
            return (dx == 0.0 && dy == 0.0).then(|| self.intensity.max(0.0));
        }
        let d = (dx * dx + dy * dy).sqrt();
        if d > r {
            return None;
        }
        Some((self.intensity * (1.0 - d / r)).max(0.0))
    }

    /// Inclusive tile bounds `(min_x, max_x, min_y, max_y)` of the area of
    /// effect, clipped to the grid. `None` when nothing overlaps the grid.
    fn clipped_bounds(&self, grid: &WorldGrid) -> Option<(i32, i32, i32, i32)> {
        let reach = self.effective_radius().floor() as i32;
        let max_x_grid = i32::try_from(grid.width).unwrap_or(i32::MAX) - 1;
        let max_y_grid = i32::try_from(grid.height).unwrap_or(i32::MAX) - 1;
        let min_x = self.epicenter_x.saturating_sub(reach).max(0);
        let max_x = self.epicenter_x.saturating_add(reach).min(max_x_grid);
        let min_y = self.epicenter_y.saturating_sub(reach).max(0);
        let max_y = self.epicenter_y.saturating_add(reach).min(max_y_grid);
        (min_x <= max_x && min_y <= max_y).then_some((min_x, max_x, min_y, max_y))
    }

    // -------------------------------------------------------------------------
    // Tick
    // -------------------------------------------------------------------------

    /// Apply this tick's effects to every tile in range, attempt fire spread,
    /// then advance the tick counter. No-op once terminal, except that an event
    /// created terminal (zero duration) still reports its end on the first call.
    pub(crate) fn update(
        &mut self,
        grid: &mut WorldGrid,
        rng: &mut dyn RngCore,
        burning: &BurningTiles<'_>,
        params: &DisasterParams,
    ) -> EventTick {
        let mut tick = EventTick::default();
        if !self.is_active() {
            tick.ended = self.take_end_notice();
            return tick;
        }

        if let Some((min_x, max_x, min_y, max_y)) = self.clipped_bounds(grid) {
            let effect = effect_for(self.disaster_type);
            for y in min_y..=max_y {
                for x in min_x..=max_x {
                    let Some(local) = self.local_intensity(x, y) else {
                        continue;
                    };
                    // The grid may have shrunk since the event was triggered.
                    let Some(cell) = grid.get_checked_mut(x, y) else {
                        continue;
                    };
                    let outcome = effect(cell, local, rng);
                    tick.tiles_affected += 1;
                    if outcome.explosion {
                        tick.spawns
                            .push(self.cascade_fire(x, y, local * params.cascade_intensity_factor, params));
                    }
                }
            }
        }

        if self.disaster_type == DisasterType::Fire {
            if let Some(request) = self.try_spread(grid, rng, burning, params) {
                tick.spawns.push(request);
            }
        }

        self.current_tick += 1;
        if !self.is_active() {
            tick.ended = self.take_end_notice();
        }
        tick
    }

    /// True the first time it is called, false afterwards.
    fn take_end_notice(&mut self) -> bool {
        !std::mem::replace(&mut self.end_reported, true)
    }

    /// Checks the epicenter's orthogonal neighbors in fixed order and ignites
    /// at most one of them.
    fn try_spread(
        &self,
        grid: &WorldGrid,
        rng: &mut dyn RngCore,
        burning: &BurningTiles<'_>,
        params: &DisasterParams,
    ) -> Option<SpawnRequest> {
        let (neighbors, count) = grid.neighbors4(self.epicenter_x, self.epicenter_y);
        for &(nx, ny) in &neighbors[..count] {
            let eligible = grid.get_checked(nx, ny).is_some_and(Cell::is_flammable);
            if !eligible || burning.is_tile_already_burning(nx, ny) {
                continue;
            }
            if roll(rng, params.spread_chance, 1.0) {
                return Some(self.cascade_fire(
                    nx,
                    ny,
                    self.intensity * params.cascade_intensity_factor,
                    params,
                ));
            }
        }
        None
    }

    fn cascade_fire(&self, x: i32, y: i32, intensity: f32, params: &DisasterParams) -> SpawnRequest {
        SpawnRequest {
            disaster_type: DisasterType::Fire,
            intensity,
            duration: params.cascade_duration,
            x,
            y,
            radius: params.cascade_radius,
            parent: self.id,
        }
    }
}

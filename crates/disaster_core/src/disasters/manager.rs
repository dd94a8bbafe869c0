use std::fmt;

use bevy::prelude::*;
use rand::{Rng, RngCore};

use crate::grid::WorldGrid;

use super::event::DisasterEvent;
use super::params::DisasterParams;
use super::types::{DisasterId, DisasterStatus, DisasterType, SpawnRequest};

// =============================================================================
// Errors
// =============================================================================

/// Reasons a trigger is rejected. The registry is unchanged in every case.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerError {
    /// Epicenter lies outside the grid.
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    /// A fire is already burning with this exact epicenter.
    AlreadyBurning { x: i32, y: i32 },
}

impl fmt::Display for TriggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Epicenter ({x}, {y}) is outside the {width}x{height} grid"
            ),
            TriggerError::AlreadyBurning { x, y } => {
                write!(f, "A fire is already burning at ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for TriggerError {}

// =============================================================================
// Burning-tile lookup
// =============================================================================

/// Read-only view of every fire other than the event currently being ticked:
/// registry entries before and after it, plus fire requests already queued
/// this tick.
pub(crate) struct BurningTiles<'a> {
    earlier: &'a [DisasterEvent],
    later: &'a [DisasterEvent],
    pending: &'a [SpawnRequest],
}

impl BurningTiles<'_> {
    #[cfg(test)]
    pub(crate) fn none() -> Self {
        Self {
            earlier: &[],
            later: &[],
            pending: &[],
        }
    }

    pub(crate) fn is_tile_already_burning(&self, x: i32, y: i32) -> bool {
        self.earlier
            .iter()
            .chain(self.later.iter())
            .any(|e| is_fire_at(e, x, y))
            || self
                .pending
                .iter()
                .any(|r| r.disaster_type == DisasterType::Fire && r.x == x && r.y == y)
    }
}

fn is_fire_at(event: &DisasterEvent, x: i32, y: i32) -> bool {
    event.is_active() && event.disaster_type() == DisasterType::Fire && event.epicenter() == (x, y)
}

// =============================================================================
// Stats / reports
// =============================================================================

/// Session counters. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisasterStats {
    /// Accepted external triggers.
    pub triggered: u64,
    /// Cascaded fires registered from spread or explosions.
    pub cascades_spawned: u64,
    /// Cascaded fires dropped because the tile was already burning.
    pub cascades_suppressed: u64,
    /// Events whose end was reported, zero-duration ones included.
    pub ended: u64,
}

/// What happened during one [`DisasterManager::update`] call.
#[derive(Debug, Default, Clone)]
pub struct TickReport {
    /// Final status of every event that became terminal this tick, in
    /// registry order. Each event appears here exactly once in its lifetime.
    pub ended: Vec<DisasterStatus>,
    /// Cascaded events registered at the end of this tick.
    pub started: Vec<DisasterId>,
}

// =============================================================================
// Manager
// =============================================================================

/// Owns every active disaster and advances them once per simulation tick.
///
/// Registry order is processing order: effects are applied in place, so a
/// later event sees damage already dealt by an earlier one in the same tick.
#[derive(Resource, Debug)]
pub struct DisasterManager {
    events: Vec<DisasterEvent>,
    pending: Vec<SpawnRequest>,
    params: DisasterParams,
    next_id: u64,
    stats: DisasterStats,
}

impl Default for DisasterManager {
    fn default() -> Self {
        Self::with_params(DisasterParams::default())
    }
}

impl DisasterManager {
    pub fn with_params(params: DisasterParams) -> Self {
        Self {
            events: Vec::new(),
            pending: Vec::new(),
            params,
            next_id: 1,
            stats: DisasterStats::default(),
        }
    }

    pub fn params(&self) -> &DisasterParams {
        &self.params
    }

    /// Replace the cascade tunables. Affects spawns from the next tick on.
    pub fn set_params(&mut self, params: DisasterParams) {
        self.params = params;
    }

    pub fn stats(&self) -> DisasterStats {
        self.stats
    }

    /// Registered events in processing order.
    pub fn active_events(&self) -> &[DisasterEvent] {
        &self.events
    }

    pub fn get(&self, id: DisasterId) -> Option<&DisasterEvent> {
        self.events.iter().find(|e| e.id() == id)
    }

    pub fn count_of(&self, disaster_type: DisasterType) -> usize {
        self.events
            .iter()
            .filter(|e| e.is_active() && e.disaster_type() == disaster_type)
            .count()
    }

    /// Cascade requests raised during the last tick that were not yet merged.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Nothing registered and nothing queued.
    pub fn is_idle(&self) -> bool {
        self.events.is_empty() && self.pending.is_empty()
    }

    /// True iff an active Fire has its epicenter exactly at `(x, y)`.
    pub fn is_tile_already_burning(&self, x: i32, y: i32) -> bool {
        self.events.iter().any(|e| is_fire_at(e, x, y))
    }

    /// Start a new disaster. Intensity, duration and radius are taken as given.
    ///
    /// Rejects epicenters outside the grid and fires on a tile that already
    /// has an active fire.
    #[allow(clippy::too_many_arguments)]
    pub fn trigger_disaster(
        &mut self,
        grid: &WorldGrid,
        disaster_type: DisasterType,
        intensity: f32,
        duration: u32,
        x: i32,
        y: i32,
        radius: f32,
    ) -> Result<DisasterId, TriggerError> {
        if !grid.in_bounds_i32(x, y) {
            return Err(TriggerError::OutOfBounds {
                x,
                y,
                width: grid.width,
                height: grid.height,
            });
        }
        if disaster_type == DisasterType::Fire && self.is_tile_already_burning(x, y) {
            return Err(TriggerError::AlreadyBurning { x, y });
        }

        let id = self.register(disaster_type, intensity, duration, x, y, radius, None);
        self.stats.triggered += 1;
        info!(
            "DISASTER: {} struck at ({}, {}) with radius {} and intensity {:.2}!",
            disaster_type.name(),
            x,
            y,
            radius,
            intensity,
        );
        Ok(id)
    }

    #[allow(clippy::too_many_arguments)]
    fn register(
        &mut self,
        disaster_type: DisasterType,
        intensity: f32,
        duration: u32,
        x: i32,
        y: i32,
        radius: f32,
        parent: Option<DisasterId>,
    ) -> DisasterId {
        let id = DisasterId(self.next_id);
        self.next_id += 1;
        self.events.push(DisasterEvent::new(
            id,
            disaster_type,
            intensity,
            duration,
            x,
            y,
            radius,
            parent,
        ));
        id
    }

    /// Advance every registered event by one tick, in registry order, then
    /// reap terminal events, then register cascades raised during the tick.
    pub fn update<R: Rng>(&mut self, grid: &mut WorldGrid, rng: &mut R) -> TickReport {
        let rng: &mut dyn RngCore = rng;
        let mut report = TickReport::default();

        for idx in 0..self.events.len() {
            let (earlier, rest) = self.events.split_at_mut(idx);
            let Some((event, later)) = rest.split_first_mut() else {
                break;
            };
            let burning = BurningTiles {
                earlier,
                later,
                pending: &self.pending,
            };
            let tick = event.update(grid, rng, &burning, &self.params);

            if tick.tiles_affected > 0 || !tick.spawns.is_empty() {
                debug!(
                    "DISASTER TICK: {} {} touched {} tiles, raised {} cascades",
                    event.name(),
                    event.id(),
                    tick.tiles_affected,
                    tick.spawns.len(),
                );
            }
            if tick.ended {
                let (x, y) = event.epicenter();
                info!(
                    "DISASTER ENDED: {} at ({}, {}) has subsided.",
                    event.name(),
                    x,
                    y,
                );
                report.ended.push(event.status());
            }
            self.pending.extend(tick.spawns);
        }

        self.events.retain(DisasterEvent::is_active);
        self.stats.ended += report.ended.len() as u64;

        self.merge_pending(grid, &mut report);
        report
    }

    fn merge_pending(&mut self, grid: &WorldGrid, report: &mut TickReport) {
        for request in std::mem::take(&mut self.pending) {
            if !grid.in_bounds_i32(request.x, request.y) {
                continue;
            }
            if request.disaster_type == DisasterType::Fire
                && self.is_tile_already_burning(request.x, request.y)
            {
                self.stats.cascades_suppressed += 1;
                debug!(
                    "DISASTER: fire at ({}, {}) from {} suppressed, tile already burning",
                    request.x, request.y, request.parent,
                );
                continue;
            }
            let id = self.register(
                request.disaster_type,
                request.intensity,
                request.duration,
                request.x,
                request.y,
                request.radius,
                Some(request.parent),
            );
            self.stats.cascades_spawned += 1;
            debug!(
                "DISASTER: {} {} spawned at ({}, {}) by {}",
                request.disaster_type.name(),
                id,
                request.x,
                request.y,
                request.parent,
            );
            report.started.push(id);
        }
    }
}

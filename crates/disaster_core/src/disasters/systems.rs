use bevy::prelude::*;

use crate::grid::WorldGrid;
use crate::sim_rng::SimRng;
use crate::TickCounter;

use super::event::DisasterEvent;
use super::manager::DisasterManager;
use super::params::DisasterParams;
use super::types::{DisasterId, DisasterStatus, DisasterType};

// =============================================================================
// Events
// =============================================================================

/// Request to start a disaster, sent by schedulers, scripts or player tools.
#[derive(Event, Debug, Clone, Copy)]
pub struct TriggerDisaster {
    pub disaster_type: DisasterType,
    pub intensity: f32,
    pub duration: u32,
    pub x: i32,
    pub y: i32,
    pub radius: f32,
}

/// Fired when a disaster enters the registry, whether triggered or cascaded.
#[derive(Event, Debug, Clone)]
pub struct DisasterStarted {
    pub id: DisasterId,
    pub disaster_type: DisasterType,
    pub epicenter: (i32, i32),
    pub parent: Option<DisasterId>,
}

impl From<&DisasterEvent> for DisasterStarted {
    fn from(event: &DisasterEvent) -> Self {
        Self {
            id: event.id(),
            disaster_type: event.disaster_type(),
            epicenter: event.epicenter(),
            parent: event.parent(),
        }
    }
}

/// End-of-event notification. Sent exactly once per event that runs out.
#[derive(Event, Debug, Clone)]
pub struct DisasterEnded {
    pub status: DisasterStatus,
    pub tick: u64,
}

// =============================================================================
// Systems
// =============================================================================

/// Pushes runtime edits of `DisasterParams` into the manager.
pub fn sync_disaster_params(params: Res<DisasterParams>, mut manager: ResMut<DisasterManager>) {
    if params.is_changed() && manager.params() != &*params {
        manager.set_params(*params);
    }
}

/// Drains queued `TriggerDisaster` requests into the manager.
pub fn process_trigger_requests(
    mut requests: EventReader<TriggerDisaster>,
    mut manager: ResMut<DisasterManager>,
    grid: Res<WorldGrid>,
    mut started: EventWriter<DisasterStarted>,
) {
    for req in requests.read() {
        match manager.trigger_disaster(
            &grid,
            req.disaster_type,
            req.intensity,
            req.duration,
            req.x,
            req.y,
            req.radius,
        ) {
            Ok(id) => {
                if let Some(event) = manager.get(id) {
                    started.send(DisasterStarted::from(event));
                }
            }
            Err(e) => warn!(
                "DISASTER: rejected {} trigger: {}",
                req.disaster_type.name(),
                e
            ),
        }
    }
}

/// Advances every active disaster by one tick.
pub fn tick_disasters(
    tick: Res<TickCounter>,
    mut manager: ResMut<DisasterManager>,
    mut grid: ResMut<WorldGrid>,
    mut rng: ResMut<SimRng>,
    mut ended: EventWriter<DisasterEnded>,
    mut started: EventWriter<DisasterStarted>,
) {
    if manager.is_idle() {
        return;
    }

    let report = manager.update(&mut grid, &mut rng.0);

    for status in report.ended {
        ended.send(DisasterEnded {
            status,
            tick: tick.0,
        });
    }
    for id in report.started {
        if let Some(event) = manager.get(id) {
            started.send(DisasterStarted::from(event));
        }
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct DisastersPlugin;

impl Plugin for DisastersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldGrid>()
            .init_resource::<SimRng>()
            .init_resource::<TickCounter>()
            .init_resource::<DisasterParams>();

        let params = *app.world().resource::<DisasterParams>();
        app.insert_resource(DisasterManager::with_params(params))
            .add_event::<TriggerDisaster>()
            .add_event::<DisasterStarted>()
            .add_event::<DisasterEnded>()
            .add_systems(
                FixedUpdate,
                sync_disaster_params.in_set(crate::SimulationSet::PreSim),
            )
            .add_systems(
                FixedUpdate,
                (process_trigger_requests, tick_disasters)
                    .chain()
                    .in_set(crate::SimulationSet::Simulation),
            );
    }
}

//! Transient, localized catastrophes: earthquakes, fires, power grid
//! failures, gas leaks and industrial accidents.
//!
//! [`DisasterManager`] owns the registry and is the only way to start a
//! disaster. Each [`DisasterEvent`] applies its type's effects to every tile
//! within its radius once per tick, with linear intensity falloff from the
//! epicenter. Fires may spread to neighbors and gas explosions may start
//! fires; those cascades are queued during the tick and registered after it.

mod constants;
mod effects;
pub mod event;
pub mod manager;
pub mod params;
pub mod systems;
pub mod types;

pub use event::DisasterEvent;
pub use manager::{DisasterManager, DisasterStats, TickReport, TriggerError};
pub use params::DisasterParams;
pub use systems::{
    process_trigger_requests, sync_disaster_params, tick_disasters, DisasterEnded,
    DisasterStarted, DisastersPlugin, TriggerDisaster,
};
pub use types::{DisasterId, DisasterStatus, DisasterType, SpawnRequest, UnknownDisasterType};

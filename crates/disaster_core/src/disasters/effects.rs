//! Per-type tile effect policies.
//!
//! Each policy mutates one cell at a given local (falloff-adjusted) intensity.
//! Dispatch goes through [`effect_for`], a lookup from `DisasterType` to a
//! plain function pointer, so adding a type means adding one arm and one fn.

use rand::{Rng, RngCore};

use crate::buildings::UtilityKind;
use crate::grid::{Cell, TreeType};

use super::constants::*;
use super::types::DisasterType;

/// What a single tile application produced beyond in-place mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TileOutcome {
    /// A gas explosion happened on this tile; a fire should be started here.
    pub explosion: bool,
}

pub(crate) type EffectFn = fn(&mut Cell, f32, &mut dyn RngCore) -> TileOutcome;

pub(crate) fn effect_for(disaster_type: DisasterType) -> EffectFn {
    match disaster_type {
        DisasterType::Earthquake => earthquake,
        DisasterType::Fire => fire,
        DisasterType::PowerGridFailure => power_grid_failure,
        DisasterType::GasLeak => gas_leak,
        DisasterType::IndustrialAccident => industrial_accident,
    }
}

/// Independent uniform draw in [0, 1) against `threshold * intensity`.
#[inline]
pub(crate) fn roll(rng: &mut dyn RngCore, threshold: f32, intensity: f32) -> bool {
    rng.gen::<f32>() < threshold * intensity
}

fn pick_utility(rng: &mut dyn RngCore) -> UtilityKind {
    let n = UtilityKind::ALL.len();
    let idx = ((rng.gen::<f32>() * n as f32) as usize).min(n - 1);
    UtilityKind::ALL[idx]
}

fn earthquake(cell: &mut Cell, i: f32, rng: &mut dyn RngCore) -> TileOutcome {
    if let Some(building) = cell.building.as_mut() {
        building.apply_damage(i * EARTHQUAKE_DAMAGE);
        if roll(rng, EARTHQUAKE_UTILITY_CHANCE, i) {
            let kind = pick_utility(rng);
            building.utilities.disconnect(kind);
        }
    }
    if cell.has_road && roll(rng, EARTHQUAKE_ROAD_CHANCE, i) {
        cell.has_road = false;
    }
    TileOutcome::default()
}

fn fire(cell: &mut Cell, i: f32, rng: &mut dyn RngCore) -> TileOutcome {
    if cell.trees > 0 && roll(rng, FIRE_TREE_CHANCE, i) {
        cell.trees = 0;
        cell.tree_type = TreeType::None;
    }
    if cell.is_park && roll(rng, FIRE_PARK_CHANCE, i) {
        cell.is_park = false;
    }
    if let Some(building) = cell.building.as_mut() {
        building.apply_damage(i * FIRE_DAMAGE);
        if roll(rng, FIRE_ELECTRICITY_CHANCE, i) {
            building.utilities.electricity = false;
        }
        building.harm_occupants(i * FIRE_HEALTH_LOSS, i * FIRE_HAPPINESS_LOSS);
    }
    TileOutcome::default()
}

fn power_grid_failure(cell: &mut Cell, i: f32, rng: &mut dyn RngCore) -> TileOutcome {
    if let Some(building) = cell.building.as_mut() {
        if roll(rng, POWER_FAILURE_ELECTRICITY_CHANCE, i) {
            building.utilities.electricity = false;
        }
        // Surge damage to factory machinery.
        if building.is_factory() {
            building.apply_damage(i * POWER_FAILURE_FACTORY_DAMAGE);
        }
    }
    TileOutcome::default()
}

fn gas_leak(cell: &mut Cell, i: f32, rng: &mut dyn RngCore) -> TileOutcome {
    let Some(building) = cell.building.as_mut() else {
        return TileOutcome::default();
    };
    building.utilities.gas = false;
    let explosion = roll(rng, GAS_EXPLOSION_CHANCE, i);
    if explosion {
        building.apply_damage(i * GAS_EXPLOSION_DAMAGE);
    }
    building.harm_occupants(i * TOXIC_HEALTH_LOSS, i * TOXIC_HAPPINESS_LOSS);
    TileOutcome { explosion }
}

fn industrial_accident(cell: &mut Cell, i: f32, rng: &mut dyn RngCore) -> TileOutcome {
    if let Some(building) = cell.building.as_mut() {
        let damage = if building.is_factory() {
            INDUSTRIAL_FACTORY_DAMAGE
        } else {
            INDUSTRIAL_OTHER_DAMAGE
        };
        building.apply_damage(i * damage);
        if roll(rng, INDUSTRIAL_UTILITY_CHANCE, i) {
            building.utilities.disconnect(UtilityKind::Electricity);
            building.utilities.disconnect(UtilityKind::Water);
            building.utilities.disconnect(UtilityKind::Gas);
        }
    }
    if (cell.trees > 0 || cell.is_park) && roll(rng, INDUSTRIAL_VEGETATION_CHANCE, i) {
        cell.clear_vegetation();
    }
    if let Some(building) = cell.building.as_mut() {
        building.harm_occupants(i * TOXIC_HEALTH_LOSS, i * TOXIC_HAPPINESS_LOSS);
    }
    TileOutcome::default()
}

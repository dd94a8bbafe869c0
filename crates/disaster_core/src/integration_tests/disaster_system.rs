//! Integration tests for the disaster systems: trigger intake, ticking,
//! notifications, cascades and parameter sync.

use crate::buildings::{Building, Occupant};
use crate::disasters::{DisasterParams, DisasterType};
use crate::sim_rng::SimRng;
use crate::test_harness::TestCity;
use crate::TickCounter;

#[test]
fn test_disaster_resources_exist() {
    let city = TestCity::new();
    assert!(city.manager().is_idle());
    assert_eq!(city.grid().width, 256);
    let _ = city.resource::<SimRng>();
    let _ = city.resource::<DisasterParams>();
}

#[test]
fn test_trigger_event_registers_and_ticks() {
    let mut city = TestCity::new().with_building(50, 50, Building::civic());
    city.trigger(DisasterType::Earthquake, 1.0, 10, 50, 50, 4.0);
    city.tick(1);

    let manager = city.manager();
    assert_eq!(manager.active_events().len(), 1);
    assert_eq!(manager.active_events()[0].current_tick(), 1);
    let condition = city.cell(50, 50).building.as_ref().unwrap().condition;
    assert!((condition - 75.0).abs() < 1e-4, "got {}", condition);
    assert_eq!(city.started_events().len(), 1);
    assert_eq!(city.tick_count(), 1);
}

#[test]
fn test_out_of_bounds_trigger_is_dropped() {
    let mut city = TestCity::new();
    city.trigger(DisasterType::Fire, 1.0, 10, 300, 5, 2.0);
    city.trigger(DisasterType::Fire, 1.0, 10, -4, 5, 2.0);
    city.tick(1);
    assert!(city.manager().is_idle());
    assert!(city.started_events().is_empty());
}

#[test]
fn test_disaster_ends_and_notifies_once() {
    let mut city = TestCity::new();
    city.trigger(DisasterType::PowerGridFailure, 0.5, 5, 20, 20, 3.0);

    city.tick(4);
    assert_eq!(city.manager().active_events().len(), 1);
    assert!(city.ended_events().is_empty());

    city.tick(1);
    assert!(city.manager().active_events().is_empty());
    let ended = city.ended_events();
    assert_eq!(ended.len(), 1);
    assert_eq!(ended[0].status.disaster_type, DisasterType::PowerGridFailure);
    assert_eq!(ended[0].tick, 5);

    city.tick(3);
    assert_eq!(city.ended_events().len(), 1, "no second notification");
}

#[test]
fn test_fire_harms_residents_through_systems() {
    let mut city = TestCity::new()
        .with_building(30, 30, Building::residential(vec![Occupant::default(); 3]))
        .with_trees(31, 30, 4)
        .with_park(30, 31);
    city.trigger(DisasterType::Fire, 0.8, 5, 30, 30, 2.0);
    city.tick(1);

    let building = city.cell(30, 30).building.as_ref().unwrap();
    assert_eq!(building.occupants().len(), 3);
    for occupant in building.occupants() {
        assert!((occupant.health - 90.4).abs() < 1e-4, "got {}", occupant.health);
        assert!((occupant.happiness - 84.0).abs() < 1e-4, "got {}", occupant.happiness);
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    fn run(seed: u64) -> (Vec<f32>, usize) {
        let mut city = TestCity::new().with_seed(seed);
        for x in 100..110 {
            city = city
                .with_building(x, 100, Building::residential(vec![Occupant::default()]))
                .with_trees(x, 101, 3)
                .with_road(x, 102);
        }
        city.trigger(DisasterType::GasLeak, 0.9, 8, 104, 100, 4.0);
        city.trigger(DisasterType::Fire, 0.7, 8, 105, 101, 2.0);
        city.tick(12);
        let conditions = (100..110)
            .map(|x| city.cell(x, 100).building.as_ref().unwrap().condition)
            .collect();
        (conditions, city.started_events().len())
    }
    assert_eq!(run(2024), run(2024));
}

#[test]
fn test_cascades_emit_started_events_with_parent() {
    let mut city = TestCity::new()
        .with_building(60, 60, Building::civic())
        .with_trees(61, 60, 5);
    city.trigger(DisasterType::Fire, 1.0, 6, 60, 60, 0.0);
    city.tick(20);

    let started = city.started_events();
    assert!(!started.is_empty());
    assert!(started[0].parent.is_none(), "first event was triggered directly");
    for cascade in started.iter().skip(1) {
        assert!(cascade.parent.is_some(), "{:?} should have a parent", cascade);
        assert_eq!(cascade.disaster_type, DisasterType::Fire);
    }
}

#[test]
fn test_param_changes_reach_manager() {
    let mut city = TestCity::new();
    city.world_mut()
        .resource_mut::<DisasterParams>()
        .spread_chance = 0.0;
    city.tick(1);
    assert_eq!(city.manager().params().spread_chance, 0.0);
    assert_eq!(city.resource::<TickCounter>().0, 1);
}

#[test]
fn test_zero_duration_trigger_still_pairs_start_and_end() {
    let mut city = TestCity::with_size(16, 16);
    city.trigger(DisasterType::Fire, 1.0, 0, 4, 4, 1.0);
    city.trigger(DisasterType::Fire, 1.0, 5, 20, 4, 1.0);
    city.tick(1);

    let started = city.started_events();
    let ended = city.ended_events();
    assert_eq!(started.len(), 1, "the off-grid trigger is dropped");
    assert_eq!(ended.len(), 1);
    assert_eq!(ended[0].status.id, started[0].id);
    assert_eq!(ended[0].tick, 1);
    assert!(city.manager().is_idle());
    assert_eq!(city.grid().width, 16);
}

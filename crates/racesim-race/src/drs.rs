//! DRS eligibility gating.

use racesim_core::{RaceState, SafetyCarStatus, Track, WeatherCondition};

use crate::constants::*;

/// Opens DRS for any car that is past the eligibility lap, not in the
/// pits, not under a safety-car period, racing in the dry, sitting in an
/// activation zone, and within one second of the car ahead (the leader
/// is never eligible, having no car ahead).
pub fn update_drs(track: &Track, state: &mut RaceState) {
    let racing = !state.is_safety_car_period()
        && state.safety_car != SafetyCarStatus::RedFlag
        && state.weather == WeatherCondition::Dry;
    let order = state.driver_order.clone();

    for (index, id) in order.iter().enumerate() {
        let vehicle = state.vehicles.get_mut(id).unwrap();
        if vehicle.is_retired() {
            continue;
        }
        vehicle.drs_open = racing
            && index > 0
            && vehicle.lap_count + 1 >= DRS_ELIGIBLE_FROM_LAP
            && !vehicle.is_in_pit
            && vehicle.gap_to_ahead < DRS_GAP_THRESHOLD_SECONDS
            && track.has_drs_zone_at(vehicle.distance_on_lap).is_some();
    }
}

//! Per-tick resource consumption: tyre wear, fuel burn, ERS drain/charge.

use racesim_core::{pace_multiplier, wear_rate, ErsMode, VehicleState};

use crate::constants::*;

pub fn consume_resources(vehicle: &mut VehicleState, track_degradation_factor: f64, dt: f64) {
    let wear_increment = wear_rate(
        vehicle.tyre_compound,
        track_degradation_factor,
        vehicle.pace_mode,
        vehicle.tyre_wear,
    ) * dt;
    vehicle.tyre_wear = (vehicle.tyre_wear + wear_increment).clamp(0.0, 100.0);

    let fuel_burn = FUEL_BURN_KG_PER_SECOND * pace_multiplier(vehicle.pace_mode) * dt;
    vehicle.fuel_load = (vehicle.fuel_load - fuel_burn).clamp(0.0, 100.0);

    let ers_delta = match vehicle.ers_mode {
        ErsMode::Deploy => -ERS_DEPLOY_DRAIN_PER_SECOND * dt,
        ErsMode::Harvest => ERS_HARVEST_GAIN_PER_SECOND * dt,
        ErsMode::Balanced => ERS_BALANCED_GAIN_PER_SECOND * dt,
    };
    vehicle.ers_level = (vehicle.ers_level + ers_delta).clamp(0.0, 100.0);
    if vehicle.ers_level <= 0.0 {
        vehicle.ers_mode = ErsMode::Balanced;
    }
}

//! Per-vehicle target-speed model, longitudinal dynamics, motion
//! integration, pit-entry detection, telemetry sampling and resource
//! consumption.

use std::collections::HashMap;

use racesim_core::{Driver, DriverId, RaceState, Rng, SpeedTracePoint, Track};

pub mod constants;
pub mod dynamics;
pub mod resources;
pub mod target_speed;

pub use target_speed::{compute_target_speed, AheadVehicle, TargetSpeedInputs};

use constants::{PIT_ENTRY_WINDOW_METERS, TELEMETRY_SAMPLE_DISTANCE_METERS};

#[derive(Debug, Default, Clone, Copy)]
pub struct PhysicsSystem;

impl PhysicsSystem {
    pub fn new() -> Self {
        Self
    }

    /// Advances every non-pit, non-retired, unfinished vehicle by `dt`.
    /// Vehicles are visited in `race.driver_order` (current classification
    /// order), so "the car ahead" is simply the previous entry.
    pub fn update(
        &self,
        dt: f64,
        track: &Track,
        drivers: &HashMap<DriverId, Driver>,
        state: &mut RaceState,
        rng: &mut Rng,
    ) {
        let order = state.driver_order.clone();
        for (idx, driver_id) in order.iter().enumerate() {
            let eligible = state
                .vehicles
                .get(driver_id)
                .map(|v| !v.is_in_pit && !v.is_retired() && !v.has_finished)
                .unwrap_or(false);
            if !eligible {
                continue;
            }
            let Some(driver) = drivers.get(driver_id).cloned() else {
                continue;
            };

            let ahead = if idx > 0 {
                let ahead_id = &order[idx - 1];
                match (drivers.get(ahead_id).cloned(), state.vehicles.get(ahead_id)) {
                    (Some(ahead_driver), Some(ahead_vehicle)) => {
                        Some((ahead_driver, ahead_vehicle.speed))
                    }
                    _ => None,
                }
            } else {
                None
            };

            let sector = {
                let vehicle = state.vehicles.get(driver_id).unwrap();
                track.sector_at(vehicle.distance_on_lap).clone()
            };
            let water_depth = track
                .sectors
                .iter()
                .position(|s| s.id == sector.id)
                .and_then(|i| state.sector_conditions.get(i))
                .map(|c| c.water_depth)
                .unwrap_or(0.0);

            let target_speed = {
                let vehicle = state.vehicles.get(driver_id).unwrap();
                let inputs = TargetSpeedInputs {
                    driver: &driver,
                    vehicle,
                    sector: &sector,
                    track,
                    race: state,
                    water_depth,
                    ahead: ahead
                        .as_ref()
                        .map(|(d, s)| AheadVehicle { driver: d, speed: *s }),
                };
                compute_target_speed(&inputs, rng)
            };

            let checkered_flag = state.checkered_flag;
            let degradation_factor = track.tire_degradation_factor;
            let vehicle = state.vehicles.get_mut(driver_id).unwrap();
            integrate_vehicle(
                vehicle,
                track,
                target_speed,
                water_depth,
                dt,
                checkered_flag,
                degradation_factor,
            );
        }
    }
}

fn integrate_vehicle(
    vehicle: &mut racesim_core::VehicleState,
    track: &Track,
    target_speed: f64,
    water_depth: f64,
    dt: f64,
    checkered_flag: bool,
    track_degradation_factor: f64,
) {
    let grip = racesim_core::grip_factor(vehicle.tyre_compound, vehicle.tyre_wear, water_depth);
    let following = vehicle.lap_count > 1 && vehicle.position != 1;
    let sector_type_now = track.sector_at(vehicle.distance_on_lap).sector_type;
    let accel = dynamics::max_acceleration(
        vehicle.speed,
        grip,
        vehicle.drs_open,
        following,
        vehicle.gap_to_ahead,
        sector_type_now,
    );
    let brake = dynamics::max_braking(vehicle.speed, grip);
    vehicle.speed = dynamics::integrate_speed(vehicle.speed, target_speed, accel, brake, dt);

    // Pit-entry intent: entry is position-gated, so it is handled here
    // rather than in the pit-stop state machine.
    let entry = track.pit_lane.entry_distance;
    if vehicle.box_this_lap
        && vehicle.distance_on_lap >= entry
        && vehicle.distance_on_lap <= entry + PIT_ENTRY_WINDOW_METERS
    {
        vehicle.is_in_pit = true;
    }

    vehicle.current_lap_time += dt;
    let advance = vehicle.speed * dt;
    vehicle.distance_on_lap += advance;
    vehicle.total_distance += advance;

    if vehicle.distance_on_lap >= track.total_distance {
        vehicle.distance_on_lap -= track.total_distance;
        vehicle.lap_count += 1;
        vehicle.last_lap_time = vehicle.current_lap_time;
        if vehicle.last_lap_time < vehicle.best_lap_time {
            vehicle.best_lap_time = vehicle.last_lap_time;
        }
        vehicle.current_lap_time = 0.0;
        vehicle.tyre_age_laps += 1;
        std::mem::swap(&mut vehicle.current_lap_trace, &mut vehicle.last_lap_trace);
        vehicle.current_lap_trace.clear();
        vehicle.last_sampled_distance = 0.0;
        if checkered_flag {
            vehicle.has_finished = true;
        }
    }

    vehicle.current_sector = track.sector_at(vehicle.distance_on_lap).id;

    if vehicle.distance_on_lap - vehicle.last_sampled_distance > TELEMETRY_SAMPLE_DISTANCE_METERS {
        vehicle.current_lap_trace.push(SpeedTracePoint {
            distance: vehicle.distance_on_lap,
            speed: vehicle.speed,
        });
        vehicle.last_sampled_distance = vehicle.distance_on_lap;
    }

    resources::consume_resources(vehicle, track_degradation_factor, dt);
}

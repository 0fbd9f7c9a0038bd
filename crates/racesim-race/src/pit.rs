//! Pit-stop state machine: driving in, stopped, driving out, release.
//!
//! Physics skips any vehicle with `is_in_pit`, so this module owns all
//! pit-stop timing. `distance_on_lap` is held at the pit entry point for
//! the whole stop and jumps to the exit point on release — the lane
//! itself isn't modelled as main-straight distance.

use racesim_core::{PitPhase, RaceState, Track};

use crate::constants::*;

fn sample_stop_duration(damage: f64, rng: &mut racesim_core::Rng) -> f64 {
    let mut duration = if rng.chance(STOP_DURATION_LONG_PROBABILITY) {
        rng.range(STOP_DURATION_LONG_MIN_SECONDS, STOP_DURATION_LONG_MAX_SECONDS)
    } else {
        rng.range(STOP_DURATION_MIN_SECONDS, STOP_DURATION_MAX_SECONDS)
    };
    if damage > STOP_DURATION_DAMAGE_THRESHOLD {
        duration += STOP_DURATION_DAMAGE_PENALTY_SECONDS;
    }
    duration
}

/// Advances every vehicle currently in the pits through its state
/// machine by `dt`, releasing it back onto the track once the full
/// in/stop/out sequence completes.
pub fn update_pit_stops(dt: f64, track: &Track, rng: &mut racesim_core::Rng, state: &mut RaceState) {
    let half_transit = track.pit_lane_transit_time() / 2.0;
    let order = state.driver_order.clone();

    for id in &order {
        let in_pit = state.vehicles.get(id).map(|v| v.is_in_pit).unwrap_or(false);
        if !in_pit {
            continue;
        }

        let phase = state.vehicles[id].pit_phase.unwrap_or(PitPhase::DrivingIn { elapsed: 0.0 });
        let next_phase = match phase {
            PitPhase::DrivingIn { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= half_transit {
                    let damage = state.vehicles[id].damage;
                    Some(PitPhase::Stopped { elapsed: 0.0, duration: sample_stop_duration(damage, rng) })
                } else {
                    Some(PitPhase::DrivingIn { elapsed })
                }
            }
            PitPhase::Stopped { elapsed, duration } => {
                let elapsed = elapsed + dt;
                if elapsed >= duration {
                    Some(PitPhase::DrivingOut { elapsed: 0.0 })
                } else {
                    Some(PitPhase::Stopped { elapsed, duration })
                }
            }
            PitPhase::DrivingOut { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= half_transit {
                    None
                } else {
                    Some(PitPhase::DrivingOut { elapsed })
                }
            }
        };

        match next_phase {
            Some(phase) => {
                let vehicle = state.vehicles.get_mut(id).unwrap();
                vehicle.pit_phase = Some(phase);
            }
            None => release_vehicle(track, id, state),
        }
    }
}

fn release_vehicle(track: &Track, id: &racesim_core::DriverId, state: &mut RaceState) {
    let released_compound = racesim_strategy::compound_on_release(&state.vehicles[id], state);
    let vehicle = state.vehicles.get_mut(id).unwrap();
    vehicle.tyre_compound = released_compound;
    vehicle.tyre_wear = 0.0;
    vehicle.tyre_age_laps = 0;
    vehicle.damage = 0.0;
    vehicle.box_this_lap = false;
    vehicle.pit_stop_count += 1;
    vehicle.current_stint_index = (vehicle.current_stint_index + 1).min(vehicle.plan.len().saturating_sub(1));
    vehicle.distance_on_lap = track.pit_lane.exit_distance;
    vehicle.speed = track.pit_lane.speed_limit;
    vehicle.is_in_pit = false;
    vehicle.pit_phase = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use racesim_core::{
        DriverId, PitLane, Rng, Sector, SectorType, SessionId, TrackId, TyreCompound, VehicleState,
        WeatherParams,
    };
    use std::collections::HashMap;

    fn track() -> Track {
        Track::new(
            TrackId::new("t").unwrap(),
            "T",
            1000.0,
            50,
            vec![Sector {
                id: 1,
                name: "S1".into(),
                start_distance: 0.0,
                end_distance: 1000.0,
                sector_type: SectorType::Straight,
                difficulty: 0.2,
                max_speed: None,
            }],
            vec![],
            PitLane {
                entry_distance: 900.0,
                exit_distance: 10.0,
                speed_limit: 20.0,
                stop_time: None,
            },
            WeatherParams {
                volatility: 0.2,
                rain_probability: 0.1,
            },
            20.0,
        )
        .unwrap()
    }

    fn state_with_pitting_vehicle() -> RaceState {
        let id = DriverId::new("a").unwrap();
        let mut vehicle = VehicleState::new(id.clone(), TyreCompound::Medium, 1.0);
        vehicle.is_in_pit = true;
        vehicle.distance_on_lap = 900.0;
        let mut vehicles = HashMap::new();
        vehicles.insert(id.clone(), vehicle);
        RaceState {
            id: SessionId::new(),
            track_id: TrackId::new("t").unwrap(),
            current_lap: 5,
            total_laps: 50,
            weather: racesim_core::WeatherCondition::Dry,
            weather_mode: racesim_core::WeatherMode::Simulation,
            weather_forecast: vec![],
            cloud_cover: 0.0,
            rain_intensity_level: 0.0,
            wind_speed: 0.0,
            wind_direction: 0.0,
            track_temp: 25.0,
            air_temp: 20.0,
            rubber_level: 50.0,
            track_water_depth: 0.0,
            sector_conditions: vec![Default::default()],
            real_weather_data: None,
            last_forecast_maintenance: 0.0,
            safety_car: racesim_core::SafetyCarStatus::None,
            safety_car_timer: 0.0,
            driver_order: vec![id],
            vehicles,
            status: racesim_core::RaceStatus::Racing,
            checkered_flag: false,
            winner_id: None,
            elapsed_time: 100.0,
        }
    }

    #[test]
    fn full_cycle_eventually_releases_the_vehicle() {
        let trk = track();
        let mut state = state_with_pitting_vehicle();
        let mut rng = Rng::new(3);
        for _ in 0..2000 {
            update_pit_stops(0.1, &trk, &mut rng, &mut state);
        }
        let vehicle = &state.vehicles[&DriverId::new("a").unwrap()];
        assert!(!vehicle.is_in_pit);
        assert_eq!(vehicle.pit_stop_count, 1);
        assert_eq!(vehicle.tyre_wear, 0.0);
        assert_eq!(vehicle.distance_on_lap, trk.pit_lane.exit_distance);
    }

    #[test]
    fn release_clears_damage_and_box_request() {
        let trk = track();
        let mut state = state_with_pitting_vehicle();
        let id = DriverId::new("a").unwrap();
        state.vehicles.get_mut(&id).unwrap().damage = 40.0;
        state.vehicles.get_mut(&id).unwrap().box_this_lap = true;
        let mut rng = Rng::new(3);
        for _ in 0..2000 {
            update_pit_stops(0.1, &trk, &mut rng, &mut state);
        }
        let vehicle = &state.vehicles[&id];
        assert_eq!(vehicle.damage, 0.0);
        assert!(!vehicle.box_this_lap);
    }

    #[test]
    fn mid_cycle_stays_in_pit() {
        let trk = track();
        let mut state = state_with_pitting_vehicle();
        let mut rng = Rng::new(3);
        update_pit_stops(0.1, &trk, &mut rng, &mut state);
        let vehicle = &state.vehicles[&DriverId::new("a").unwrap()];
        assert!(vehicle.is_in_pit);
        assert!(matches!(vehicle.pit_phase, Some(PitPhase::DrivingIn { .. })));
    }
}

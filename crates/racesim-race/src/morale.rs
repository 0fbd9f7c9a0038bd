//! Per-tick morale and concentration drift.

use racesim_core::RaceState;

use crate::constants::*;

/// Drifts morale toward its 80-point baseline, and concentration toward
/// full recovery, with the dirty-air/battling/chaos penalties of §4.6.
/// Reads `inDirtyAir`/`isBattling` as last updated by spatial awareness
/// and `gapToAhead` as last updated by the positions pass — both, per the
/// documented phase order, carry the previous tick's values into this
/// step.
pub fn update_morale_and_concentration(dt: f64, state: &mut RaceState) {
    let order = state.driver_order.clone();
    let gaps_to_ahead: Vec<f64> = order
        .iter()
        .map(|id| state.vehicles[id].gap_to_ahead)
        .collect();

    for (index, id) in order.iter().enumerate() {
        let gap_behind = order
            .get(index + 1)
            .map(|_| gaps_to_ahead[index + 1])
            .unwrap_or(f64::INFINITY);

        let vehicle = state.vehicles.get_mut(id).unwrap();
        if vehicle.is_retired() || vehicle.has_finished {
            continue;
        }

        let mut morale = vehicle.morale + MORALE_RECOVERY_RATE * dt * (MORALE_BASELINE - vehicle.morale);
        if vehicle.in_dirty_air {
            morale -= MORALE_DIRTY_AIR_PENALTY_PER_SECOND * dt;
        }
        if gap_behind < MORALE_PRESSURE_FROM_BEHIND_GAP_THRESHOLD_SECONDS {
            morale += MORALE_PRESSURE_FROM_BEHIND_GAIN_PER_SECOND * dt;
        }
        vehicle.morale = morale.clamp(0.0, 100.0);

        let mut concentration = if state.current_lap <= 1 && vehicle.current_sector == 1 {
            vehicle.concentration + CONCENTRATION_LAP1_SECTOR1_CHAOS_PER_SECOND * dt
        } else {
            vehicle.concentration + CONCENTRATION_BASE_RECOVERY_PER_SECOND * dt
        };
        if vehicle.is_battling {
            concentration += CONCENTRATION_BATTLING_PENALTY_PER_SECOND * dt;
        }
        if vehicle.in_dirty_air {
            concentration += CONCENTRATION_DIRTY_AIR_PENALTY_PER_SECOND * dt;
        }
        vehicle.concentration = concentration.clamp(0.0, 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use racesim_core::{DriverId, TyreCompound, VehicleState};
    use std::collections::HashMap;

    fn state_with_one_vehicle(morale: f64, concentration: f64) -> RaceState {
        let id = DriverId::new("a").unwrap();
        let mut v = VehicleState::new(id.clone(), TyreCompound::Medium, 1.0);
        v.morale = morale;
        v.concentration = concentration;
        let mut vehicles = HashMap::new();
        vehicles.insert(id.clone(), v);
        RaceState {
            id: racesim_core::SessionId::new(),
            track_id: racesim_core::TrackId::new("t").unwrap(),
            current_lap: 10,
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
            sector_conditions: vec![],
            real_weather_data: None,
            last_forecast_maintenance: 0.0,
            safety_car: racesim_core::SafetyCarStatus::None,
            safety_car_timer: 0.0,
            driver_order: vec![id],
            vehicles,
            status: racesim_core::RaceStatus::Racing,
            checkered_flag: false,
            winner_id: None,
            elapsed_time: 500.0,
        }
    }

    #[test]
    fn morale_drifts_toward_baseline_from_above() {
        let mut state = state_with_one_vehicle(95.0, 80.0);
        update_morale_and_concentration(1.0, &mut state);
        let v = &state.vehicles[&DriverId::new("a").unwrap()];
        assert!(v.morale < 95.0);
        assert!(v.morale > 80.0);
    }

    #[test]
    fn morale_drifts_toward_baseline_from_below() {
        let mut state = state_with_one_vehicle(50.0, 80.0);
        update_morale_and_concentration(1.0, &mut state);
        let v = &state.vehicles[&DriverId::new("a").unwrap()];
        assert!(v.morale > 50.0);
    }

    #[test]
    fn concentration_clamped_within_bounds() {
        let mut state = state_with_one_vehicle(80.0, 99.0);
        for _ in 0..100 {
            update_morale_and_concentration(1.0, &mut state);
        }
        let v = &state.vehicles[&DriverId::new("a").unwrap()];
        assert!((0.0..=100.0).contains(&v.concentration));
    }
}

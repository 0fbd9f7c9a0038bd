//! Race initialization: qualifying, grid placement, initial weather draw,
//! initial tyre choice and per-vehicle plan generation.

use std::collections::HashMap;

use racesim_core::{
    Driver, DriverId, RaceState, RaceStatus, Rng, SectorCondition, SessionId, SimError, SimResult,
    Track, TyreCompound, VehicleState, WeatherCondition, WeatherMode,
};
use racesim_weather::WeatherSystem;

use crate::constants::*;

/// Seed-derived qualifying lap time, per §4.6: base pace plus a
/// consistency-scaled penalty plus symmetric jitter. Lower is faster.
fn qualifying_lap_time(driver: &Driver, rng: &mut Rng) -> f64 {
    driver.base_pace
        + (100.0 - driver.skills.consistency) * QUALI_CONSISTENCY_PENALTY_PER_POINT
        + rng.range(-QUALI_LAP_TIME_JITTER, QUALI_LAP_TIME_JITTER)
}

fn initial_tyre_compound(driver: &Driver, initial_rain_intensity: f64) -> TyreCompound {
    if initial_rain_intensity > INITIAL_TYRE_RAIN_WET_THRESHOLD {
        return TyreCompound::Wet;
    }
    if initial_rain_intensity > INITIAL_TYRE_RAIN_INTERMEDIATE_THRESHOLD {
        return TyreCompound::Intermediate;
    }
    let aggression = driver.personality.aggression;
    if aggression >= INITIAL_TYRE_AGGRESSION_SOFT_THRESHOLD {
        TyreCompound::Soft
    } else if aggression >= INITIAL_TYRE_AGGRESSION_MEDIUM_THRESHOLD {
        TyreCompound::Medium
    } else {
        TyreCompound::Hard
    }
}

/// Builds a fresh `RaceState` in `pre-race` status: runs the qualifying
/// simulation, orders the grid, draws the initial weather forecast and
/// per-vehicle tyre/plan/condition, and zeroes every race-wide counter.
/// Consumes `rng` for qualifying jitter, the initial forecast's meso
/// phases, initial day-form, grid jitter and pre-race plan generation, in
/// that order, since this is the first thing a new `Engine` does with its
/// shared RNG.
pub fn initialize_race(
    track: &Track,
    drivers: &[Driver],
    total_laps: u16,
    rng: &mut Rng,
) -> SimResult<RaceState> {
    if drivers.is_empty() {
        return Err(SimError::EmptyRoster);
    }
    let mut seen = std::collections::HashSet::new();
    for driver in drivers {
        if !seen.insert(&driver.id) {
            return Err(SimError::DuplicateDriver(driver.id.clone()));
        }
    }

    let weather_system = WeatherSystem::new();
    let forecast = weather_system.initial_forecast(track, rng);
    let initial_cloud_cover = forecast.first().map(|n| n.cloud_cover).unwrap_or(0.0);
    let initial_rain_intensity = forecast.first().map(|n| n.rain_intensity).unwrap_or(0.0);
    let initial_weather = if initial_rain_intensity > 50.0 {
        WeatherCondition::HeavyRain
    } else if initial_rain_intensity > 5.0 {
        WeatherCondition::LightRain
    } else {
        WeatherCondition::Dry
    };

    let mut qualifying: Vec<(&Driver, f64)> = drivers
        .iter()
        .map(|d| (d, qualifying_lap_time(d, rng)))
        .collect();
    qualifying.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

    let mut vehicles = HashMap::with_capacity(drivers.len());
    let mut driver_order = Vec::with_capacity(drivers.len());

    for (index, (driver, _lap_time)) in qualifying.iter().enumerate() {
        let condition = rng.range(INITIAL_CONDITION_MIN, INITIAL_CONDITION_MAX);
        let compound = initial_tyre_compound(driver, initial_rain_intensity);
        let grid_jitter = rng.range(-GRID_SPACING_JITTER_METERS, GRID_SPACING_JITTER_METERS);
        let plan = racesim_strategy::generate_pre_race_plan(
            driver,
            track.weather_params.rain_probability,
            total_laps,
            track.tire_degradation_factor,
            rng,
        );

        let mut vehicle = VehicleState::new(driver.id.clone(), compound, condition);
        vehicle.distance_on_lap =
            track.total_distance - (index as f64 + 1.0) * GRID_SPACING_METERS + grid_jitter;
        vehicle.position = (index + 1) as u16;
        vehicle.last_position = vehicle.position;
        vehicle.plan = plan;
        vehicle.morale = driver.starting_morale;

        driver_order.push(driver.id.clone());
        vehicles.insert(driver.id.clone(), vehicle);
    }

    Ok(RaceState {
        id: SessionId::new(),
        track_id: track.id.clone(),
        current_lap: 0,
        total_laps,
        weather: initial_weather,
        weather_mode: WeatherMode::Simulation,
        weather_forecast: forecast,
        cloud_cover: initial_cloud_cover,
        rain_intensity_level: initial_rain_intensity,
        wind_speed: 0.0,
        wind_direction: 0.0,
        track_temp: track.base_temperature,
        air_temp: track.base_temperature,
        rubber_level: INITIAL_SECTOR_RUBBER_LEVEL,
        track_water_depth: 0.0,
        sector_conditions: vec![
            SectorCondition {
                water_depth: 0.0,
                rubber_level: INITIAL_SECTOR_RUBBER_LEVEL,
            };
            track.sectors.len()
        ],
        real_weather_data: None,
        last_forecast_maintenance: 0.0,
        safety_car: racesim_core::SafetyCarStatus::None,
        safety_car_timer: 0.0,
        vehicles,
        driver_order,
        status: RaceStatus::PreRace,
        checkered_flag: false,
        winner_id: None,
        elapsed_time: 0.0,
    })
}

/// Re-grids surviving vehicles at the finish line after a red-flag timer
/// expires: `16 m` spacing by current position, unlapped to the leader's
/// lap count, speed and transient flags reset.
pub fn red_flag_restart(track: &Track, state: &mut RaceState) {
    let leader_lap = state
        .active_vehicles()
        .map(|v| v.lap_count)
        .max()
        .unwrap_or(0);

    let mut order: Vec<DriverId> = state.driver_order.clone();
    order.retain(|id| {
        state
            .vehicles
            .get(id)
            .map(|v| !v.is_retired())
            .unwrap_or(false)
    });
    order.sort_by_key(|id| state.vehicles[id].position);

    for (index, id) in order.iter().enumerate() {
        if let Some(vehicle) = state.vehicles.get_mut(id) {
            vehicle.lap_count = leader_lap;
            vehicle.distance_on_lap = track.total_distance - (index as f64 + 1.0) * GRID_SPACING_METERS;
            vehicle.speed = 0.0;
            vehicle.gap_to_leader = 0.0;
            vehicle.gap_to_ahead = 0.0;
            vehicle.is_battling = false;
            vehicle.in_dirty_air = false;
            vehicle.blue_flag = false;
            vehicle.drs_open = false;
        }
    }
}

//! Rolling forecast generation/interpolation and sector water-depth
//! evolution.

use std::f64::consts::TAU;

use racesim_core::{
    RaceState, Rng, SectorCondition, Track, WeatherCondition, WeatherForecastNode, WeatherMode,
};
use tracing::debug;

pub mod constants {
    pub const MACRO_PERIOD_SECONDS: f64 = 5000.0;
    pub const MESO_PERIOD_SECONDS: f64 = 1000.0;
    pub const MICRO_PERIOD_SECONDS: f64 = 160.0;

    pub const INITIAL_NODE_COUNT: usize = 16;
    pub const NODE_SPACING_SECONDS: f64 = 120.0;
    pub const MAINTENANCE_INTERVAL_SECONDS: f64 = 60.0;
    pub const FORECAST_HORIZON_SECONDS: f64 = 1800.0;

    pub const ACCUMULATION_MM_PER_HOUR: f64 = 10.0;
    pub const DRAINAGE_MM_PER_HOUR: f64 = 2.0;
    pub const EVAPORATION_MM_PER_HOUR: f64 = 0.5;
    pub const EVAPORATION_DRY_MULTIPLIER: f64 = 4.0;
    pub const DRY_EVAPORATION_RAIN_THRESHOLD: f64 = 5.0;

    pub const RUBBER_DECAY_WATER_THRESHOLD_MM: f64 = 0.5;
    pub const RUBBER_DECAY_RATE_PER_SECOND: f64 = 0.02;
}

use constants::*;

/// Deterministic sum-of-three-sines signal underlying forecast node
/// generation. Only the meso component carries a per-node random phase.
fn combined_signal(t: f64, volatility: f64, meso_phase: f64) -> f64 {
    let macro_wave = (TAU * t / MACRO_PERIOD_SECONDS).sin();
    let meso_wave = (TAU * t / MESO_PERIOD_SECONDS + meso_phase).sin();
    let micro_wave = (TAU * t / MICRO_PERIOD_SECONDS).sin();
    0.5 * macro_wave + 0.3 * volatility * meso_wave + 0.2 * volatility * micro_wave
}

fn generate_node(
    time_offset: f64,
    volatility: f64,
    rain_probability: f64,
    rng: &mut Rng,
) -> WeatherForecastNode {
    let meso_phase = rng.range(0.0, TAU);
    let combined = combined_signal(time_offset, volatility, meso_phase);
    let center = if rain_probability <= 0.5 { 30.0 } else { 60.0 };
    let cloud_cover = (center + 50.0 * combined).clamp(0.0, 100.0);
    let rain_intensity = rain_intensity_from_cloud(cloud_cover);
    WeatherForecastNode {
        time_offset,
        cloud_cover,
        rain_intensity,
        meso_phase,
    }
}

fn rain_intensity_from_cloud(cloud_cover: f64) -> f64 {
    if cloud_cover <= 70.0 {
        0.0
    } else {
        ((cloud_cover - 70.0) / 30.0).powi(2) * 100.0
    }
}

fn discrete_weather(rain_intensity: f64) -> WeatherCondition {
    if rain_intensity > 50.0 {
        WeatherCondition::HeavyRain
    } else if rain_intensity > 5.0 {
        WeatherCondition::LightRain
    } else {
        WeatherCondition::Dry
    }
}

/// Maintains and samples the race's weather state.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherSystem;

impl WeatherSystem {
    pub fn new() -> Self {
        Self
    }

    /// The initial 16-node forecast, generated at race construction.
    pub fn initial_forecast(&self, track: &Track, rng: &mut Rng) -> Vec<WeatherForecastNode> {
        (0..INITIAL_NODE_COUNT)
            .map(|i| {
                generate_node(
                    i as f64 * NODE_SPACING_SECONDS,
                    track.weather_params.volatility,
                    track.weather_params.rain_probability,
                    rng,
                )
            })
            .collect()
    }

    /// Per-tick update: forecast maintenance/interpolation (or the real
    /// data push) followed by temperature and water-depth evolution.
    pub fn update(&self, dt: f64, track: &Track, state: &mut RaceState, rng: &mut Rng) {
        match state.weather_mode {
            WeatherMode::Simulation => {
                self.maintain_forecast(track, state, rng);
                self.interpolate(state);
                state.air_temp = track.base_temperature
                    - 5.0 * (state.rain_intensity_level / 100.0)
                    - 3.0 * (state.cloud_cover / 100.0);
            }
            WeatherMode::Real => {
                self.apply_real_data(state);
            }
        }

        state.track_temp = if state.rain_intensity_level > 5.0 {
            state.air_temp + 1.0
        } else {
            state.air_temp + 15.0 * (1.0 - state.cloud_cover / 100.0)
        };

        self.evolve_water_and_rubber(dt, state);
    }

    /// `setWeatherMode`: no-op on state when the mode is unchanged.
    pub fn set_mode(&self, state: &mut RaceState, mode: WeatherMode) {
        if state.weather_mode == mode {
            return;
        }
        state.weather_mode = mode;
    }

    /// `setRealWeatherData`: ignored while `weather_mode == Simulation`.
    pub fn push_real_weather_data(
        &self,
        state: &mut RaceState,
        data: racesim_core::RealWeatherData,
    ) {
        if state.weather_mode != WeatherMode::Real {
            debug!("ignoring real weather push while in simulation mode");
            return;
        }
        state.real_weather_data = Some(data);
    }

    fn apply_real_data(&self, state: &mut RaceState) {
        let Some(data) = state.real_weather_data else {
            return;
        };
        state.cloud_cover = data.cloud_cover.clamp(0.0, 100.0);
        state.wind_speed = data.wind_speed;
        state.wind_direction = data.wind_direction.rem_euclid(360.0);
        state.air_temp = data.temp;
        state.rain_intensity_level = (data.precipitation_mm_per_hour / 5.0 * 100.0).clamp(0.0, 100.0);
        state.weather = discrete_weather(state.rain_intensity_level);
    }

    fn maintain_forecast(&self, track: &Track, state: &mut RaceState, rng: &mut Rng) {
        let first_run = state.weather_forecast.is_empty();
        if !first_run
            && state.elapsed_time - state.last_forecast_maintenance < MAINTENANCE_INTERVAL_SECONDS
        {
            return;
        }

        let elapsed = state.elapsed_time;
        if let Some(keep_from) = state
            .weather_forecast
            .iter()
            .rposition(|n| n.time_offset <= elapsed)
        {
            if keep_from > 0 {
                state.weather_forecast.drain(0..keep_from);
            }
        }

        while state
            .weather_forecast
            .last()
            .map(|n| n.time_offset)
            .unwrap_or(f64::NEG_INFINITY)
            < elapsed + FORECAST_HORIZON_SECONDS
        {
            let next_t = state
                .weather_forecast
                .last()
                .map(|n| n.time_offset + NODE_SPACING_SECONDS)
                .unwrap_or(0.0);
            state.weather_forecast.push(generate_node(
                next_t,
                track.weather_params.volatility,
                track.weather_params.rain_probability,
                rng,
            ));
        }

        state.last_forecast_maintenance = elapsed;
    }

    /// Linear interpolation between the two bracketing forecast nodes.
    fn interpolate(&self, state: &mut RaceState) {
        let Some((cloud, rain)) = interpolate_forecast(&state.weather_forecast, state.elapsed_time)
        else {
            return;
        };
        state.cloud_cover = cloud;
        state.rain_intensity_level = rain;
        state.weather = discrete_weather(rain);
    }

    fn evolve_water_and_rubber(&self, dt: f64, state: &mut RaceState) {
        let rain = state.rain_intensity_level;
        let accumulation_per_second = (rain / 100.0) * (ACCUMULATION_MM_PER_HOUR / 3600.0);
        let drainage_per_second = DRAINAGE_MM_PER_HOUR / 3600.0;
        let mut evaporation_per_second = EVAPORATION_MM_PER_HOUR / 3600.0;
        if rain < DRY_EVAPORATION_RAIN_THRESHOLD {
            evaporation_per_second *= EVAPORATION_DRY_MULTIPLIER;
        }

        let net_per_second = if rain > 0.0 {
            accumulation_per_second - drainage_per_second
        } else {
            -(drainage_per_second + evaporation_per_second)
        };
        let delta = net_per_second * dt;

        for sector in &mut state.sector_conditions {
            sector.water_depth = (sector.water_depth + delta).max(0.0);
        }
        state.track_water_depth = state
            .sector_conditions
            .first()
            .map(|s| s.water_depth)
            .unwrap_or(0.0);

        if state.track_water_depth > RUBBER_DECAY_WATER_THRESHOLD_MM {
            let decay = RUBBER_DECAY_RATE_PER_SECOND * dt;
            state.rubber_level = (state.rubber_level - decay).max(0.0);
            for sector in &mut state.sector_conditions {
                sector.rubber_level = (sector.rubber_level - decay).max(0.0);
            }
        }
    }
}

/// Interpolated `(cloud_cover, rain_intensity)` at `elapsed`, clamped to the
/// forecast's own endpoints outside its range. Exposed so strategy's
/// forecast-override rule can look ahead without duplicating this.
pub fn interpolate_forecast(nodes: &[WeatherForecastNode], elapsed: f64) -> Option<(f64, f64)> {
    let first = nodes.first()?;
    let last = nodes.last()?;
    if elapsed <= first.time_offset {
        return Some((first.cloud_cover, first.rain_intensity));
    }
    if elapsed >= last.time_offset {
        return Some((last.cloud_cover, last.rain_intensity));
    }
    let idx = nodes.iter().rposition(|n| n.time_offset <= elapsed)?;
    let a = nodes[idx];
    let b = nodes[idx + 1];
    let t = (elapsed - a.time_offset) / (b.time_offset - a.time_offset);
    Some((
        a.cloud_cover + t * (b.cloud_cover - a.cloud_cover),
        a.rain_intensity + t * (b.rain_intensity - a.rain_intensity),
    ))
}

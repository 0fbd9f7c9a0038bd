//! Race-wide mutable state: weather, flags, classification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::{DriverId, SessionId, TrackId};
use crate::vehicle::VehicleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Dry,
    LightRain,
    HeavyRain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherMode {
    Simulation,
    Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyCarStatus {
    None,
    Vsc,
    Sc,
    RedFlag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceStatus {
    PreRace,
    Racing,
    Finished,
}

/// One node of the rolling weather forecast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherForecastNode {
    pub time_offset: f64,
    pub cloud_cover: f64,
    pub rain_intensity: f64,
    /// Meso-frequency phase offset, drawn once per node from the shared
    /// RNG when the node is generated.
    pub meso_phase: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SectorCondition {
    pub water_depth: f64,
    pub rubber_level: f64,
}

/// External push payload accepted while `weather_mode == Real`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RealWeatherData {
    pub cloud_cover: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub temp: f64,
    pub precipitation_mm_per_hour: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceState {
    pub id: SessionId,
    pub track_id: TrackId,
    pub current_lap: u16,
    pub total_laps: u16,

    pub weather: WeatherCondition,
    pub weather_mode: WeatherMode,
    pub weather_forecast: Vec<WeatherForecastNode>,
    pub cloud_cover: f64,
    pub rain_intensity_level: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub track_temp: f64,
    pub air_temp: f64,
    pub rubber_level: f64,
    /// Water depth applied uniformly across every sector this tick,
    /// mirrored from the per-sector evolution in `sector_conditions`.
    pub track_water_depth: f64,
    pub sector_conditions: Vec<SectorCondition>,
    pub real_weather_data: Option<RealWeatherData>,
    pub last_forecast_maintenance: f64,

    pub safety_car: SafetyCarStatus,
    pub safety_car_timer: f64,

    pub vehicles: HashMap<DriverId, VehicleState>,
    /// Grid / finishing order, maintained by RaceLogic for deterministic
    /// iteration instead of hashing over `vehicles`.
    pub driver_order: Vec<DriverId>,

    pub status: RaceStatus,
    pub checkered_flag: bool,
    pub winner_id: Option<DriverId>,
    pub elapsed_time: f64,
}

impl RaceState {
    pub fn leader(&self) -> Option<&VehicleState> {
        self.vehicles.values().find(|v| v.position == 1)
    }

    pub fn vehicle(&self, driver_id: &DriverId) -> Option<&VehicleState> {
        self.vehicles.get(driver_id)
    }

    pub fn active_vehicles(&self) -> impl Iterator<Item = &VehicleState> {
        self.vehicles.values().filter(|v| !v.is_retired())
    }

    pub fn remaining_laps(&self) -> u16 {
        self.total_laps.saturating_sub(self.current_lap)
    }

    pub fn race_progress(&self) -> f64 {
        if self.total_laps == 0 {
            return 0.0;
        }
        self.current_lap as f64 / self.total_laps as f64
    }

    pub fn is_safety_car_period(&self) -> bool {
        matches!(self.safety_car, SafetyCarStatus::Vsc | SafetyCarStatus::Sc)
    }
}

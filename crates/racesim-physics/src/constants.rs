//! Physical and tuning constants for the target-speed model and
//! longitudinal dynamics.

pub const BASE_SPEED_STRAIGHT: f64 = 105.0;
pub const BASE_SPEED_CORNER_HIGH: f64 = 72.0;
pub const BASE_SPEED_CORNER_MEDIUM: f64 = 50.0;
pub const BASE_SPEED_CORNER_LOW: f64 = 25.0;

pub const ENGINE_POWER_WATTS: f64 = 750_000.0;
pub const VEHICLE_MASS_KG: f64 = 800.0;
pub const GRAVITY: f64 = 9.81;
pub const TRACTION_ACCEL_MULTIPLIER: f64 = 1.3;
pub const MIN_SPEED_FOR_POWER_DIVISION: f64 = 10.0;
pub const ROLLING_RESISTANCE_ACCEL: f64 = 0.1;

pub const AIR_DENSITY: f64 = 1.225;
pub const DRAG_AREA_CDA: f64 = 1.6;
pub const DRS_DRAG_MULTIPLIER: f64 = 0.75;
pub const SLIPSTREAM_MAX_DRAG_REDUCTION: f64 = 0.15;
pub const SLIPSTREAM_MAX_DRAG_REDUCTION_WITH_DRS: f64 = 0.08;
pub const SLIPSTREAM_GAP_THRESHOLD_SECONDS: f64 = 1.0;

pub const MECHANICAL_BRAKING_ACCEL: f64 = 15.0;
pub const AERO_BRAKING_COEFFICIENT: f64 = 0.005;

pub const MAX_VEHICLE_SPEED: f64 = 150.0;

pub const SLIPSTREAM_MAX_BOOST: f64 = 0.05;
pub const SLIPSTREAM_FADE_GAP_SECONDS: f64 = 1.5;
pub const DIRTY_AIR_PENALTY_HIGH_SPEED: f64 = 0.05;
pub const DIRTY_AIR_PENALTY_MEDIUM_SPEED: f64 = 0.03;
pub const DIRTY_AIR_PENALTY_LOW_SPEED: f64 = 0.01;
pub const DIRTY_AIR_FADE_GAP_SECONDS: f64 = 2.0;

pub const DRS_SPEED_BONUS: f64 = 0.05;
pub const BATTLING_STUCK_SPEED_FACTOR: f64 = 0.98;
pub const BATTLING_CORNER_PENALTY_MAX: f64 = 0.05;
pub const BLUE_FLAG_MAX_SLOWDOWN: f64 = 0.2;

pub const NOISE_BASE_AMPLITUDE: f64 = 0.05;
pub const NOISE_CONSISTENCY_OFFSET: f64 = 0.3;
pub const NOISE_LOW_SPEED_CORNER_MULTIPLIER: f64 = 3.0;
pub const NOISE_SAFETY_CAR_REDUCTION: f64 = 0.1;

pub const VSC_SPEED_RATIO: f64 = 0.7;
pub const VSC_SPEED_CAP: f64 = 44.0;

pub const SC_PACE_SPEED: f64 = 35.0;
pub const SC_CATCH_UP_MULTIPLIER: f64 = 1.6;
pub const SC_BUNCH_MULTIPLIER: f64 = 0.8;
pub const SC_BUNCH_GAP_THRESHOLD_SECONDS: f64 = 0.3;
pub const SC_CATCH_UP_GAP_THRESHOLD_SECONDS: f64 = 0.5;

pub const PIT_ENTRY_WINDOW_METERS: f64 = 50.0;
pub const TELEMETRY_SAMPLE_DISTANCE_METERS: f64 = 50.0;

pub const FUEL_BURN_KG_PER_SECOND: f64 = 0.016;
pub const ERS_DEPLOY_DRAIN_PER_SECOND: f64 = 2.0;
pub const ERS_HARVEST_GAIN_PER_SECOND: f64 = 1.5;
pub const ERS_BALANCED_GAIN_PER_SECOND: f64 = 0.1;

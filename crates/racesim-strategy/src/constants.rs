//! Tuning constants for stint planning and in-race pit decisions.

pub const SOFT_BASE_LIFE_LAPS: f64 = 15.0;
pub const MEDIUM_BASE_LIFE_LAPS: f64 = 25.0;
pub const HARD_BASE_LIFE_LAPS: f64 = 40.0;

pub const LIFE_JITTER_MIN: f64 = 0.9;
pub const LIFE_JITTER_MAX: f64 = 1.1;
pub const STOP_FRACTION_MIN: f64 = 0.8;
pub const STOP_FRACTION_MAX: f64 = 0.9;
pub const STOP_LAP_JITTER_MAX: i64 = 2;

pub const AGGRESSIVE_PLAN_WEIGHT: f64 = 0.6;
pub const RAIN_PROBABILITY_WET_PLAN_THRESHOLD: f64 = 0.6;
pub const WET_STINT_LAP_FRACTION: f64 = 0.4;

pub const PIT_DECISION_WINDOW_MIN_METERS: f64 = 50.0;
pub const PIT_DECISION_WINDOW_MAX_METERS: f64 = 1000.0;
pub const SLICK_IN_RAIN_MISMATCH_THRESHOLD: f64 = 10.0;
pub const RAIN_COMPOUND_IN_DRY_MISMATCH_THRESHOLD: f64 = 10.0;
pub const DAMAGE_PIT_THRESHOLD: f64 = 15.0;
pub const TYRE_WEAR_PIT_THRESHOLD: f64 = 85.0;
pub const PLANNED_STOP_WINDOW_LAPS: i32 = 2;
pub const UNDERCUT_AGGRESSION_THRESHOLD: f64 = 60.0;
pub const UNDERCUT_PROBABILITY_BUMP: f64 = 0.3;
pub const PLANNED_STOP_BASE_PROBABILITY: f64 = 0.3;
pub const PLANNED_STOP_PROXIMITY_WEIGHT: f64 = 0.4;
pub const PLANNED_STOP_WEAR_WEIGHT: f64 = 0.3;

pub const FORECAST_OVERRIDE_HORIZON_SECONDS: f64 = 300.0;
pub const FORECAST_OVERRIDE_SLICK_RAIN_THRESHOLD: f64 = 40.0;

pub const RELEASE_WET_RAIN_THRESHOLD: f64 = 60.0;
pub const RELEASE_INTERMEDIATE_RAIN_THRESHOLD: f64 = 10.0;
pub const RELEASE_FALLBACK_SOFT_LAPS_REMAINING: u16 = 15;
pub const RELEASE_FALLBACK_MEDIUM_LAPS_REMAINING: u16 = 30;

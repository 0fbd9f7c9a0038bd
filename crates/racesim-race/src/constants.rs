//! Tuning constants for race initialization, incidents, the pit-stop state
//! machine, DRS gating, overtakes, positions and morale/concentration.

// Qualifying / grid.
pub const QUALI_CONSISTENCY_PENALTY_PER_POINT: f64 = 0.005;
pub const QUALI_LAP_TIME_JITTER: f64 = 0.4;
pub const GRID_SPACING_METERS: f64 = 16.0;
pub const GRID_SPACING_JITTER_METERS: f64 = 1.0;
pub const INITIAL_CONDITION_MIN: f64 = 0.99;
pub const INITIAL_CONDITION_MAX: f64 = 1.01;
pub const INITIAL_SECTOR_RUBBER_LEVEL: f64 = 50.0;
pub const INITIAL_TYRE_RAIN_WET_THRESHOLD: f64 = 60.0;
pub const INITIAL_TYRE_RAIN_INTERMEDIATE_THRESHOLD: f64 = 10.0;
pub const INITIAL_TYRE_AGGRESSION_SOFT_THRESHOLD: f64 = 66.0;
pub const INITIAL_TYRE_AGGRESSION_MEDIUM_THRESHOLD: f64 = 33.0;

// Incident sampling.
pub const INCIDENT_BASE_RISK_PER_SECOND: f64 = 1e-5;
pub const INCIDENT_CONCENTRATION_MAX_MULTIPLIER: f64 = 10.0;
pub const INCIDENT_BATTLING_MULTIPLIER: f64 = 4.0;
pub const INCIDENT_AGGRESSIVE_ATTACKER_MULTIPLIER: f64 = 1.5;
pub const INCIDENT_AGGRESSIVE_ATTACKER_THRESHOLD: f64 = 60.0;
pub const INCIDENT_DIRTY_AIR_MULTIPLIER: f64 = 1.5;
pub const INCIDENT_TYRE_WEAR_ESCALATION_THRESHOLD: f64 = 70.0;
pub const INCIDENT_TYRE_WEAR_MAX_MULTIPLIER_ADD: f64 = 2.0;
pub const INCIDENT_WRONG_COMPOUND_MULTIPLIER: f64 = 10.0;
pub const INCIDENT_WRONG_COMPOUND_RAIN_THRESHOLD: f64 = 10.0;
pub const INCIDENT_RAIN_ON_RAIN_MULTIPLIER: f64 = 2.0;
pub const INCIDENT_RAIN_ON_RAIN_THRESHOLD: f64 = 50.0;
pub const INCIDENT_CONSISTENCY_MAX_MULTIPLIER: f64 = 4.0;
pub const INCIDENT_STRESS_MULTIPLIER: f64 = 3.0;
pub const INCIDENT_STRESS_THRESHOLD: f64 = 70.0;
pub const INCIDENT_STRESS_RESISTANCE_THRESHOLD: f64 = 40.0;
pub const INCIDENT_TRACK_DIFFICULTY_MAX_MULTIPLIER_ADD: f64 = 0.5;

pub const SEVERITY_SPEED_WEIGHT: f64 = 40.0;
pub const SEVERITY_MAX_SPEED: f64 = 150.0;
pub const SEVERITY_RANDOM_MAX: f64 = 30.0;
pub const SEVERITY_SECTOR_LOW_SPEED_WEIGHT: f64 = 30.0;
pub const SEVERITY_SECTOR_MEDIUM_SPEED_WEIGHT: f64 = 20.0;
pub const SEVERITY_SECTOR_HIGH_SPEED_WEIGHT: f64 = 10.0;
pub const SEVERITY_SECTOR_STRAIGHT_WEIGHT: f64 = 0.0;

pub const SEVERITY_RED_FLAG_THRESHOLD: f64 = 80.0;
pub const SEVERITY_SC_THRESHOLD: f64 = 50.0;
pub const RED_FLAG_TIMER_MIN_SECONDS: f64 = 15.0;
pub const RED_FLAG_TIMER_MAX_SECONDS: f64 = 45.0;
pub const SC_DNF_PROBABILITY: f64 = 0.7;
pub const SC_DAMAGE_MIN: f64 = 30.0;
pub const SC_DAMAGE_MAX: f64 = 60.0;
pub const SC_TIMER_MIN_SECONDS: f64 = 180.0;
pub const SC_TIMER_MAX_SECONDS: f64 = 400.0;
pub const VSC_DAMAGE_MIN: f64 = 5.0;
pub const VSC_DAMAGE_MAX: f64 = 20.0;
pub const VSC_SPEED_MULTIPLIER: f64 = 0.3;
pub const VSC_TIMER_MIN_SECONDS: f64 = 45.0;
pub const VSC_TIMER_MAX_SECONDS: f64 = 120.0;
pub const FULL_DAMAGE: f64 = 100.0;

// Pit-stop state machine.
pub const STOP_DURATION_MIN_SECONDS: f64 = 2.0;
pub const STOP_DURATION_MAX_SECONDS: f64 = 2.8;
pub const STOP_DURATION_LONG_PROBABILITY: f64 = 0.01;
pub const STOP_DURATION_LONG_MIN_SECONDS: f64 = 4.0;
pub const STOP_DURATION_LONG_MAX_SECONDS: f64 = 10.0;
pub const STOP_DURATION_DAMAGE_THRESHOLD: f64 = 10.0;
pub const STOP_DURATION_DAMAGE_PENALTY_SECONDS: f64 = 10.0;

// DRS.
pub const DRS_ELIGIBLE_FROM_LAP: u16 = 3;
pub const DRS_GAP_THRESHOLD_SECONDS: f64 = 1.0;

// Overtakes.
pub const OVERTAKE_GAP_THRESHOLD_SECONDS: f64 = 0.2;
pub const OVERTAKE_SCORE_BASE: f64 = 20.0;
pub const OVERTAKE_SKILL_DELTA_WEIGHT: f64 = 0.5;
pub const OVERTAKE_SPEED_DELTA_WEIGHT: f64 = 2.0;
pub const OVERTAKE_DRS_BONUS: f64 = 30.0;
pub const OVERTAKE_TYRE_AGE_DELTA_WEIGHT: f64 = 1.5;
pub const OVERTAKE_DIFFICULTY_WEIGHT: f64 = 20.0;
pub const OVERTAKE_PROBABILITY_MIN: f64 = 0.05;
pub const OVERTAKE_PROBABILITY_MAX: f64 = 0.95;
pub const OVERTAKE_PROBABILITY_BASE: f64 = 0.20;
pub const OVERTAKE_PROBABILITY_SCORE_WEIGHT: f64 = 0.5;
pub const OVERTAKE_WILDCARD_PROBABILITY: f64 = 0.3;
pub const OVERTAKE_WILDCARD_FORCED_PROBABILITY: f64 = 0.5;
pub const OVERTAKE_SUCCESS_SPEED_BONUS: f64 = 5.0;
pub const OVERTAKE_FAILURE_PENALTY_PROBABILITY: f64 = 0.1;
pub const OVERTAKE_FAILURE_SPEED_PENALTY: f64 = 0.05;
pub const OVERTAKE_SWAP_MARGIN_METERS: f64 = 0.5;

// Positions, gaps, morale, spatial awareness.
pub const MIN_SPEED_FOR_GAP_DIVISION: f64 = 20.0;
pub const POSITION_GAIN_MORALE_DELTA: f64 = 10.0;
pub const POSITION_GAIN_CONCENTRATION_DELTA: f64 = -5.0;
pub const POSITION_LOSE_CONCENTRATION_DELTA: f64 = -10.0;

pub const DIRTY_AIR_GAP_THRESHOLD_SECONDS: f64 = 1.5;
pub const BATTLING_GAP_THRESHOLD_SECONDS: f64 = 0.4;
pub const BLUE_FLAG_GAP_THRESHOLD_SECONDS: f64 = 1.2;

pub const MORALE_BASELINE: f64 = 80.0;
pub const MORALE_RECOVERY_RATE: f64 = 0.01;
pub const MORALE_DIRTY_AIR_PENALTY_PER_SECOND: f64 = 0.5;
pub const MORALE_PRESSURE_FROM_BEHIND_GAIN_PER_SECOND: f64 = 0.2;
pub const MORALE_PRESSURE_FROM_BEHIND_GAP_THRESHOLD_SECONDS: f64 = 0.5;

pub const CONCENTRATION_BASE_RECOVERY_PER_SECOND: f64 = 5.0;
pub const CONCENTRATION_LAP1_SECTOR1_CHAOS_PER_SECOND: f64 = -10.0;
pub const CONCENTRATION_BATTLING_PENALTY_PER_SECOND: f64 = -2.0;
pub const CONCENTRATION_DIRTY_AIR_PENALTY_PER_SECOND: f64 = -1.0;

// Red-flag restart.
pub const RESTART_SAFETY_CAR_TIMER_SECONDS: f64 = 0.0;

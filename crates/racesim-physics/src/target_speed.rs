//! Target-speed assembly: a product of the sixteen multiplicative
//! factors of the target-speed model, plus the three speed-regime
//! overrides (VSC/SC caps, red flag).

use racesim_core::{
    grip_factor, Driver, RaceState, Rng, SafetyCarStatus, Sector, SectorType, Track, VehicleState,
};

use crate::constants::*;

pub struct AheadVehicle<'a> {
    pub driver: &'a Driver,
    pub speed: f64,
}

pub struct TargetSpeedInputs<'a> {
    pub driver: &'a Driver,
    pub vehicle: &'a VehicleState,
    pub sector: &'a Sector,
    pub track: &'a Track,
    pub race: &'a RaceState,
    pub water_depth: f64,
    pub ahead: Option<AheadVehicle<'a>>,
}

fn sector_base_speed(sector: &Sector) -> f64 {
    if let Some(max) = sector.max_speed {
        return max;
    }
    match sector.sector_type {
        SectorType::Straight => BASE_SPEED_STRAIGHT,
        SectorType::CornerHighSpeed => BASE_SPEED_CORNER_HIGH,
        SectorType::CornerMediumSpeed => BASE_SPEED_CORNER_MEDIUM,
        SectorType::CornerLowSpeed => BASE_SPEED_CORNER_LOW,
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Assembles the multiplicative target speed, then applies the
/// safety-car/red-flag overrides. `rng` is consumed exactly once for the
/// per-tick noise term, preserving the documented consumption order.
pub fn compute_target_speed(inputs: &TargetSpeedInputs, rng: &mut Rng) -> f64 {
    if matches!(inputs.race.safety_car, SafetyCarStatus::RedFlag) {
        return 0.0;
    }

    let driver = inputs.driver;
    let vehicle = inputs.vehicle;
    let sector = inputs.sector;

    let mut speed = sector_base_speed(sector);

    // 2. Driver sector-performance.
    let sector_perf = driver.performance_for_sector(sector.sector_type);
    speed *= 1.0 + (sector_perf - 90.0) * 0.0005;

    // 3. Global pace.
    speed *= 1.0 + (88.0 - driver.base_pace) * 0.0008;

    // 4. Morale.
    speed *= 1.0 + (vehicle.morale - 80.0) * 0.0005;

    // 5. Day-form condition.
    speed *= vehicle.condition;

    // 6. Temperature penalty.
    let temp_penalty = (inputs.race.track_temp - 25.0).abs()
        * 0.005
        * (1.0 - driver.performance.temperature_adaptability / 100.0);
    speed *= (1.0 - temp_penalty).max(0.0);

    // 7. Track difficulty penalty.
    let difficulty_penalty =
        inputs.track.track_difficulty * 0.08 * (1.0 - driver.skills.consistency / 100.0);
    speed *= (1.0 - difficulty_penalty).max(0.0);

    // 8. Tyre grip factor.
    let grip = grip_factor(vehicle.tyre_compound, vehicle.tyre_wear, inputs.water_depth);
    speed *= grip;

    // 9. Fuel load.
    speed *= 1.0 - (vehicle.fuel_load / 100.0) * 0.033;

    // 10. Pace mode / ERS mode.
    speed *= match vehicle.pace_mode {
        racesim_core::PaceMode::Aggressive => 1.015,
        racesim_core::PaceMode::Conservative => 0.985,
        racesim_core::PaceMode::Balanced => 1.0,
    };
    speed *= match vehicle.ers_mode {
        racesim_core::ErsMode::Deploy => 1.02,
        racesim_core::ErsMode::Harvest => 0.98,
        racesim_core::ErsMode::Balanced => 1.0,
    };

    // 11. DRS.
    if vehicle.drs_open {
        speed *= 1.0 + DRS_SPEED_BONUS;
    }

    // 12. Aero wake (slipstream / dirty air), only past lap 1 and never
    // for the leader.
    if vehicle.lap_count > 1 && vehicle.position != 1 {
        speed *= aero_wake_factor(sector.sector_type, vehicle.gap_to_ahead);
    }

    // 13. Battling blend.
    if vehicle.is_battling {
        if let Some(ahead) = &inputs.ahead {
            speed = battling_blend(speed, vehicle, driver, ahead, sector.sector_type);
        }
    }

    // 14. Blue flag.
    if vehicle.blue_flag {
        let compliance =
            (driver.personality.team_player + (100.0 - driver.personality.aggression)) / 200.0;
        speed *= 1.0 - BLUE_FLAG_MAX_SLOWDOWN * compliance;
    }

    // 15. Per-tick noise.
    speed *= 1.0 + noise_term(driver, sector.sector_type, inputs.race.safety_car, rng);

    // 16. Safety-car caps.
    speed = match inputs.race.safety_car {
        SafetyCarStatus::Vsc => speed.min(vehicle.speed * VSC_SPEED_RATIO).min(VSC_SPEED_CAP),
        SafetyCarStatus::Sc => safety_car_pace(vehicle.gap_to_ahead),
        _ => speed,
    };

    speed.max(0.0)
}

fn aero_wake_factor(sector_type: SectorType, gap_to_ahead: f64) -> f64 {
    match sector_type {
        SectorType::Straight => {
            let boost = SLIPSTREAM_MAX_BOOST
                * (1.0 - gap_to_ahead / SLIPSTREAM_FADE_GAP_SECONDS).clamp(0.0, 1.0);
            1.0 + boost
        }
        corner => {
            let base_penalty = match corner {
                SectorType::CornerHighSpeed => DIRTY_AIR_PENALTY_HIGH_SPEED,
                SectorType::CornerMediumSpeed => DIRTY_AIR_PENALTY_MEDIUM_SPEED,
                SectorType::CornerLowSpeed => DIRTY_AIR_PENALTY_LOW_SPEED,
                SectorType::Straight => unreachable!(),
            };
            let penalty =
                base_penalty * (1.0 - gap_to_ahead / DIRTY_AIR_FADE_GAP_SECONDS).clamp(0.0, 1.0);
            1.0 - penalty
        }
    }
}

fn battling_blend(
    own_target: f64,
    vehicle: &VehicleState,
    driver: &Driver,
    ahead: &AheadVehicle,
    sector_type: SectorType,
) -> f64 {
    let stuck_speed = ahead.speed * BATTLING_STUCK_SPEED_FACTOR;

    let is_corner = !matches!(sector_type, SectorType::Straight);
    let intensity = (1.0 - vehicle.gap_to_ahead / 0.4).clamp(0.0, 1.0);
    let corner_penalty = if is_corner {
        BATTLING_CORNER_PENALTY_MAX * intensity
    } else {
        0.0
    };
    let free_speed = own_target * (1.0 - corner_penalty);

    let pace_delta = ahead.driver.base_pace - driver.base_pace;
    let blend = sigmoid(
        pace_delta + 2.5 * driver.personality.aggression + 1.5 * driver.skills.racecraft - 3.0,
    );

    blend * free_speed + (1.0 - blend) * stuck_speed
}

fn noise_term(driver: &Driver, sector_type: SectorType, safety_car: SafetyCarStatus, rng: &mut Rng) -> f64 {
    let mut amplitude = NOISE_BASE_AMPLITUDE * (1.0 - driver.skills.consistency / 100.0 + NOISE_CONSISTENCY_OFFSET);
    if matches!(sector_type, SectorType::CornerLowSpeed) {
        amplitude *= NOISE_LOW_SPEED_CORNER_MULTIPLIER;
    }
    if matches!(safety_car, SafetyCarStatus::Vsc | SafetyCarStatus::Sc) {
        amplitude *= NOISE_SAFETY_CAR_REDUCTION;
    }
    rng.range(-amplitude, amplitude)
}

fn safety_car_pace(gap_to_ahead: f64) -> f64 {
    if gap_to_ahead < SC_BUNCH_GAP_THRESHOLD_SECONDS {
        SC_PACE_SPEED * SC_BUNCH_MULTIPLIER
    } else if gap_to_ahead > SC_CATCH_UP_GAP_THRESHOLD_SECONDS {
        SC_PACE_SPEED * SC_CATCH_UP_MULTIPLIER
    } else {
        SC_PACE_SPEED
    }
}

//! Per-tick incident sampling, severity scoring, and safety-car timer
//! control.

use racesim_core::{Driver, DriverId, RaceState, Rng, SafetyCarStatus, SectorType, Track};
use std::collections::HashMap;

use crate::constants::*;

fn incident_risk_multiplier(
    vehicle: &racesim_core::VehicleState,
    driver: &Driver,
    track: &Track,
    rain_intensity: f64,
) -> f64 {
    let mut multiplier = 1.0;

    multiplier *= 1.0
        + (INCIDENT_CONCENTRATION_MAX_MULTIPLIER - 1.0) * (1.0 - vehicle.concentration / 100.0);

    if vehicle.is_battling {
        multiplier *= INCIDENT_BATTLING_MULTIPLIER;
        if driver.personality.aggression > INCIDENT_AGGRESSIVE_ATTACKER_THRESHOLD {
            multiplier *= INCIDENT_AGGRESSIVE_ATTACKER_MULTIPLIER;
        }
    }
    if vehicle.in_dirty_air {
        multiplier *= INCIDENT_DIRTY_AIR_MULTIPLIER;
    }
    if vehicle.tyre_wear > INCIDENT_TYRE_WEAR_ESCALATION_THRESHOLD {
        let excess = (vehicle.tyre_wear - INCIDENT_TYRE_WEAR_ESCALATION_THRESHOLD) / 30.0;
        multiplier *= 1.0 + INCIDENT_TYRE_WEAR_MAX_MULTIPLIER_ADD * excess.clamp(0.0, 1.0);
    }

    let is_rain_compound = matches!(
        vehicle.tyre_compound,
        racesim_core::TyreCompound::Intermediate | racesim_core::TyreCompound::Wet
    );
    if !is_rain_compound && rain_intensity > INCIDENT_WRONG_COMPOUND_RAIN_THRESHOLD {
        multiplier *= INCIDENT_WRONG_COMPOUND_MULTIPLIER;
    }
    if rain_intensity > INCIDENT_RAIN_ON_RAIN_THRESHOLD {
        multiplier *= INCIDENT_RAIN_ON_RAIN_MULTIPLIER;
    }

    multiplier *= 1.0
        + (INCIDENT_CONSISTENCY_MAX_MULTIPLIER - 1.0) * (1.0 - driver.skills.consistency / 100.0);

    if vehicle.stress > INCIDENT_STRESS_THRESHOLD
        && driver.personality.stress_resistance < INCIDENT_STRESS_RESISTANCE_THRESHOLD
    {
        multiplier *= INCIDENT_STRESS_MULTIPLIER;
    }

    multiplier *= 1.0 + INCIDENT_TRACK_DIFFICULTY_MAX_MULTIPLIER_ADD * track.track_difficulty;

    multiplier
}

fn severity_score(
    vehicle: &racesim_core::VehicleState,
    track: &Track,
    rng: &mut Rng,
) -> f64 {
    let speed_term = SEVERITY_SPEED_WEIGHT * (vehicle.speed / SEVERITY_MAX_SPEED).clamp(0.0, 1.0);
    let sector_weight = match track.sector_at(vehicle.distance_on_lap).sector_type {
        SectorType::CornerLowSpeed => SEVERITY_SECTOR_LOW_SPEED_WEIGHT,
        SectorType::CornerMediumSpeed => SEVERITY_SECTOR_MEDIUM_SPEED_WEIGHT,
        SectorType::CornerHighSpeed => SEVERITY_SECTOR_HIGH_SPEED_WEIGHT,
        SectorType::Straight => SEVERITY_SECTOR_STRAIGHT_WEIGHT,
    };
    let random_term = rng.range(0.0, SEVERITY_RANDOM_MAX);
    speed_term + sector_weight + random_term
}

/// Samples incidents for every active vehicle this tick, applies DNF and
/// damage effects, and escalates `state.safety_car` when a new incident's
/// severity calls for intervention. Only escalates (`None` → `Vsc`/`Sc` →
/// `RedFlag`), never downgrades — de-escalation is the timer's job.
pub fn update_incidents(
    dt: f64,
    track: &Track,
    drivers: &HashMap<DriverId, Driver>,
    rng: &mut Rng,
    state: &mut RaceState,
) {
    let order = state.driver_order.clone();
    let rain_intensity = state.rain_intensity_level;

    for id in &order {
        let Some(driver) = drivers.get(id) else { continue };
        let risk = {
            let vehicle = &state.vehicles[id];
            if vehicle.is_retired() || vehicle.is_in_pit || vehicle.has_finished {
                continue;
            }
            INCIDENT_BASE_RISK_PER_SECOND
                * incident_risk_multiplier(vehicle, driver, track, rain_intensity)
        };

        if !rng.chance((risk * dt).clamp(0.0, 1.0)) {
            continue;
        }

        let severity = {
            let vehicle = &state.vehicles[id];
            severity_score(vehicle, track, rng)
        };

        if severity >= SEVERITY_RED_FLAG_THRESHOLD {
            let vehicle = state.vehicles.get_mut(id).unwrap();
            vehicle.damage = FULL_DAMAGE;
            escalate_safety_car(state, SafetyCarStatus::RedFlag, rng);
        } else if severity >= SEVERITY_SC_THRESHOLD {
            let vehicle = state.vehicles.get_mut(id).unwrap();
            if rng.chance(SC_DNF_PROBABILITY) {
                vehicle.damage = FULL_DAMAGE;
            } else {
                vehicle.damage = (vehicle.damage + rng.range(SC_DAMAGE_MIN, SC_DAMAGE_MAX)).min(FULL_DAMAGE);
            }
            escalate_safety_car(state, SafetyCarStatus::Sc, rng);
        } else {
            let vehicle = state.vehicles.get_mut(id).unwrap();
            vehicle.damage = (vehicle.damage + rng.range(VSC_DAMAGE_MIN, VSC_DAMAGE_MAX)).min(FULL_DAMAGE);
            vehicle.speed *= VSC_SPEED_MULTIPLIER;
            escalate_safety_car(state, SafetyCarStatus::Vsc, rng);
        }

        // Only one incident resolves per tick.
        break;
    }
}

fn escalate_safety_car(state: &mut RaceState, candidate: SafetyCarStatus, rng: &mut Rng) {
    let rank = |s: SafetyCarStatus| match s {
        SafetyCarStatus::None => 0,
        SafetyCarStatus::Vsc => 1,
        SafetyCarStatus::Sc => 2,
        SafetyCarStatus::RedFlag => 3,
    };
    if rank(candidate) <= rank(state.safety_car) {
        return;
    }
    state.safety_car = candidate;
    state.safety_car_timer = match candidate {
        SafetyCarStatus::Vsc => rng.range(VSC_TIMER_MIN_SECONDS, VSC_TIMER_MAX_SECONDS),
        SafetyCarStatus::Sc => rng.range(SC_TIMER_MIN_SECONDS, SC_TIMER_MAX_SECONDS),
        SafetyCarStatus::RedFlag => rng.range(RED_FLAG_TIMER_MIN_SECONDS, RED_FLAG_TIMER_MAX_SECONDS),
        SafetyCarStatus::None => 0.0,
    };
}

/// Counts the current safety-car/red-flag timer down and reverts to
/// racing conditions on expiry, re-gridding the field first if the period
/// being cleared was a red flag.
pub fn update_safety_car_timer(dt: f64, track: &Track, state: &mut RaceState) {
    if state.safety_car == SafetyCarStatus::None {
        return;
    }
    state.safety_car_timer -= dt;
    if state.safety_car_timer > 0.0 {
        return;
    }
    if state.safety_car == SafetyCarStatus::RedFlag {
        crate::init::red_flag_restart(track, state);
    }
    state.safety_car = SafetyCarStatus::None;
    state.safety_car_timer = RESTART_SAFETY_CAR_TIMER_SECONDS;
}

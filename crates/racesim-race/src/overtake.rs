//! Overtake attempt resolution between physically adjacent cars.

use std::collections::HashMap;

use racesim_core::{Driver, DriverId, RaceState, Track, MAX_SUBSTEP_SECONDS};

use crate::constants::*;
use crate::positions::physical_gap_ahead;

fn attempt_score(
    attacker: &racesim_core::VehicleState,
    attacker_driver: &Driver,
    defender: &racesim_core::VehicleState,
    defender_driver: &Driver,
    track: &Track,
) -> f64 {
    let mut score = OVERTAKE_SCORE_BASE
        + OVERTAKE_SKILL_DELTA_WEIGHT
            * (attacker_driver.skills.racecraft - defender_driver.skills.racecraft)
        + OVERTAKE_SPEED_DELTA_WEIGHT * (attacker.speed - defender.speed)
        + OVERTAKE_TYRE_AGE_DELTA_WEIGHT
            * (defender.tyre_age_laps as f64 - attacker.tyre_age_laps as f64)
        - OVERTAKE_DIFFICULTY_WEIGHT * track.overtaking_difficulty;
    if attacker.drs_open {
        score += OVERTAKE_DRS_BONUS;
    }
    score
}

/// Resolves one attempt per physically-adjacent pair that is within
/// attacking range, per §4.6. Chases racecraft, closing speed, DRS and
/// tyre-age deltas into a success probability, with a wildcard chance of
/// a result independent of the computed odds (a driver seizing or
/// fluffing an audacious move). Successes nudge the pass through on the
/// circular strip and reward the attacker with a brief speed bump;
/// failures sometimes cost the attacker a locked-wheel speed penalty.
pub fn resolve_overtakes(
    track: &Track,
    drivers: &HashMap<DriverId, Driver>,
    rng: &mut racesim_core::Rng,
    state: &mut RaceState,
) {
    if state.is_safety_car_period() {
        return;
    }

    let mut order: Vec<DriverId> = state
        .vehicles
        .iter()
        .filter(|(_, v)| !v.is_retired() && !v.is_in_pit && !v.has_finished)
        .map(|(id, _)| id.clone())
        .collect();
    if order.len() < 2 {
        return;
    }
    order.sort_by(|a, b| {
        state.vehicles[b]
            .distance_on_lap
            .partial_cmp(&state.vehicles[a].distance_on_lap)
            .unwrap()
    });

    let n = order.len();
    let distances: Vec<f64> = order.iter().map(|id| state.vehicles[id].distance_on_lap).collect();
    let speeds: Vec<f64> = order.iter().map(|id| state.vehicles[id].speed).collect();

    for i in 0..n {
        let ahead_idx = (i + n - 1) % n;
        if ahead_idx == i {
            continue;
        }
        let gap = physical_gap_ahead(distances[i], distances[ahead_idx], track.total_distance, speeds[i]);
        if gap >= OVERTAKE_GAP_THRESHOLD_SECONDS {
            continue;
        }

        let attacker_id = order[i].clone();
        let defender_id = order[ahead_idx].clone();
        let (Some(attacker_driver), Some(defender_driver)) =
            (drivers.get(&attacker_id), drivers.get(&defender_id))
        else {
            continue;
        };

        let score = attempt_score(
            &state.vehicles[&attacker_id],
            attacker_driver,
            &state.vehicles[&defender_id],
            defender_driver,
            track,
        );
        let base_probability = (OVERTAKE_PROBABILITY_BASE
            + OVERTAKE_PROBABILITY_SCORE_WEIGHT * (score / 100.0))
            .clamp(OVERTAKE_PROBABILITY_MIN, OVERTAKE_PROBABILITY_MAX);

        // `base_probability` and the wildcard-forced value are both
        // per-second; convert to this substep's per-frame probability.
        let success = if rng.chance(OVERTAKE_WILDCARD_PROBABILITY) {
            rng.chance(OVERTAKE_WILDCARD_FORCED_PROBABILITY * MAX_SUBSTEP_SECONDS)
        } else {
            rng.chance(base_probability * MAX_SUBSTEP_SECONDS)
        };

        if success {
            let defender_distance = distances[ahead_idx];
            let attacker = state.vehicles.get_mut(&attacker_id).unwrap();
            attacker.distance_on_lap =
                (defender_distance + OVERTAKE_SWAP_MARGIN_METERS).rem_euclid(track.total_distance);
            attacker.speed += OVERTAKE_SUCCESS_SPEED_BONUS;

            let attacker_distance = distances[i];
            let defender = state.vehicles.get_mut(&defender_id).unwrap();
            defender.distance_on_lap =
                (attacker_distance - OVERTAKE_SWAP_MARGIN_METERS).rem_euclid(track.total_distance);
        } else if rng.chance(OVERTAKE_FAILURE_PENALTY_PROBABILITY) {
            let attacker = state.vehicles.get_mut(&attacker_id).unwrap();
            attacker.speed *= 1.0 - OVERTAKE_FAILURE_SPEED_PENALTY;
        }
    }
}

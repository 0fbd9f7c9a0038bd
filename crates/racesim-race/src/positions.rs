//! Race classification (lap-ordered positions and gaps) and physical
//! spatial awareness (lap-agnostic proximity: dirty air, battling, blue
//! flags). Two distinct orderings, per §4.6.

use racesim_core::{DriverId, RaceState, Track};

use crate::constants::*;

/// Re-sorts `driver_order` by `(lapCount desc, distanceOnLap desc)`,
/// assigns 1-based positions, and updates morale/concentration on change.
/// Also recomputes `gapToAhead`/`gapToLeader` from race-accumulated
/// distance, and advances `state.current_lap` to the leader's lap count.
pub fn update_positions(track: &Track, state: &mut RaceState) {
    let mut order: Vec<DriverId> = state.vehicles.keys().cloned().collect();
    order.sort_by(|a, b| {
        let va = &state.vehicles[a];
        let vb = &state.vehicles[b];
        vb.race_order_key()
            .partial_cmp(&va.race_order_key())
            .unwrap()
    });
    state.driver_order = order.clone();

    let race_distances: Vec<f64> = order
        .iter()
        .map(|id| state.vehicles[id].race_distance(track.total_distance))
        .collect();
    let leader_distance = race_distances.first().copied().unwrap_or(0.0);

    for (index, id) in order.iter().enumerate() {
        let own_distance = race_distances[index];
        let ahead_distance = if index > 0 {
            race_distances[index - 1]
        } else {
            own_distance
        };

        let vehicle = state.vehicles.get_mut(id).unwrap();
        let new_position = (index + 1) as u16;
        if new_position != vehicle.position {
            vehicle.last_position = vehicle.position;
            if new_position < vehicle.position {
                vehicle.morale = (vehicle.morale + POSITION_GAIN_MORALE_DELTA).clamp(0.0, 100.0);
                vehicle.concentration =
                    (vehicle.concentration + POSITION_GAIN_CONCENTRATION_DELTA).clamp(0.0, 100.0);
            } else {
                vehicle.morale = (vehicle.morale - POSITION_GAIN_MORALE_DELTA).clamp(0.0, 100.0);
                vehicle.concentration =
                    (vehicle.concentration + POSITION_LOSE_CONCENTRATION_DELTA).clamp(0.0, 100.0);
            }
        }
        vehicle.position = new_position;

        let speed_floor = vehicle.speed.max(MIN_SPEED_FOR_GAP_DIVISION);
        vehicle.gap_to_ahead = if index > 0 {
            (ahead_distance - own_distance) / speed_floor
        } else {
            0.0
        };
        vehicle.gap_to_leader = (leader_distance - own_distance) / speed_floor;
    }

    if let Some(leader_id) = order.first() {
        state.current_lap = state.vehicles[leader_id].lap_count;
    }
}

/// Time gap, in seconds, from `self` to the car physically ahead of it on
/// the circular track strip (lap-agnostic), using `self`'s own speed.
pub(crate) fn physical_gap_ahead(distance_self: f64, distance_ahead: f64, total_distance: f64, speed_self: f64) -> f64 {
    let delta = (distance_ahead - distance_self).rem_euclid(total_distance);
    delta / speed_self.max(MIN_SPEED_FOR_GAP_DIVISION)
}

/// Pure physical proximity pass, independent of lap count: sorts by
/// `distanceOnLap` on the circular strip and derives `inDirtyAir`,
/// `isBattling`, and `blueFlag` from the time gap to the physically
/// adjacent car.
pub fn update_spatial_awareness(track: &Track, state: &mut RaceState) {
    let mut order: Vec<DriverId> = state
        .vehicles
        .iter()
        .filter(|(_, v)| !v.is_retired())
        .map(|(id, _)| id.clone())
        .collect();
    if order.len() < 2 {
        for vehicle in state.vehicles.values_mut() {
            vehicle.in_dirty_air = false;
            vehicle.is_battling = false;
            vehicle.blue_flag = false;
        }
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
    let laps: Vec<u16> = order.iter().map(|id| state.vehicles[id].lap_count).collect();

    let mut gap_ahead = vec![0.0; n];
    for i in 0..n {
        let ahead_idx = (i + n - 1) % n;
        gap_ahead[i] = physical_gap_ahead(distances[i], distances[ahead_idx], track.total_distance, speeds[i]);
    }

    for (i, id) in order.iter().enumerate() {
        let gap = gap_ahead[i];
        let vehicle = state.vehicles.get_mut(id).unwrap();
        vehicle.in_dirty_air = gap < DIRTY_AIR_GAP_THRESHOLD_SECONDS;
        vehicle.is_battling = gap < BATTLING_GAP_THRESHOLD_SECONDS;
    }

    // Blue flags: car `i` shows blue flags when the car physically behind
    // it (index `i+1` in this descending-distance ordering) has completed
    // more laps and is within the blue-flag gap threshold.
    let mut blue_flags = vec![false; n];
    for behind in 0..n {
        let ahead = (behind + n - 1) % n;
        if laps[behind] > laps[ahead] && gap_ahead[behind] < BLUE_FLAG_GAP_THRESHOLD_SECONDS {
            blue_flags[ahead] = true;
        }
    }
    for (i, id) in order.iter().enumerate() {
        state.vehicles.get_mut(id).unwrap().blue_flag = blue_flags[i];
    }
}

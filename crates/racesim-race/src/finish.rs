//! Checkered-flag and race-finish detection.

use racesim_core::{RaceState, RaceStatus};

/// Raises the checkered flag once the leader completes the race
/// distance, records the first vehicle to cross the line as winner, and
/// moves the race to `Finished` once every surviving vehicle has either
/// finished or retired.
pub fn update_finish(state: &mut RaceState) {
    if state.status == RaceStatus::Finished {
        return;
    }

    if !state.checkered_flag {
        if let Some(leader) = state.leader() {
            if leader.lap_count >= state.total_laps {
                state.checkered_flag = true;
            }
        }
    }

    if !state.checkered_flag {
        return;
    }

    if state.winner_id.is_none() {
        if let Some(winner_id) = state
            .driver_order
            .iter()
            .find(|id| state.vehicles[*id].has_finished)
        {
            state.winner_id = Some(winner_id.clone());
        }
    }

    let all_done = state.vehicles.values().all(|v| v.has_finished || v.is_retired());
    if all_done {
        state.status = RaceStatus::Finished;
    }
}

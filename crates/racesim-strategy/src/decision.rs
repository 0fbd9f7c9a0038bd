//! In-race pit decision, forecast override, and release-time compound
//! choice.

use racesim_core::{Driver, RaceState, Rng, Track, TyreCompound, VehicleState};

use crate::constants::*;

fn is_slick(compound: TyreCompound) -> bool {
    matches!(compound, TyreCompound::Soft | TyreCompound::Medium | TyreCompound::Hard)
}

fn is_rain_compound(compound: TyreCompound) -> bool {
    matches!(compound, TyreCompound::Intermediate | TyreCompound::Wet)
}

fn ideal_compound_matches(current: TyreCompound, forecast_rain: f64) -> bool {
    if forecast_rain > RELEASE_WET_RAIN_THRESHOLD {
        matches!(current, TyreCompound::Wet)
    } else if forecast_rain > RELEASE_INTERMEDIATE_RAIN_THRESHOLD {
        matches!(current, TyreCompound::Intermediate)
    } else {
        is_slick(current)
    }
}

/// Evaluates whether `vehicle` should box this lap, per §4.5's in-race
/// decision rule. Only acts within the 50-1000 m window before pit entry,
/// and only while the vehicle hasn't already been told to pit.
pub fn evaluate_pit_decision(
    vehicle: &mut VehicleState,
    driver: &Driver,
    track: &Track,
    race: &RaceState,
    rng: &mut Rng,
) {
    if vehicle.is_in_pit || vehicle.box_this_lap {
        return;
    }

    let distance_to_entry =
        (track.pit_lane.entry_distance - vehicle.distance_on_lap).rem_euclid(track.total_distance);
    if !(PIT_DECISION_WINDOW_MIN_METERS..=PIT_DECISION_WINDOW_MAX_METERS).contains(&distance_to_entry)
    {
        return;
    }

    let rain = race.rain_intensity_level;
    let mismatch = (is_slick(vehicle.tyre_compound) && rain > SLICK_IN_RAIN_MISMATCH_THRESHOLD)
        || (is_rain_compound(vehicle.tyre_compound) && rain < RAIN_COMPOUND_IN_DRY_MISMATCH_THRESHOLD);
    let damaged = vehicle.damage > DAMAGE_PIT_THRESHOLD;
    let worn = vehicle.tyre_wear > TYRE_WEAR_PIT_THRESHOLD;

    let mut should_box = mismatch || damaged || worn;

    if !should_box {
        if let Some(stint) = vehicle.current_stint() {
            let lap_delta = (race.current_lap as i32 - stint.end_lap as i32).abs();
            if lap_delta <= PLANNED_STOP_WINDOW_LAPS {
                let proximity = 1.0 - lap_delta as f64 / (PLANNED_STOP_WINDOW_LAPS as f64 + 1.0);
                let mut probability = PLANNED_STOP_BASE_PROBABILITY
                    + PLANNED_STOP_PROXIMITY_WEIGHT * proximity.clamp(0.0, 1.0)
                    + PLANNED_STOP_WEAR_WEIGHT * (vehicle.tyre_wear / 100.0);
                if driver.personality.aggression > UNDERCUT_AGGRESSION_THRESHOLD {
                    probability += UNDERCUT_PROBABILITY_BUMP;
                }
                should_box = rng.chance(probability.clamp(0.0, 1.0));
            }
        }
    }

    if !should_box {
        return;
    }

    let forecast_rain = racesim_weather::interpolate_forecast(
        &race.weather_forecast,
        race.elapsed_time + FORECAST_OVERRIDE_HORIZON_SECONDS,
    )
    .map(|(_, rain)| rain)
    .unwrap_or(rain);

    let forecast_says_stay_out = ideal_compound_matches(vehicle.tyre_compound, forecast_rain)
        && !(is_slick(vehicle.tyre_compound) && rain > FORECAST_OVERRIDE_SLICK_RAIN_THRESHOLD);

    vehicle.box_this_lap = !forecast_says_stay_out;
}

/// Compound chosen on pit release, per §4.5.
pub fn compound_on_release(vehicle: &VehicleState, race: &RaceState) -> TyreCompound {
    let rain = race.rain_intensity_level;
    if rain > RELEASE_WET_RAIN_THRESHOLD {
        return TyreCompound::Wet;
    }
    if rain > RELEASE_INTERMEDIATE_RAIN_THRESHOLD {
        return TyreCompound::Intermediate;
    }
    if let Some(stint) = vehicle.plan.get(vehicle.current_stint_index + 1) {
        return stint.compound;
    }
    let laps_remaining = race.remaining_laps();
    if laps_remaining < RELEASE_FALLBACK_SOFT_LAPS_REMAINING {
        TyreCompound::Soft
    } else if laps_remaining < RELEASE_FALLBACK_MEDIUM_LAPS_REMAINING {
        TyreCompound::Medium
    } else {
        TyreCompound::Hard
    }
}

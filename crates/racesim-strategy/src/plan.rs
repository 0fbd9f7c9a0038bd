//! Pre-race stint-plan generation.

use racesim_core::{Driver, Rng, StrategyStint, TyreCompound};

use crate::constants::*;

/// Effective tyre life in laps: base compound life divided by track
/// degradation, tyre-management skill, and a per-compound jitter.
fn effective_life(base_laps: f64, degradation_factor: f64, tyre_management: f64, rng: &mut Rng) -> f64 {
    let jitter = rng.range(LIFE_JITTER_MIN, LIFE_JITTER_MAX);
    let management_factor = 1.0 - (tyre_management - 50.0) / 200.0;
    base_laps / (degradation_factor.max(0.01) * management_factor.max(0.01) * jitter)
}

fn build_sequence(
    compounds: &[TyreCompound],
    lives: &[(TyreCompound, f64)],
    total_laps: u16,
    rng: &mut Rng,
) -> Vec<StrategyStint> {
    let life_of = |c: TyreCompound| {
        lives
            .iter()
            .find(|(k, _)| *k == c)
            .map(|(_, v)| *v)
            .unwrap_or(20.0)
    };

    let mut stints = Vec::with_capacity(compounds.len());
    let mut start_lap: u16 = 1;
    for (i, &compound) in compounds.iter().enumerate() {
        let is_last = i + 1 == compounds.len();
        let end_lap = if is_last || start_lap >= total_laps.saturating_sub(1) {
            total_laps
        } else {
            let life = life_of(compound);
            let fraction = rng.range(STOP_FRACTION_MIN, STOP_FRACTION_MAX);
            let jitter = rng.range_int(-STOP_LAP_JITTER_MAX, STOP_LAP_JITTER_MAX) as f64;
            let raw = start_lap as f64 + life * fraction + jitter;
            (raw.round() as i64).clamp(start_lap as i64 + 1, total_laps as i64 - 1) as u16
        };
        stints.push(StrategyStint {
            compound,
            start_lap,
            end_lap,
            pace_mode: None,
        });
        if end_lap >= total_laps {
            break;
        }
        start_lap = end_lap + 1;
    }
    stints
}

/// Picks one of the four candidate stint sequences, weighted by the
/// driver's aggression, and materializes it against `total_laps`.
fn dry_plan(driver: &Driver, total_laps: u16, degradation_factor: f64, rng: &mut Rng) -> Vec<StrategyStint> {
    use TyreCompound::*;

    let lives = [
        (Soft, effective_life(SOFT_BASE_LIFE_LAPS, degradation_factor, driver.skills.tyre_management, rng)),
        (Medium, effective_life(MEDIUM_BASE_LIFE_LAPS, degradation_factor, driver.skills.tyre_management, rng)),
        (Hard, effective_life(HARD_BASE_LIFE_LAPS, degradation_factor, driver.skills.tyre_management, rng)),
    ];

    let conservative: [&[TyreCompound]; 2] = [&[Soft, Hard], &[Medium, Hard]];
    let aggressive: [&[TyreCompound]; 2] = [&[Soft, Medium, Medium], &[Soft, Medium, Soft]];

    let aggression = driver.personality.aggression;
    let aggressive_probability = if aggression > 50.0 {
        AGGRESSIVE_PLAN_WEIGHT
    } else {
        1.0 - AGGRESSIVE_PLAN_WEIGHT
    };

    let candidates = if rng.chance(aggressive_probability) {
        &aggressive
    } else {
        &conservative
    };
    let chosen = if rng.chance(0.5) { candidates[0] } else { candidates[1] };

    build_sequence(chosen, &lives, total_laps, rng)
}

fn wet_plan(total_laps: u16) -> Vec<StrategyStint> {
    let wet_laps = ((total_laps as f64 * WET_STINT_LAP_FRACTION).round() as u16).clamp(1, total_laps.saturating_sub(1).max(1));
    vec![
        StrategyStint {
            compound: TyreCompound::Wet,
            start_lap: 1,
            end_lap: wet_laps,
            pace_mode: None,
        },
        StrategyStint {
            compound: TyreCompound::Intermediate,
            start_lap: wet_laps + 1,
            end_lap: total_laps,
            pace_mode: None,
        },
    ]
}

/// Generates the pre-race stint plan per §4.5: a wet→intermediate split
/// when the track's rain probability is high, otherwise a weighted pick
/// among four dry candidate sequences.
pub fn generate_pre_race_plan(
    driver: &Driver,
    rain_probability: f64,
    total_laps: u16,
    degradation_factor: f64,
    rng: &mut Rng,
) -> Vec<StrategyStint> {
    if rain_probability > RAIN_PROBABILITY_WET_PLAN_THRESHOLD {
        wet_plan(total_laps)
    } else {
        dry_plan(driver, total_laps, degradation_factor, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use racesim_core::{DriverId, PerformanceScores, PersonalityScores, SkillScores};

    fn driver(aggression: f64, tyre_management: f64) -> Driver {
        Driver::new(
            DriverId::new("x").unwrap(),
            "X",
            "Team",
            "#fff",
            86.0,
            SkillScores {
                racecraft: 80.0,
                consistency: 80.0,
                tyre_management,
                wet_weather: 80.0,
            },
            PerformanceScores {
                cornering_high: 85.0,
                cornering_medium: 85.0,
                cornering_low: 85.0,
                straight: 85.0,
                temperature_adaptability: 80.0,
            },
            PersonalityScores {
                aggression,
                stress_resistance: 70.0,
                team_player: 70.0,
            },
            80.0,
            80.0,
        )
        .unwrap()
    }

    #[test]
    fn wet_plan_used_above_rain_probability_threshold() {
        let drv = driver(50.0, 70.0);
        let mut rng = Rng::new(1);
        let plan = generate_pre_race_plan(&drv, 0.8, 50, 1.0, &mut rng);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].compound, TyreCompound::Wet);
        assert_eq!(plan[1].compound, TyreCompound::Intermediate);
        assert_eq!(plan[1].end_lap, 50);
    }

    #[test]
    fn dry_plan_end_laps_are_monotonic_and_within_race() {
        let drv = driver(80.0, 60.0);
        let mut rng = Rng::new(7);
        let plan = generate_pre_race_plan(&drv, 0.1, 50, 1.0, &mut rng);
        assert!(!plan.is_empty());
        assert_eq!(plan.last().unwrap().end_lap, 50);
        let mut previous_end = 0u16;
        for stint in &plan {
            assert!(stint.start_lap > previous_end);
            assert!(stint.end_lap >= stint.start_lap);
            previous_end = stint.end_lap;
        }
    }

    #[test]
    fn plan_starts_on_lap_one() {
        let drv = driver(20.0, 80.0);
        let mut rng = Rng::new(3);
        let plan = generate_pre_race_plan(&drv, 0.1, 55, 1.1, &mut rng);
        assert_eq!(plan.first().unwrap().start_lap, 1);
    }
}

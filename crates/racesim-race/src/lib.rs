//! Race initialization and the per-tick race-logic phases that run ahead
//! of per-vehicle strategy and physics: safety car, incidents, pit-stop
//! movement, DRS gating, overtake attempts, positions, morale, spatial
//! awareness, and finish detection.

use std::collections::HashMap;

use racesim_core::{Driver, DriverId, RaceState, Rng, Track};

pub mod constants;
pub mod drs;
pub mod finish;
pub mod incidents;
pub mod init;
pub mod morale;
pub mod overtake;
pub mod pit;
pub mod positions;

pub use init::{initialize_race, red_flag_restart};

#[derive(Debug, Default, Clone, Copy)]
pub struct RaceLogicSystem;

impl RaceLogicSystem {
    pub fn new() -> Self {
        Self
    }

    /// Runs every race-logic phase once, in the fixed order documented
    /// above. Must run before `StrategySystem`/`PhysicsSystem` touch the
    /// same tick, since pit release and overtake outcomes feed directly
    /// into this tick's target-speed and pit-decision inputs.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        dt: f64,
        track: &Track,
        drivers: &HashMap<DriverId, Driver>,
        rng: &mut Rng,
        state: &mut RaceState,
    ) {
        incidents::update_safety_car_timer(dt, track, state);
        incidents::update_incidents(dt, track, drivers, rng, state);
        pit::update_pit_stops(dt, track, rng, state);
        drs::update_drs(track, state);
        overtake::resolve_overtakes(track, drivers, rng, state);
        positions::update_positions(track, state);
        morale::update_morale_and_concentration(dt, state);
        positions::update_spatial_awareness(track, state);
        finish::update_finish(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use racesim_core::{
        PerformanceScores, PersonalityScores, PitLane, Sector, SectorType, SkillScores, TrackId,
        WeatherParams,
    };

    fn driver(id: &str) -> Driver {
        Driver::new(
            DriverId::new(id).unwrap(),
            id,
            "Team",
            "#fff",
            86.0,
            SkillScores {
                racecraft: 80.0,
                consistency: 80.0,
                tyre_management: 80.0,
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
                aggression: 50.0,
                stress_resistance: 70.0,
                team_player: 70.0,
            },
            80.0,
            80.0,
        )
        .unwrap()
    }

    fn track() -> Track {
        Track::new(
            TrackId::new("t").unwrap(),
            "T",
            1000.0,
            5,
            vec![Sector {
                id: 1,
                name: "S1".into(),
                start_distance: 0.0,
                end_distance: 1000.0,
                sector_type: SectorType::Straight,
                difficulty: 0.2,
                max_speed: None,
            }],
            vec![],
            PitLane {
                entry_distance: 900.0,
                exit_distance: 10.0,
                speed_limit: 20.0,
                stop_time: None,
            },
            WeatherParams {
                volatility: 0.2,
                rain_probability: 0.1,
            },
            20.0,
        )
        .unwrap()
    }

    #[test]
    fn full_tick_on_a_fresh_grid_does_not_panic_and_stays_deterministic() {
        let trk = track();
        let drivers_list = vec![driver("a"), driver("b"), driver("c")];
        let mut drivers = HashMap::new();
        for d in &drivers_list {
            drivers.insert(d.id.clone(), d.clone());
        }

        let mut rng1 = Rng::new(42);
        let mut state1 = initialize_race(&trk, &drivers_list, 5, &mut rng1).unwrap();
        state1.status = racesim_core::RaceStatus::Racing;
        let system = RaceLogicSystem::new();
        for _ in 0..50 {
            system.update(0.1, &trk, &drivers, &mut rng1, &mut state1);
        }

        let mut rng2 = Rng::new(42);
        let mut state2 = initialize_race(&trk, &drivers_list, 5, &mut rng2).unwrap();
        state2.status = racesim_core::RaceStatus::Racing;
        for _ in 0..50 {
            system.update(0.1, &trk, &drivers, &mut rng2, &mut state2);
        }

        for id in &state1.driver_order {
            assert_eq!(state1.vehicles[id].position, state2.vehicles[id].position);
            assert_eq!(state1.vehicles[id].distance_on_lap, state2.vehicles[id].distance_on_lap);
        }
    }
}

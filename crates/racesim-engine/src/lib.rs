//! Top-level tick orchestrator: owns the shared RNG and dispatches
//! Weather, RaceLogic, and per-vehicle Strategy + Physics in that order
//! every tick.

use std::collections::HashMap;

use racesim_core::{
    Driver, DriverId, ErsMode, PaceMode, RaceState, RaceStatus, RealWeatherData, Rng, SimError,
    SimResult, Track, WeatherMode, MAX_BATCH_SECONDS, MAX_SUBSTEP_SECONDS,
};
use racesim_physics::PhysicsSystem;
use racesim_race::RaceLogicSystem;
use racesim_weather::WeatherSystem;
use tracing::{info, instrument};

/// External directive accepted by [`Engine::update_strategy`], replacing
/// a string-keyed channel/value pair with a typed enum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrategyChannel {
    Pace(PaceMode),
    Ers(ErsMode),
    Pit(bool),
}

/// Construction parameters for a fresh [`Engine`].
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub track: Track,
    pub drivers: Vec<Driver>,
    pub total_laps: u16,
    pub seed: u32,
}

/// Owns the shared deterministic RNG, the static track/driver roster, and
/// the evolving [`RaceState`]. The only mutation path into the
/// simulation besides ticking is [`Engine::update_strategy`] and the
/// weather-mode/real-data setters.
pub struct Engine {
    track: Track,
    drivers: HashMap<DriverId, Driver>,
    rng: Rng,
    state: RaceState,
    weather: WeatherSystem,
    race_logic: RaceLogicSystem,
    physics: PhysicsSystem,
}

impl Engine {
    #[instrument(skip(config), fields(track = %config.track.id, laps = config.total_laps, drivers = config.drivers.len()))]
    pub fn new(config: SimConfig) -> SimResult<Self> {
        let mut rng = Rng::new(config.seed);
        let state = racesim_race::initialize_race(&config.track, &config.drivers, config.total_laps, &mut rng)?;

        let mut drivers = HashMap::with_capacity(config.drivers.len());
        for driver in &config.drivers {
            drivers.insert(driver.id.clone(), driver.clone());
        }

        info!("race initialized in pre-race state");
        Ok(Self {
            track: config.track,
            drivers,
            rng,
            state,
            weather: WeatherSystem::new(),
            race_logic: RaceLogicSystem::new(),
            physics: PhysicsSystem::new(),
        })
    }

    /// Flags the race `Racing`. A no-op once the race has left `PreRace`.
    pub fn start_race(&mut self) {
        if self.state.status == RaceStatus::PreRace {
            self.state.status = RaceStatus::Racing;
        }
    }

    pub fn state(&self) -> &RaceState {
        &self.state
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Advances the simulation by `dt` seconds in a single substep.
    /// Callers driving larger batches must use [`Engine::step_clamped`]
    /// instead — this method does not decompose `dt` itself, it only
    /// clamps it to `MAX_SUBSTEP_SECONDS`.
    pub fn update(&mut self, dt: f64) {
        let dt = dt.clamp(0.0, MAX_SUBSTEP_SECONDS);
        self.step(dt);
    }

    /// Advances the simulation by an arbitrary `dt`, clamped to
    /// `MAX_BATCH_SECONDS` and decomposed into `MAX_SUBSTEP_SECONDS`
    /// substeps so every tick the rest of the engine sees is
    /// bounded-size, matching how the physics/weather integrators were
    /// tuned.
    pub fn step_clamped(&mut self, dt: f64) {
        let mut remaining = dt.clamp(0.0, MAX_BATCH_SECONDS);
        while remaining > 0.0 {
            let substep = remaining.min(MAX_SUBSTEP_SECONDS);
            self.step(substep);
            remaining -= substep;
        }
    }

    fn step(&mut self, dt: f64) {
        if self.state.status != RaceStatus::Racing {
            return;
        }

        self.state.elapsed_time += dt;
        self.weather.update(dt, &self.track, &mut self.state, &mut self.rng);
        self.race_logic
            .update(dt, &self.track, &self.drivers, &mut self.rng, &mut self.state);
        self.apply_strategy(dt);
        self.physics
            .update(dt, &self.track, &self.drivers, &mut self.state, &mut self.rng);
    }

    /// Runs the in-race pit decision for every vehicle that is racing and
    /// not already committed to boxing. Strategy owns only the decision
    /// of *whether* to box; physics detects the actual pit-entry crossing
    /// and the race-logic pit-stop state machine owns everything after.
    fn apply_strategy(&mut self, _dt: f64) {
        let order = self.state.driver_order.clone();
        for id in &order {
            let eligible = self
                .state
                .vehicles
                .get(id)
                .map(|v| !v.is_in_pit && !v.is_retired() && !v.has_finished)
                .unwrap_or(false);
            if !eligible {
                continue;
            }
            let Some(driver) = self.drivers.get(id) else { continue };
            let Some(mut vehicle) = self.state.vehicles.remove(id) else { continue };
            racesim_strategy::evaluate_pit_decision(&mut vehicle, driver, &self.track, &self.state, &mut self.rng);
            self.state.vehicles.insert(id.clone(), vehicle);
        }
    }

    /// Applies an external strategy directive to one vehicle immediately,
    /// outside the normal in-race decision rule — a race engineer's radio
    /// call overriding the model.
    pub fn update_strategy(&mut self, driver_id: &DriverId, channel: StrategyChannel) -> SimResult<()> {
        let vehicle = self
            .state
            .vehicles
            .get_mut(driver_id)
            .ok_or_else(|| SimError::UnknownDriver(driver_id.clone()))?;
        match channel {
            StrategyChannel::Pace(mode) => vehicle.pace_mode = mode,
            StrategyChannel::Ers(mode) => vehicle.ers_mode = mode,
            StrategyChannel::Pit(requested) => vehicle.box_this_lap = requested,
        }
        Ok(())
    }

    pub fn set_weather_mode(&mut self, mode: WeatherMode) {
        self.weather.set_mode(&mut self.state, mode);
    }

    pub fn set_real_weather_data(&mut self, data: RealWeatherData) {
        self.weather.push_real_weather_data(&mut self.state, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use racesim_core::{
        DriverId, PerformanceScores, PersonalityScores, PitLane, Sector, SectorType, SkillScores,
        TrackId, WeatherParams,
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
            2000.0,
            10,
            vec![Sector {
                id: 1,
                name: "S1".into(),
                start_distance: 0.0,
                end_distance: 2000.0,
                sector_type: SectorType::Straight,
                difficulty: 0.2,
                max_speed: None,
            }],
            vec![],
            PitLane {
                entry_distance: 1800.0,
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

    fn config() -> SimConfig {
        SimConfig {
            track: track(),
            drivers: vec![driver("a"), driver("b")],
            total_laps: 10,
            seed: 123,
        }
    }

    #[test]
    fn new_engine_starts_in_pre_race() {
        let engine = Engine::new(config()).unwrap();
        assert_eq!(engine.state().status, RaceStatus::PreRace);
    }

    #[test]
    fn start_race_flips_status_and_update_advances_time() {
        let mut engine = Engine::new(config()).unwrap();
        engine.start_race();
        assert_eq!(engine.state().status, RaceStatus::Racing);
        engine.update(0.1);
        assert!(engine.state().elapsed_time > 0.0);
    }

    #[test]
    fn strategy_override_is_applied_immediately() {
        let mut engine = Engine::new(config()).unwrap();
        engine.start_race();
        let id = DriverId::new("a").unwrap();
        engine.update_strategy(&id, StrategyChannel::Pace(PaceMode::Aggressive)).unwrap();
        assert_eq!(engine.state().vehicles[&id].pace_mode, PaceMode::Aggressive);
    }

    #[test]
    fn unknown_driver_override_errors() {
        let mut engine = Engine::new(config()).unwrap();
        let unknown = DriverId::new("ghost").unwrap();
        let err = engine.update_strategy(&unknown, StrategyChannel::Pit(true));
        assert!(matches!(err, Err(SimError::UnknownDriver(_))));
    }

    #[test]
    fn same_seed_produces_bitwise_identical_trajectories() {
        let mut e1 = Engine::new(config()).unwrap();
        let mut e2 = Engine::new(config()).unwrap();
        e1.start_race();
        e2.start_race();
        for _ in 0..200 {
            e1.update(0.1);
            e2.update(0.1);
        }
        for id in &e1.state().driver_order {
            assert_eq!(e1.state().vehicles[id].distance_on_lap, e2.state().vehicles[id].distance_on_lap);
            assert_eq!(e1.state().vehicles[id].speed, e2.state().vehicles[id].speed);
        }
    }

    #[test]
    fn step_clamped_decomposes_a_large_batch() {
        let mut engine = Engine::new(config()).unwrap();
        engine.start_race();
        engine.step_clamped(1.0);
        assert!((engine.state().elapsed_time - 1.0).abs() < 1e-9);
    }
}

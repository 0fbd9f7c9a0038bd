//! Domain model, RNG and tyre physics tables shared by every racesim
//! system: `Driver`, `Track`, `VehicleState`, `RaceState`, the Mulberry32
//! `Rng`, and the static tyre compound table.

pub mod driver;
pub mod error;
pub mod ids;
pub mod race;
pub mod rng;
pub mod track;
pub mod tyre;
pub mod vehicle;

pub use driver::{Driver, PerformanceScores, PersonalityScores, SkillScores};
pub use error::{SimError, SimResult};
pub use ids::{DriverId, SessionId, TrackId};
pub use race::{
    RaceState, RaceStatus, RealWeatherData, SafetyCarStatus, SectorCondition, WeatherCondition,
    WeatherForecastNode, WeatherMode,
};
pub use rng::Rng;
pub use track::{DrsZone, GeoCoordinates, PitLane, Sector, SectorType, Track, WeatherParams};
pub use tyre::{grip_factor, pace_multiplier, wear_rate, CompoundCharacteristics, TyreCompound};
pub use vehicle::{ErsMode, PaceMode, PitPhase, SpeedTracePoint, StrategyStint, VehicleState};

/// Engine substep ceiling: the external driver must decompose any batch
/// of simulated time into steps no larger than this.
pub const MAX_SUBSTEP_SECONDS: f64 = 0.1;

/// Engine batch ceiling: the external driver must clamp any single batch
/// of simulated time to this many seconds before decomposing it.
pub const MAX_BATCH_SECONDS: f64 = 2.0;

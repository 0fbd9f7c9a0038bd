//! Construction-time error kinds.
//!
//! Per the error handling design, only input validation at construction
//! produces an `Err`; every in-tick anomaly (NaN speed, exhausted strategy
//! plan, a weather push while simulating, `update` after the flag) is
//! handled inline by the owning system and never propagates here.

use thiserror::Error;

use crate::ids::{DriverId, TrackId};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("track distance must be positive, got {0}")]
    NonPositiveTrackDistance(f64),

    #[error("track sectors are not contiguous or do not cover [0, total_distance)")]
    MalformedSectors,

    #[error("pit lane speed limit must be positive, got {0}")]
    NonPositivePitLaneSpeed(f64),

    #[error("driver skill/performance/personality scores must be within [0, 100]: {0}")]
    ScoreOutOfRange(String),

    #[error("driver roster must not be empty")]
    EmptyRoster,

    #[error("duplicate driver id: {0:?}")]
    DuplicateDriver(DriverId),

    #[error("unknown driver id: {0:?}")]
    UnknownDriver(DriverId),

    #[error("unknown track id: {0:?}")]
    UnknownTrack(TrackId),

    #[error("id must not be empty")]
    EmptyId,
}

pub type SimResult<T> = Result<T, SimError>;

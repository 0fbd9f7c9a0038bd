//! Newtype identifiers (`DriverId`, `TrackId`, `SessionId`) used instead
//! of bare `String`s passed around.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DriverId(pub String);

impl DriverId {
    pub fn new(id: impl Into<String>) -> SimResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(SimError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> SimResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(SimError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Race-session identifier, generated fresh by `Engine::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

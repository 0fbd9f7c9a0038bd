//! Static per-driver definition.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::ids::DriverId;

fn in_unit_range(v: f64) -> bool {
    (0.0..=100.0).contains(&v)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkillScores {
    pub racecraft: f64,
    pub consistency: f64,
    pub tyre_management: f64,
    pub wet_weather: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PerformanceScores {
    pub cornering_high: f64,
    pub cornering_medium: f64,
    pub cornering_low: f64,
    pub straight: f64,
    pub temperature_adaptability: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PersonalityScores {
    pub aggression: f64,
    pub stress_resistance: f64,
    pub team_player: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub team: String,
    pub color: String,
    /// Reference lap time in seconds; lower is faster.
    pub base_pace: f64,
    pub skills: SkillScores,
    pub performance: PerformanceScores,
    pub personality: PersonalityScores,
    pub starting_morale: f64,
    pub starting_trust: f64,
}

impl Driver {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: DriverId,
        name: impl Into<String>,
        team: impl Into<String>,
        color: impl Into<String>,
        base_pace: f64,
        skills: SkillScores,
        performance: PerformanceScores,
        personality: PersonalityScores,
        starting_morale: f64,
        starting_trust: f64,
    ) -> SimResult<Self> {
        let scores = [
            skills.racecraft,
            skills.consistency,
            skills.tyre_management,
            skills.wet_weather,
            performance.cornering_high,
            performance.cornering_medium,
            performance.cornering_low,
            performance.straight,
            performance.temperature_adaptability,
            personality.aggression,
            personality.stress_resistance,
            personality.team_player,
            starting_morale,
            starting_trust,
        ];
        if scores.iter().any(|v| !in_unit_range(*v)) {
            return Err(SimError::ScoreOutOfRange(id.0.clone()));
        }

        Ok(Self {
            id,
            name: name.into(),
            team: team.into(),
            color: color.into(),
            base_pace,
            skills,
            performance,
            personality,
            starting_morale,
            starting_trust,
        })
    }

    /// Sector-type performance sub-score used by the physics target-speed
    /// model's factor 2.
    pub fn performance_for_sector(&self, sector_type: crate::track::SectorType) -> f64 {
        use crate::track::SectorType::*;
        match sector_type {
            Straight => self.performance.straight,
            CornerHighSpeed => self.performance.cornering_high,
            CornerMediumSpeed => self.performance.cornering_medium,
            CornerLowSpeed => self.performance.cornering_low,
        }
    }
}

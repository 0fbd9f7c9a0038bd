//! Static track definition: sectors, DRS zones, pit lane.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::ids::TrackId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectorType {
    Straight,
    CornerHighSpeed,
    CornerMediumSpeed,
    CornerLowSpeed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    pub id: u16,
    pub name: String,
    pub start_distance: f64,
    pub end_distance: f64,
    pub sector_type: SectorType,
    pub difficulty: f64,
    pub max_speed: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrsZone {
    pub detection_distance: f64,
    pub activation_distance: f64,
    pub end_distance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitLane {
    pub entry_distance: f64,
    pub exit_distance: f64,
    pub speed_limit: f64,
    pub stop_time: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherParams {
    pub volatility: f64,
    pub rain_probability: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub total_distance: f64,
    pub default_total_laps: u16,
    pub tire_degradation_factor: f64,
    pub overtaking_difficulty: f64,
    pub track_difficulty: f64,
    pub base_temperature: f64,
    pub coordinates: Option<GeoCoordinates>,
    pub weather_params: WeatherParams,
    pub sectors: Vec<Sector>,
    pub drs_zones: Vec<DrsZone>,
    pub pit_lane: PitLane,
}

impl Track {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TrackId,
        name: impl Into<String>,
        total_distance: f64,
        default_total_laps: u16,
        sectors: Vec<Sector>,
        drs_zones: Vec<DrsZone>,
        pit_lane: PitLane,
        weather_params: WeatherParams,
        base_temperature: f64,
    ) -> SimResult<Self> {
        if total_distance <= 0.0 {
            return Err(SimError::NonPositiveTrackDistance(total_distance));
        }
        if pit_lane.speed_limit <= 0.0 {
            return Err(SimError::NonPositivePitLaneSpeed(pit_lane.speed_limit));
        }
        Self::validate_sectors(&sectors, total_distance)?;

        Ok(Self {
            id,
            name: name.into(),
            total_distance,
            default_total_laps,
            tire_degradation_factor: 1.0,
            overtaking_difficulty: 0.5,
            track_difficulty: 0.5,
            base_temperature,
            coordinates: None,
            weather_params,
            sectors,
            drs_zones,
            pit_lane,
        })
    }

    fn validate_sectors(sectors: &[Sector], total_distance: f64) -> SimResult<()> {
        if sectors.is_empty() {
            return Err(SimError::MalformedSectors);
        }
        let mut expected_start = 0.0_f64;
        for sector in sectors {
            if (sector.start_distance - expected_start).abs() > 1e-6 {
                return Err(SimError::MalformedSectors);
            }
            if sector.end_distance <= sector.start_distance {
                return Err(SimError::MalformedSectors);
            }
            expected_start = sector.end_distance;
        }
        if (expected_start - total_distance).abs() > 1e-6 {
            return Err(SimError::MalformedSectors);
        }
        Ok(())
    }

    /// The sector containing `distance_on_lap`, 1-indexed. Distance is
    /// taken modulo `total_distance` to tolerate callers passing an
    /// odometer value.
    pub fn sector_at(&self, distance_on_lap: f64) -> &Sector {
        let d = distance_on_lap.rem_euclid(self.total_distance);
        self.sectors
            .iter()
            .find(|s| d >= s.start_distance && d < s.end_distance)
            .unwrap_or_else(|| self.sectors.last().expect("validated non-empty"))
    }

    pub fn has_drs_zone_at(&self, distance_on_lap: f64) -> Option<&DrsZone> {
        let d = distance_on_lap.rem_euclid(self.total_distance);
        self.drs_zones
            .iter()
            .find(|z| d >= z.activation_distance && d <= z.end_distance)
    }

    /// Laneway transit time used when `pit_lane.stop_time` is absent:
    /// distance through the pit lane at the posted speed limit, floored
    /// at 5 seconds per the pit-stop state machine.
    pub fn pit_lane_transit_time(&self) -> f64 {
        match self.pit_lane.stop_time {
            Some(t) => t.max(5.0),
            None => {
                let lane_distance =
                    (self.pit_lane.exit_distance - self.pit_lane.entry_distance)
                        .rem_euclid(self.total_distance);
                (lane_distance / self.pit_lane.speed_limit).max(5.0)
            }
        }
    }
}

use super::satellite::new_id;
use crate::orbit::{Position, Velocity};
use chrono::{DateTime, Utc};

/// One recorded trajectory sample of a tracked satellite.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct SatellitePosition {
    id: String,
    satellite_id: String,
    timestamp: DateTime<Utc>,
    position: Position,
    velocity: Option<Velocity>,
    /// Altitude at sample time in km.
    altitude: f64,
}

impl SatellitePosition {
    pub fn new(
        satellite_id: String,
        timestamp: DateTime<Utc>,
        position: Position,
        velocity: Option<Velocity>,
        altitude: f64,
    ) -> Self {
        Self { id: new_id(), satellite_id, timestamp, position, velocity, altitude }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn satellite_id(&self) -> &str { &self.satellite_id }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
    pub fn position(&self) -> Position { self.position }
    pub fn velocity(&self) -> Option<Velocity> { self.velocity }
    pub fn altitude(&self) -> f64 { self.altitude }
}

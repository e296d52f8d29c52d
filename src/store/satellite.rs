use crate::orbit::{self, OrbitalElements};
use chrono::{DateTime, Utc};
use rand::Rng;

/// A persisted satellite record with its derived orbital period.
///
/// The period is cached in minutes and recomputed whenever the altitude
/// changes; everything else is plain stored state.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Satellite {
    id: String,
    name: String,
    #[serde(rename = "type")]
    sat_type: String,
    /// Height above the Earth's surface in km.
    altitude: f64,
    /// Orbital plane angle in degrees.
    inclination: f64,
    eccentricity: f64,
    color: String,
    description: String,
    active: bool,
    /// Derived orbital period in minutes.
    period: f64,
    created_at: DateTime<Utc>,
}

impl Satellite {
    /// Builds a satellite from a validated create request with a fresh id.
    pub fn from_create(create: SatelliteCreate) -> Self {
        Self::from_create_with_id(new_id(), create)
    }

    /// Builds a satellite from a create request under a caller-chosen id.
    ///
    /// Used for the default catalog, whose entries keep their well-known ids.
    pub fn from_create_with_id(id: String, create: SatelliteCreate) -> Self {
        let period = orbit::period_minutes(create.altitude);
        Self {
            id,
            name: create.name,
            sat_type: create.sat_type,
            altitude: create.altitude,
            inclination: create.inclination,
            eccentricity: create.eccentricity,
            color: create.color,
            description: create.description,
            active: create.active,
            period,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn sat_type(&self) -> &str { &self.sat_type }
    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn inclination(&self) -> f64 { self.inclination }
    pub fn eccentricity(&self) -> f64 { self.eccentricity }
    pub fn color(&self) -> &str { &self.color }
    pub fn description(&self) -> &str { &self.description }
    pub fn is_active(&self) -> bool { self.active }
    pub fn period(&self) -> f64 { self.period }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

    /// Returns the orbital elements of this record for the calculator.
    pub fn elements(&self) -> OrbitalElements {
        OrbitalElements::new(self.altitude, self.inclination, self.eccentricity)
    }

    /// Applies a patch to this record.
    ///
    /// Recomputes the cached period iff the altitude actually changed. The
    /// patch must already have passed merge-validation.
    pub fn apply(&mut self, update: &SatelliteUpdate) {
        if let Some(inclination) = update.inclination {
            self.inclination = inclination;
        }
        if let Some(eccentricity) = update.eccentricity {
            self.eccentricity = eccentricity;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        if let Some(color) = &update.color {
            self.color.clone_from(color);
        }
        if let Some(altitude) = update.altitude {
            self.altitude = altitude;
            self.period = orbit::period_minutes(altitude);
        }
    }
}

/// Request payload for creating a custom satellite.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct SatelliteCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub sat_type: String,
    pub altitude: f64,
    pub inclination: f64,
    pub eccentricity: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Partial update for a satellite; unset fields are left untouched.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
pub struct SatelliteUpdate {
    pub altitude: Option<f64>,
    pub inclination: Option<f64>,
    pub eccentricity: Option<f64>,
    pub active: Option<bool>,
    pub color: Option<String>,
}

impl SatelliteUpdate {
    /// Whether this patch touches any orbit-defining parameter.
    pub fn touches_orbit(&self) -> bool {
        self.altitude.is_some() || self.inclination.is_some() || self.eccentricity.is_some()
    }
}

fn default_color() -> String { String::from("#00ff88") }

fn default_active() -> bool { true }

/// Generates a 128-bit random hex id for a new record.
pub(crate) fn new_id() -> String { format!("{:032x}", rand::rng().random::<u128>()) }

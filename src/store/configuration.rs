use super::satellite::new_id;
use crate::orbit::ElementOverrides;
use chrono::{DateTime, Utc};

/// A saved visualization setup: parameter overrides, playback speed and the
/// satellite the camera follows.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Configuration {
    id: String,
    name: String,
    description: String,
    satellite_params: ElementOverrides,
    time_speed: f64,
    selected_satellite_id: String,
    saved_at: DateTime<Utc>,
}

impl Configuration {
    pub fn from_create(create: ConfigurationCreate) -> Self {
        Self {
            id: new_id(),
            name: create.name,
            description: create.description,
            satellite_params: create.satellite_params,
            time_speed: create.time_speed,
            selected_satellite_id: create.selected_satellite_id,
            saved_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn description(&self) -> &str { &self.description }
    pub fn satellite_params(&self) -> &ElementOverrides { &self.satellite_params }
    pub fn time_speed(&self) -> f64 { self.time_speed }
    pub fn selected_satellite_id(&self) -> &str { &self.selected_satellite_id }
    pub fn saved_at(&self) -> DateTime<Utc> { self.saved_at }
}

/// Request payload for saving a configuration.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigurationCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub satellite_params: ElementOverrides,
    #[serde(default = "default_time_speed")]
    pub time_speed: f64,
    pub selected_satellite_id: String,
}

fn default_time_speed() -> f64 { 1.0 }

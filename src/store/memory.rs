use super::backend::{SatelliteBackend, StoreError};
use super::catalog;
use super::configuration::{Configuration, ConfigurationCreate};
use super::position::SatellitePosition;
use super::preferences::{Preferences, PreferencesUpdate};
use super::satellite::{Satellite, SatelliteCreate, SatelliteUpdate};
use crate::config::Settings;
use crate::orbit::{self, ElementOverrides, Position, Velocity};
use crate::{info, log};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use tokio::sync::RwLock;

/// In-memory satellite store.
///
/// Holds all records behind `tokio` read-write locks, so every operation is
/// safe to call concurrently from any number of tasks. Position history is a
/// bounded per-satellite ring; satellites, configurations and preferences can
/// be snapshotted to a file and restored.
pub struct InMemoryStore {
    satellites: RwLock<HashMap<String, Satellite>>,
    configurations: RwLock<HashMap<String, Configuration>>,
    preferences: RwLock<Option<Preferences>>,
    positions: RwLock<HashMap<String, VecDeque<SatellitePosition>>>,
    settings: Settings,
}

/// Serialized form of the durable store content.
#[derive(serde::Serialize, serde::Deserialize)]
struct StoreSnapshot {
    satellites: Vec<Satellite>,
    configurations: Vec<Configuration>,
    preferences: Option<Preferences>,
}

impl InMemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            satellites: RwLock::new(HashMap::new()),
            configurations: RwLock::new(HashMap::new()),
            preferences: RwLock::new(None),
            positions: RwLock::new(HashMap::new()),
            settings,
        }
    }

    /// Computes the live position and velocity of a stored satellite.
    ///
    /// # Arguments
    /// * `id` - The satellite id.
    /// * `time_seconds` - Time offset from the caller's epoch in seconds.
    /// * `overrides` - Per-call parameter overrides; an override period wins
    ///   over the persisted one.
    pub async fn live_state(
        &self,
        id: &str,
        time_seconds: f64,
        overrides: &ElementOverrides,
    ) -> Result<(Position, Velocity), StoreError> {
        let satellite = self.satellite(id).await?;
        let elements = satellite.elements().merged(overrides);
        let period = overrides.period.unwrap_or(satellite.period());
        Ok((
            orbit::position(&elements, period, time_seconds),
            orbit::velocity(&elements, period, time_seconds),
        ))
    }

    /// Samples the orbit path of a stored satellite for rendering.
    ///
    /// The sample count is clamped to `[1, max_path_points]`.
    pub async fn orbit_path_for(
        &self,
        id: &str,
        points: usize,
    ) -> Result<Vec<Position>, StoreError> {
        let satellite = self.satellite(id).await?;
        let count = points.clamp(1, self.settings.max_path_points);
        Ok(orbit::orbit_path(&satellite.elements(), satellite.period(), count))
    }

    /// Appends a position sample to the satellite's bounded history.
    pub async fn record_position(&self, sample: SatellitePosition) {
        let mut positions = self.positions.write().await;
        let history = positions.entry(String::from(sample.satellite_id())).or_default();
        history.push_back(sample);
        while history.len() > self.settings.position_history {
            history.pop_front();
        }
    }

    /// Queries recorded positions for a satellite, newest first.
    ///
    /// # Arguments
    /// * `id` - The satellite id.
    /// * `from`/`to` - Optional inclusive time window bounds.
    /// * `limit` - Result cap; defaults to the configured page size and is
    ///   clamped to the maximum page size.
    pub async fn positions(
        &self,
        id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        limit: Option<usize>,
    ) -> Vec<SatellitePosition> {
        let capped_limit =
            limit.unwrap_or(self.settings.default_page_size).min(self.settings.max_page_size);
        let positions = self.positions.read().await;
        let Some(history) = positions.get(id) else {
            return Vec::new();
        };
        history
            .iter()
            .rev()
            .filter(|sample| from.is_none_or(|f| sample.timestamp() >= f))
            .filter(|sample| to.is_none_or(|t| sample.timestamp() <= t))
            .take(capped_limit)
            .cloned()
            .collect()
    }

    /// Writes the durable store content to `path` as bincode.
    pub async fn snapshot<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let snapshot = StoreSnapshot {
            satellites: self.satellites.read().await.values().cloned().collect(),
            configurations: self.configurations.read().await.values().cloned().collect(),
            preferences: self.preferences.read().await.clone(),
        };
        let encoded = bincode::serde::encode_to_vec(&snapshot, bincode::config::standard())?;
        tokio::fs::write(path.as_ref(), encoded).await?;
        info!(
            "Snapshotted {} satellites and {} configurations to {}",
            snapshot.satellites.len(),
            snapshot.configurations.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Replaces the durable store content with a previously written snapshot.
    pub async fn restore<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        let (snapshot, _): (StoreSnapshot, usize) =
            bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;
        let mut satellites = self.satellites.write().await;
        satellites.clear();
        satellites.extend(
            snapshot.satellites.into_iter().map(|sat| (String::from(sat.id()), sat)),
        );
        let mut configurations = self.configurations.write().await;
        configurations.clear();
        configurations.extend(
            snapshot.configurations.into_iter().map(|cfg| (String::from(cfg.id()), cfg)),
        );
        *self.preferences.write().await = snapshot.preferences;
        Ok(())
    }

    async fn seed_if_empty(&self) {
        let mut satellites = self.satellites.write().await;
        if !satellites.is_empty() {
            return;
        }
        for satellite in catalog::default_satellites() {
            log!("Seeding default satellite {} ({})", satellite.name(), satellite.id());
            satellites.insert(String::from(satellite.id()), satellite);
        }
    }
}

#[async_trait::async_trait]
impl SatelliteBackend for InMemoryStore {
    async fn satellites(&self) -> Result<Vec<Satellite>, StoreError> {
        self.seed_if_empty().await;
        let satellites = self.satellites.read().await;
        Ok(satellites
            .values()
            .cloned()
            .sorted_by_key(|sat| (sat.created_at(), String::from(sat.id())))
            .collect())
    }

    async fn satellite(&self, id: &str) -> Result<Satellite, StoreError> {
        self.satellites.read().await.get(id).cloned().ok_or(StoreError::SatelliteNotFound)
    }

    async fn create_satellite(&self, create: SatelliteCreate) -> Result<Satellite, StoreError> {
        let validation =
            orbit::validate(create.altitude, create.inclination, create.eccentricity);
        if !validation.is_valid() {
            return Err(StoreError::InvalidParameters(validation.into_errors()));
        }
        let satellite = Satellite::from_create(create);
        self.satellites
            .write()
            .await
            .insert(String::from(satellite.id()), satellite.clone());
        Ok(satellite)
    }

    async fn update_satellite(
        &self,
        id: &str,
        update: SatelliteUpdate,
    ) -> Result<Satellite, StoreError> {
        let mut satellites = self.satellites.write().await;
        let satellite = satellites.get_mut(id).ok_or(StoreError::SatelliteNotFound)?;
        if update.touches_orbit() {
            // Validate the record as it would look after the patch.
            let validation = orbit::validate(
                update.altitude.unwrap_or(satellite.altitude()),
                update.inclination.unwrap_or(satellite.inclination()),
                update.eccentricity.unwrap_or(satellite.eccentricity()),
            );
            if !validation.is_valid() {
                return Err(StoreError::InvalidParameters(validation.into_errors()));
            }
        }
        satellite.apply(&update);
        Ok(satellite.clone())
    }

    async fn configurations(&self) -> Result<Vec<Configuration>, StoreError> {
        let configurations = self.configurations.read().await;
        Ok(configurations
            .values()
            .cloned()
            .sorted_by_key(|cfg| Reverse(cfg.saved_at()))
            .collect())
    }

    async fn save_configuration(
        &self,
        create: ConfigurationCreate,
    ) -> Result<Configuration, StoreError> {
        let configuration = Configuration::from_create(create);
        self.configurations
            .write()
            .await
            .insert(String::from(configuration.id()), configuration.clone());
        Ok(configuration)
    }

    async fn delete_configuration(&self, id: &str) -> Result<(), StoreError> {
        self.configurations
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::ConfigurationNotFound)
    }

    async fn preferences(&self) -> Result<Preferences, StoreError> {
        Ok(self.preferences.read().await.clone().unwrap_or_default())
    }

    async fn update_preferences(
        &self,
        update: PreferencesUpdate,
    ) -> Result<Preferences, StoreError> {
        let mut preferences = self.preferences.write().await;
        let mut current = preferences.take().unwrap_or_default();
        current.apply(&update);
        *preferences = Some(current.clone());
        Ok(current)
    }
}

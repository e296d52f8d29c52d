use super::{
    configuration::{Configuration, ConfigurationCreate},
    preferences::{Preferences, PreferencesUpdate},
    satellite::{Satellite, SatelliteCreate, SatelliteUpdate},
};
use strum_macros::Display;

/// Error surface of the satellite store.
#[derive(Debug, Display)]
pub enum StoreError {
    /// No satellite exists under the requested id.
    SatelliteNotFound,
    /// No saved configuration exists under the requested id.
    ConfigurationNotFound,
    /// A create/update was rejected; carries the accumulated validation messages.
    InvalidParameters(Vec<String>),
    /// Snapshot file could not be read or written.
    SnapshotIo(std::io::Error),
    /// Snapshot bytes could not be encoded or decoded.
    SnapshotCodec(String),
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self { StoreError::SnapshotIo(value) }
}

impl From<bincode::error::EncodeError> for StoreError {
    fn from(value: bincode::error::EncodeError) -> Self {
        StoreError::SnapshotCodec(value.to_string())
    }
}

impl From<bincode::error::DecodeError> for StoreError {
    fn from(value: bincode::error::DecodeError) -> Self {
        StoreError::SnapshotCodec(value.to_string())
    }
}

impl StoreError {
    /// Returns the validation messages if this is a parameter rejection.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            StoreError::InvalidParameters(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Persistence seam for satellite records and viewer state.
///
/// The in-memory implementation in [`super::memory`] is the one this crate
/// ships; a database-backed one is an external collaborator implementing the
/// same contract.
#[async_trait::async_trait]
pub trait SatelliteBackend: Send + Sync {
    /// Lists all satellites, seeding the default catalog on first access.
    async fn satellites(&self) -> Result<Vec<Satellite>, StoreError>;

    /// Fetches a single satellite by id.
    async fn satellite(&self, id: &str) -> Result<Satellite, StoreError>;

    /// Validates and persists a custom satellite, computing its period.
    async fn create_satellite(&self, create: SatelliteCreate) -> Result<Satellite, StoreError>;

    /// Merge-validates and applies a patch, recomputing the period if the
    /// altitude changed.
    async fn update_satellite(
        &self,
        id: &str,
        update: SatelliteUpdate,
    ) -> Result<Satellite, StoreError>;

    /// Lists saved configurations, newest first.
    async fn configurations(&self) -> Result<Vec<Configuration>, StoreError>;

    /// Persists a new configuration.
    async fn save_configuration(
        &self,
        create: ConfigurationCreate,
    ) -> Result<Configuration, StoreError>;

    /// Deletes a saved configuration.
    async fn delete_configuration(&self, id: &str) -> Result<(), StoreError>;

    /// Returns the preferences record, defaults if none was stored yet.
    async fn preferences(&self) -> Result<Preferences, StoreError>;

    /// Upserts the preferences record.
    async fn update_preferences(
        &self,
        update: PreferencesUpdate,
    ) -> Result<Preferences, StoreError>;
}

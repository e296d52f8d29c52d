mod backend;
mod catalog;
mod configuration;
mod memory;
mod position;
mod preferences;
mod satellite;

pub use backend::{SatelliteBackend, StoreError};
pub use configuration::{Configuration, ConfigurationCreate};
pub use memory::InMemoryStore;
pub use position::SatellitePosition;
pub use preferences::{Preferences, PreferencesUpdate};
pub use satellite::{Satellite, SatelliteCreate, SatelliteUpdate};

#[cfg(test)]
mod tests;

use super::satellite::{Satellite, SatelliteCreate};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// The well-known satellites the store is seeded with on first access.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumIter)]
pub(crate) enum CatalogSatellite {
    Iss,
    Hubble,
    GpsIif1,
    GpsIif2,
    GpsIif3,
    Landsat8,
}

impl CatalogSatellite {
    pub(crate) fn id(self) -> &'static str {
        match self {
            CatalogSatellite::Iss => "iss",
            CatalogSatellite::Hubble => "hubble",
            CatalogSatellite::GpsIif1 => "gps-1",
            CatalogSatellite::GpsIif2 => "gps-2",
            CatalogSatellite::GpsIif3 => "gps-3",
            CatalogSatellite::Landsat8 => "landsat8",
        }
    }

    fn create(self) -> SatelliteCreate {
        let (name, sat_type, altitude, inclination, eccentricity, color, description) = match self {
            CatalogSatellite::Iss => (
                "International Space Station (ISS)",
                "Space Station",
                408.0,
                51.6,
                0.0002,
                "#00ff88",
                "The largest artificial object in space and the third brightest object in the sky",
            ),
            CatalogSatellite::Hubble => (
                "Hubble Space Telescope",
                "Observatory",
                547.0,
                28.5,
                0.0003,
                "#ff6b35",
                "Space telescope that has revolutionized astronomy since 1990",
            ),
            CatalogSatellite::GpsIif1 => (
                "GPS Satellite Block IIF-1",
                "Navigation",
                20200.0,
                55.0,
                0.02,
                "#4f9eff",
                "Global Positioning System satellite for navigation",
            ),
            CatalogSatellite::GpsIif2 => (
                "GPS Satellite Block IIF-2",
                "Navigation",
                20200.0,
                55.0,
                0.018,
                "#4f9eff",
                "Global Positioning System satellite for navigation",
            ),
            CatalogSatellite::GpsIif3 => (
                "GPS Satellite Block IIF-3",
                "Navigation",
                20200.0,
                55.0,
                0.021,
                "#4f9eff",
                "Global Positioning System satellite for navigation",
            ),
            CatalogSatellite::Landsat8 => (
                "Landsat 8",
                "Earth Observation",
                705.0,
                98.2,
                0.0001,
                "#ff4081",
                "Earth observation satellite for land imaging",
            ),
        };
        SatelliteCreate {
            name: String::from(name),
            sat_type: String::from(sat_type),
            altitude,
            inclination,
            eccentricity,
            color: String::from(color),
            description: String::from(description),
            active: true,
        }
    }

    fn build(self) -> Satellite {
        Satellite::from_create_with_id(String::from(self.id()), self.create())
    }
}

/// Builds the default catalog records, periods already computed.
pub(crate) fn default_satellites() -> Vec<Satellite> {
    CatalogSatellite::iter().map(CatalogSatellite::build).collect()
}

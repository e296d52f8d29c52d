/// The Keplerian-style parameter set a single trajectory calculation works on.
///
/// Values are immutable per call; merging overrides produces a new set instead
/// of mutating the original.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Height above the Earth's mean surface in km.
    altitude: f64,
    /// Angle between the orbital plane and the equatorial plane in degrees.
    inclination: f64,
    /// Orbit shape parameter, 0 = circular.
    eccentricity: f64,
}

impl OrbitalElements {
    /// Creates a new element set from raw parameters.
    pub const fn new(altitude: f64, inclination: f64, eccentricity: f64) -> Self {
        Self { altitude, inclination, eccentricity }
    }

    pub const fn altitude(&self) -> f64 { self.altitude }
    pub const fn inclination(&self) -> f64 { self.inclination }
    pub const fn eccentricity(&self) -> f64 { self.eccentricity }

    /// Returns a copy of these elements with all set override fields applied.
    ///
    /// # Arguments
    /// * `overrides` - Optional per-field replacements supplied at call time.
    pub fn merged(&self, overrides: &ElementOverrides) -> Self {
        Self {
            altitude: overrides.altitude.unwrap_or(self.altitude),
            inclination: overrides.inclination.unwrap_or(self.inclination),
            eccentricity: overrides.eccentricity.unwrap_or(self.eccentricity),
        }
    }
}

/// Optional per-call parameter overrides for trajectory calculations.
///
/// Unset fields fall back to the owning satellite's persisted values. The
/// period override bypasses the recomputed period entirely.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementOverrides {
    pub altitude: Option<f64>,
    pub inclination: Option<f64>,
    pub eccentricity: Option<f64>,
    pub period: Option<f64>,
}

impl ElementOverrides {
    pub fn is_empty(&self) -> bool {
        self.altitude.is_none()
            && self.inclination.is_none()
            && self.eccentricity.is_none()
            && self.period.is_none()
    }
}

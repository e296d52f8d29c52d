/// Outcome of an orbital parameter validation.
///
/// All rule violations are accumulated into `errors` rather than
/// short-circuiting on the first failure, so a caller can report every
/// problem with a create/update request at once.
#[derive(serde::Serialize, Debug, Clone)]
pub struct Validation {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool { self.valid }
    pub fn errors(&self) -> &[String] { &self.errors }
    pub fn warnings(&self) -> &[String] { &self.warnings }

    pub fn into_errors(self) -> Vec<String> { self.errors }
}

/// Validates orbital parameters against the supported simulation domain.
///
/// Rules:
/// - altitude ≥ 150 km (below that, atmospheric drag makes the orbit invalid)
/// - altitude ≤ 35786 km (geostationary; higher is unsupported)
/// - inclination within [0°, 180°]
/// - eccentricity within [0, 1)
///
/// # Arguments
/// * `altitude` - Height above the Earth's surface in km.
/// * `inclination` - Orbital plane angle in degrees.
/// * `eccentricity` - Orbit shape parameter.
///
/// # Returns
/// A [`Validation`] with `valid = true` iff no rule was violated.
pub fn validate(altitude: f64, inclination: f64, eccentricity: f64) -> Validation {
    let mut errors = Vec::new();

    if altitude < 150.0 {
        errors.push(String::from("Altitude must be above 150km (atmospheric drag)"));
    } else if altitude > 35786.0 {
        errors.push(String::from("Altitude above 35,786km not supported in this simulation"));
    }

    if !(0.0..=180.0).contains(&inclination) {
        errors.push(String::from("Inclination must be between 0° and 180°"));
    }

    if !(0.0..1.0).contains(&eccentricity) {
        errors.push(String::from("Eccentricity must be between 0 and 1 (elliptical orbit)"));
    }

    Validation { valid: errors.is_empty(), errors, warnings: Vec::new() }
}

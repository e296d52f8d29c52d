mod calculator;
mod elements;
mod validation;

pub use calculator::{
    EARTH_RADIUS_KM, MU_EARTH, Position, RENDER_SCALE, Velocity, orbit_path, period_minutes,
    position, velocity,
};
pub use elements::{ElementOverrides, OrbitalElements};
pub use validation::{Validation, validate};

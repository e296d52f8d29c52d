use chrono::{DateTime, Utc};

/// User-level viewer preferences, stored as a single upserted record.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Preferences {
    theme: String,
    default_speed: f64,
    show_orbits: bool,
    camera_mode: String,
    updated_at: DateTime<Utc>,
}

impl Preferences {
    pub fn theme(&self) -> &str { &self.theme }
    pub fn default_speed(&self) -> f64 { self.default_speed }
    pub fn show_orbits(&self) -> bool { self.show_orbits }
    pub fn camera_mode(&self) -> &str { &self.camera_mode }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    /// Applies a patch, bumping the update timestamp.
    pub fn apply(&mut self, update: &PreferencesUpdate) {
        if let Some(theme) = &update.theme {
            self.theme.clone_from(theme);
        }
        if let Some(default_speed) = update.default_speed {
            self.default_speed = default_speed;
        }
        if let Some(show_orbits) = update.show_orbits {
            self.show_orbits = show_orbits;
        }
        if let Some(camera_mode) = &update.camera_mode {
            self.camera_mode.clone_from(camera_mode);
        }
        self.updated_at = Utc::now();
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: String::from("dark"),
            default_speed: 1.0,
            show_orbits: true,
            camera_mode: String::from("free"),
            updated_at: Utc::now(),
        }
    }
}

/// Partial preference update; unset fields are left untouched.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
pub struct PreferencesUpdate {
    pub theme: Option<String>,
    pub default_speed: Option<f64>,
    pub show_orbits: Option<bool>,
    pub camera_mode: Option<String>,
}

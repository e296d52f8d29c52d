use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings, read once from the environment and passed down
/// explicitly to whoever needs them.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Optional path the store is snapshotted to on shutdown.
    pub snapshot_path: Option<PathBuf>,
    /// Hard cap for any listing query.
    pub max_page_size: usize,
    /// Page size used when a query gives no limit.
    pub default_page_size: usize,
    /// Cap for orbit path sample counts.
    pub max_path_points: usize,
    /// Per-satellite bound on retained position samples.
    pub position_history: usize,
    /// Sampling interval of the tracking supervisor.
    pub track_interval: Duration,
}

impl Settings {
    const DEFAULT_MAX_PAGE_SIZE: usize = 500;
    const DEFAULT_PAGE_SIZE: usize = 100;
    const DEFAULT_MAX_PATH_POINTS: usize = 360;
    const DEFAULT_POSITION_HISTORY: usize = 1000;
    const DEFAULT_TRACK_INTERVAL_MS: u64 = 1000;

    /// Reads settings from the environment, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            snapshot_path: env::var("SAT_SNAPSHOT_PATH").ok().map(PathBuf::from),
            max_page_size: parse_var("SAT_MAX_PAGE_SIZE", Self::DEFAULT_MAX_PAGE_SIZE),
            default_page_size: parse_var("SAT_DEFAULT_PAGE_SIZE", Self::DEFAULT_PAGE_SIZE),
            max_path_points: parse_var("SAT_MAX_PATH_POINTS", Self::DEFAULT_MAX_PATH_POINTS),
            position_history: parse_var("SAT_POSITION_HISTORY", Self::DEFAULT_POSITION_HISTORY),
            track_interval: Duration::from_millis(parse_var(
                "SAT_TRACK_INTERVAL_MS",
                Self::DEFAULT_TRACK_INTERVAL_MS,
            )),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            max_page_size: Self::DEFAULT_MAX_PAGE_SIZE,
            default_page_size: Self::DEFAULT_PAGE_SIZE,
            max_path_points: Self::DEFAULT_MAX_PATH_POINTS,
            position_history: Self::DEFAULT_POSITION_HISTORY,
            track_interval: Duration::from_millis(Self::DEFAULT_TRACK_INTERVAL_MS),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

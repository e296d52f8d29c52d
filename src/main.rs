#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod common;
mod config;
mod logger;
mod orbit;
mod store;
mod tracking;

use crate::config::Settings;
use crate::store::{InMemoryStore, SatelliteBackend};
use crate::tracking::TrackingSupervisor;
use std::{sync::Arc, time::Duration};

const DEMO_RUNTIME: Duration = Duration::from_secs(10);
const DEMO_PATH_POINTS: usize = 100;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let settings = Settings::from_env();
    let (store, supervisor) = init(&settings).await;

    let supervisor_clone = Arc::clone(&supervisor);
    let run_handle = tokio::spawn(async move {
        supervisor_clone.run().await;
    });

    tokio::time::sleep(DEMO_RUNTIME).await;
    supervisor.cancel_token().cancel();
    if run_handle.await.is_err() {
        error!("Tracking supervisor task panicked");
    }

    let samples = store.positions("iss", None, None, None).await;
    info!("Recorded {} ISS position samples", samples.len());
    if let Some(latest) = samples.first() {
        info!("Latest ISS position: {}", latest.position());
    }

    if let Some(path) = &settings.snapshot_path {
        if let Err(e) = store.snapshot(path).await {
            error!("Snapshot failed: {e}");
        }
    }
}

async fn init(settings: &Settings) -> (Arc<InMemoryStore>, Arc<TrackingSupervisor>) {
    let store = Arc::new(InMemoryStore::new(settings.clone()));
    let satellites =
        store.satellites().await.unwrap_or_else(|e| fatal!("Failed to seed satellite store: {e}"));
    for satellite in &satellites {
        info!(
            "{} [{}]: altitude {:.0} km, period {:.2} min",
            satellite.name(),
            satellite.sat_type(),
            satellite.altitude(),
            satellite.period()
        );
    }

    let path = store
        .orbit_path_for("iss", DEMO_PATH_POINTS)
        .await
        .unwrap_or_else(|e| fatal!("Failed to sample ISS orbit path: {e}"));
    log!("ISS orbit path sampled with {} points, first point {}", path.len(), path[0]);

    let supervisor = Arc::new(TrackingSupervisor::new(Arc::clone(&store), settings));
    for id in ["iss", "hubble"] {
        if let Err(e) = supervisor.track(id).await {
            warn!("Cannot track {id}: {e}");
        }
    }
    (store, supervisor)
}

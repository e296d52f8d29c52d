use super::TrackingSupervisor;
use crate::config::Settings;
use crate::store::{InMemoryStore, SatelliteBackend, StoreError};
use std::sync::Arc;
use std::time::Duration;

fn fast_settings() -> Settings {
    Settings { track_interval: Duration::from_millis(10), ..Default::default() }
}

#[tokio::test]
async fn test_track_requires_known_satellite() {
    let store = Arc::new(InMemoryStore::new(fast_settings()));
    store.satellites().await.unwrap();
    let supervisor = TrackingSupervisor::new(Arc::clone(&store), &fast_settings());
    assert!(matches!(
        supervisor.track("no-such-id").await.unwrap_err(),
        StoreError::SatelliteNotFound
    ));
    supervisor.track("iss").await.unwrap();
}

#[tokio::test]
async fn test_supervisor_records_positions_until_cancelled() {
    let store = Arc::new(InMemoryStore::new(fast_settings()));
    store.satellites().await.unwrap();
    let supervisor = Arc::new(TrackingSupervisor::new(Arc::clone(&store), &fast_settings()));
    supervisor.track("iss").await.unwrap();

    let token = supervisor.cancel_token();
    let supervisor_clone = Arc::clone(&supervisor);
    let handle = tokio::spawn(async move { supervisor_clone.run().await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    token.cancel();
    handle.await.unwrap();

    let samples = store.positions("iss", None, None, None).await;
    assert!(!samples.is_empty(), "expected recorded samples");
    let sample = &samples[0];
    assert_eq!(sample.satellite_id(), "iss");
    assert!((sample.altitude() - 408.0).abs() < f64::EPSILON);
    assert!(sample.velocity().is_some());

    let recorded = samples.len();
    tokio::time::sleep(Duration::from_millis(50)).await;
    // No further samples after cancellation.
    assert_eq!(store.positions("iss", None, None, None).await.len(), recorded);
}

#[tokio::test]
async fn test_untrack_stops_sampling() {
    let store = Arc::new(InMemoryStore::new(fast_settings()));
    store.satellites().await.unwrap();
    let supervisor = Arc::new(TrackingSupervisor::new(Arc::clone(&store), &fast_settings()));
    supervisor.track("hubble").await.unwrap();
    supervisor.untrack("hubble").await;

    let token = supervisor.cancel_token();
    let supervisor_clone = Arc::clone(&supervisor);
    let handle = tokio::spawn(async move { supervisor_clone.run().await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    token.cancel();
    handle.await.unwrap();

    assert!(store.positions("hubble", None, None, None).await.is_empty());
}

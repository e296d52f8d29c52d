use super::*;
use crate::config::Settings;
use crate::orbit::{self, ElementOverrides};
use chrono::{TimeDelta, Utc};

fn test_store() -> InMemoryStore { InMemoryStore::new(Settings::default()) }

fn test_create(name: &str, altitude: f64) -> SatelliteCreate {
    SatelliteCreate {
        name: String::from(name),
        sat_type: String::from("Test"),
        altitude,
        inclination: 45.0,
        eccentricity: 0.01,
        color: String::from("#00ff88"),
        description: String::new(),
        active: true,
    }
}

#[tokio::test]
async fn test_seeds_default_catalog() {
    let store = test_store();
    let satellites = store.satellites().await.unwrap();
    assert_eq!(satellites.len(), 6);
    let iss = store.satellite("iss").await.unwrap();
    assert_eq!(iss.name(), "International Space Station (ISS)");
    assert!((iss.period() - 92.578).abs() < 0.01);
    // Second listing must not seed again.
    assert_eq!(store.satellites().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_create_computes_period() {
    let store = test_store();
    let satellite = store.create_satellite(test_create("Probe", 500.0)).await.unwrap();
    assert!((satellite.period() - orbit::period_minutes(500.0)).abs() < f64::EPSILON);
    let fetched = store.satellite(satellite.id()).await.unwrap();
    assert_eq!(fetched.name(), "Probe");
}

#[tokio::test]
async fn test_create_rejects_invalid_parameters() {
    let store = test_store();
    let mut create = test_create("Too Low", 100.0);
    create.eccentricity = 1.5;
    let err = store.create_satellite(create).await.unwrap_err();
    let errors = err.validation_errors().expect("expected parameter rejection");
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("150km"));
}

#[tokio::test]
async fn test_update_recomputes_period_on_altitude_change() {
    let store = test_store();
    let satellite = store.create_satellite(test_create("Probe", 500.0)).await.unwrap();
    let old_period = satellite.period();

    let color_only =
        SatelliteUpdate { color: Some(String::from("#ffffff")), ..Default::default() };
    let updated = store.update_satellite(satellite.id(), color_only).await.unwrap();
    assert!((updated.period() - old_period).abs() < f64::EPSILON);
    assert_eq!(updated.color(), "#ffffff");

    let raise = SatelliteUpdate { altitude: Some(800.0), ..Default::default() };
    let raised = store.update_satellite(satellite.id(), raise).await.unwrap();
    assert!((raised.period() - orbit::period_minutes(800.0)).abs() < f64::EPSILON);
    assert!(raised.period() > old_period);
}

#[tokio::test]
async fn test_update_merge_validates() {
    let store = test_store();
    let satellite = store.create_satellite(test_create("Probe", 500.0)).await.unwrap();
    let bad = SatelliteUpdate { inclination: Some(200.0), ..Default::default() };
    let err = store.update_satellite(satellite.id(), bad).await.unwrap_err();
    assert!(err.validation_errors().is_some());
    // Rejected patch must not have touched the record.
    let unchanged = store.satellite(satellite.id()).await.unwrap();
    assert!((unchanged.inclination() - 45.0).abs() < f64::EPSILON);

    let missing = store
        .update_satellite("no-such-id", SatelliteUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(missing, StoreError::SatelliteNotFound));
}

#[tokio::test]
async fn test_live_state_with_overrides() {
    let store = test_store();
    store.satellites().await.unwrap();
    let iss = store.satellite("iss").await.unwrap();

    let (position, velocity) =
        store.live_state("iss", 0.0, &ElementOverrides::default()).await.unwrap();
    assert_eq!(position, orbit::position(&iss.elements(), iss.period(), 0.0));
    assert_eq!(velocity, orbit::velocity(&iss.elements(), iss.period(), 0.0));

    let overrides = ElementOverrides { altitude: Some(800.0), ..Default::default() };
    let (overridden, _) = store.live_state("iss", 0.0, &overrides).await.unwrap();
    assert!(overridden.abs() > position.abs());
}

#[tokio::test]
async fn test_orbit_path_clamped() {
    let store = test_store();
    store.satellites().await.unwrap();
    let path = store.orbit_path_for("iss", 100).await.unwrap();
    assert_eq!(path.len(), 100);
    let clamped = store.orbit_path_for("iss", 100_000).await.unwrap();
    assert_eq!(clamped.len(), Settings::default().max_path_points);
    let minimum = store.orbit_path_for("iss", 0).await.unwrap();
    assert_eq!(minimum.len(), 1);
}

#[tokio::test]
async fn test_position_history_bounded_and_filtered() {
    let settings = Settings { position_history: 5, ..Default::default() };
    let store = InMemoryStore::new(settings);
    store.satellites().await.unwrap();

    let start = Utc::now();
    for i in 0u8..8 {
        let timestamp = start + TimeDelta::seconds(i64::from(i));
        let (position, velocity) =
            store.live_state("iss", f64::from(i), &ElementOverrides::default()).await.unwrap();
        store
            .record_position(SatellitePosition::new(
                String::from("iss"),
                timestamp,
                position,
                Some(velocity),
                408.0,
            ))
            .await;
    }

    let all = store.positions("iss", None, None, None).await;
    assert_eq!(all.len(), 5);
    // Newest first, oldest samples evicted.
    assert_eq!(all[0].timestamp(), start + TimeDelta::seconds(7));
    assert_eq!(all[4].timestamp(), start + TimeDelta::seconds(3));

    let windowed = store
        .positions("iss", Some(start + TimeDelta::seconds(4)), Some(start + TimeDelta::seconds(6)), None)
        .await;
    assert_eq!(windowed.len(), 3);

    let limited = store.positions("iss", None, None, Some(2)).await;
    assert_eq!(limited.len(), 2);

    assert!(store.positions("unknown", None, None, None).await.is_empty());
}

#[tokio::test]
async fn test_configurations_sorted_and_deleted() {
    let store = test_store();
    for name in ["first", "second"] {
        store
            .save_configuration(ConfigurationCreate {
                name: String::from(name),
                description: String::new(),
                satellite_params: ElementOverrides::default(),
                time_speed: 2.0,
                selected_satellite_id: String::from("iss"),
            })
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    let configurations = store.configurations().await.unwrap();
    assert_eq!(configurations.len(), 2);
    assert_eq!(configurations[0].name(), "second");

    store.delete_configuration(configurations[0].id()).await.unwrap();
    assert_eq!(store.configurations().await.unwrap().len(), 1);
    let missing = store.delete_configuration("no-such-id").await.unwrap_err();
    assert!(matches!(missing, StoreError::ConfigurationNotFound));
}

#[tokio::test]
async fn test_preferences_upsert() {
    let store = test_store();
    let defaults = store.preferences().await.unwrap();
    assert_eq!(defaults.theme(), "dark");
    assert!(defaults.show_orbits());

    let patch = PreferencesUpdate {
        theme: Some(String::from("light")),
        default_speed: Some(4.0),
        ..Default::default()
    };
    let updated = store.update_preferences(patch).await.unwrap();
    assert_eq!(updated.theme(), "light");
    assert!((updated.default_speed() - 4.0).abs() < f64::EPSILON);
    // Untouched fields keep their defaults.
    assert_eq!(updated.camera_mode(), "free");
    assert_eq!(store.preferences().await.unwrap().theme(), "light");
}

#[tokio::test]
async fn test_snapshot_roundtrip() {
    let dir = std::env::temp_dir().join("satellite-orbit-sim-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("snapshot-{}.bin", std::process::id()));

    let store = test_store();
    store.satellites().await.unwrap();
    store.create_satellite(test_create("Snapshot Probe", 650.0)).await.unwrap();
    store
        .update_preferences(PreferencesUpdate {
            theme: Some(String::from("light")),
            ..Default::default()
        })
        .await
        .unwrap();
    store.snapshot(&path).await.unwrap();

    let restored = test_store();
    restored.restore(&path).await.unwrap();
    assert_eq!(restored.satellites().await.unwrap().len(), 7);
    assert_eq!(restored.preferences().await.unwrap().theme(), "light");
    let probe = restored
        .satellites()
        .await
        .unwrap()
        .into_iter()
        .find(|sat| sat.name() == "Snapshot Probe")
        .unwrap();
    assert!((probe.period() - orbit::period_minutes(650.0)).abs() < f64::EPSILON);

    std::fs::remove_file(&path).ok();
}

use crate::config::Settings;
use crate::orbit;
use crate::store::{InMemoryStore, SatelliteBackend, SatellitePosition, StoreError};
use crate::{event, info, warn};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

/// Background task that samples live positions of tracked satellites into the
/// store's position history.
///
/// Membership is toggled per satellite id; sampling runs on a fixed interval
/// relative to the supervisor's start epoch and stops when the cancellation
/// token fires.
pub struct TrackingSupervisor {
    store: Arc<InMemoryStore>,
    tracked: Mutex<HashSet<String>>,
    cancel_token: CancellationToken,
    sample_interval: Duration,
    epoch: DateTime<Utc>,
}

impl TrackingSupervisor {
    pub fn new(store: Arc<InMemoryStore>, settings: &Settings) -> Self {
        Self {
            store,
            tracked: Mutex::new(HashSet::new()),
            cancel_token: CancellationToken::new(),
            sample_interval: settings.track_interval,
            epoch: Utc::now(),
        }
    }

    /// Returns the token that stops the sampling loop when cancelled.
    pub fn cancel_token(&self) -> CancellationToken { self.cancel_token.clone() }

    pub fn epoch(&self) -> DateTime<Utc> { self.epoch }

    /// Starts tracking a satellite.
    ///
    /// # Errors
    /// [`StoreError::SatelliteNotFound`] if no such satellite is stored.
    pub async fn track(&self, id: &str) -> Result<(), StoreError> {
        let satellite = self.store.satellite(id).await?;
        info!("Tracking {} ({id})", satellite.name());
        self.tracked.lock().await.insert(String::from(id));
        Ok(())
    }

    /// Stops tracking a satellite. Recorded history is kept.
    pub async fn untrack(&self, id: &str) {
        if self.tracked.lock().await.remove(id) {
            info!("Stopped tracking {id}");
        }
    }

    /// Runs the sampling loop until the cancellation token fires.
    pub async fn run(&self) {
        let mut tick = interval(self.sample_interval);
        loop {
            tokio::select! {
                () = self.cancel_token.cancelled() => {
                    info!("Tracking supervisor shutting down");
                    return;
                }
                _ = tick.tick() => self.sample().await,
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    async fn sample(&self) {
        let now = Utc::now();
        let elapsed_seconds = (now - self.epoch).num_milliseconds() as f64 / 1000.0;
        let tracked = self.tracked.lock().await.iter().cloned().collect::<Vec<_>>();
        for id in tracked {
            match self.store.satellite(&id).await {
                Ok(satellite) => {
                    let elements = satellite.elements();
                    let position = orbit::position(&elements, satellite.period(), elapsed_seconds);
                    let velocity = orbit::velocity(&elements, satellite.period(), elapsed_seconds);
                    event!("Sampled {id} at t={elapsed_seconds:.1}s: {position}");
                    self.store
                        .record_position(SatellitePosition::new(
                            id,
                            now,
                            position,
                            Some(velocity),
                            satellite.altitude(),
                        ))
                        .await;
                }
                Err(e) => {
                    // Satellite vanished from the store, drop it from the set.
                    warn!("Dropping {id} from tracking: {e}");
                    self.untrack(&id).await;
                }
            }
        }
    }
}

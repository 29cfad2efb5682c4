use std::{collections::VecDeque, sync::Arc};

use rand::Rng;
use serde::Serialize;
use tokio::sync::{watch, RwLock};

use crate::{
    config::Settings,
    models::{Alert, Filter},
    services::generator,
};

/// The retained alert window plus the live flag.
///
/// Newest alert is always at index 0; nothing past `capacity` is kept.
#[derive(Debug, Clone)]
pub struct Feed {
    alerts: VecDeque<Alert>,
    live: bool,
    capacity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedStatus {
    pub live: bool,
    pub count: usize,
    pub capacity: usize,
}

impl Feed {
    pub fn new(capacity: usize, live: bool) -> Self {
        let capacity = capacity.max(1);
        Self {
            alerts: VecDeque::with_capacity(capacity),
            live,
            capacity,
        }
    }

    /// A feed pre-filled with `feed_seed_count` alerts, kept in generation order.
    pub fn seeded<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let mut feed = Self::new(settings.feed_capacity, settings.feed_start_live);

        for _ in 0..settings.feed_seed_count.min(feed.capacity) {
            let mut alert = generator::generate_alert(rng, settings.feed_pump_bias);
            while feed.contains_id(&alert.id) {
                alert.id = generator::random_id(rng);
            }
            feed.alerts.push_back(alert);
        }
        feed
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn set_live(&mut self, live: bool) {
        self.live = live;
    }

    pub fn toggle_live(&mut self) -> bool {
        self.live = !self.live;
        self.live
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.alerts.iter().any(|a| a.id == id)
    }

    /// Prepends `alert`, re-rolling its id if it clashes with a retained one,
    /// then evicts anything past capacity.
    pub fn push<R: Rng + ?Sized>(&mut self, mut alert: Alert, rng: &mut R) -> Alert {
        while self.contains_id(&alert.id) {
            alert.id = generator::random_id(rng);
        }

        self.alerts.push_front(alert.clone());
        self.alerts.truncate(self.capacity);
        alert
    }

    pub fn snapshot(&self) -> Vec<Alert> {
        self.alerts.iter().cloned().collect()
    }

    pub fn filtered(&self, filter: Filter) -> Vec<Alert> {
        filter.apply(self.alerts.iter())
    }

    pub fn status(&self) -> FeedStatus {
        FeedStatus {
            live: self.live,
            count: self.alerts.len(),
            capacity: self.capacity,
        }
    }
}

/// Shared, exclusively-owned access to the feed.
///
/// Readers get cloned snapshots; the live flag is mirrored into a watch
/// channel so the ticker can cancel its pending timer.
#[derive(Clone)]
pub struct FeedHandle {
    inner: Arc<RwLock<Feed>>,
    live_tx: Arc<watch::Sender<bool>>,
}

impl FeedHandle {
    pub fn new(feed: Feed) -> Self {
        let (live_tx, _) = watch::channel(feed.is_live());
        Self {
            inner: Arc::new(RwLock::new(feed)),
            live_tx: Arc::new(live_tx),
        }
    }

    pub fn subscribe_live(&self) -> watch::Receiver<bool> {
        self.live_tx.subscribe()
    }

    pub async fn snapshot(&self) -> Vec<Alert> {
        self.inner.read().await.snapshot()
    }

    pub async fn filtered(&self, filter: Filter) -> Vec<Alert> {
        self.inner.read().await.filtered(filter)
    }

    pub async fn status(&self) -> FeedStatus {
        self.inner.read().await.status()
    }

    pub async fn is_live(&self) -> bool {
        self.inner.read().await.is_live()
    }

    pub async fn set_live(&self, live: bool) {
        let mut feed = self.inner.write().await;
        feed.set_live(live);
        self.publish_live(live);
    }

    pub async fn toggle_live(&self) -> bool {
        let mut feed = self.inner.write().await;
        let live = feed.toggle_live();
        self.publish_live(live);
        live
    }

    pub async fn push<R: Rng + ?Sized>(&self, alert: Alert, rng: &mut R) -> Alert {
        self.inner.write().await.push(alert, rng)
    }

    /// Pushes only while live. The check happens under the write lock, so a
    /// pause that lands while a tick is in flight still wins.
    pub async fn push_if_live<R: Rng + ?Sized>(&self, alert: Alert, rng: &mut R) -> Option<Alert> {
        let mut feed = self.inner.write().await;
        if !feed.is_live() {
            return None;
        }
        Some(feed.push(alert, rng))
    }

    fn publish_live(&self, live: bool) {
        self.live_tx.send_if_modified(|current| {
            if *current == live {
                return false;
            }
            *current = live;
            true
        });
    }
}

//! Library entrypoint for MegaPump.
//!
//! The binary only wires settings, logging and the listener; everything else
//! lives here so integration tests under `tests/` can build the router and
//! drive the feed directly.

pub mod config;
pub mod error;
pub mod models;

pub mod services;

#[path = "views/render.rs"]
pub mod render;
#[path = "views/templates.rs"]
pub mod templates;

pub mod controllers;
pub mod routes;

use tokio::sync::broadcast;

use crate::{
    models::Alert,
    services::feed::{Feed, FeedHandle},
};

#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub feed: FeedHandle,
    // event names for SSE subscribers ("feedUpdated")
    pub events_tx: broadcast::Sender<String>,
    // freshly generated alerts for WebSocket subscribers
    pub alerts_tx: broadcast::Sender<Alert>,
}

impl AppState {
    /// Loads templates and seeds the feed from `settings`.
    pub fn new(settings: config::Settings) -> Result<Self, handlebars::TemplateError> {
        let hbs = templates::build_handlebars(&settings.templates_dir)?;
        let feed = Feed::seeded(&settings, &mut rand::thread_rng());
        tracing::info!("seeded feed with {} alerts", feed.len());

        Ok(Self::with_feed(settings, hbs, FeedHandle::new(feed)))
    }

    pub fn with_feed(settings: config::Settings, hbs: templates::Hbs, feed: FeedHandle) -> Self {
        let (events_tx, _) = broadcast::channel::<String>(16);
        let (alerts_tx, _) = broadcast::channel::<Alert>(64);

        Self {
            hbs,
            settings,
            feed,
            events_tx,
            alerts_tx,
        }
    }
}

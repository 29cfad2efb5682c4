#![allow(dead_code)]

use chrono::Utc;
use http_body_util::BodyExt;
use megapump::{
    config::Settings,
    models::{Alert, Direction},
    services::feed::{Feed, FeedHandle},
    templates, AppState,
};
use rand::{rngs::StdRng, SeedableRng};

pub fn alert(id: &str, direction: Direction, pct: f64) -> Alert {
    Alert {
        id: id.to_string(),
        name: "HyperNode".to_string(),
        symbol: "HYPE".to_string(),
        direction,
        percent_change: pct,
        price: "$4.200000".to_string(),
        volume_24h: "$1,234,567".to_string(),
        market_cap: "$12,345,678".to_string(),
        timestamp: Utc::now(),
    }
}

/// 4 pumps [30, 50, 70, 90] and 2 dumps [-40, -60], newest first.
pub fn seed_scenario() -> Vec<Alert> {
    vec![
        alert("p30", Direction::Pump, 30.0),
        alert("d40", Direction::Dump, -40.0),
        alert("p50", Direction::Pump, 50.0),
        alert("p70", Direction::Pump, 70.0),
        alert("d60", Direction::Dump, -60.0),
        alert("p90", Direction::Pump, 90.0),
    ]
}

/// State whose feed holds exactly `alerts`, in the given order.
pub async fn test_state(alerts: Vec<Alert>, live: bool) -> AppState {
    let settings = Settings::default();
    let hbs = templates::build_handlebars(&settings.templates_dir).expect("templates");

    let feed = FeedHandle::new(Feed::new(settings.feed_capacity, live));
    let mut rng = StdRng::seed_from_u64(0);
    for a in alerts.into_iter().rev() {
        feed.push(a, &mut rng).await;
    }

    AppState::with_feed(settings, hbs, feed)
}

pub async fn response_body_string(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

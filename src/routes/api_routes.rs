use axum::{Router, routing::get};
use crate::{AppState, controllers::api_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/alerts", get(api_controller::get_alerts))
        .route("/api/stats", get(api_controller::get_stats))
        .route("/api/feed", get(api_controller::get_feed_status))
}

use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::feed_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/alerts", get(feed_controller::get_alerts_grid))
        .route("/alerts/stats", get(feed_controller::get_stats_bar))
        .route("/alerts/controls", get(feed_controller::get_controls))
        .route("/filter/:category", post(feed_controller::post_filter))
        .route("/feed/toggle", post(feed_controller::post_toggle_live))
}

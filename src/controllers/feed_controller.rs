use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    controllers::{cookie_filter, filter_cookie, hx_trigger, query_filter, FilterQuery},
    error::AppError,
    models::Filter,
    render,
    services::{dashboard_service, feed_ticker::FEED_UPDATED, stats_service::Stats},
    AppState,
};

async fn grid_html(state: &AppState, filter: Filter) -> Result<String, AppError> {
    let visible = state.feed.filtered(filter).await;
    let ctx = dashboard_service::grid_ctx(&visible, filter);
    render::render_fragment(state, "alerts_grid", &ctx)
}

async fn controls_html(state: &AppState, filter: Filter) -> Result<String, AppError> {
    let live = state.feed.is_live().await;
    let ctx = dashboard_service::controls_ctx(live, filter);
    render::render_fragment(state, "controls", &ctx)
}

// GET /alerts  (HTMX partial)
pub async fn get_alerts_grid(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(q): Query<FilterQuery>,
) -> Result<Html<String>, AppError> {
    let filter = query_filter(&q).unwrap_or_else(|| cookie_filter(&state, &jar));
    Ok(Html(grid_html(&state, filter).await?))
}

// GET /alerts/stats  (HTMX partial, always over the whole feed)
pub async fn get_stats_bar(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = state.feed.snapshot().await;
    let ctx = dashboard_service::stats_ctx(&Stats::from_alerts(&snapshot));
    Ok(Html(render::render_fragment(&state, "stats_bar", &ctx)?))
}

// GET /alerts/controls  (HTMX partial)
pub async fn get_controls(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, AppError> {
    let filter = cookie_filter(&state, &jar);
    Ok(Html(controls_html(&state, filter).await?))
}

// POST /filter/:category
pub async fn post_filter(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(category): Path<String>,
) -> Result<Response, AppError> {
    let filter: Filter = category.parse()?;
    let html = grid_html(&state, filter).await?;

    let jar = jar.add(filter_cookie(&state, filter));
    Ok((jar, hx_trigger("filterChanged"), Html(html)).into_response())
}

// POST /feed/toggle
pub async fn post_toggle_live(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let live = state.feed.toggle_live().await;
    tracing::info!("live feed {}", if live { "resumed" } else { "paused" });

    let _ = state.events_tx.send(FEED_UPDATED.to_string());

    let html = controls_html(&state, cookie_filter(&state, &jar)).await?;
    Ok((hx_trigger(FEED_UPDATED), Html(html)).into_response())
}

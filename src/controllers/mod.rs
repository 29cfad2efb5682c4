use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::{models::Filter, AppState};

pub mod home_controller;
pub mod feed_controller;
pub mod api_controller;
pub mod realtime_controller;

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub filter: Option<String>,
}

pub(crate) fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// `HX-Trigger` header firing `event` on the client `<body>`.
pub(crate) fn hx_trigger(event: &'static str) -> [(HeaderName, HeaderValue); 1] {
    [(HeaderName::from_static("hx-trigger"), HeaderValue::from_static(event))]
}

pub(crate) fn cookie_filter(state: &AppState, jar: &CookieJar) -> Filter {
    jar.get(&state.settings.filter_cookie_name)
        .and_then(|c| c.value().parse().ok())
        .unwrap_or_default()
}

/// A valid `?filter=` wins over the cookie; garbage in either falls back to `all`.
pub(crate) fn query_filter(q: &FilterQuery) -> Option<Filter> {
    q.filter.as_deref().and_then(|s| s.parse().ok())
}

pub(crate) fn filter_cookie(state: &AppState, filter: Filter) -> Cookie<'static> {
    Cookie::build((state.settings.filter_cookie_name.clone(), filter.as_str()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

use serde_json::json;

use crate::{error::AppError, AppState};

pub fn render_fragment(
    state: &AppState,
    tpl: &str,
    ctx: &serde_json::Value,
) -> Result<String, AppError> {
    Ok(state.hbs.render(tpl, ctx)?)
}

pub fn render_full(
    state: &AppState,
    title: &str,
    body_html: String,
    live: bool,
) -> Result<String, AppError> {
    let ctx = json!({
        "title": title,
        "body": body_html,
        "live": live,
    });

    render_fragment(state, "layouts/base", &ctx)
}

use handlebars::{Handlebars, TemplateError};
use std::{path::Path, sync::Arc};

pub type Hbs = Arc<Handlebars<'static>>;

const TEMPLATES: &[(&str, &str)] = &[
    // Layout + pages
    ("layouts/base", "layouts/base.hbs"),
    ("pages/dashboard", "pages/dashboard.hbs"),
    ("pages/not_found", "pages/not_found.hbs"),
    // Partials: included with `{{> name}}`, the first three are also served
    // on their own as HTMX swaps
    ("alerts_grid", "partials/alerts_grid.hbs"),
    ("stats_bar", "partials/stats_bar.hbs"),
    ("controls", "partials/controls.hbs"),
    ("matrix_rain", "partials/matrix_rain.hbs"),
    ("glitch_text", "partials/glitch_text.hbs"),
    ("alert_card", "partials/alert_card.hbs"),
    ("footer", "partials/footer.hbs"),
];

pub fn build_handlebars(dir: impl AsRef<Path>) -> Result<Hbs, TemplateError> {
    let dir = dir.as_ref();
    let mut hb = Handlebars::new();

    for (name, file) in TEMPLATES {
        hb.register_template_file(name, dir.join(file))?;
    }

    tracing::debug!("registered {} templates from {}", TEMPLATES.len(), dir.display());
    Ok(Arc::new(hb))
}

use crate::{AppState, UiError};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::path::Path;
use tera::{Context, Tera};
use tracing::error;

/// Load every page template under `root` once at startup. Each page route
/// maps one-to-one to a template name.
pub fn load_templates(root: &Path) -> Result<Tera, UiError> {
    let glob = format!("{}/**/*.html", root.display());
    Tera::new(&glob).map_err(|source| UiError::TemplateLoad { glob, source })
}

/// Render failure is the only explicit error path in the server: log it and
/// answer 500. Everything else falls through to framework defaults.
pub(crate) fn render_page(state: &AppState, template: &str, ctx: &Context) -> Response {
    match state.templates.render(template, ctx) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!(template = template, error = %e, "template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "template render failed").into_response()
        }
    }
}

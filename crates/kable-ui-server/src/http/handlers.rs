use crate::fixtures::MATURITY_COUNTS;
use crate::render::render_page;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use kable_ui_model::count_visibility;
use tera::Context;

pub(crate) async fn index_handler(State(state): State<AppState>) -> Response {
    render_page(&state, "index.html", &Context::new())
}

pub(crate) async fn repos_handler(State(state): State<AppState>) -> Response {
    let repos = state.source.list_repositories();
    let counts = count_visibility(&repos);
    let mut ctx = Context::new();
    ctx.insert("repos", &repos);
    ctx.insert("privrepos", &counts.private);
    ctx.insert("pubrepos", &counts.public);
    render_page(&state, "repos.html", &ctx)
}

pub(crate) async fn concepts_handler(State(state): State<AppState>) -> Response {
    let concepts = state.source.list_concepts();
    let mut ctx = Context::new();
    ctx.insert("concepts", &concepts);
    ctx.insert("stableconcepts", &MATURITY_COUNTS.stable);
    ctx.insert("betaconcepts", &MATURITY_COUNTS.beta);
    ctx.insert("alphaconcepts", &MATURITY_COUNTS.alpha);
    render_page(&state, "concepts.html", &ctx)
}

/// The path parameter is echoed for display only; the detail record does not
/// depend on it.
pub(crate) async fn concept_detail_handler(
    State(state): State<AppState>,
    Path(concept_id): Path<String>,
) -> Response {
    let (concept, repo) = state.source.concept_detail(&concept_id);
    let mut ctx = Context::new();
    ctx.insert("name", &concept_id);
    ctx.insert("concept", &concept);
    ctx.insert("repo", &repo);
    render_page(&state, "concept-details.html", &ctx)
}

pub(crate) async fn kubeapps_handler(State(state): State<AppState>) -> Response {
    render_page(&state, "kubeapps.html", &Context::new())
}

pub(crate) async fn stats_handler(State(state): State<AppState>) -> Response {
    render_page(&state, "stats.html", &Context::new())
}

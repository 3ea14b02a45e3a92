use axum::{
    extract::State,
    response::Html,
};
use tower_sessions::Session;
use crate::errors::AppResult;
use crate::middleware::SESSION_USER_KEY;
use crate::state::AppState;
use super::render::{escape_html, load_template};

pub async fn serve_landing_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let index_html = load_template(&state.config.server.template_dir, "index.html").await?;
    Ok(Html(index_html))
}

// Reached only through require_auth.
pub async fn serve_recommend_page(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Html<String>> {
    let user = session
        .get::<String>(SESSION_USER_KEY)
        .await?
        .unwrap_or_default();

    let recommend_html = load_template(&state.config.server.template_dir, "recommend.html").await?
        .replace("{{user}}", &escape_html(&user))
        .replace("{{query}}", "");

    Ok(Html(recommend_html))
}

use axum::{
    routing::get,
    middleware::from_fn,
    Router,
};
use sha2::{Digest, Sha512};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::{Key, SameSite};
use crate::{
    config::SessionConfig,
    handlers,
    middleware,
    state::AppState,
};

// Stretches the configured secret into the 64 bytes cookie signing needs.
fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

pub fn build_router(state: AppState) -> Router {
    let session_config: &SessionConfig = &state.config.session;
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(session_config.secure)
        .with_same_site(SameSite::Lax)
        .with_name(session_config.cookie_name.clone())
        .with_signed(signing_key(&session_config.secret));
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(handlers::serve_landing_page))
        .route("/signup", get(handlers::serve_signup_page).post(handlers::handle_signup))
        .route("/login", get(handlers::serve_login_page).post(handlers::handle_login))
        .route("/logout", get(handlers::handle_logout))

        // Protected pages
        .route(
            "/recommend-page",
            get(handlers::serve_recommend_page).layer(from_fn(middleware::require_auth)),
        )

        .nest_service("/static", static_dir)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    extract::Request,
    body::Body,
};
use tower_sessions::Session;

/// Session entry holding the authenticated email.
pub const SESSION_USER_KEY: &str = "user";

pub fn is_authenticated(identity: Option<&str>) -> bool {
    identity.is_some_and(|user| !user.is_empty())
}

// Gate for protected views: anything without an identity in the session goes back to /login.
pub async fn require_auth(
    session: Session,
    req: Request<Body>,
    next: Next,
) -> Response {
    let identity = match session.get::<String>(SESSION_USER_KEY).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!(error = %e, "Session lookup failed, treating request as anonymous");
            None
        }
    };

    if is_authenticated(identity.as_deref()) {
        next.run(req).await
    } else {
        tracing::debug!(path = %req.uri().path(), "Unauthenticated request redirected to login");
        Redirect::to("/login").into_response()
    }
}

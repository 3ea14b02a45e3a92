use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use crate::errors::AppResult;
use crate::middleware::SESSION_USER_KEY;
use crate::models::{LoginForm, SignupForm};
use crate::state::AppState;
use super::render::load_template;

pub async fn serve_signup_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let signup_html = load_template(&state.config.server.template_dir, "signup.html").await?;
    Ok(Html(signup_html))
}

pub async fn handle_signup(
    State(state): State<AppState>,
    Form(signup_form): Form<SignupForm>,
) -> AppResult<Response> {
    tracing::info!(email = %signup_form.email, "Signup attempt");

    state
        .store
        .create_user(&signup_form.fullname, &signup_form.email, &signup_form.password)
        .await?;

    tracing::info!(email = %signup_form.email, "User created");
    Ok(Redirect::to("/login").into_response())
}

pub async fn serve_login_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let login_html = load_template(&state.config.server.template_dir, "login.html").await?;
    Ok(Html(login_html))
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(login_form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!(email = %login_form.email, "Login attempt");

    let user = state
        .store
        .find_user_by_credentials(&login_form.email, &login_form.password)
        .await?;

    match user {
        Some(user) => {
            session.insert(SESSION_USER_KEY, &user.email).await?;
            tracing::info!(email = %user.email, fullname = %user.fullname, "Login succeeded");
            Ok(Redirect::to("/recommend-page").into_response())
        }
        None => {
            tracing::info!(email = %login_form.email, "Login rejected");
            let error_html = load_template(&state.config.server.template_dir, "login-error.html").await?;
            Ok(Html(error_html).into_response())
        }
    }
}

#[axum::debug_handler]
pub async fn handle_logout(
    session: Session,
) -> AppResult<Response> {
    if let Some(email) = session.remove::<String>(SESSION_USER_KEY).await? {
        tracing::info!(email = %email, "Logged out");
    }
    Ok(Redirect::to("/login").into_response())
}

mod auth;
mod pages;
mod render;

pub use auth::{serve_signup_page, handle_signup, serve_login_page, handle_login, handle_logout};
pub use pages::{serve_landing_page, serve_recommend_page};

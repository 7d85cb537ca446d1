//! Site Router

use axum::{Router, middleware::from_fn_with_state, routing::get};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserDirectory;
use crate::infra::postgres::PgUserDirectory;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{load_identity, require_login, session_layer};
use crate::presentation::render::{JsonRenderer, Renderer};

/// Create the site router with the PostgreSQL directory and JSON views
pub fn site_router(directory: PgUserDirectory, config: AuthConfig) -> Router {
    site_router_generic(directory, config, JsonRenderer)
}

/// Create the site router for any directory and renderer
pub fn site_router_generic<R>(directory: R, config: AuthConfig, renderer: impl Renderer) -> Router
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(directory, config, renderer);

    Router::new()
        .route("/", get(handlers::home::<R>))
        .route(
            "/login",
            get(handlers::login_page::<R>).post(handlers::login_submit::<R>),
        )
        .route("/domains", get(handlers::domains::<R>))
        .route("/people", get(handlers::people::<R>))
        .route("/portfolios", get(handlers::portfolios::<R>))
        .route("/logout", get(handlers::logout::<R>))
        // Last added runs first: session, then identity, then the guard
        .layer(from_fn_with_state(state.clone(), require_login::<R>))
        .layer(from_fn_with_state(state.clone(), load_identity::<R>))
        .layer(from_fn_with_state(state.clone(), session_layer::<R>))
        .with_state(state)
}

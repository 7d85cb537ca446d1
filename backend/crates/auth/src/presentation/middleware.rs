//! Session and Access Guard Middleware
//!
//! Layer order, outermost first:
//! 1. [`session_layer`] resolves the cookie into a [`SessionHandle`] and
//!    writes the cookie back on every response.
//! 2. [`load_identity`] attaches the current [`Identity`].
//! 3. [`require_login`] redirects anonymous requests for protected paths.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::config::AuthConfig;
use crate::application::identity_provider::IdentityProvider;
use crate::application::session_store::SessionHandle;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::UserDirectory;
use crate::error::AuthError;
use crate::presentation::handlers::{AuthAppState, found};

/// Outcome of the access guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// Send the client to this location
    Redirect(String),
}

/// Decide whether a request for `path` may reach its handler
pub fn enforce(config: &AuthConfig, path: &str, identity: &Identity) -> GuardDecision {
    if config.is_public(path) || identity.is_authenticated() {
        GuardDecision::Proceed
    } else {
        GuardDecision::Redirect(config.login_redirect(path))
    }
}

/// Middleware that resolves the session and persists it after the handler
pub async fn session_layer<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    let session = SessionHandle::new(state.sessions.resolve(req.headers()));
    req.extensions_mut().insert(session.clone());

    let mut response = next.run(req).await;

    match state.sessions.persist(&session.snapshot()) {
        Ok(cookie) => {
            response.headers_mut().append(header::SET_COOKIE, cookie);
            response
        }
        Err(e) => e.into_response(),
    }
}

/// Middleware that stores the current [`Identity`] in request extensions
pub async fn load_identity<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    let session = req.extensions().get::<SessionHandle>().cloned();

    let identity = match session {
        Some(session) => {
            IdentityProvider::new(state.directory.clone())
                .current_identity(&session)
                .await
        }
        None => Identity::Anonymous,
    };

    req.extensions_mut().insert(identity);

    next.run(req).await
}

/// Middleware that requires a signed-in user outside the public paths
///
/// On success the bound [`User`](crate::domain::entity::user::User) is
/// available to the handler as an `Extension<User>`.
pub async fn require_login<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    let identity = req
        .extensions()
        .get::<Identity>()
        .cloned()
        .unwrap_or_default();

    match enforce(&state.config, req.uri().path(), &identity) {
        GuardDecision::Proceed => {
            if let Some(user) = identity.into_user() {
                req.extensions_mut().insert(user);
            }
            next.run(req).await
        }
        GuardDecision::Redirect(location) => {
            tracing::debug!(path = %req.uri().path(), "Anonymous request redirected to login");
            found(&location)
        }
    }
}

impl<S> FromRequestParts<S> for SessionHandle
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionHandle>()
            .cloned()
            .ok_or_else(|| AuthError::Internal("Session layer is not installed".to_string()))
    }
}

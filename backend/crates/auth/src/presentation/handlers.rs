//! HTTP Handlers

use axum::extract::{Extension, Form, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{Authenticator, SessionHandle, SessionStore};
use crate::domain::entity::user::User;
use crate::domain::repository::UserDirectory;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginForm, NavPage, NextQuery, PageData};
use crate::presentation::render::Renderer;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    pub directory: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub sessions: Arc<SessionStore>,
    pub renderer: Arc<dyn Renderer>,
}

impl<R> AuthAppState<R>
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    pub fn new(directory: R, config: AuthConfig, renderer: impl Renderer) -> Self {
        let config = Arc::new(config);
        Self {
            directory: Arc::new(directory),
            sessions: Arc::new(SessionStore::new(config.clone())),
            config,
            renderer: Arc::new(renderer),
        }
    }

    fn render_page(&self, user: &User, page: NavPage) -> Response {
        self.renderer
            .render(StatusCode::OK, "index", &PageData::for_page(user, page))
    }
}

// ============================================================================
// Sign In / Sign Out
// ============================================================================

/// GET /login
pub async fn login_page<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<NextQuery>,
) -> Response
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    state
        .renderer
        .render(StatusCode::OK, "login", &PageData::for_login(query.next))
}

/// POST /login
///
/// `next` is read from this request's own query string.
pub async fn login_submit<R>(
    State(state): State<AuthAppState<R>>,
    session: SessionHandle,
    Query(query): Query<NextQuery>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    let authenticator = Authenticator::new(state.directory.clone());

    match authenticator
        .login(&session, &form.username, &form.password)
        .await
    {
        Ok(_) => Ok(found(&state.config.resolve_next(query.next.as_deref()))),
        Err(AuthError::InvalidCredentials) => {
            tracing::info!("Rejected sign in attempt");
            Ok(found(&state.config.login_path))
        }
        Err(e) => Err(e),
    }
}

/// GET /logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>, session: SessionHandle) -> Response
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    Authenticator::new(state.directory.clone()).logout(&session);
    found(NavPage::Home.link())
}

// ============================================================================
// Protected Pages
// ============================================================================

/// GET /
pub async fn home<R>(
    State(state): State<AuthAppState<R>>,
    Extension(user): Extension<User>,
) -> Response
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    state.render_page(&user, NavPage::Home)
}

/// GET /domains
pub async fn domains<R>(
    State(state): State<AuthAppState<R>>,
    Extension(user): Extension<User>,
) -> Response
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    state.render_page(&user, NavPage::Domains)
}

/// GET /people
pub async fn people<R>(
    State(state): State<AuthAppState<R>>,
    Extension(user): Extension<User>,
) -> Response
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    state.render_page(&user, NavPage::People)
}

/// GET /portfolios
pub async fn portfolios<R>(
    State(state): State<AuthAppState<R>>,
    Extension(user): Extension<User>,
) -> Response
where
    R: UserDirectory + Clone + Send + Sync + 'static,
{
    state.render_page(&user, NavPage::Portfolios)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 302 Found to `location`
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

//! Auth (Session Access Control) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session, identity and user entities, user directory trait
//! - `application/` - Session store, identity provider, authenticator
//! - `infra/` - PostgreSQL and in-memory user directories
//! - `presentation/` - Guard middleware, handlers, router, rendering
//!
//! ## Features
//! - Session state carried entirely in an HMAC-signed, browser-session cookie
//! - Login against a user directory with redirect-back to the requested page
//! - Logout that reverts the session to anonymous
//!
//! ## Security Model
//! - The signing key is fixed for the life of the process
//! - Tampered, foreign, or stale cookies are replaced by an empty session
//! - Post-login redirects only follow same-site paths

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::{Identity, Session, User, UserDirectory, UserId};
pub use error::{AuthError, AuthResult};
pub use infra::{MemoryUserDirectory, PgUserDirectory};
pub use presentation::router::{site_router, site_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No directory row matches the submitted username and secret
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session cookie is malformed or its signature does not verify
    #[error("Session cookie is invalid")]
    SessionInvalid,

    /// Session cookie was issued longer ago than the token TTL
    #[error("Session cookie has expired")]
    SessionExpired,

    /// Credentials matched but the session could not record the identity
    #[error("Failed to bind identity to session: {0}")]
    SessionBindFailure(String),

    /// User directory cannot be reached
    #[error("User directory unavailable: {0}")]
    DirectoryUnavailable(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Convert to AppError
    ///
    /// `InvalidCredentials`, `SessionInvalid` and `SessionExpired` are
    /// normally settled before a response is built (redirect back to login,
    /// or a fresh session), so the 401 mapping only covers direct use.
    /// Server-side failures get a generic message; the cause stays attached
    /// as the error source for logs.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid | AuthError::SessionExpired => {
                AppError::unauthorized(self.to_string())
            }
            AuthError::SessionBindFailure(_) => {
                AppError::internal("Could not complete sign in, please try again").with_source(self)
            }
            AuthError::DirectoryUnavailable(e) => {
                AppError::internal("The server could not process the request").with_source(e)
            }
            AuthError::Internal(_) => {
                AppError::internal("The server could not process the request").with_source(self)
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::DirectoryUnavailable(e) => {
                tracing::error!(error = %e, "User directory error");
            }
            AuthError::SessionBindFailure(msg) => {
                tracing::error!(message = %msg, "Session bind failure");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::info!("Rejected sign in attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use kernel::error::kind::ErrorKind;
    use std::error::Error as _;

    #[test]
    fn test_credential_errors_are_client_errors() {
        let err = AuthError::InvalidCredentials.into_app_error();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(!AuthError::SessionExpired.into_app_error().is_server_error());
    }

    #[test]
    fn test_bind_and_directory_failures_are_server_errors() {
        let bind = AuthError::SessionBindFailure("boom".to_string()).into_app_error();
        assert_eq!(bind.kind(), ErrorKind::InternalServerError);

        let directory = AuthError::from(sqlx::Error::PoolTimedOut).into_app_error();
        assert_eq!(directory.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn test_server_error_detail_is_not_exposed() {
        let err = AuthError::SessionBindFailure("serializer exploded".to_string()).into_app_error();
        assert!(!err.message().contains("serializer"));
        assert!(err.source().is_some_and(|s| s.to_string().contains("serializer")));
    }

    #[test]
    fn test_directory_error_is_kept_as_source() {
        let err = AuthError::from(sqlx::Error::PoolTimedOut).into_app_error();
        let source = err.source().expect("source attached");
        assert!(source.downcast_ref::<sqlx::Error>().is_some());
        assert!(!err.message().contains("pool"));
    }

    #[test]
    fn test_into_response_status() {
        let response = AuthError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

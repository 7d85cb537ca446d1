//! Session Store
//!
//! Round-trips a [`Session`] through a signed cookie.
//!
//! Token layout: `<payload>.<signature>`, where `payload` is the URL-safe
//! Base64 of `{"v": <values>, "iat": <issued-at ms>}` and `signature` is
//! HMAC-SHA256 over `<cookie name>|<payload>`. Binding the cookie name into
//! the MAC keeps a token minted for one cookie from being replayed in another.

use axum::http::{HeaderMap, HeaderValue};
use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use platform::cookie::{extract_cookie, set_cookie_header};
use platform::crypto::{from_base64url, sign, to_base64url, verify};

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::error::{AuthError, AuthResult};

#[derive(Serialize, Deserialize)]
struct CookiePayload {
    v: Session,
    iat: i64,
}

/// Signed-cookie session store
pub struct SessionStore {
    config: Arc<AuthConfig>,
}

impl SessionStore {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Session for this request
    ///
    /// A missing, tampered, or expired cookie yields a fresh empty session.
    pub fn resolve(&self, headers: &HeaderMap) -> Session {
        let Some(token) = extract_cookie(headers, &self.config.session_cookie_name) else {
            return Session::new();
        };

        match self.decode(&token) {
            Ok(session) => session,
            Err(e) => {
                tracing::debug!(error = %e, "Discarding session cookie");
                Session::new()
            }
        }
    }

    /// `Set-Cookie` value carrying the session's current state
    pub fn persist(&self, session: &Session) -> AuthResult<HeaderValue> {
        let token = self.encode(session)?;
        set_cookie_header(&self.config.cookie_config(), &token)
            .map_err(|e| AuthError::Internal(format!("Invalid Set-Cookie value: {e}")))
    }

    pub fn encode(&self, session: &Session) -> AuthResult<String> {
        self.encode_at(session, Utc::now().timestamp_millis())
    }

    pub fn decode(&self, token: &str) -> AuthResult<Session> {
        self.decode_at(token, Utc::now().timestamp_millis())
    }

    pub(crate) fn encode_at(&self, session: &Session, now_ms: i64) -> AuthResult<String> {
        let payload = CookiePayload {
            v: session.clone(),
            iat: now_ms,
        };
        let json = serde_json::to_vec(&payload)
            .map_err(|e| AuthError::SessionBindFailure(e.to_string()))?;
        let payload_b64 = to_base64url(&json);

        let signature = sign(&self.config.session_secret, &self.mac_input(&payload_b64))
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(format!("{payload_b64}.{signature}"))
    }

    pub(crate) fn decode_at(&self, token: &str, now_ms: i64) -> AuthResult<Session> {
        let (payload_b64, signature) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;

        verify(
            &self.config.session_secret,
            &self.mac_input(payload_b64),
            signature,
        )
        .map_err(|_| AuthError::SessionInvalid)?;

        let json = from_base64url(payload_b64).map_err(|_| AuthError::SessionInvalid)?;
        let payload: CookiePayload =
            serde_json::from_slice(&json).map_err(|_| AuthError::SessionInvalid)?;

        if now_ms - payload.iat > self.config.session_token_ttl_ms() {
            return Err(AuthError::SessionExpired);
        }

        Ok(payload.v)
    }

    fn mac_input(&self, payload_b64: &str) -> Vec<u8> {
        format!("{}|{}", self.config.session_cookie_name, payload_b64).into_bytes()
    }
}

/// Request-local handle to the session
///
/// The session layer and the handler share one handle per request; the
/// layer writes whatever state the handle holds once the handler returns.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with the session locked. Do not await inside `f`.
    pub fn with<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        f(&mut self.inner.lock())
    }

    pub fn snapshot(&self) -> Session {
        self.inner.lock().clone()
    }
}

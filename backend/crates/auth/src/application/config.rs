//! Application Configuration
//!
//! Built once at startup and shared by reference with the session store,
//! the guard, and the handlers.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Signing key used when none is supplied
pub const DEV_SESSION_SECRET: &[u8] = b"ctrlsrfc";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// HMAC-SHA256 key for session cookies, fixed for the process lifetime
    pub session_secret: Vec<u8>,
    /// Cookie Max-Age. 0 means a browser-session cookie (no Max-Age sent).
    pub cookie_max_age_secs: i64,
    /// Cookies signed longer ago than this are treated as absent
    pub session_token_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Where anonymous requests for protected routes are sent
    pub login_path: String,
    /// Query parameter carrying the originally requested path
    pub redirect_param: String,
    /// Post-login destination when `next` is missing or unusable
    pub default_redirect: String,
    /// Paths served without a signed-in user, besides `login_path`
    pub public_paths: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "my_session".to_string(),
            session_secret: DEV_SESSION_SECRET.to_vec(),
            cookie_max_age_secs: 0,
            session_token_ttl: Duration::from_secs(30 * 24 * 3600), // 30 days
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            login_path: "/login".to_string(),
            redirect_param: "next".to_string(),
            default_redirect: "/".to_string(),
            public_paths: Vec::new(),
        }
    }
}

impl AuthConfig {
    /// Use the given signing key
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            session_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::with_secret(secret.to_vec())
    }

    /// Create config for development (fixed key, insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Session token TTL in milliseconds
    pub fn session_token_ttl_ms(&self) -> i64 {
        self.session_token_ttl.as_millis() as i64
    }

    /// Cookie attributes for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: (self.cookie_max_age_secs != 0).then_some(self.cookie_max_age_secs),
        }
    }

    /// The login route and the configured public paths skip the guard
    pub fn is_public(&self, path: &str) -> bool {
        path == self.login_path || self.public_paths.iter().any(|p| p == path)
    }

    /// Location for an anonymous request to `path`
    pub fn login_redirect(&self, path: &str) -> String {
        format!("{}?{}={}", self.login_path, self.redirect_param, path)
    }

    /// Pick the post-login destination
    ///
    /// Only same-site absolute paths are followed; anything else, including
    /// an empty value, falls back to `default_redirect`. Browsers drop tabs
    /// and newlines while parsing a `Location`, so `/\t/host` reads as
    /// `//host`: any control character is refused.
    pub fn resolve_next(&self, next: Option<&str>) -> String {
        match next.map(str::trim) {
            Some(target)
                if target.starts_with('/')
                    && !target.starts_with("//")
                    && !target.contains('\\')
                    && !target.chars().any(char::is_control) =>
            {
                target.to_string()
            }
            _ => self.default_redirect.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "my_session");
        assert_eq!(config.session_secret, b"ctrlsrfc");
        assert_eq!(config.cookie_max_age_secs, 0);
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.redirect_param, "next");
    }

    #[test]
    fn test_session_only_cookie() {
        let cookie = AuthConfig::development().cookie_config();
        assert_eq!(cookie.max_age_secs, None);
        assert!(!cookie.secure);
        assert!(cookie.http_only);
    }

    #[test]
    fn test_positive_max_age_is_sent() {
        let config = AuthConfig {
            cookie_max_age_secs: 600,
            ..AuthConfig::default()
        };
        assert_eq!(config.cookie_config().max_age_secs, Some(600));
    }

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.session_secret.len(), 32);
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn test_is_public() {
        let config = AuthConfig {
            public_paths: vec!["/health".to_string()],
            ..AuthConfig::default()
        };
        assert!(config.is_public("/login"));
        assert!(config.is_public("/health"));
        assert!(!config.is_public("/"));
        assert!(!config.is_public("/domains"));
    }

    #[test]
    fn test_login_redirect() {
        let config = AuthConfig::default();
        assert_eq!(config.login_redirect("/domains"), "/login?next=/domains");
    }

    #[test]
    fn test_resolve_next() {
        let config = AuthConfig::default();
        assert_eq!(config.resolve_next(Some("/people")), "/people");
        assert_eq!(config.resolve_next(Some("")), "/");
        assert_eq!(config.resolve_next(None), "/");
        assert_eq!(config.resolve_next(Some("https://evil.example")), "/");
        assert_eq!(config.resolve_next(Some("//evil.example")), "/");
        assert_eq!(config.resolve_next(Some("/\\evil.example")), "/");
    }

    #[test]
    fn test_resolve_next_refuses_control_characters() {
        let config = AuthConfig::default();
        assert_eq!(config.resolve_next(Some("/\t/evil.example")), "/");
        assert_eq!(config.resolve_next(Some("/\n/evil.example")), "/");
        assert_eq!(config.resolve_next(Some("/\r\nSet-Cookie:x=1")), "/");
        assert_eq!(config.resolve_next(Some("/people\u{0}")), "/");
        assert_eq!(config.resolve_next(Some("/people?tab=1")), "/people?tab=1");
    }
}

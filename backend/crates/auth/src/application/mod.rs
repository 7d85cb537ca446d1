//! Application Layer
//!
//! Session store, identity resolution, and sign in/out.

pub mod authenticator;
pub mod config;
pub mod identity_provider;
pub mod session_store;

// Re-exports
pub use authenticator::Authenticator;
pub use config::AuthConfig;
pub use identity_provider::IdentityProvider;
pub use session_store::{SessionHandle, SessionStore};

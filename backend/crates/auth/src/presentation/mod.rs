//! Presentation Layer
//!
//! HTTP handlers, view models, router, middleware, and rendering.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{GuardDecision, enforce, load_identity, require_login, session_layer};
pub use render::{JsonRenderer, Renderer};
pub use router::{site_router, site_router_generic};

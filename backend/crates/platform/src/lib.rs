//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie parsing and `Set-Cookie` construction
//! - HMAC-SHA256 signing and URL-safe Base64 helpers

pub mod cookie;
pub mod crypto;

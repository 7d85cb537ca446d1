//! Infrastructure Layer
//!
//! User directory implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserDirectory;
pub use postgres::PgUserDirectory;

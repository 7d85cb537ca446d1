//! Shared Kernel
//!
//! Vocabulary shared by every crate in the workspace:
//! - [`error::app_error::AppError`], which keeps the underlying cause as its source
//! - [`error::kind::ErrorKind`], the HTTP-facing error classification
//!
//! Only things whose meaning is the same for every route belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

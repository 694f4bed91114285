//! Common types shared across the dashcheck crates.
//!
//! This crate defines the error taxonomy for a verification pass and the
//! observability helpers used by the binary and integration tests. It is
//! intentionally lightweight so that every crate can depend on it without
//! introducing heavy transitive costs.
//!
//! - [`VerifyError`] and [`Result`]: shared error handling
//! - [`observability`]: centralised tracing/logging initialisation
use thiserror::Error;

pub mod observability;

/// Error types produced by a verification pass.
///
/// Every failure in the navigate/wait/screenshot sequence maps into one of
/// these variants before it reaches the app boundary, where it is printed
/// and discarded rather than propagated.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The target address was unreachable or navigation failed.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// The marker text never rendered within the wait deadline.
    #[error("Timeout waiting for '{0}' to become visible")]
    Timeout(String),

    /// Screenshot capture or artifact write failed.
    #[error("Screenshot error: {0}")]
    Screenshot(String),

    /// The WebDriver session could not be established, driven, or closed.
    #[error("Session error: {0}")]
    Session(#[from] anyhow::Error),
}

/// Convenient alias for results that use [`VerifyError`].
pub type Result<T> = std::result::Result<T, VerifyError>;

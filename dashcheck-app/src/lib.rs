//! Dashboard smoke verification.
//!
//! One pass: open a headless browser, load the dashboard, wait for the
//! marker text, save a screenshot as evidence. See [`verifier`].
pub mod verifier;

//! Driver layer for browser automation.
//!
//! This crate exposes the WebDriver session and page helpers the verifier
//! uses to load a dashboard and collect evidence.
//!
//! - [`browser::session::BrowserSession`]: WebDriver client wrapper
//! - [`browser::page::Page`]: navigation, marker waits, and screenshots
//! - [`browser::args`]: Chrome launch argument construction
pub mod browser;

//! Utility modules for web and display operations.
//!
//! Provides:
//! - [`post_json`] - JSON POST raced against a timeout
//! - [`format`] - Cell, pager and status text
//! - [`log`] - Browser console logging

mod fetch;
pub mod format;
pub mod log;

pub use fetch::post_json;

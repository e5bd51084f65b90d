//! Application configuration.
//!
//! Centralizes the configuration constants used throughout the application.
//! Listing-domain constants (root path, page size) live in `dirgrid_core`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the toolbar and logs.
pub const APP_NAME: &str = "dirgrid";

// =============================================================================
// Network Configuration
// =============================================================================

/// GraphQL endpoint of the listing service.
///
/// Override at build time with `DIRGRID_API_URL`.
pub const LISTING_ENDPOINT: &str = match option_env!("DIRGRID_API_URL") {
    Some(url) => url,
    None => "/graphql",
};

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Placeholder shown in cells that do not apply to a row.
pub const EMPTY_CELL: &str = "_";

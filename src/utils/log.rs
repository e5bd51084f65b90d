//! Browser console logging.
//!
//! Messages go to `console.log` / `console.warn` / `console.error` on wasm32
//! and are dropped elsewhere, so native unit tests stay quiet.

use crate::config::APP_NAME;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn prefixed(message: &str) -> String {
    format!("[{}] {}", APP_NAME, message)
}

pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&prefixed(message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&prefixed(message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&prefixed(message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(prefixed("loaded"), "[dirgrid] loaded");
    }
}

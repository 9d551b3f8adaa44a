//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys`.
//! Natively they go to stderr so tests and tools still see them.
//!
//! Usage:
//! ```rust
//! use bounce_engine::{engine_log, engine_warn};
//!
//! let bodies = 3;
//! engine_log!("spawned {} bodies", bodies);
//! engine_warn!("viewport height is {}", 0);
//! ```

#[cfg(target_arch = "wasm32")]
pub fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(message: &str) {
    eprintln!("[bounce] {}", message);
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    eprintln!("[bounce] WARN {}", message);
}

/// Log an informational message, `format!` style
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        $crate::core::log::info(&format!($($arg)*));
    }};
}

/// Log a warning, `format!` style
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        $crate::core::log::warn(&format!($($arg)*));
    }};
}

//! Debug logging for values that must not leak, e.g. decrypted payloads or
//! freshly issued tokens.
//!
//! Whether such values are written is decided once, from the configuration,
//! and carried around in a [`SensitiveLogger`].

use std::fmt;

use crate::config::Config;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensitiveLogger {
    debug_sensitive: bool,
}

impl SensitiveLogger {
    pub fn new(debug_sensitive: bool) -> Self {
        Self { debug_sensitive }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.logging().debug_sensitive())
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.debug_sensitive
    }

    /// The message to log: the formatted `args` when enabled, otherwise only
    /// the bare `template`.
    pub fn render(&self, template: &str, args: fmt::Arguments<'_>) -> String {
        if self.debug_sensitive {
            args.to_string()
        } else {
            format!("sensitive false: non-templated message {template}")
        }
    }
}

/// Logs at debug level through a [`SensitiveLogger`].
///
/// ```
/// use token_service::{sensitive_debug, utils::sensitive::SensitiveLogger};
///
/// let logger = SensitiveLogger::new(false);
/// sensitive_debug!(logger, "issued token {}", "secret");
/// ```
#[macro_export]
macro_rules! sensitive_debug {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__tracing::debug!(
            "{}",
            $logger.render($fmt, ::std::format_args!($fmt $(, $arg)*))
        )
    };
}

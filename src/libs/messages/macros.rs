//! Macros for printing messages and building errors from them.
//!
//! - **`msg_error!`**: errors with a ❌ prefix, always on stderr whatever
//!   the tracing filter
//! - **`msg_debug!`**: debug-only output with a 🔍 prefix, through tracing
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build or return an
//!   `anyhow::Error` whose text is exactly the message
//!
//! Debug mode is detected once and cached.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `JIRA_STANDUP_DEBUG` or `RUST_LOG` is set.
///
/// The result is computed on first use and cached for the lifetime of the
/// process. `main` uses the same check to decide whether to install the
/// tracing subscriber.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("JIRA_STANDUP_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints an error with a ❌ prefix on stderr.
///
/// Never routed through tracing: a `RUST_LOG` filter must not be able to
/// swallow a fatal error.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        eprintln!("❌ {}", $msg)
    };
}

/// Emits a 🔍 debug line. Silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` whose text is the message.
///
/// The text carries no prefix. Callers and tests compare the error string
/// against the exact wording, and `msg_error!` adds the ❌ on output.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an error created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}

//! Tracing setup for hosts.
//!
//! The library only emits `tracing` events. Terminal hosts must not log to
//! stdout/stderr while they own the screen, so logging goes to a file and is
//! off unless `MSGBAR_LOG` names one.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file path.
pub const LOG_ENV_VAR: &str = "MSGBAR_LOG";

/// Initialize tracing with optional file output.
///
/// Set `MSGBAR_LOG` to a file path to enable logging; the level comes from
/// `RUST_LOG` and defaults to `info`. Log files get a `{path}.{pid}` suffix
/// so concurrent hosts do not clobber each other.
///
/// Returns `false` if logging stayed off.
pub fn init_tracing() -> bool {
    let Ok(log_path) = std::env::var(LOG_ENV_VAR) else {
        return false;
    };

    let unique_path = format!("{}.{}", log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {unique_path}");
        return false;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
}

//! Logging setup
//!
//! Installs a `tracing-subscriber` registry writing to stderr, so the chat
//! itself stays alone on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the given log level from config.
///
/// Priority: `RUST_LOG` env var > `log_level` parameter.
/// Calling it twice is harmless; the second call is ignored.
pub fn init_with_level(log_level: &str) {
    let default_filter = format!("{},skypebot_lib={}", log_level, log_level);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_with_level("debug");
        init_with_level("warn");
        tracing::debug!("still alive");
    }
}

use crate::Cli;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Maps a `LOG_LEVEL` value onto a tracing level. `None` means the value
/// wasn't recognized.
pub(crate) fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so stdout only
/// ever carries the command summary.
pub(crate) fn setup_logger(cli: &Cli) {
    let mut invalid_env_value = None;
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(value) => parse_log_level(&value).unwrap_or_else(|| {
                    invalid_env_value = Some(value);
                    DEFAULT_LOG_LEVEL
                }),
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(value) = invalid_env_value {
        log::warn!(
            "Ignoring invalid `LOG_LEVEL` environment variable value: \
            `{value}`",
        );
    }
}

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Initialize the tracing subscriber.
///
/// Everything is written to stderr: stdout carries the MCP transport and
/// must stay clean. `RUST_LOG` overrides the configured level when set.
pub fn init_logging(log_level: &str, json_format: bool) -> anyhow::Result<()> {
    let level = parse_log_level(log_level);

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(format!("{}", level)))?;

    if json_format {
        Registry::default()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        Registry::default()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!(log_level = %log_level, json_format = json_format, "logging initialized");

    Ok(())
}

/// Parse a log level string, falling back to `info` on unknown input.
fn parse_log_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!("unknown log level '{}', defaulting to 'info'", level_str);
            Level::INFO
        }
    }
}

//! Tracing subscriber assembly.
//!
//! Output goes to the console plus daily-rolling files under the configured
//! log directory: `combined.log` at the active level and `error.log` holding
//! only errors. A `production` environment adds a third `production.log`
//! sink. The returned guards must stay alive for the process lifetime or the
//! non-blocking writers lose buffered lines.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use scrawl_config::LogConfig;

pub struct LogGuards {
    _combined: WorkerGuard,
    _error: WorkerGuard,
    _production: Option<WorkerGuard>,
}

pub fn init(config: &LogConfig, environment: &str, verbose: bool) -> LogGuards {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "scrawl_server={level},scrawl_web={level},scrawl_surrealdb={level},\
             scrawl_core={level},scrawl_config={level},tower_http={level}"
        ))
    });

    let combined_file = tracing_appender::rolling::daily(&config.dir, "combined.log");
    let (combined_writer, combined_guard) = tracing_appender::non_blocking(combined_file);

    let error_file = tracing_appender::rolling::daily(&config.dir, "error.log");
    let (error_writer, error_guard) = tracing_appender::non_blocking(error_file);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(combined_writer))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(error_writer)
                .with_filter(LevelFilter::ERROR),
        );

    let production_guard = if environment == "production" {
        let production_file = tracing_appender::rolling::daily(&config.dir, "production.log");
        let (production_writer, guard) = tracing_appender::non_blocking(production_file);
        registry
            .with(fmt::layer().with_ansi(false).with_writer(production_writer))
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    };

    LogGuards {
        _combined: combined_guard,
        _error: error_guard,
        _production: production_guard,
    }
}

use crate::error::ConfigError;
use crate::settings::{Environment, Logging};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `logging.filter`. When `logging.directory` is set the output
/// goes to a daily-rolling `blogful.log` file through a non-blocking writer; the
/// returned guard must be held for the lifetime of the process so buffered lines
/// are flushed on exit.
pub fn init_tracing(
    settings: &Logging,
    environment: Environment,
) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    let (writer, guard) = match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "blogful.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(settings.directory.is_none());
    let registry = tracing_subscriber::registry().with(filter);

    let result = if environment.is_production() {
        registry.with(fmt_layer.compact()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    };
    result.map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    Ok(guard)
}

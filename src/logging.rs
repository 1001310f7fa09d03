use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with both console and file output.
pub fn init_logging() {
    let _ = fs::create_dir_all("logs");

    // Daily-rotated JSON log file, written off the hot path
    let file_appender = tracing_appender::rolling::daily("logs", "cleaner.log");
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("flats_cleaner=info".parse().unwrap()))
        .with(file_layer)
        .with(console_layer)
        .init();

    // The guard must live as long as the process or buffered logs are lost
    std::mem::forget(_guard);
}

use tracing_subscriber::{EnvFilter, prelude::*};

/// Initializes global tracing with a filter from `RUST_LOG` (default `info`).
///
/// Logs go to stderr, compact, with targets and levels, so stdout stays free
/// for `--report -`.
pub fn init_tracing() {
    // Example: RUST_LOG=testdocs=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(), // switch to .pretty() if you prefer multi-line human logs
        )
        .init();
}

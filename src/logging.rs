use tracing_subscriber::EnvFilter;

/// Install the `tracing` subscriber for the demo host.
/// Without `--debug` the level is pinned to `info`, so a stray `RUST_LOG=trace`
/// in the shell cannot flood the terminal with a line per stroke segment.
/// With `--debug`, `RUST_LOG` picks the level and falls back to `debug`.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    // Already installed (embedding host, repeated init): keep the existing one.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

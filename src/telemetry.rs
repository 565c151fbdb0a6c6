//! Structured logging setup.

/// Installs an env-filtered fmt subscriber writing to stderr, unless one is
/// already set. Filtering follows `RUST_LOG` and defaults to errors only, so
/// the console transcript on stdout stays clean.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

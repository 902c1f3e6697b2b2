use tracing_subscriber::EnvFilter;

/// Filter directive for a `--verbosity` value, falling back to the level
/// from the config file.
pub fn level_for(verbosity: Option<u8>, configured: &str) -> &str {
    match verbosity {
        Some(0) => "warn",
        Some(1) => "info",
        Some(_) => "debug",
        None => configured,
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over everything else.
pub fn init(verbosity: Option<u8>, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, configured)));

    // A subscriber may already be installed when running under tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

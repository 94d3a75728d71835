use tracing_subscriber::EnvFilter;

/// Sends `tracing` output to stderr so tables and JSON on stdout stay parseable.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug events with `-v`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `verbose` traces this crate to standard output. Otherwise `RUST_LOG` is
/// honoured, defaulting to warnings on standard error.
pub fn init(verbose: bool) {
    if verbose {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("ghcl=trace"))
            .with_writer(std::io::stdout)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .try_init();
    }
}

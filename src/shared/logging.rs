use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Level resolution: `--debug` wins over `--verbose`, which wins over the
/// `LOG_LEVEL` environment variable; the default is `error`, so only the
/// progress output and real problems reach the console in a normal run. Log
/// lines go to stderr so reports written to stdout stay machine-readable.
pub fn init(verbose: bool, debug: bool) {
    let filter = resolve_filter(verbose, debug);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_filter(verbose: bool, debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("error"))
    }
}

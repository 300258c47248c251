use tracing::Level;

/// Install the process-wide log subscriber. Call once, at startup.
///
/// Logs go to stderr so that report output on stdout stays pipeable.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

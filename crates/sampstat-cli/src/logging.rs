use tracing_subscriber::{EnvFilter, fmt};

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the number of
/// `-v` flags.
pub(crate) fn init(verbose: u8) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

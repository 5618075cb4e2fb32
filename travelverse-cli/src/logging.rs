//! Log subscriber installation for the CLI binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::CliError;

/// Install a compact stderr subscriber honouring `RUST_LOG`.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the subscriber. Defaults to `info` when `RUST_LOG` is unset.
pub fn init_logging() -> Result<(), CliError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(CliError::Logging)
}

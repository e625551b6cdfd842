use tracing_subscriber::EnvFilter;

/// Log target of both the library and this binary.
const CRATE_TARGET: &str = "shamsi";

/// Initialize logging based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set. Records go to stderr so that calendar
/// output on stdout stays clean; `log` records are bridged into the subscriber.
pub fn init(verbosity: u8) {
  let level = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(format!("{CRATE_TARGET}={level}")));

  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

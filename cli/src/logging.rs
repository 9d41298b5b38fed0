use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the same subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = subscriber.try_init() {
        eprintln!("logging disabled: {e}");
    }
}

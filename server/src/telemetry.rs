use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initializes tracing for the server binary. `RUST_LOG` overrides the
/// default `info` level.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(make_env_filter())
        .init();
}

/// Initializes tracing inside tests; safe to call from every test since
/// only the first call installs the subscriber.
#[cfg(test)]
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_env_filter())
        .with_test_writer()
        .try_init();
}

fn make_env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

//! Tracing bootstrap shared by the binaries

use tracing_subscriber::EnvFilter;

/// Install a compact fmt subscriber filtered by `level`.
///
/// `level` accepts any `EnvFilter` directive (`info`, `synthq=debug`, ...).
/// A `RUST_LOG` environment variable takes precedence when set. Calling this
/// twice is harmless; the second registration is ignored.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

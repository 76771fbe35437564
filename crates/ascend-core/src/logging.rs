//! Logging setup based on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,ascend_handler=debug";

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`]. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a global `fmt` subscriber with an explicit fallback filter.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_filter("trace");
        tracing::debug!("logging initialised twice without panicking");
    }
}

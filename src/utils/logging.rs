//! Logging setup.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn,frontdoor=info";

/// Initializes the global logger, honouring `RUST_LOG` when present.
pub fn init_from_env() {
    let env = Env::default().default_filter_or(DEFAULT_FILTER);

    // Tests may initialize more than once
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

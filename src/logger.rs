use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the env_logger backend once per process. `RUST_LOG` overrides the
/// defaults; `RUST_LOG=fixed_hashtable=debug` shows every slot placement.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("fixed_hashtable", LevelFilter::Info)
            .filter_module("hash_report", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed, e.g. by a test harness.
        let _ = builder.try_init();
    });
}

// src/logging/mod.rs
use log::LevelFilter;

/// Install the global logger. `RUST_LOG` still wins over `level` when set.
/// Logs go to stderr so they never mix with passwords printed on stdout.
pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .try_init();

    if let Err(e) = result {
        log::debug!("Logger already initialised: {}", e);
    }
}

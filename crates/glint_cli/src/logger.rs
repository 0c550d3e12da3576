use log::LevelFilter;

/// Initialize the logger. `RUST_LOG` refines the filter per module.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

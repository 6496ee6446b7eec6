use env_logger::{Builder, Env};

pub fn init_logging(default_level: &str) {
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

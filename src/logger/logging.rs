use log::LevelFilter;

/// `RUST_LOG` wins over the flag when set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level).format_timestamp_millis();

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

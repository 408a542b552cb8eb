use simplelog::*;

/// Logs to stderr, so that results printed on stdout stay clean.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), ::log::SetLoggerError> { 
    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    cb.set_level_color(Level::Debug, Some(Color::Cyan));
    let config = cb.build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto
    )
}

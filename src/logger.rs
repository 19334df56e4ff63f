use simplelog::{Config, LevelFilter, SimpleLogger};

pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = SimpleLogger::init(level, Config::default());
}

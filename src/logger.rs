use log::{Level, LevelFilter, Metadata, Record};

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Prints `LEVEL - message`; warnings and errors go to stderr.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error | Level::Warn => eprintln!("{} - {}", record.level(), record.args()),
            _ => println!("{} - {}", record.level(), record.args()),
        }
    }

    fn flush(&self) {}
}

/// Map `-v`/`-q` counts onto a level, starting from Info.
pub fn level_for(verbose: u8, quiet: u8) -> LevelFilter {
    match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-2 => LevelFilter::Error,
        -1 => LevelFilter::Warn,
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

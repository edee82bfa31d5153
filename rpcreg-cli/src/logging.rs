use std::io::Write;

use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        // nowhere left to report a failed write
        let _ = writeln!(
            handle,
            "{} [{}] [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

pub fn init_logging(filter: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(filter);

    Ok(())
}

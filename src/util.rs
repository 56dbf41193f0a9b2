// Console logging and small display helpers.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// `log` backend writing to the browser console at the matching console level.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}: {}", record.level(), record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs [`ConsoleLogger`]. A second call only changes the level.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        clog("console logger already installed");
    }
    log::set_max_level(level);
}

/// Coordinates rounded to two decimals, without trailing zeros.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return crate::opcode::BlockValue::Number(n).to_string();
    }
    let rounded = (n * 100.0).round() / 100.0;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

//! `log` backend for the console.

use log::{LevelFilter, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        cfg!(feature = "console_logger")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_line(&format!(
                "{} {}: {}",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = console, js_name = log)]
            fn console_log(s: &str);
        }

        fn write_line(line: &str) {
            console_log(line);
        }
    } else {
        fn write_line(line: &str) {
            eprintln!("{}", line);
        }
    }
}

/// Installs the console logger at `level`.
///
/// Only the first call has any effect; the `log` facade can't be given a
/// second logger.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// src/log.rs
//
// Append-only debug log under the scratch dir. Timestamps are elapsed time
// since first use, which is all a single-session tool needs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::STORE_DIR;

static WRITE_GUARD: Mutex<()> = Mutex::new(());
static EPOCH: OnceLock<Instant> = OnceLock::new();

fn stamp() -> String {
    let e = EPOCH.get_or_init(Instant::now).elapsed();
    let secs = e.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        e.subsec_millis()
    )
}

pub fn write_log(level: &str, msg: &str) {
    let line = format!("[{}][{}] {}\n", stamp(), level, msg);

    let Ok(_guard) = WRITE_GUARD.lock() else {
        return;
    };
    let path = PathBuf::from(STORE_DIR).join("debug.log");
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = f.write_all(line.as_bytes());
    }
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}

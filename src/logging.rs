//! Logging setup and the crate's conditional logging macros.
//!
//! `debug_log!` and `info_log!` forward to `log` in debug builds and compile to
//! nothing in release builds. Warnings go through `log::warn!` directly.

use chrono::Local;
use log::LevelFilter;
use std::io::Write;

pub const LOG_TARGET: &str = "word_scramble";

/// Installs `env_logger` at `default_level`; `RUST_LOG` overrides it.
pub fn init(default_level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init(LevelFilter::Debug);
        init(LevelFilter::Warn);
        debug_log!("logging initialised for {}", LOG_TARGET);
        info_log!("logging initialised");
    }
}

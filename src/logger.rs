use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose_mode(verbose: bool) {
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

/// Report line on stdout, prefixed with the success glyph.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("{} {}", $crate::constants::SUCCESS_PREFIX, format!($($arg)*));
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            println!("{} {}", $crate::constants::VERBOSE_PREFIX, format!($($arg)*));
        }
    };
}

/// Failures are part of the report, so they go to stdout like the rest of it.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        println!("{} Error: {}", $crate::constants::ERROR_PREFIX, format!($($arg)*));
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("{} {}", $crate::constants::WARNING_PREFIX, format!($($arg)*));
    };
}

use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    fn debug_enabled() -> bool {
        LOGGER.get().is_some_and(|logger| logger.debug)
    }

    pub fn debug(message: &str) {
        if Self::debug_enabled() {
            eprintln!("[debug] {message}");
        }
    }

    pub fn debug_fmt(args: std::fmt::Arguments) {
        if Self::debug_enabled() {
            eprintln!("[debug] {args}");
        }
    }

    /// Warnings are always shown, regardless of the debug flag.
    pub fn warn(message: &str) {
        eprintln!("Warning: {message}");
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::core::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}

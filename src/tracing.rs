//! Tiny leveled logging in the spirit of the `tracing` crate.
//!
//! Lines go to stderr so that stdout carries only the conversion result or
//! the user-facing diagnostic.

use std::fmt;
use std::io::Write;

/// Write one `[LEVEL] message` line. Logging failures are dropped.
pub(crate) fn write_line<W: Write>(mut writer: W, level: &str, args: fmt::Arguments<'_>) {
    let _ = writeln!(writer, "[{}] {}", level, args);
}

/// Logs an error message to stderr.
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::write_line(
            ::std::io::stderr().lock(),
            "ERROR",
            format_args!($($arg)*),
        )
    };
}

//! Small macros shared by the command dispatcher.

/// Writes a line to `$dest`, returning [`crate::exit_code::ERROR`] from the
/// enclosing function if the stream is gone.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

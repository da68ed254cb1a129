//! Integral-gated output.

use std::io::{self, Write};

use super::predicates::Integral;

/// Writes `value` and a newline to `out`.
///
/// ```
/// let mut out: Vec<u8> = Vec::new();
/// concord_core::write_integral(&mut out, 14u16).unwrap();
/// assert_eq!(out, b"14\n");
/// ```
///
/// ```compile_fail
/// concord_core::write_integral(&mut Vec::new(), 1.5f64).unwrap();
/// ```
pub fn write_integral<W, T>(out: &mut W, value: T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Integral,
{
    writeln!(out, "{}", value)
}

/// Prints `value` on its own line to stdout and flushes.
///
/// # Errors
///
/// Returns the write or flush error, e.g. when stdout is a full device.
pub fn print_integral<T: Integral>(value: T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_integral(&mut stdout, value)?;
    stdout.flush()
}

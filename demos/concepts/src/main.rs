//! Concepts Demo
//!
//! Exercises the constraint vocabulary: a uniform-type sum, a
//! multipliable product, and a print gated on integral types.
//!
//! The compile-time assertions below are the demo's test suite; the
//! program does not build if any of them fails.

use concord::prelude::*;
use concord::{ConcordError, DemoConfig};
use tracing::info;

// Mixed operand types are never multipliable
const _: () = assert!(!multipliable!(i32, f64));

// A single operand is not enough
const _: () = assert!(!multipliable!(i32));

// `i32 * i32` is an `i32`
const _: () = assert!(multipliable!(i32, i32));

fn main() -> concord::Result<()> {
    let config = DemoConfig::load_or_default("concord.toml")
        .map_err(|e| ConcordError::Config(e.to_string()))?;
    concord::console::init(config.log_filter.as_deref());

    let result = add!(1, 2, 3, 4, 5);
    info!(event = "add", result);
    print_integral(result)?;

    let m = multiply!(2, 3, 4);
    info!(event = "multiply", result = m);
    print_integral(m)?;

    print_integral(config.print_value)?;

    Ok(())
}

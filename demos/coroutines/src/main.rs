//! Coroutines Demo
//!
//! Pulls a counter generator to exhaustion with the `done()`/`next()`
//! loop, writing each value followed by a space. A producer fault ends the
//! demo with a non-zero exit instead of a panic.

use std::io::{self, Write};

use concord::prelude::*;
use concord::{ConcordError, DemoConfig};
use tracing::info;

fn main() -> concord::Result<()> {
    let config = DemoConfig::load_or_default("concord.toml")
        .map_err(|e| ConcordError::Config(e.to_string()))?;
    concord::console::init(config.log_filter.as_deref());

    let range = config.counter;
    info!(event = "counter_started", start = range.start, end = range.end);

    let mut g = counter(range.start, range.end);
    let mut stdout = io::stdout().lock();
    let mut pulled = 0u64;
    while !g.done() {
        if let Some(value) = g.try_next()? {
            write!(stdout, "{} ", value)?;
            pulled += 1;
        }
    }
    stdout.flush()?;

    info!(event = "counter_finished", pulled);
    Ok(())
}

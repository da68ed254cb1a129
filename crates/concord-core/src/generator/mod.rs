//! Pull-based lazy sequences.
//!
//! A [`Producer`] is a suspendable body lowered to a state machine; a
//! [`Generator`] owns one on the heap and exposes `done()` and `next()`.
//! Control passes to the producer only inside a pull and back to the
//! consumer at each yield, all on the calling thread.

mod counter;
mod handle;
mod producer;


pub use crate::error::GeneratorError;
pub use counter::{counter, Counter};
pub use handle::{Generator, Suspension};
pub use producer::{FromFn, Producer, Step};

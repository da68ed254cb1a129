//! The consumer-side handle that owns a producer frame.

use std::any::{type_name, Any};
use std::fmt;
use std::iter::FusedIterator;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace, warn};

use super::producer::{FromFn, Producer, Step};
use crate::error::GeneratorError;

/// Where a frame is suspended.
///
/// Transitions only move forward: `Initial` to `Yielded` or `Final`, then
/// `Yielded` to `Yielded` or `Final`. A sequence is never restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suspension {
    /// Created; no producer code has run yet.
    Initial,
    /// Paused at a yield; [`Generator::current`] holds the value.
    Yielded,
    /// The producer returned. The last yielded value is stale but kept.
    Final,
}

/// A lazy, pull-based sequence driven by a [`Producer`].
///
/// The handle exclusively owns the producer's heap frame. It is not
/// `Clone`; moving it transfers the frame, and dropping it drops the frame
/// exactly once whatever its state. The frame starts suspended before its
/// first statement, so nothing runs until the first pull.
///
/// # Pulling
///
/// ```
/// use concord_core::counter;
///
/// let mut g = counter(1, 5);
/// let mut seen = Vec::new();
/// while !g.done() {
///     if let Some(v) = g.next() {
///         seen.push(v);
///     }
/// }
/// assert_eq!(seen, [1, 2, 3, 4]);
/// ```
///
/// # Misuse and faults
///
/// Resuming a finished generator is reported as
/// [`GeneratorError::Exhausted`] by [`resume`](Generator::resume), and as
/// `None` by the iterator. A producer panic is caught at the resume
/// boundary: the generator becomes done and `resume` returns
/// [`GeneratorError::ProducerPanicked`], as does
/// [`try_next`](Generator::try_next). The iterator re-raises that fault as
/// a panic in the consumer.
///
/// # Ownership
///
/// A generator cannot be duplicated:
///
/// ```compile_fail
/// use concord_core::{counter, Generator};
///
/// let g = counter(1, 5);
/// let copy: Generator<i32> = g.clone();
/// ```
///
/// ```compile_fail
/// use concord_core::counter;
///
/// let g = counter(1, 5);
/// let moved = g;
/// assert!(!g.done());
/// # drop(moved);
/// ```
pub struct Generator<T> {
    frame: Box<dyn Producer<Yield = T>>,
    value: Option<T>,
    state: Suspension,
}

impl<T> Generator<T> {
    /// Boxes `producer` into a frame suspended at its entry point.
    pub fn new<P>(producer: P) -> Self
    where
        P: Producer<Yield = T> + 'static,
    {
        debug!(event = "frame_created", producer = type_name::<P>());
        Self {
            frame: Box::new(producer),
            value: None,
            state: Suspension::Initial,
        }
    }

    /// A generator whose body is `f`; returning `None` completes it.
    ///
    /// ```
    /// use concord_core::Generator;
    ///
    /// let mut n = 0;
    /// let squares = Generator::from_fn(move || {
    ///     n += 1;
    ///     (n <= 3).then(|| n * n)
    /// });
    /// assert_eq!(squares.collect::<Vec<_>>(), [1, 4, 9]);
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut() -> Option<T> + 'static,
        T: 'static,
    {
        Self::new(FromFn::new(f))
    }

    /// True once the producer has run to completion.
    #[inline]
    pub fn done(&self) -> bool {
        self.state == Suspension::Final
    }

    /// The suspension point the frame is currently parked at.
    #[inline]
    pub fn state(&self) -> Suspension {
        self.state
    }

    /// The last value the producer yielded, if any.
    ///
    /// Still available after the generator is done.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Runs the frame to its next suspension point.
    ///
    /// Returns [`Suspension::Yielded`] with the value available through
    /// [`current`](Generator::current), or [`Suspension::Final`] when the
    /// producer returned.
    pub fn resume(&mut self) -> Result<Suspension, GeneratorError> {
        if self.done() {
            return Err(GeneratorError::Exhausted);
        }

        trace!(event = "frame_resumed", from = ?self.state);

        let frame = &mut self.frame;
        match panic::catch_unwind(AssertUnwindSafe(|| frame.resume())) {
            Ok(Step::Yield(value)) => {
                self.value = Some(value);
                self.state = Suspension::Yielded;
            }
            Ok(Step::Complete) => {
                debug!(event = "frame_completed");
                self.state = Suspension::Final;
            }
            Err(payload) => {
                self.state = Suspension::Final;
                let message = panic_message(payload.as_ref());
                warn!(event = "producer_panicked", message = %message);
                return Err(GeneratorError::ProducerPanicked(message));
            }
        }

        Ok(self.state)
    }
}

impl<T: Clone> Generator<T> {
    /// Like [`Iterator::next`], but a producer fault is returned instead of
    /// re-raised.
    ///
    /// ```
    /// use concord_core::{Generator, GeneratorError};
    ///
    /// let mut g = Generator::from_fn(|| -> Option<u8> { panic!("sensor offline") });
    /// assert_eq!(
    ///     g.try_next(),
    ///     Err(GeneratorError::ProducerPanicked("sensor offline".into()))
    /// );
    /// assert!(g.done());
    /// assert_eq!(g.try_next(), Ok(None));
    /// ```
    pub fn try_next(&mut self) -> Result<Option<T>, GeneratorError> {
        match self.resume() {
            Ok(Suspension::Yielded) => Ok(self.value.clone()),
            Ok(_) | Err(GeneratorError::Exhausted) => Ok(None),
            Err(fault) => Err(fault),
        }
    }
}

impl<T: Clone> Iterator for Generator<T> {
    type Item = T;

    /// Resumes the producer and returns a copy of the value it yields.
    ///
    /// Returns `None` when the producer completes without yielding, and on
    /// every call after that.
    fn next(&mut self) -> Option<T> {
        match self.try_next() {
            Ok(value) => value,
            Err(fault) => panic!("generator {fault}"),
        }
    }
}

impl<T: Clone> FusedIterator for Generator<T> {}

impl<T> Drop for Generator<T> {
    fn drop(&mut self) {
        debug!(event = "frame_dropped", state = ?self.state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("state", &self.state)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

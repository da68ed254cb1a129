//! The resumable side of a generator.

use std::fmt;
use std::marker::PhantomData;

/// Outcome of running a producer to its next suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    /// Paused at a yield, publishing one value.
    Yield(T),
    /// Ran to the end of its body; no more values.
    Complete,
}

/// A producer body lowered to an explicit state machine.
///
/// Locals live in fields and a discriminator records the yield point to
/// continue from. Each call to [`resume`](Producer::resume) runs the
/// linear segment up to the next yield or to the end of the body.
///
/// A [`Generator`](super::Generator) never resumes a producer again after
/// it returns [`Step::Complete`].
pub trait Producer {
    /// Type of the yielded values.
    type Yield;

    /// Runs to the next suspension point.
    fn resume(&mut self) -> Step<Self::Yield>;
}

/// A producer backed by a closure; `None` ends the sequence.
///
/// Created by [`Generator::from_fn`](super::Generator::from_fn).
pub struct FromFn<F, T> {
    body: F,
    _yield: PhantomData<fn() -> T>,
}

impl<F, T> FromFn<F, T>
where
    F: FnMut() -> Option<T>,
{
    pub fn new(body: F) -> Self {
        Self {
            body,
            _yield: PhantomData,
        }
    }
}

impl<F, T> Producer for FromFn<F, T>
where
    F: FnMut() -> Option<T>,
{
    type Yield = T;

    #[inline]
    fn resume(&mut self) -> Step<T> {
        match (self.body)() {
            Some(value) => Step::Yield(value),
            None => Step::Complete,
        }
    }
}

impl<F, T> fmt::Debug for FromFn<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

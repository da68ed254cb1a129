//! Half-open integer range as a generator.

use super::handle::Generator;
use super::producer::{Producer, Step};
use crate::constraint::Integral;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResumePoint {
    Entry,
    AfterYield,
}

/// Producer for `while start < end { yield start; start += 1; }`.
#[derive(Debug, Clone)]
pub struct Counter<T> {
    start: T,
    end: T,
    point: ResumePoint,
}

impl<T: Integral> Counter<T> {
    pub fn new(start: T, end: T) -> Self {
        Self {
            start,
            end,
            point: ResumePoint::Entry,
        }
    }
}

impl<T: Integral> Producer for Counter<T> {
    type Yield = T;

    fn resume(&mut self) -> Step<T> {
        // The increment belongs to the loop body after the yield.
        if self.point == ResumePoint::AfterYield {
            self.start = self.start + T::one();
        }

        if self.start < self.end {
            self.point = ResumePoint::AfterYield;
            Step::Yield(self.start)
        } else {
            Step::Complete
        }
    }
}

/// Yields `start, start + 1, ..., end - 1`, then completes.
///
/// An empty range (`start >= end`) yields nothing: the first pull
/// completes the generator.
///
/// ```
/// use concord_core::counter;
///
/// assert_eq!(counter(1u8, 5).collect::<Vec<_>>(), [1, 2, 3, 4]);
///
/// let mut empty = counter(7, 7);
/// assert!(!empty.done());
/// assert_eq!(empty.next(), None);
/// assert!(empty.done());
/// ```
pub fn counter<T: Integral>(start: T, end: T) -> Generator<T> {
    Generator::new(Counter::new(start, end))
}

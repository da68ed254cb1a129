//! Concord Core - Constraint vocabulary and lazy generators
//!
//! This crate provides two independent abstractions:
//! - Compile-time predicates over tuple packs, and the constrained
//!   variadic reducers built on them (`add`, `multiply`)
//! - A pull-based, move-only [`Generator`] driven by a resumable producer

#[macro_use]
mod macros;

pub mod constraint;
pub mod error;
pub mod generator;

#[cfg(test)]
mod test_utils;

pub use constraint::{
    add, multiply, print_integral, write_integral, AtLeastTwo, ClosedMul, Integral, Multipliable,
    SameTypePack,
};
pub use error::{ConcordError, Result};
pub use generator::{
    counter, Counter, FromFn, Generator, GeneratorError, Producer, Step, Suspension,
};

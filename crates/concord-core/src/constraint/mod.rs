//! Constraint vocabulary for arithmetic-style variadic operations.
//!
//! A pack is a tuple of operands. Each predicate is a marker trait over
//! packs and is the conjunction of independent clauses:
//!
//! | Predicate | Clauses |
//! |---|---|
//! | [`SameTypePack`] | every operand has one type |
//! | [`Multipliable`] | uniform type, [`AtLeastTwo`] operands, [`ClosedMul`] operand type |
//! | [`Integral`] | a built-in integer type |
//!
//! A call that violates a clause does not compile, and the diagnostic
//! names the clause.

mod pack;
mod predicates;
mod print;
mod reduce;

#[cfg(test)]
mod tests;

pub use pack::{AtLeastTwo, SameTypePack};
pub use predicates::{ClosedMul, Integral, Multipliable};
pub use print::{print_integral, write_integral};
pub use reduce::{add, multiply};

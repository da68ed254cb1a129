//! Concord - Constraint predicates and lazy generators in Rust
//!
//! # Example
//!
//! ```rust
//! use concord::prelude::*;
//!
//! assert_eq!(add!(1, 2, 3, 4, 5), 15);
//! assert_eq!(multiply!(2, 3, 4), 24);
//!
//! let values: Vec<i32> = counter(1, 5).collect();
//! assert_eq!(values, [1, 2, 3, 4]);
//! ```

// Call-site and predicate macros
pub use concord_core::{add, integral, multipliable, multiply, same_type_pack};

// Constraint vocabulary
pub use concord_core::constraint;
pub use concord_core::{
    print_integral, write_integral, AtLeastTwo, ClosedMul, Integral, Multipliable, SameTypePack,
};

// Generators
pub use concord_core::generator;
pub use concord_core::{counter, Counter, FromFn, Generator, Producer, Step, Suspension};

// Errors and configuration
pub use concord_config::{ConfigError, CounterConfig, DemoConfig};
pub use concord_core::{ConcordError, GeneratorError, Result};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{add, integral, multipliable, multiply, same_type_pack};
    pub use super::{counter, Generator, Producer, Step, Suspension};
    pub use super::{print_integral, Integral, Multipliable, SameTypePack};
}

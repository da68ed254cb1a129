//! Call-site macros for the constraint vocabulary.
//!
//! The reducers take a tuple pack; these macros give them a variadic
//! call syntax. The predicate macros evaluate to a `const bool`, so they
//! can back compile-time assertions:
//!
//! ```
//! use concord_core::{integral, multipliable, same_type_pack};
//!
//! const _: () = assert!(multipliable!(i32, i32));
//! const _: () = assert!(!multipliable!(i32, f64));
//! const _: () = assert!(!multipliable!(i32));
//! const _: () = assert!(same_type_pack!(u8, u8, u8));
//! const _: () = assert!(!integral!(f32));
//! ```

/// Sums one or more operands of a single type, left to right.
///
/// ```
/// assert_eq!(concord_core::add!(1, 2, 3, 4, 5), 15);
/// ```
#[macro_export]
macro_rules! add {
    ($($operand:expr),+ $(,)?) => {
        $crate::constraint::add(($($operand,)+))
    };
}

/// Multiplies two or more operands of a single type, left to right.
///
/// ```
/// assert_eq!(concord_core::multiply!(2, 3, 4), 24);
/// ```
#[macro_export]
macro_rules! multiply {
    ($($operand:expr),+ $(,)?) => {
        $crate::constraint::multiply(($($operand,)+))
    };
}

/// `true` iff every listed type is the same type.
#[macro_export]
macro_rules! same_type_pack {
    ($($ty:ty),+ $(,)?) => {
        $crate::__probe_bound!(($($ty,)+) => $crate::constraint::SameTypePack)
    };
}

/// `true` iff a call `multiply!(x0: T0, x1: T1, ...)` would be admitted.
#[macro_export]
macro_rules! multipliable {
    ($($ty:ty),+ $(,)?) => {
        $crate::__probe_bound!(($($ty,)+) => $crate::constraint::Multipliable)
    };
}

/// `true` iff the type is a built-in integer type.
#[macro_export]
macro_rules! integral {
    ($ty:ty) => {
        $crate::__probe_bound!($ty => $crate::constraint::Integral)
    };
}

// Resolves to the inherent `HOLDS` when the bound is met and to the
// trait default otherwise. Only meaningful for concrete types.
#[doc(hidden)]
#[macro_export]
macro_rules! __probe_bound {
    ($ty:ty => $($bound:tt)+) => {{
        #[allow(dead_code)]
        struct Probe<P: ?Sized>(::core::marker::PhantomData<P>);

        trait Fallback {
            const HOLDS: bool = false;
        }

        impl<P: ?Sized> Fallback for Probe<P> {}

        #[allow(dead_code)]
        impl<P: ?Sized + $($bound)+> Probe<P> {
            const HOLDS: bool = true;
        }

        <Probe<$ty>>::HOLDS
    }};
}

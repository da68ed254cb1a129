//! Named predicates built from the pack clauses.

use std::fmt::Display;
use std::ops::Mul;

use num_traits::PrimInt;

use super::pack::{AtLeastTwo, SameTypePack};

/// The closed-multiplication clause: `T * T` exists and yields `T`.
///
/// An operator returning an unrelated type fails this clause even though
/// the expression itself is well-formed.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not closed under `*`",
    label = "missing `*` or `*` returns another type",
    note = "`{Self} * {Self}` must exist and return `{Self}`"
)]
pub trait ClosedMul: Mul<Output = Self> + Sized {}

impl<T> ClosedMul for T where T: Mul<Output = T> {}

/// A pack admitted by [`multiply`](super::multiply).
///
/// Holds iff the pack is uniform, has at least two operands, and its
/// operand type is closed under `*`. The operator is allowed to panic.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a multipliable pack",
    note = "requires a uniform type, at least two operands, and `*` returning the operand type"
)]
pub trait Multipliable: SameTypePack + AtLeastTwo {
    /// Left-fold product of the pack.
    fn product(self) -> Self::Element;
}

impl<P> Multipliable for P
where
    P: SameTypePack + AtLeastTwo,
    P::Element: ClosedMul,
{
    #[inline]
    fn product(self) -> P::Element {
        self.fold(|acc, x| acc * x)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Built-in integer types: `i8..=i128`, `isize`, `u8..=u128`, `usize`.
///
/// Sealed; floating-point and user-defined types never satisfy it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a built-in integral type",
    label = "expected an integer"
)]
pub trait Integral: PrimInt + Display + sealed::Sealed + 'static {}

macro_rules! impl_integral {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Integral for $ty {}
        )+
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

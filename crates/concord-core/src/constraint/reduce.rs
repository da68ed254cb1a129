//! Constrained variadic reducers.

use std::ops::Add;

use super::pack::SameTypePack;
use super::predicates::Multipliable;

/// Left-fold sum of a uniform pack of one or more operands.
///
/// ```
/// use concord_core::add;
///
/// assert_eq!(add((1, 2, 3, 4, 5)), 15);
/// assert_eq!(add((2.5,)), 2.5);
/// ```
///
/// Mixed operand types are rejected on the uniformity clause:
///
/// ```compile_fail
/// let _ = concord_core::add!(1, 2.0);
/// ```
#[inline]
pub fn add<P>(pack: P) -> P::Element
where
    P: SameTypePack,
    P::Element: Add<Output = P::Element>,
{
    pack.fold(|acc, x| acc + x)
}

/// Left-fold product of a [`Multipliable`] pack.
///
/// ```
/// use concord_core::multiply;
///
/// assert_eq!(multiply((2, 3, 4)), 24);
/// assert_eq!(concord_core::multiply!(2u64, 3, 4, 5), 120);
/// ```
///
/// Mixed operand types are rejected on the uniformity clause:
///
/// ```compile_fail
/// let _ = concord_core::multiply!(1, 2.0);
/// ```
///
/// A single operand is rejected on the arity clause:
///
/// ```compile_fail
/// let _ = concord_core::multiply!(1);
/// ```
///
/// A type without `*` is rejected:
///
/// ```compile_fail
/// #[derive(Clone, Copy)]
/// struct Opaque;
///
/// let _ = concord_core::multiply((Opaque, Opaque));
/// ```
///
/// So is a `*` whose result is not the operand type:
///
/// ```compile_fail
/// #[derive(Clone, Copy)]
/// struct Tally(i32);
///
/// impl std::ops::Mul for Tally {
///     type Output = i32;
///
///     fn mul(self, rhs: Tally) -> i32 {
///         self.0 * rhs.0
///     }
/// }
///
/// let _ = concord_core::multiply((Tally(2), Tally(3)));
/// ```
#[inline]
pub fn multiply<P>(pack: P) -> P::Element
where
    P: Multipliable,
{
    pack.product()
}

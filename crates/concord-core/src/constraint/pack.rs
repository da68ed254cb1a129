//! Tuple packs and their structural clauses.

/// A pack whose operands all share one type.
///
/// Implemented for `(T,)` through twelve copies of `T`. A tuple with two
/// distinct element types has no impl, so the clause fails at compile time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a uniform-type pack",
    label = "operands of different types",
    note = "every operand of the pack must have the same type"
)]
pub trait SameTypePack: Sized {
    /// The shared operand type.
    type Element;

    /// Number of operands in the pack.
    const ARITY: usize;

    /// Left fold: `f(f(f(x0, x1), x2), ...)`. A single-operand pack
    /// folds to that operand.
    fn fold<F>(self, f: F) -> Self::Element
    where
        F: FnMut(Self::Element, Self::Element) -> Self::Element;
}

/// The arity clause: the pack carries at least two operands.
///
/// Independent of the operand types; uniformity is checked separately.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has too few operands",
    label = "arity below two",
    note = "a multiplication pack needs at least two operands"
)]
pub trait AtLeastTwo {}

macro_rules! elem {
    ($_slot:ident, $ty:ident) => {
        $ty
    };
}

macro_rules! impl_same_type_pack {
    ($arity:literal; $first:ident $(, $rest:ident)*) => {
        impl<T> SameTypePack for (T, $(elem!($rest, T),)*) {
            type Element = T;

            const ARITY: usize = $arity;

            #[inline]
            #[allow(unused_mut, unused_variables)]
            fn fold<F>(self, mut f: F) -> T
            where
                F: FnMut(T, T) -> T,
            {
                let ($first, $($rest,)*) = self;
                let acc = $first;
                $(let acc = f(acc, $rest);)*
                acc
            }
        }
    };
}

impl_same_type_pack!(1; x0);
impl_same_type_pack!(2; x0, x1);
impl_same_type_pack!(3; x0, x1, x2);
impl_same_type_pack!(4; x0, x1, x2, x3);
impl_same_type_pack!(5; x0, x1, x2, x3, x4);
impl_same_type_pack!(6; x0, x1, x2, x3, x4, x5);
impl_same_type_pack!(7; x0, x1, x2, x3, x4, x5, x6);
impl_same_type_pack!(8; x0, x1, x2, x3, x4, x5, x6, x7);
impl_same_type_pack!(9; x0, x1, x2, x3, x4, x5, x6, x7, x8);
impl_same_type_pack!(10; x0, x1, x2, x3, x4, x5, x6, x7, x8, x9);
impl_same_type_pack!(11; x0, x1, x2, x3, x4, x5, x6, x7, x8, x9, x10);
impl_same_type_pack!(12; x0, x1, x2, x3, x4, x5, x6, x7, x8, x9, x10, x11);

macro_rules! impl_at_least_two {
    ($($ty:ident),+) => {
        impl<$($ty),+> AtLeastTwo for ($($ty,)+) {}
    };
}

impl_at_least_two!(A, B);
impl_at_least_two!(A, B, C);
impl_at_least_two!(A, B, C, D);
impl_at_least_two!(A, B, C, D, E);
impl_at_least_two!(A, B, C, D, E, F);
impl_at_least_two!(A, B, C, D, E, F, G);
impl_at_least_two!(A, B, C, D, E, F, G, H);
impl_at_least_two!(A, B, C, D, E, F, G, H, I);
impl_at_least_two!(A, B, C, D, E, F, G, H, I, J);
impl_at_least_two!(A, B, C, D, E, F, G, H, I, J, K);
impl_at_least_two!(A, B, C, D, E, F, G, H, I, J, K, L);

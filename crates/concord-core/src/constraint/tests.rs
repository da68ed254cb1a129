//! Tests for the constraint vocabulary.

use super::*;
use crate::test_utils::{DifferentReturnType, FullDevice, NoMultiply, NotNoexcept, ValidClass};
use proptest::prelude::*;

// ============================================================================
// Compile-time assertions
// ============================================================================

// Mixed types are not allowed
const _: () = assert!(!multipliable!(i32, f64));

// At least two operands
const _: () = assert!(!multipliable!(i32));

// The operand type has a `*`
const _: () = assert!(multipliable!(i32, i32));
const _: () = assert!(multipliable!(ValidClass, ValidClass));
const _: () = assert!(!multipliable!(NoMultiply, NoMultiply));

// A panicking `*` is still admitted
const _: () = assert!(multipliable!(NotNoexcept, NotNoexcept));

// `*` returns the operand type
const _: () = assert!(!multipliable!(DifferentReturnType, DifferentReturnType));

// Distinct scalar pairs never form a pack
const _: () = {
    assert!(!multipliable!(i32, i64));
    assert!(!multipliable!(u8, i8));
    assert!(!multipliable!(f32, f64));
    assert!(!multipliable!(u64, usize));
    assert!(!multipliable!(i32, u32, i32));
};

const _: () = {
    assert!(integral!(i8));
    assert!(integral!(i16));
    assert!(integral!(i32));
    assert!(integral!(i64));
    assert!(integral!(i128));
    assert!(integral!(isize));
    assert!(integral!(u8));
    assert!(integral!(u16));
    assert!(integral!(u32));
    assert!(integral!(u64));
    assert!(integral!(u128));
    assert!(integral!(usize));
    assert!(!integral!(f32));
    assert!(!integral!(f64));
    assert!(!integral!(bool));
    assert!(!integral!(char));
    assert!(!integral!(ValidClass));
};

// ============================================================================
// Packs
// ============================================================================

mod pack {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(<(i32,) as SameTypePack>::ARITY, 1);
        assert_eq!(<(i32, i32, i32) as SameTypePack>::ARITY, 3);
        assert_eq!(<(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) as SameTypePack>::ARITY, 12);
    }

    #[test]
    fn test_uniformity() {
        assert!(same_type_pack!(i32));
        assert!(same_type_pack!(String, String));
        assert!(!same_type_pack!(String, &'static str));
        assert!(!same_type_pack!(i32, i32, i64));
    }

    #[test]
    fn test_fold_is_left_associative() {
        let folded = (10, 3, 2).fold(|acc, x| acc - x);
        assert_eq!(folded, 5);

        let trail = ("a".to_string(), "b".to_string(), "c".to_string())
            .fold(|acc, x| format!("({acc}{x})"));
        assert_eq!(trail, "((ab)c)");
    }

    #[test]
    fn test_single_operand_fold() {
        let folded = (7,).fold(|_, _| unreachable!("single operand never combines"));
        assert_eq!(folded, 7);
    }
}

// ============================================================================
// Reducers
// ============================================================================

mod reduce {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add((1, 2, 3, 4, 5)), 15);
        assert_eq!(add!(1, 2, 3, 4, 5), 15);
        assert_eq!(add!(42), 42);
        assert_eq!(add!(0.5, 0.25), 0.75);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply((2, 3, 4)), 24);
        assert_eq!(multiply!(2, 3, 4), 24);
        assert_eq!(multiply!(1u8, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2), 2);
    }

    #[test]
    fn test_multiply_stubs() {
        assert_eq!(multiply((ValidClass::of(3), ValidClass::of(-4))), ValidClass::of(-12));
        assert_eq!(
            multiply((NotNoexcept::of(2), NotNoexcept::of(5), NotNoexcept::of(7))),
            NotNoexcept::of(70)
        );
    }

    #[test]
    #[should_panic(expected = "stub product overflowed")]
    fn test_panicking_operator_propagates() {
        multiply!(NotNoexcept::of(i64::MAX), NotNoexcept::of(2));
    }

    #[test]
    fn test_noexcept_operator_wraps() {
        assert_eq!(
            multiply!(ValidClass::of(i64::MAX), ValidClass::of(2)),
            ValidClass::of(-2)
        );
    }

    #[test]
    fn test_different_return_type_still_has_operator() {
        // The expression is well-formed; only the pack predicate rejects it.
        let product: i32 = DifferentReturnType::of(3) * DifferentReturnType::of(4);
        assert_eq!(product, 0);
    }
}

// ============================================================================
// Integral print
// ============================================================================

mod print {
    use super::*;

    fn render<T: Integral>(value: T) -> String {
        let mut out: Vec<u8> = Vec::new();
        write_integral(&mut out, value).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_every_width() {
        assert_eq!(render(14i8), "14\n");
        assert_eq!(render(-14i16), "-14\n");
        assert_eq!(render(14i32), "14\n");
        assert_eq!(render(i64::MIN), format!("{}\n", i64::MIN));
        assert_eq!(render(i128::MAX), format!("{}\n", i128::MAX));
        assert_eq!(render(14isize), "14\n");
        assert_eq!(render(u8::MAX), "255\n");
        assert_eq!(render(14u16), "14\n");
        assert_eq!(render(14u32), "14\n");
        assert_eq!(render(u64::MAX), format!("{}\n", u64::MAX));
        assert_eq!(render(u128::MAX), format!("{}\n", u128::MAX));
        assert_eq!(render(14usize), "14\n");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let err = write_integral(&mut FullDevice, 14i64).unwrap_err();
        assert_eq!(err.to_string(), "no space left on device");
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A uniform integral pack multiplies to the mathematical product.
    #[test]
    fn product_matches_mathematical_product(
        a in -1_000i64..1_000,
        b in -1_000i64..1_000,
        c in -1_000i64..1_000,
    ) {
        prop_assert_eq!(multiply((a, b)), a * b);
        prop_assert_eq!(multiply((a, b, c)), a * b * c);
        prop_assert_eq!(
            multiply((a as i128, b as i128, c as i128)),
            (a as i128) * (b as i128) * (c as i128)
        );
    }

    /// `add` agrees with the iterator sum over the same operands.
    #[test]
    fn sum_matches_iterator_sum(
        a in any::<i32>(),
        b in any::<i32>(),
        c in any::<i32>(),
        d in any::<i32>(),
    ) {
        let (a, b, c, d) = (a as i64, b as i64, c as i64, d as i64);
        prop_assert_eq!(add((a, b, c, d)), [a, b, c, d].iter().sum::<i64>());
    }
}

//! Property-based tests for the fraction types.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Fraction, Rational};
    use fractio_domain::{GcdDomain, IntegralDomain, OrderedDomain};
    use fractio_integers::Int;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn frac(n: i64, d: i64) -> Fraction<Int> {
        Fraction::new(Int::new(n), Int::new(d)).unwrap()
    }

    fn rat(n: i64, d: i64) -> Rational<Int> {
        Rational::new(Int::new(n), Int::new(d)).unwrap()
    }

    fn is_canonical(r: &Rational<Int>) -> bool {
        let reduced = r.numerator().gcd(r.denominator()).is_one();
        let sign_ok = OrderedDomain::signum(r.denominator()) == 1;
        let zero_ok = !r.numerator().is_zero() || r.denominator().is_one();
        reduced && sign_ok && zero_ok
    }

    proptest! {
        // Canonical-form invariants

        #[test]
        fn construction_is_canonical(n in small_int(), d in non_zero_int()) {
            prop_assert!(is_canonical(&rat(n, d)));
        }

        #[test]
        fn sum_and_difference_are_canonical(
            a in small_int(), b in non_zero_int(),
            c in small_int(), d in non_zero_int(),
        ) {
            let x = rat(a, b);
            let y = rat(c, d);
            prop_assert!(is_canonical(&x.add_ref(&y)));
            prop_assert!(is_canonical(&x.sub_ref(&y)));
        }

        #[test]
        fn product_is_canonical(
            a in small_int(), b in non_zero_int(),
            c in small_int(), d in non_zero_int(),
        ) {
            // Covers negative numerators explicitly: the cross-reduced
            // multiply skips normalization and must still come out
            // canonical.
            let p = rat(a, b).mul_ref(&rat(c, d));
            prop_assert!(is_canonical(&p));
            prop_assert_eq!(p, rat(a * c, b * d));
        }

        #[test]
        fn quotient_is_canonical(
            a in small_int(), b in non_zero_int(),
            c in non_zero_int(), d in non_zero_int(),
        ) {
            let q = rat(a, b).divide(&rat(c, d)).unwrap();
            prop_assert!(is_canonical(&q));
            prop_assert_eq!(q, rat(a * d, b * c));
        }

        // Round trips

        #[test]
        fn double_negate_is_identity(n in small_int(), d in non_zero_int()) {
            let r = rat(n, d);
            prop_assert_eq!(r.negate().negate(), r);
            let f = frac(n, d);
            prop_assert_eq!(f.negate().negate(), f);
        }

        #[test]
        fn double_reciprocate_is_identity(n in non_zero_int(), d in non_zero_int()) {
            let r = rat(n, d);
            prop_assert_eq!(r.reciprocate().unwrap().reciprocate().unwrap(), r);
            let f = frac(n, d);
            prop_assert_eq!(f.reciprocate().unwrap().reciprocate().unwrap(), f);
        }

        #[test]
        fn add_then_subtract_is_identity(
            a in small_int(), b in non_zero_int(),
            c in small_int(), d in non_zero_int(),
        ) {
            let (x, y) = (rat(a, b), rat(c, d));
            prop_assert_eq!(x.add_ref(&y).sub_ref(&y), x);
            let (x, y) = (frac(a, b), frac(c, d));
            prop_assert_eq!(x.add_ref(&y).sub_ref(&y), x);
        }

        // Power identities

        #[test]
        fn pow_zero_is_one(n in non_zero_int(), d in non_zero_int()) {
            prop_assert_eq!(rat(n, d).pow(0).unwrap(), rat(1, 1));
            prop_assert_eq!(frac(n, d).pow(0).unwrap(), frac(1, 1));
        }

        #[test]
        fn negative_pow_is_reciprocal_of_pow(
            n in non_zero_int(), d in non_zero_int(), k in 0i32..6,
        ) {
            let r = rat(n, d);
            prop_assert_eq!(
                r.pow(-k).unwrap(),
                r.pow(k).unwrap().reciprocate().unwrap()
            );
            let f = frac(n, d);
            prop_assert_eq!(
                f.pow(-k).unwrap(),
                f.pow(k).unwrap().reciprocate().unwrap()
            );
        }

        // The two types agree on values

        #[test]
        fn fraction_and_rational_agree(
            a in small_int(), b in non_zero_int(),
            c in small_int(), d in non_zero_int(),
        ) {
            prop_assert_eq!(frac(a, b) == frac(c, d), rat(a, b) == rat(c, d));
            prop_assert_eq!(frac(a, b).cmp(&frac(c, d)), rat(a, b).cmp(&rat(c, d)));
            prop_assert_eq!(frac(a, b).signum(), rat(a, b).signum());
        }

        #[test]
        fn abs_is_nonnegative(a in small_int(), b in non_zero_int()) {
            prop_assert!(rat(a, b).abs().signum() >= 0);
            prop_assert!(frac(a, b).abs().signum() >= 0);
            prop_assert!(is_canonical(&rat(a, b).abs()));
        }
    }
}

//! Property-based tests for the operator laws.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        add, id, inv, is_close, map, mul, neg, neg_list, prod, reduce, relu, relu_back, sigmoid,
        sum, zip_with,
    };

    // Magnitudes kept small enough that sums stay well inside `is_close`.
    fn small_float() -> impl Strategy<Value = f64> {
        -100.0f64..100.0f64
    }

    fn non_zero_float() -> impl Strategy<Value = f64> {
        prop_oneof![(-100.0f64..-0.1f64), (0.1f64..100.0f64)]
    }

    fn small_list() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(small_float(), 0..20)
    }

    proptest! {
        #[test]
        fn add_commutative(x in small_float(), y in small_float()) {
            prop_assert_eq!(add(x, y), add(y, x));
        }

        #[test]
        fn mul_commutative(x in small_float(), y in small_float()) {
            prop_assert_eq!(mul(x, y), mul(y, x));
        }

        #[test]
        fn neg_involution(x in any::<f64>().prop_filter("not nan", |v| !v.is_nan())) {
            prop_assert_eq!(neg(neg(x)), x);
        }

        #[test]
        fn sigmoid_bounded(x in any::<f64>().prop_filter("not nan", |v| !v.is_nan())) {
            let s = sigmoid(x);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn sigmoid_symmetric(x in small_float()) {
            prop_assert!(is_close(sigmoid(x) + sigmoid(-x), 1.0));
        }

        #[test]
        fn relu_non_negative(x in small_float()) {
            prop_assert!(relu(x) >= 0.0);
            if x > 0.0 {
                prop_assert_eq!(relu(x), x);
            }
        }

        #[test]
        fn relu_back_gates_upstream(x in small_float(), d in small_float()) {
            let expected = if x > 0.0 { d } else { 0.0 };
            prop_assert_eq!(relu_back(x, d), expected);
        }

        #[test]
        fn inv_involution(x in non_zero_float()) {
            let back = inv(inv(x).unwrap()).unwrap();
            prop_assert!(is_close(back, x));
        }

        #[test]
        fn map_id_is_identity(ls in small_list()) {
            let out = map(id::<f64>)(&ls);
            prop_assert_eq!(out.len(), ls.len());
            prop_assert_eq!(out, ls);
        }

        #[test]
        fn sum_of_negation(ls in small_list()) {
            prop_assert!(is_close(sum(&neg_list(&ls)), -sum(&ls)));
        }

        #[test]
        fn zip_with_length_is_min(a in small_list(), b in small_list()) {
            prop_assert_eq!(zip_with(add)(&a, &b).len(), a.len().min(b.len()));
        }

        #[test]
        fn prod_matches_reduce(ls in prop::collection::vec(-2.0f64..2.0f64, 0..10)) {
            prop_assert_eq!(prod(&ls), reduce(mul, 1.0)(&ls));
        }
    }
}

use std::cmp::Ordering;

use forma::{Form, Numeric, chain::sort_numerics, compare, embed, equal, less_or_equal};
use proptest::prelude::*;

fn whole() -> impl Strategy<Value = i32> {
    -40i32..=40
}

fn any_form() -> impl Strategy<Value = Form> {
    (prop::collection::vec(whole(), 0..4), prop::collection::vec(whole(), 0..4))
        .prop_map(|(left, right)| {
            let mut form = Form::new();
            for l in left {
                form.push_left(l);
            }
            for r in right {
                form.push_right(r);
            }
            form
        })
}

fn well_formed_form() -> impl Strategy<Value = Form> {
    (prop::collection::vec(whole(), 0..4), prop::collection::vec(1i32..=20, 0..4), whole())
        .prop_map(|(left, gaps, floor)| {
            let base = left.iter().max().copied().unwrap_or(floor);
            let mut form = Form::new();
            for l in left {
                form.push_left(l);
            }
            for gap in gaps {
                form.push_right(base + gap);
            }
            form
        })
}

fn well_formed_numeric() -> impl Strategy<Value = Numeric> {
    prop_oneof![whole().prop_map(Numeric::Integer), well_formed_form().prop_map(Numeric::Form)]
}

proptest! {
    #[test]
    fn every_value_equals_itself(form in any_form(), n in whole()) {
        let value = Numeric::Form(form);
        prop_assert!(equal(&value, &value));
        prop_assert!(equal(&Numeric::Integer(n), &Numeric::Integer(n)));
    }

    #[test]
    fn well_formed_generator_is_well_formed(form in well_formed_form()) {
        prop_assert!(form.is_well_formed());
    }

    #[test]
    fn equality_is_mutual_order(x in any_form(), y in any_form()) {
        let (x, y) = (Numeric::Form(x), Numeric::Form(y));
        prop_assert_eq!(equal(&x, &y), less_or_equal(&x, &y) && less_or_equal(&y, &x));
        prop_assert_eq!(equal(&x, &y), equal(&y, &x));
    }

    #[test]
    fn well_formed_values_are_totally_ordered(x in well_formed_numeric(), y in well_formed_numeric()) {
        prop_assert!(less_or_equal(&x, &y) || less_or_equal(&y, &x));
        prop_assert_eq!(compare(&x, &y), compare(&y, &x).reverse());
    }

    #[test]
    fn order_is_transitive(x in well_formed_numeric(),
                           y in well_formed_numeric(),
                           z in well_formed_numeric()) {
        if less_or_equal(&x, &y) && less_or_equal(&y, &z) {
            prop_assert!(less_or_equal(&x, &z));
        }
    }

    #[test]
    fn embedded_integers_compare_natively(a in -1000i32..1000, b in -1000i32..1000) {
        let (fa, fb) = (Numeric::Form(embed(a)), Numeric::Form(embed(b)));
        prop_assert_eq!(compare(&fa, &fb), a.cmp(&b));
        prop_assert_eq!(compare(&fa, &Numeric::Integer(b)), a.cmp(&b));
    }

    #[test]
    fn embedding_round_trips_through_approximation(n in -1_000_000i32..1_000_000) {
        prop_assert_eq!(embed(n).approximate(), f64::from(n));
        prop_assert_eq!(compare(&Numeric::Form(embed(n)), &Numeric::Integer(n)), Ordering::Equal);
    }

    #[test]
    fn every_integer_equals_its_embedding(a in any::<i32>(), b in any::<i32>()) {
        prop_assert!(equal(&Numeric::Integer(a), &Numeric::Form(embed(a))));
        prop_assert_eq!(compare(&Numeric::Form(embed(a)), &Numeric::Form(embed(b))), a.cmp(&b));
        prop_assert_eq!(compare(&Numeric::Form(embed(a)), &Numeric::Integer(b)), a.cmp(&b));
    }

    #[test]
    fn sorting_arbitrary_values_keeps_them_all(
        forms in prop::collection::vec(any_form(), 10..40),
        integers in prop::collection::vec(whole(), 10..30)
    ) {
        let mut values: Vec<Numeric> = forms.into_iter().map(Numeric::Form).collect();
        values.extend(integers.iter().copied().map(Numeric::Integer));
        let count = values.len();

        sort_numerics(&mut values);
        prop_assert_eq!(values.len(), count);

        let mut sorted: Vec<i32> = values.iter()
                                         .filter_map(|v| match v {
                                             Numeric::Integer(n) => Some(*n),
                                             Numeric::Form(_) => None,
                                         })
                                         .collect();
        let mut expected = integers;
        sorted.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn sorting_well_formed_values_orders_them(values in prop::collection::vec(well_formed_numeric(), 0..40)) {
        let mut values = values;
        sort_numerics(&mut values);
        for pair in values.windows(2) {
            prop_assert!(less_or_equal(&pair[0], &pair[1]));
        }
    }
}

//! Property tests spanning coercion and checking.

use proptest::prelude::*;
use typeform::{Registry, Value};

proptest! {
    #[test]
    fn parsed_integers_check_against_range(
        n in any::<i32>(),
        lo in -500i32..0,
        hi in 0i32..500,
    ) {
        let reg = Registry::global();
        let ty = reg.int32_range(lo, hi).unwrap();
        let value = ty.parse(&n.to_string());
        prop_assert_eq!(&value, &Value::from(n));
        prop_assert_eq!(ty.accepts(&value), (lo..=hi).contains(&n));
    }

    #[test]
    fn interning_is_stable(names in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let reg = Registry::global();
        let mut seen = std::collections::HashSet::new();
        let fields: Vec<_> = names
            .iter()
            .filter(|n| seen.insert(n.as_str()))
            .map(|n| (n.as_str(), reg.str()))
            .collect();
        let a = reg.struct_of(fields.clone()).unwrap();
        let b = reg.struct_of(fields).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn failing_list_element_is_reported(
        items in prop::collection::vec(any::<bool>(), 1..20),
        bad in 0usize..20,
    ) {
        let reg = Registry::global();
        let ty = reg.list(reg.bool());
        let bad = bad % items.len();
        let mut values: Vec<Value> = items.into_iter().map(Value::from).collect();
        values[bad] = Value::from("nope");
        let err = ty.check(&Value::list(values)).unwrap();
        prop_assert_eq!(err.dotted_path(), bad.to_string());
    }
}

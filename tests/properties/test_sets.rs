use super::strategy::{element_strategy, set_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn add_then_contains(mut s in set_strategy(), x in element_strategy()) {
        s.add(x);
        prop_assert!(s.contains(&x));
    }

    #[test]
    fn delete_then_not_contains(mut s in set_strategy(), x in element_strategy()) {
        s.delete(&x);
        prop_assert!(!s.contains(&x));
    }

    #[test]
    fn clone_is_independent(s in set_strategy(), x in element_strategy()) {
        let mut cloned = s.clone();
        prop_assert_eq!(cloned.len(), s.len());
        prop_assert_eq!(&cloned, &s);

        let had = s.contains(&x);
        cloned.delete(&x);
        cloned.add(x + 100);
        prop_assert_eq!(s.contains(&x), had);
        prop_assert!(!s.contains(&(x + 100)));
    }

    #[test]
    fn values_are_unique(s in set_strategy()) {
        let mut values = s.values();
        values.sort();
        values.dedup();
        prop_assert_eq!(values.len(), s.len());
    }
}

use generics::maps;

use super::strategy::{element_strategy, map_strategy, maybe_map_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn keys_values_and_len_agree(m in maybe_map_strategy()) {
        let len = m.as_ref().map(|m| m.len());
        prop_assert_eq!(maps::keys(m.as_ref()).map(|k| k.len()), len);
        prop_assert_eq!(maps::values(m.as_ref()).map(|v| v.len()), len);
    }

    #[test]
    fn select_yields_matching_subset(m in map_strategy(), pivot in element_strategy()) {
        let f = |k: &i8, v: &u8| *k < pivot || *v % 2 == 0;
        let selected = maps::select(Some(&m), f).unwrap_or_default();
        for (k, v) in &selected {
            prop_assert_eq!(m.get(k), Some(v));
            prop_assert!(f(k, v));
        }
        prop_assert_eq!(selected.len(), maps::count(Some(&m), f));
    }

    #[test]
    fn equal_is_reflexive(m in maybe_map_strategy()) {
        prop_assert!(maps::equal(m.as_ref(), m.as_ref()));
    }

    #[test]
    fn equal_is_symmetric(m in maybe_map_strategy(), n in maybe_map_strategy()) {
        prop_assert_eq!(
            maps::equal(m.as_ref(), n.as_ref()),
            maps::equal(n.as_ref(), m.as_ref())
        );
    }

    #[test]
    fn collect_keeps_keys(m in maybe_map_strategy()) {
        let collected = maps::collect(m.as_ref(), |v| u16::from(*v) * 2);
        prop_assert!(maps::equal_by(m.as_ref(), collected.as_ref(), |v, w| u16::from(*v) * 2 == *w));
    }
}

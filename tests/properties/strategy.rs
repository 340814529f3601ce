use std::collections::HashMap;

use generics::sets::Set;
use proptest::collection::{hash_map, vec};
use proptest::option;
use proptest::prelude::{any, Strategy};

const MAX_LEN: usize = 32;

/// Small values, so that duplicates and shared keys are common.
pub(crate) fn element_strategy() -> impl Strategy<Value = i8> {
    -16_i8..16
}

pub(crate) fn seq_strategy() -> impl Strategy<Value = Vec<i8>> {
    vec(element_strategy(), 0..MAX_LEN)
}

/// Sequences which may also be absent.
pub(crate) fn maybe_seq_strategy() -> impl Strategy<Value = Option<Vec<i8>>> {
    option::of(seq_strategy())
}

pub(crate) fn map_strategy() -> impl Strategy<Value = HashMap<i8, u8>> {
    hash_map(element_strategy(), any::<u8>(), 0..MAX_LEN)
}

pub(crate) fn maybe_map_strategy() -> impl Strategy<Value = Option<HashMap<i8, u8>>> {
    option::of(map_strategy())
}

pub(crate) fn set_strategy() -> impl Strategy<Value = Set<i8>> {
    seq_strategy().prop_map(|elements| elements.into_iter().collect())
}

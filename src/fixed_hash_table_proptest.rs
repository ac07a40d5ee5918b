#![cfg(test)]

// Property tests for FixedHashTable kept inside the crate so they can use
// test-only hashers alongside the internal slot layout.

use crate::error::TableError;
use crate::fixed_hash_table::{FixedHashTable, SlotHandle};
use crate::hash::SlotHasher;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize),
    Get(usize),
    Contains(String),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=8, proptest::collection::vec("[0-9]{1,6}", 1..=12)).prop_flat_map(|(cap, pool)| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            3 => idx.clone().prop_map(OpI::Insert),
            2 => idx.clone().prop_map(OpI::Get),
            1 => "[0-9]{1,6}".prop_map(OpI::Contains),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (cap, pool.clone(), ops))
    })
}

// Drives one scenario against a HashMap model.
// Invariants exercised across random operation sequences:
// - Inserting into a full table fails with CapacityExhausted; otherwise a
//   present key fails with DuplicateKey; otherwise the insert succeeds.
// - `get` fails with EmptyTable iff nothing is stored, returns the entry for
//   present keys and NotFound for absent ones; `find` agrees with the handle
//   returned at insert time.
// - Iteration yields the model's key set in strictly increasing slot order.
// - `occupied_count() <= capacity()` and equals the model size after each op.
fn run_state_machine<H: SlotHasher>(
    mut sut: FixedHashTable<String, H>,
    pool: &[String],
    ops: Vec<OpI>,
    mut on_insert: impl FnMut(usize, SlotHandle),
) -> Result<(), TestCaseError> {
    let cap = sut.capacity();
    let mut model: HashMap<String, SlotHandle> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i) => {
                let k = pool[i].clone();
                let before = model.len();
                match sut.insert(k.clone()) {
                    Ok(h) => {
                        prop_assert!(before < cap, "insert must fail on a full table");
                        prop_assert!(!model.contains_key(&k), "insert must fail on duplicate");
                        on_insert(before, h);
                        model.insert(k, h);
                    }
                    Err(TableError::CapacityExhausted { capacity }) => {
                        prop_assert_eq!(capacity, cap);
                        prop_assert_eq!(before, cap);
                    }
                    Err(TableError::DuplicateKey { key }) => {
                        prop_assert!(before < cap, "full check precedes duplicate check");
                        prop_assert!(model.contains_key(&key));
                    }
                    Err(e) => prop_assert!(false, "unexpected insert error: {:?}", e),
                }
            }
            OpI::Get(i) => {
                let k = &pool[i];
                match sut.get(k) {
                    Ok(e) => {
                        prop_assert_eq!(e, k);
                        let h = sut.find(k).expect("find agrees with get");
                        prop_assert_eq!(Some(&h), model.get(k));
                    }
                    Err(TableError::EmptyTable) => prop_assert!(model.is_empty()),
                    Err(TableError::NotFound { .. }) => {
                        prop_assert!(!model.is_empty());
                        prop_assert!(!model.contains_key(k));
                    }
                    Err(e) => prop_assert!(false, "unexpected get error: {:?}", e),
                }
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Iterate => {
                let slots: Vec<usize> = sut.iter().map(|(h, _)| h.index()).collect();
                prop_assert!(slots.windows(2).all(|w| w[0] < w[1]));
                let s_keys: BTreeSet<_> = sut.iter().map(|(_, k)| k.clone()).collect();
                let m_keys: BTreeSet<_> = model.keys().cloned().collect();
                prop_assert_eq!(s_keys, m_keys);
            }
        }

        // Post-conditions after each op
        prop_assert!(sut.occupied_count() <= sut.capacity());
        prop_assert_eq!(sut.occupied_count(), model.len());
        for (k, h) in &model {
            prop_assert_eq!(h.entry(&sut), Some(k));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((cap, pool, ops) in arb_scenario()) {
        run_state_machine(FixedHashTable::new(cap), &pool, ops, |_, _| {})?;
    }
}

// Every key hashes to slot 0, so each probe walks the whole occupied run.
#[derive(Clone, Default)]
struct ConstHasher;
impl SlotHasher for ConstHasher {
    fn slot_index(&self, _key: &str, _capacity: usize) -> Result<usize, TableError> {
        Ok(0)
    }
}

// Property: same invariants under total collision. Since nothing is ever
// removed, the n-th successful insert must land in slot n.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((cap, pool, ops) in arb_scenario()) {
        let sut = FixedHashTable::with_hasher(cap, ConstHasher);
        let mut misplaced = Vec::new();
        run_state_machine(sut, &pool, ops, |n, h| {
            if h.index() != n {
                misplaced.push((n, h.index()));
            }
        })?;
        prop_assert!(misplaced.is_empty(), "misplaced inserts: {:?}", misplaced);
    }
}

// Property: the default hasher always stays in range and is deterministic.
proptest! {
    #[test]
    fn prop_hash_in_range(key in "[0-9]{1,19}", cap in 1usize..10_000) {
        let t: FixedHashTable<String> = FixedHashTable::new(cap);
        let a = t.hash(&key).unwrap();
        prop_assert!(a < cap);
        prop_assert_eq!(a, t.hash(&key).unwrap());
    }
}

//! Property-based invariant tests for the ordered entity collection.
//!
//! 1. After add(e), get(key) returns e.
//! 2. A second add with the same key leaves the stored entity unchanged.
//! 3. update on an absent key fails with EntityNotFound.
//! 4. update on a present key replaces the value, not the position.
//! 5. remove on an absent key leaves the count unchanged.
//! 6. remove shifts later positions down by one.
//! 7. Mutations never change the receiver.

use epg_core::{CoreError, Keyed, OrderedEntityCollection};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: String,
    payload: u32,
}

impl Keyed for Entry {
    fn key(&self) -> &str {
        &self.id
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn entry_strategy() -> impl Strategy<Value = Entry> {
    ("[a-h]{1,2}", any::<u32>()).prop_map(|(id, payload)| Entry { id, payload })
}

fn entries(max_len: usize) -> impl Strategy<Value = Vec<Entry>> {
    proptest::collection::vec(entry_strategy(), 0..=max_len)
}

fn build(items: &[Entry]) -> OrderedEntityCollection<Entry> {
    OrderedEntityCollection::from_entities(items.to_vec()).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. add / first-write-wins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn add_then_get_returns_entity(items in entries(20), extra in entry_strategy()) {
        let base = build(&items);
        prop_assume!(!base.contains_key(&extra.id));

        let next = base.add(extra.clone()).unwrap();
        prop_assert_eq!(next.get(&extra.id), Some(&extra));
        prop_assert_eq!(next.len(), base.len() + 1);
        prop_assert_eq!(next.index_of(&extra.id), Some(base.len()));
    }

    #[test]
    fn second_add_is_ignored(first in entry_strategy(), payload in any::<u32>()) {
        let once = OrderedEntityCollection::new().add(first.clone()).unwrap();
        let twice = once
            .add(Entry { id: first.id.clone(), payload })
            .unwrap();
        prop_assert_eq!(twice.get(&first.id), Some(&first));
        prop_assert_eq!(twice.len(), 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. update
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn update_absent_is_not_found(items in entries(20), extra in entry_strategy()) {
        let base = build(&items);
        prop_assume!(!base.contains_key(&extra.id));

        let result = base.update(extra.clone());
        prop_assert_eq!(result, Err(CoreError::EntityNotFound { key: extra.id }));
    }

    #[test]
    fn update_present_keeps_position(items in entries(20), pick in any::<prop::sample::Index>(), payload in any::<u32>()) {
        let base = build(&items);
        prop_assume!(!base.is_empty());

        let index = pick.index(base.len());
        let target = base.at(index).unwrap().clone();
        let replacement = Entry { id: target.id.clone(), payload };

        let next = base.update(replacement.clone()).unwrap();
        prop_assert_eq!(next.index_of(&target.id), Some(index));
        prop_assert_eq!(next.get(&target.id), Some(&replacement));
        prop_assert_eq!(next.len(), base.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-7. remove / immutability
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn remove_absent_keeps_count(items in entries(20), key in "[x-z]{3}") {
        let base = build(&items);
        let next = base.remove(&key);
        prop_assert_eq!(next.len(), base.len());
        prop_assert_eq!(next, base);
    }

    #[test]
    fn remove_shifts_followers(items in entries(20), pick in any::<prop::sample::Index>()) {
        let base = build(&items);
        prop_assume!(!base.is_empty());

        let index = pick.index(base.len());
        let removed = base.at(index).unwrap().id.clone();
        let next = base.remove(&removed);

        prop_assert_eq!(next.len(), base.len() - 1);
        prop_assert!(next.get(&removed).is_none());
        for (pos, key) in base.keys().enumerate().skip(index + 1) {
            prop_assert_eq!(next.index_of(key), Some(pos - 1));
        }
    }

    #[test]
    fn mutations_leave_receiver_untouched(items in entries(20), extra in entry_strategy()) {
        let base = build(&items);
        let snapshot = base.to_vec();

        let _ = base.add(extra.clone());
        let _ = base.update(extra.clone());
        let _ = base.remove(&extra.id);

        prop_assert_eq!(base.to_vec(), snapshot);
    }
}

//! The recursive class-aware tree differ.
//!
//! Walks two trees in lock-step along the key set of the original tree and
//! dispatches each sibling pair through an exhaustive match over the shape
//! cases from [`crate::shape`]. A diff entry is emitted only when a case
//! reports inequality; nested diffs that come back empty prune their parent
//! key entirely, so the result never contains an empty container.

use serde_json::{Map, Value};

use crate::class_set::ClassSet;
use crate::deep_eq::arrays_equal;
use crate::shape::{classify, ValueShape};

/// Compute the class-aware structural diff of two trees.
///
/// Returns a partial tree holding, per path, the portion of `original` no
/// longer present in `updated`, or `None` when nothing differs. The result's
/// key set is a subset of `original`'s at every depth; keys and class tokens
/// introduced only in `updated` are never reported.
///
/// If either side is `null` at the top of a call, the whole `original` is
/// returned as the diff. This is a defensive fallback for a missing subtree,
/// not a recursive case.
pub fn diff(original: &Value, updated: &Value) -> Option<Value> {
    if original.is_null() || updated.is_null() {
        return Some(original.clone());
    }

    // Same instance: nothing to compare.
    if std::ptr::eq(original, updated) {
        return None;
    }

    diff_pair(original, updated)
}

/// Diff two trees given directly as maps.
///
/// Returns `None` when no key differs; an empty map is never returned.
pub fn diff_objects(
    original: &Map<String, Value>,
    updated: &Map<String, Value>,
) -> Option<Map<String, Value>> {
    let mut diff = Map::new();

    // Keys unique to `updated` are additions and stay invisible.
    for (key, original_value) in original {
        let Some(updated_value) = updated.get(key) else {
            // Key removed in `updated`: the original value surfaces verbatim.
            diff.insert(key.clone(), original_value.clone());
            continue;
        };

        if let Some(changed) = diff_pair(original_value, updated_value) {
            diff.insert(key.clone(), changed);
        }
    }

    if diff.is_empty() {
        None
    } else {
        Some(diff)
    }
}

/// Dispatch one sibling pair through the shape cases.
///
/// Mismatched shapes (say, a class string against a plain object) take the
/// strict-comparison arm rather than a dedicated case; whether divergent
/// shapes are an intended input is unresolved upstream, so the behavior is
/// kept as-is.
fn diff_pair(original: &Value, updated: &Value) -> Option<Value> {
    match (classify(original), classify(updated)) {
        // Both plain objects: recurse. An empty nested diff prunes the key.
        (ValueShape::Object, ValueShape::Object) => original
            .as_object()
            .zip(updated.as_object())
            .and_then(|(orig, upd)| diff_objects(orig, upd))
            .map(Value::Object),

        // Both class lists: one-directional token difference.
        (ValueShape::ClassList, ValueShape::ClassList) => ClassSet::from_value(original)
            .removed_from(&ClassSet::from_value(updated))
            .map(Value::String),

        // Both generic arrays: any inequality reports the whole original
        // array, never an element-level diff.
        (ValueShape::Array, ValueShape::Array) => original
            .as_array()
            .zip(updated.as_array())
            .filter(|(orig, upd)| !arrays_equal(orig, upd))
            .map(|(orig, _)| Value::Array(orig.clone())),

        // Shape mismatch, or both primitives: strict comparison.
        _ => (original != updated).then(|| original.clone()),
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    /// Arbitrary JSON values at config-tree scale: shallow, small fanout.
    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|n| Value::Number(n.into())),
            "[a-z]{1,6}( [a-z]{1,6}){0,3}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    fn arb_tree() -> impl Strategy<Value = Value> {
        prop::collection::btree_map("[a-z]{1,4}", arb_value(), 0..5)
            .prop_map(|map| Value::Object(map.into_iter().collect()))
    }

    /// Every key of `diff` must exist in `original`, at every depth where
    /// the differ recursed.
    fn keys_are_subset(diff: &Value, original: &Value) -> bool {
        match (diff, original) {
            (Value::Object(diff_map), Value::Object(orig_map)) => {
                diff_map.iter().all(|(key, diff_value)| {
                    orig_map
                        .get(key)
                        .is_some_and(|orig_value| keys_are_subset(diff_value, orig_value))
                })
            }
            _ => true,
        }
    }

    proptest! {
        #[test]
        fn structurally_equal_trees_never_diff(tree in arb_tree()) {
            let copy = tree.clone();
            prop_assert_eq!(diff(&tree, &copy), None);
        }

        #[test]
        fn diff_keys_are_a_subset_of_original_keys(
            original in arb_tree(),
            updated in arb_tree(),
        ) {
            if let Some(result) = diff(&original, &updated) {
                prop_assert!(keys_are_subset(&result, &original));
            }
        }

        #[test]
        fn class_diff_is_sound(
            original in "[a-z ]{0,40}",
            updated in "[a-z ]{0,40}",
        ) {
            let orig = ClassSet::from_value(&Value::String(original));
            let upd = ClassSet::from_value(&Value::String(updated));

            match orig.removed_from(&upd) {
                None => {
                    // Nothing removed: every original token survives.
                    prop_assert!(orig.iter().all(|token| upd.contains(token)));
                }
                Some(joined) => {
                    let reported: Vec<&str> = joined.split(' ').collect();
                    let mut seen = std::collections::HashSet::new();
                    for token in &reported {
                        prop_assert!(orig.contains(token));
                        prop_assert!(!upd.contains(token));
                        prop_assert!(seen.insert(*token), "duplicate token {}", token);
                    }
                }
            }
        }
    }
}

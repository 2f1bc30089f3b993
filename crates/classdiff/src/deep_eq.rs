//! Deep equality for generic (non-class) arrays.

use serde_json::Value;

use crate::obj_diff::diff_objects;

/// Compare two generic arrays element by element.
///
/// Unequal lengths compare unequal. Object elements count as equal when the
/// recursive differ reports no differences, which inherits the differ's key
/// policy: keys present only in `b`'s element are not inspected. Array
/// elements recurse into this same check; anything else compares by value.
///
/// Array differences are never reported element-wise. A caller that finds
/// two arrays unequal reports the entire original array.
pub fn arrays_equal(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).all(|(left, right)| match (left, right) {
        (Value::Object(l), Value::Object(r)) => diff_objects(l, r).is_none(),
        (Value::Array(l), Value::Array(r)) => arrays_equal(l, r),
        _ => left == right,
    })
}

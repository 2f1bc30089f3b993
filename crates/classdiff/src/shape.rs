//! Structural classification of values into comparison shapes.
//!
//! The differ selects a comparison strategy per sibling pair. Classification
//! is structural, not semantic: any string is class-list eligible, and so is
//! any array whose elements are all strings, whatever the content.

use serde_json::Value;

/// The comparison shape of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueShape {
    /// A plain key-value object (nested tree).
    Object,
    /// A class-list candidate: a string, or an array of strings.
    ClassList,
    /// A generic array holding at least one non-string element.
    Array,
    /// Everything else: numbers, booleans, null.
    Primitive,
}

/// Classify a value into its comparison shape.
///
/// Precedence: plain object first, then class-list eligibility, then generic
/// array, then primitive. An empty array counts as a class list; it
/// normalizes to an empty token set.
pub fn classify(value: &Value) -> ValueShape {
    match value {
        Value::Object(_) => ValueShape::Object,
        Value::String(_) => ValueShape::ClassList,
        Value::Array(items) => {
            if items.iter().all(Value::is_string) {
                ValueShape::ClassList
            } else {
                ValueShape::Array
            }
        }
        _ => ValueShape::Primitive,
    }
}

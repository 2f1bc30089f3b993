//! Class-aware structural diff for nested configuration trees.
//!
//! Compares two nested key-value trees (`serde_json` objects) and produces a
//! partial tree holding, for each path, the portion of the *original* value
//! that is no longer present in the *updated* value. Leaves holding class
//! lists (a space-delimited string, or an array of strings, as produced by
//! Tailwind-style theme configs) are diffed at the granularity of individual
//! tokens; every other value shape falls back to whole-value comparison.
//!
//! The diff is one-directional: keys and tokens introduced only in the
//! updated tree never appear in the result, which answers "what existing
//! configuration was changed or removed," not "what changed in both
//! directions."
//!
//! Everything here is a pure function of its inputs. Recursion depth is
//! bounded by the depth of the input trees; `serde_json::Value` is acyclic
//! by construction, so no cycle guard is needed.
//!
//! # Key Types
//!
//! - [`diff`] / [`diff_objects`] -- The recursive differ; `None` means no differences
//! - [`ClassSet`] -- Normalized, insertion-ordered class token set
//! - [`ValueShape`] / [`classify`] -- Structural classification of a value
//! - [`arrays_equal`] -- Deep equality for generic (non-class) arrays

pub mod class_set;
pub mod deep_eq;
pub mod obj_diff;
pub mod shape;

pub use class_set::ClassSet;
pub use deep_eq::arrays_equal;
pub use obj_diff::{diff, diff_objects};
pub use shape::{classify, ValueShape};

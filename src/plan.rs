//! Convergence planning: reduce a declared list to the items that still need
//! action.

use std::collections::HashSet;
use std::hash::Hash;

/// Filter `declared` down to the items for which `is_satisfied` is false.
///
/// Declaration order is preserved and duplicates are removed; the result is
/// always a subset of the input. An empty declared list yields an empty plan,
/// and callers treat an empty plan as a no-op (the underlying tool is never
/// invoked).
pub fn plan<'a, T, F>(declared: &'a [T], mut is_satisfied: F) -> Vec<&'a T>
where
    T: Eq + Hash,
    F: FnMut(&T) -> bool,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(declared.len());
    declared
        .iter()
        .filter(|&item| seen.insert(item) && !is_satisfied(item))
        .collect()
}

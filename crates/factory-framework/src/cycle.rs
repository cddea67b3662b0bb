//! # Cyclic Index Resolver
//!
//! Maps an arbitrary index onto a fixed-length ordered sequence by
//! wraparound, for callers that address a bounded list (e.g. a fixed set of
//! named states) with an index that may exceed its length.

/// Resolves `index` into `values` by wraparound.
///
/// Returns `None` for an empty slice; otherwise `values[index % len]`, the
/// closed form of repeatedly subtracting the length until the index is in
/// range. `index` is unsigned, so negative indices are unrepresentable. Pure
/// function, no side effects.
pub fn value_at_index<T>(index: usize, values: &[T]) -> Option<&T> {
    if values.is_empty() {
        return None;
    }

    Some(&values[index % values.len()])
}

// The from-scratch ordering algorithms: field comparator, merge sort, and
// binary search. See the precondition note on `binary_search` before mixing
// it with `merge_sort` output.
mod compare;
mod merge;
mod search;


pub use compare::compare_values;
pub use merge::merge_sort;
pub use search::binary_search;

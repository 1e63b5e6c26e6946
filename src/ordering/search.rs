use crate::record::StudentRecord;
use crate::schema::FieldName;

/// Iterative binary search for an exact match on `key`.
///
/// Precondition (the caller's responsibility, not checked here): `records`
/// must already be sorted ascending by `key` under plain byte-wise string
/// ordering, because that is the ordering this search uses to pick a half.
/// This is deliberately NOT the numeric-aware ordering of `merge_sort`; a
/// collection ordered by `merge_sort` on a numeric-looking key (where "9"
/// sorts before "10") is not a valid input here. Callers that want to search
/// must first order with `str` comparison, as `RecordStore::search` does.
/// On unsorted input the result is unspecified.
///
/// Returns the first index probed whose field equals `target` — if the key
/// has duplicates, not necessarily the lowest such index — or `None`.
pub fn binary_search(records: &[StudentRecord], target: &str, key: FieldName) -> Option<usize> {
    if records.is_empty() {
        return None;
    }

    let mut left = 0usize;
    let mut right = records.len() - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        let value = records[mid].field(key);

        if value == target {
            return Some(mid);
        } else if value < target {
            left = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            right = mid - 1;
        }
    }

    None
}

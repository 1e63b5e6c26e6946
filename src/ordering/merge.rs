use std::cmp::Ordering;

use crate::record::StudentRecord;
use crate::schema::FieldName;

use super::compare_values;

/// Classic non-in-place merge sort over `key`, using [`compare_values`].
///
/// Returns a new sequence; the input is untouched. O(n log n) comparisons,
/// O(n) extra space per merge level. The merge takes from the left half only
/// when its front is strictly less; ties go to the RIGHT half. That
/// right-side tie-break is part of the contract: equal-key output order is
/// reproducible but not classically stable, and tests pin it exactly.
///
/// The algorithm accepts any field; the {ID, Last Name, Class} restriction
/// on the user-facing sort lives in the store.
pub fn merge_sort(records: &[StudentRecord], key: FieldName) -> Vec<StudentRecord> {
    if records.len() <= 1 {
        return records.to_vec();
    }

    let mid = records.len() / 2;
    let left = merge_sort(&records[..mid], key);
    let right = merge_sort(&records[mid..], key);

    merge(left, right, key)
}

fn merge(
    left: Vec<StudentRecord>,
    right: Vec<StudentRecord>,
    key: FieldName,
) -> Vec<StudentRecord> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left_iter = left.into_iter();
    let mut right_iter = right.into_iter();
    let mut left_front = left_iter.next();
    let mut right_front = right_iter.next();

    loop {
        match (left_front.take(), right_front.take()) {
            (Some(l), Some(r)) => {
                if compare_values(l.field(key), r.field(key)) == Ordering::Less {
                    merged.push(l);
                    left_front = left_iter.next();
                    right_front = Some(r);
                } else {
                    merged.push(r);
                    right_front = right_iter.next();
                    left_front = Some(l);
                }
            }
            (Some(l), None) => {
                merged.push(l);
                merged.extend(left_iter);
                break;
            }
            (None, Some(r)) => {
                merged.push(r);
                merged.extend(right_iter);
                break;
            }
            (None, None) => break,
        }
    }

    merged
}

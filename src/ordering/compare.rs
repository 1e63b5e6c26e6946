use std::cmp::Ordering;

/// Orders two field values with numeric coercion.
///
/// If both values parse as floating point they compare numerically, so
/// "9" < "10" on numeric-looking columns like ID and Grade. If either side
/// fails to parse (or the numeric comparison is undefined, as with NaN),
/// both compare as text: byte-wise, case-sensitive, no locale folding. The
/// empty string never parses, so it sorts before any non-empty string.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    if let (Ok(x), Ok(y)) = (a.parse::<f64>(), b.parse::<f64>()) {
        if let Some(ordering) = x.partial_cmp(&y) {
            return ordering;
        }
    }
    a.cmp(b)
}

//! Sort engine: pure ordering of rows by one column.

use std::cmp::Ordering;

use log::trace;
use unicase::UniCase;

use crate::value::{Row, Value};

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// State after selecting `key` while `current` is active.
    ///
    /// Selecting the active column flips its direction; any other column
    /// becomes active in ascending order.
    pub fn next(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(state) if state.key == key => SortState {
                key: state.key.clone(),
                direction: state.direction.toggled(),
            },
            _ => SortState::ascending(key),
        }
    }
}

/// Compare two field values for sorting.
///
/// - Null or absent values sort last in both directions.
/// - Strings compare case-insensitively, lowercase first on ties.
/// - Numbers compare by exact value, ints and floats alike.
/// - Any other pairing falls back to ordering by type, then by value. This
///   keeps the comparator total but says nothing meaningful about, say, a
///   string against a number.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    let ordering = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(a), Some(b)) => compare_present(a, b),
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => collate(a, b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Float(a), Value::Float(b)) => compare_floats(*a, *b),
        (Value::Int(i), Value::Float(f)) => compare_int_float(*i, *f),
        (Value::Float(f), Value::Int(i)) => compare_int_float(*i, *f).reverse(),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => {
            trace!("mixed-type comparison: {} vs {}", a.type_name(), b.type_name());
            type_rank(a).cmp(&type_rank(b))
        }
    }
}

/// Floats by value, `-0.0 == 0.0`, NaN after every number.
fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer against a float, without rounding the
/// integer through `f64`.
fn compare_int_float(i: i64, f: f64) -> Ordering {
    // 2^63, exactly representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() || f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64
            .partial_cmp(&(f - whole))
            .unwrap_or(Ordering::Equal),
        unequal => unequal,
    }
}

fn collate(a: &str, b: &str) -> Ordering {
    UniCase::new(a)
        .cmp(&UniCase::new(b))
        // lowercase sorts before uppercase, as in locale collation
        .then_with(|| b.cmp(a))
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::String(_) => 3,
    }
}

/// Indices of `rows` ordered by the `key` field.
///
/// The sort is stable: rows comparing equal keep their input order.
pub fn sort_indices(rows: &[Row], key: &str, direction: SortDirection) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    indices.sort_by(|&a, &b| compare_values(rows[a].get(key), rows[b].get(key), direction));
    indices
}

/// Rows ordered by the `key` field, leaving the input untouched.
pub fn sort<'a>(rows: &'a [Row], key: &str, direction: SortDirection) -> Vec<&'a Row> {
    sort_indices(rows, key, direction)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_flips_same_column() {
        let current = SortState::ascending("amount");
        let next = SortState::next(Some(&current), "amount");
        assert_eq!(next, SortState::descending("amount"));
    }

    #[test]
    fn test_next_resets_other_column() {
        let current = SortState::descending("amount");
        let next = SortState::next(Some(&current), "firm");
        assert_eq!(next, SortState::ascending("firm"));
    }

    #[test]
    fn test_collate_is_case_insensitive() {
        assert_eq!(collate("alpha", "Beta"), Ordering::Less);
        assert_eq!(collate("Beta", "alpha"), Ordering::Greater);
        assert_eq!(collate("abc", "ABC"), Ordering::Less);
    }

    #[test]
    fn test_mixed_int_float_are_numeric() {
        let a = Value::Int(3);
        let b = Value::Float(2.5);
        assert_eq!(compare_present(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_large_integers_against_floats_stay_transitive() {
        // 2^53 and 2^53 + 1 both round to the same f64.
        let low = Value::Int(9_007_199_254_740_992);
        let high = Value::Int(9_007_199_254_740_993);
        let float = Value::Float(9_007_199_254_740_992.0);

        assert_eq!(compare_present(&low, &high), Ordering::Less);
        assert_eq!(compare_present(&low, &float), Ordering::Equal);
        assert_eq!(compare_present(&high, &float), Ordering::Greater);
        assert_eq!(compare_present(&float, &high), Ordering::Less);
    }

    #[test]
    fn test_fractional_and_extreme_floats_against_ints() {
        assert_eq!(compare_int_float(-3, -2.5), Ordering::Less);
        assert_eq!(compare_int_float(-2, -2.5), Ordering::Greater);
        assert_eq!(compare_int_float(0, -0.0), Ordering::Equal);
        assert_eq!(compare_int_float(i64::MAX, 1e19), Ordering::Less);
        assert_eq!(compare_int_float(i64::MIN, -1e19), Ordering::Greater);
        assert_eq!(compare_int_float(i64::MAX, f64::NAN), Ordering::Less);
        assert_eq!(compare_floats(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(compare_floats(-0.0, 0.0), Ordering::Equal);
    }

    #[test]
    fn test_nulls_last_in_both_directions() {
        let value = Value::from("x");
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(
                compare_values(None, Some(&value), direction),
                Ordering::Greater
            );
            assert_eq!(
                compare_values(Some(&Value::Null), Some(&value), direction),
                Ordering::Greater
            );
        }
    }
}

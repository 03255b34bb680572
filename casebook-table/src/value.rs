//! Schema-less row records and their field values.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A dynamic field value read from a [`Row`].
///
/// Rows are supplied by the caller, so the table never assumes a fixed
/// record shape. Only primitives are modelled; anything richer should be
/// flattened into display fields before it reaches the table.
///
/// # Example
///
/// ```
/// use casebook_table::Value;
///
/// let name = Value::from("Paperworks Inc.");
/// let amount = Value::from(12_500i64);
/// let missing = Value::from(None::<String>);
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent field; renders as the placeholder and sorts last.
    #[default]
    Null,
    /// Flag fields such as the contact badges.
    Bool(bool),
    Int(i64),
    /// Amounts arrive here, already parsed from their display strings.
    Float(f64),
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for null and for the empty string.
    ///
    /// Blank values render as the placeholder and cannot serve as row keys.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns `true` for the numeric variants.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns `true` when the value would count as set in a flag field.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::String(s) => !s.is_empty(),
        }
    }

    /// Name used in sort diagnostics and mixed-type ordering.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value as `f64` if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

// =============================================================================
// Row
// =============================================================================

/// One record displayed as a single table line.
///
/// Fields are looked up by name; a missing field reads as `None` and is
/// treated exactly like [`Value::Null`] by sorting and rendering.
///
/// # Example
///
/// ```
/// use casebook_table::Row;
///
/// let row = Row::new()
///     .set("id", "CON-000793")
///     .set("name", "Paperworks Inc. v. Ashworthy");
///
/// assert_eq!(row.get_str("id"), Some("CON-000793"));
/// assert!(row.get("court_date").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Gets a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Gets a field as a string slice, if it holds a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns `true` if the field is present (even when null).
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns `true` if the field is absent, null or an empty string.
    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).is_none_or(Value::is_blank)
    }

    /// Number of fields in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// =============================================================================
// RowKey
// =============================================================================

/// Identity of a row for expansion tracking.
///
/// `Field` and `Scalar` keys come from the configured key field and are
/// stable across sorting and pagination. A key keeps the type of its value,
/// so `Int(7)` and `String("7")` are different rows. `Position` is the
/// degraded fallback for rows without a key: it is the row's index within
/// the rendered page, so the same key refers to a different row after the
/// order or page changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    /// Text value of the configured key field.
    Field(String),
    /// Non-text value of the key field, tagged with its type name.
    Scalar { kind: &'static str, text: String },
    /// Page-relative position of a row lacking the key field.
    Position(usize),
}

impl RowKey {
    /// Resolves the key of `row` using `key_field`, falling back to `position`.
    pub fn resolve(row: &Row, key_field: &str, position: usize) -> Self {
        row.get(key_field)
            .and_then(RowKey::of_value)
            .unwrap_or(RowKey::Position(position))
    }

    /// The key a non-blank `value` identifies, or `None` for blanks.
    pub fn of_value(value: &Value) -> Option<Self> {
        match value {
            _ if value.is_blank() => None,
            Value::String(s) => Some(RowKey::Field(s.clone())),
            other => Some(RowKey::Scalar {
                kind: other.type_name(),
                text: other.to_string(),
            }),
        }
    }

    /// Returns `true` for the positional fallback.
    pub fn is_positional(&self) -> bool {
        matches!(self, RowKey::Position(_))
    }
}

impl From<&str> for RowKey {
    fn from(v: &str) -> Self {
        RowKey::Field(v.to_string())
    }
}

impl From<String> for RowKey {
    fn from(v: String) -> Self {
        RowKey::Field(v)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Field(id) => f.write_str(id),
            RowKey::Scalar { text, .. } => f.write_str(text),
            RowKey::Position(pos) => write!(f, "#{}", pos),
        }
    }
}

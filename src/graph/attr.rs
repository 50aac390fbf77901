//! Attribute value types for document and node attribute bags

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Scalar attribute value attached to documents and graph nodes
///
/// Supports:
/// - String
/// - Integer (i64)
/// - Float (f64)
/// - Boolean
/// - Null (missing value)
///
/// Serialized untagged, so attribute bags read and write as plain JSON
/// scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl AttrValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get a numeric view of the value, widening integers to f64
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Integer(i) => Some(*i as f64),
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "Null",
            AttrValue::Boolean(_) => "Boolean",
            AttrValue::Integer(_) => "Integer",
            AttrValue::Float(_) => "Float",
            AttrValue::String(_) => "String",
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            AttrValue::Null => 0,
            AttrValue::Boolean(_) => 1,
            AttrValue::Integer(_) => 2,
            AttrValue::Float(_) => 3,
            AttrValue::String(_) => 4,
        }
    }

    /// Total order over attribute values: type rank first
    /// (Null < Boolean < Integer < Float < String), then value.
    /// Floats use IEEE total ordering, so NaN sorts after all numbers.
    ///
    /// Used wherever distinct values must be sorted ascending, e.g.
    /// assigning categorical colors deterministically.
    pub fn cmp_order(&self, other: &AttrValue) -> Ordering {
        match (self, other) {
            (AttrValue::Null, AttrValue::Null) => Ordering::Equal,
            (AttrValue::Boolean(a), AttrValue::Boolean(b)) => a.cmp(b),
            (AttrValue::Integer(a), AttrValue::Integer(b)) => a.cmp(b),
            (AttrValue::Float(a), AttrValue::Float(b)) => a.total_cmp(b),
            (AttrValue::String(a), AttrValue::String(b)) => a.cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "null"),
            AttrValue::Boolean(b) => write!(f, "{}", b),
            AttrValue::Integer(i) => write!(f, "{}", i),
            AttrValue::Float(fl) => write!(f, "{}", fl),
            AttrValue::String(s) => write!(f, "{}", s),
        }
    }
}

// Convenience conversions
impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Integer(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Integer(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Boolean(b)
    }
}

/// Ordered attribute bag for documents and network nodes. Insertion order
/// is preserved so copied columns list deterministically.
pub type AttrMap = IndexMap<String, AttrValue>;

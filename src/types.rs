//! Core data types for corpus-hist
//!
//! # Main Types
//!
//! - [`ParsedDocument`] - A parsed corpus file (mapping / sequence / scalar tree)
//! - [`NodeKind`] - The kind of a document node, used in error reports
//! - [`Scalar`] - A terminal document value
//! - [`ExtractedValue`] - A scalar tagged with the file it came from

use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CorpusHistError, Result};

/// A parsed corpus document.
///
/// `serde_json::Value` already has exactly the variants a document needs:
/// `Object` is the mapping, `Array` the sequence, everything else a scalar.
pub type ParsedDocument = Value;

/// Kind of a document node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Mapping,
    Sequence,
    Scalar,
}

impl NodeKind {
    /// Classify a document node
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Mapping,
            Value::Array(_) => NodeKind::Sequence,
            _ => NodeKind::Scalar,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
            NodeKind::Scalar => "scalar",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A terminal document value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
}

impl Scalar {
    /// Convert a scalar JSON value. Returns `None` for mappings and sequences.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Scalar::Number),
            Value::String(s) => Some(Scalar::String(s.clone())),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Null => Some(Scalar::Null),
            Value::Object(_) | Value::Array(_) => None,
        }
    }

    /// Numeric interpretation used for plotting.
    ///
    /// Booleans plot as 0/1 and numeric strings as their value. Null and
    /// free-form strings have no position on an axis.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Scalar::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            Scalar::Null => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => write!(f, "{:?}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => f.write_str("null"),
        }
    }
}

/// A scalar extracted from one corpus file
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedValue {
    /// The extracted scalar
    pub value: Scalar,
    /// File the value was extracted from
    pub source: PathBuf,
}

impl ExtractedValue {
    pub fn new(value: Scalar, source: impl Into<PathBuf>) -> Self {
        Self {
            value,
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Numeric value for plotting, failing with the source path attached
    pub fn numeric(&self) -> Result<f64> {
        self.value
            .as_f64()
            .ok_or_else(|| CorpusHistError::NonNumericValue {
                path: self.source.clone(),
                value: self.value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_kind() {
        assert_eq!(NodeKind::of(&json!({"a": 1})), NodeKind::Mapping);
        assert_eq!(NodeKind::of(&json!([1, 2])), NodeKind::Sequence);
        assert_eq!(NodeKind::of(&json!(1.5)), NodeKind::Scalar);
        assert_eq!(NodeKind::of(&json!(null)), NodeKind::Scalar);
        assert_eq!(NodeKind::Mapping.to_string(), "mapping");
    }

    #[test]
    fn test_scalar_from_value() {
        assert_eq!(Scalar::from_value(&json!(3)), Some(Scalar::Number(3.0)));
        assert_eq!(Scalar::from_value(&json!(true)), Some(Scalar::Bool(true)));
        assert_eq!(Scalar::from_value(&json!(null)), Some(Scalar::Null));
        assert_eq!(
            Scalar::from_value(&json!("x")),
            Some(Scalar::String("x".into()))
        );
        assert_eq!(Scalar::from_value(&json!([1])), None);
        assert_eq!(Scalar::from_value(&json!({})), None);
    }

    #[test]
    fn test_scalar_numeric() {
        assert_eq!(Scalar::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(Scalar::Bool(true).as_f64(), Some(1.0));
        assert_eq!(Scalar::Bool(false).as_f64(), Some(0.0));
        assert_eq!(Scalar::String(" 4.25 ".into()).as_f64(), Some(4.25));
        assert_eq!(Scalar::String("fast".into()).as_f64(), None);
        assert_eq!(Scalar::String("NaN".into()).as_f64(), None);
        assert_eq!(Scalar::String("inf".into()).as_f64(), None);
        assert_eq!(Scalar::Null.as_f64(), None);
    }

    #[test]
    fn test_extracted_value_non_numeric() {
        let v = ExtractedValue::new(Scalar::Null, "out/a.json");
        let err = v.numeric().unwrap_err();
        assert_eq!(err.kind(), "NonNumericValueError");
        assert_eq!(err.path(), Some(Path::new("out/a.json")));

        let ok = ExtractedValue::new(Scalar::Number(7.0), "out/b.json");
        assert_eq!(ok.numeric().unwrap(), 7.0);
    }
}

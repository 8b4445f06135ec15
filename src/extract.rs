//! Applying an accessor expression to a parsed document

use std::path::Path;

use serde_json::Value;

use crate::accessor::{AccessorExpression, Step};
use crate::error::{CorpusHistError, Result};
use crate::types::{ExtractedValue, NodeKind, ParsedDocument, Scalar};

/// Walks documents along a fixed accessor expression
#[derive(Debug, Clone)]
pub struct ValueExtractor {
    expression: AccessorExpression,
}

impl ValueExtractor {
    pub fn new(expression: AccessorExpression) -> Self {
        Self { expression }
    }

    pub fn expression(&self) -> &AccessorExpression {
        &self.expression
    }

    /// Extract the scalar selected by the expression.
    ///
    /// The document is consumed; nothing of it outlives the call apart from
    /// the extracted scalar. `source` is attached to the value and to any
    /// error.
    pub fn apply(&self, document: ParsedDocument, source: &Path) -> Result<ExtractedValue> {
        let value = apply(&document, &self.expression, source)?;
        Ok(ExtractedValue::new(value, source))
    }
}

/// Walk `document` one step at a time and return the terminal scalar
pub fn apply(
    document: &ParsedDocument,
    expression: &AccessorExpression,
    source: &Path,
) -> Result<Scalar> {
    let mut node = document;

    for (position, step) in expression.steps().iter().enumerate() {
        tracing::trace!(position, %step, "applying step");
        node = match (step, node) {
            (Step::Key(key), Value::Object(map)) => {
                map.get(key)
                    .ok_or_else(|| CorpusHistError::KeyNotFound {
                        path: source.to_path_buf(),
                        step: describe(step, position),
                        key: key.clone(),
                    })?
            }
            (Step::Index(index), Value::Array(items)) => {
                resolve_index(*index, items.len())
                    .and_then(|i| items.get(i))
                    .ok_or_else(|| CorpusHistError::IndexOutOfRange {
                        path: source.to_path_buf(),
                        step: describe(step, position),
                        index: *index,
                        len: items.len(),
                    })?
            }
            (step, other) => {
                return Err(CorpusHistError::TypeMismatch {
                    path: source.to_path_buf(),
                    step: describe(step, position),
                    expected: step.expects(),
                    found: NodeKind::of(other).display_name(),
                })
            }
        };
    }

    Scalar::from_value(node).ok_or_else(|| CorpusHistError::NonScalarResult {
        path: source.to_path_buf(),
        found: NodeKind::of(node).display_name(),
    })
}

/// Position in a sequence of `len` items; negative indices count from the end
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok()
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

fn describe(step: &Step, position: usize) -> String {
    format!("{} at position {}", step, position)
}

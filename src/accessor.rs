//! Accessor expressions
//!
//! An accessor is a chain of subscripts selecting one scalar out of a parsed
//! document, written the way the result files are usually inspected by hand:
//!
//! ```text
//! ['s'][0]['c']      key "s", index 0, key "c"
//! ["metrics"]["p99"] double quotes work too
//! .s[0].c            shorthand for identifier-like keys
//! ['s'][-1]['c']     negative indices count from the end
//! ```
//!
//! The string is decoded once at startup into a list of [`Step`]s. Nothing in
//! the expression is ever evaluated; a string that is not a plain subscript
//! chain is rejected with [`CorpusHistError::InvalidAccessor`].

use std::fmt;
use std::str::FromStr;

use crate::error::{CorpusHistError, Result};

/// A single navigation step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Select a named field from a mapping
    Key(String),
    /// Select a positional element from a sequence; negative counts from the end
    Index(i64),
}

impl Step {
    /// Node kind this step has to be applied to
    pub fn expects(&self) -> &'static str {
        match self {
            Step::Key(_) => "mapping",
            Step::Index(_) => "sequence",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => {
                f.write_str("['")?;
                for c in key.chars() {
                    match c {
                        '\\' => f.write_str("\\\\")?,
                        '\'' => f.write_str("\\'")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("']")
            }
            Step::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// A parsed accessor expression.
///
/// Keeps the text it was parsed from; that text is what the user sees in the
/// histogram title.
#[derive(Debug, Clone)]
pub struct AccessorExpression {
    source: String,
    steps: Vec<Step>,
}

impl AccessorExpression {
    /// Decode an accessor string into its steps
    pub fn parse(expression: &str) -> Result<Self> {
        let steps = StepParser::new(expression).parse_all()?;
        Ok(Self {
            source: expression.to_string(),
            steps,
        })
    }

    /// Build an expression directly from steps
    pub fn from_steps(steps: Vec<Step>) -> Self {
        let source = steps.iter().map(|s| s.to_string()).collect();
        Self { source, steps }
    }

    /// The steps, in application order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The text the expression was parsed from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Normalized subscript form, e.g. `.s[0]` becomes `['s'][0]`
    pub fn canonical(&self) -> String {
        self.steps.iter().map(|s| s.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl PartialEq for AccessorExpression {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl Eq for AccessorExpression {}

impl fmt::Display for AccessorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for AccessorExpression {
    type Err = CorpusHistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

struct StepParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> StepParser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn parse_all(mut self) -> Result<Vec<Step>> {
        let mut steps = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('[') => {
                    self.bump();
                    steps.push(self.parse_subscript()?);
                }
                Some('.') => {
                    self.bump();
                    steps.push(self.parse_identifier()?);
                }
                Some(c) => return Err(self.error(format!("expected '[' or '.', found {:?}", c))),
            }
        }
        Ok(steps)
    }

    fn parse_subscript(&mut self) -> Result<Step> {
        self.skip_whitespace();
        let step = match self.peek() {
            Some(q @ ('\'' | '"')) => {
                self.bump();
                Step::Key(self.parse_quoted(q)?)
            }
            Some(c) if c.is_ascii_digit() || c == '-' => Step::Index(self.parse_index()?),
            Some(c) => return Err(self.error(format!("expected quoted key or index, found {:?}", c))),
            None => return Err(self.error("unterminated subscript")),
        };
        self.skip_whitespace();
        match self.peek() {
            Some(']') => {
                self.bump();
                Ok(step)
            }
            Some(c) => Err(self.error(format!("expected ']', found {:?}", c))),
            None => Err(self.error("unterminated subscript")),
        }
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('\\') => out.push('\\'),
                    Some('\'') => out.push('\''),
                    Some('"') => out.push('"'),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(c) => return Err(self.error(format!("unsupported escape \\{}", c))),
                    None => return Err(self.error("unterminated string")),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_index(&mut self) -> Result<i64> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            return Err(self.error("expected digits in index"));
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        self.src[start..self.pos].parse::<i64>().map_err(|_| CorpusHistError::InvalidAccessor {
            expression: self.src.to_string(),
            position: start,
            message: "index too large".to_string(),
        })
    }

    fn parse_identifier(&mut self) -> Result<Step> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                self.bump();
            }
            _ => return Err(self.error("expected identifier after '.'")),
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            self.bump();
        }
        Ok(Step::Key(self.src[start..self.pos].to_string()))
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> CorpusHistError {
        CorpusHistError::InvalidAccessor {
            expression: self.src.to_string(),
            position: self.pos,
            message: message.into(),
        }
    }
}

//! The assertion failure type and comparison operator labels.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A failed assertion.
///
/// This is the only error kind any facade method produces. `message` is the
/// human-readable failure text; `actual`, `expected`, and `operator` are
/// populated by the comparison operations so a host harness can report the
/// failure as a structured step record.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{message}")]
pub struct AssertionError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

impl AssertionError {
    /// Create a failure carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            actual: None,
            expected: None,
            operator: None,
        }
    }

    /// Create a failure for a comparison, with a default message of
    /// `"{actual} {operator} {expected}"` when none is given.
    pub fn comparison(
        actual: &Value,
        expected: &Value,
        operator: Op,
        message: Option<&str>,
    ) -> Self {
        let message = match message {
            Some(m) => m.to_string(),
            None => format!("{} {} {}", actual, operator, expected),
        };
        Self {
            message,
            actual: Some(actual.clone()),
            expected: Some(expected.clone()),
            operator: Some(operator.as_str().to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssertionError>;

/// Canonical operator labels used in comparison failure records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Equal,
    NotEqual,
    DeepEqual,
    NotDeepEqual,
    DeepStrictEqual,
    NotDeepStrictEqual,
    Ok,
    Fail,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Equal => "==",
            Op::NotEqual => "!=",
            Op::DeepEqual => "deepEqual",
            Op::NotDeepEqual => "notDeepEqual",
            Op::DeepStrictEqual => "deepStrictEqual",
            Op::NotDeepStrictEqual => "notDeepStrictEqual",
            Op::Ok => "ok",
            Op::Fail => "fail",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! The assertion facade.
//!
//! `AssertionHelper` is a stateless collection of assertion operations. Each
//! method either returns `Ok(())` or an [`AssertionError`] with a
//! human-readable message; nothing is caught, retried, logged, or mutated
//! along the way. A host harness composes an instance and reports failures
//! however it sees fit.

use regex::Regex;
use serde_json::Value;

use crate::compare::{is_truthy, loose_eq};
use crate::error::{AssertionError, Op, Result};
use crate::keypath::{self, PathLookup};
use crate::predicate::Predicate;

/// Stateless assertion facade.
///
/// # Example
///
/// ```rust
/// use affirm::AssertionHelper;
/// use serde_json::json;
///
/// let helper = AssertionHelper::new();
/// helper.assert_equal(&json!(1), &json!("1"), None).unwrap();
/// helper.assert_status_code(200, 200).unwrap();
/// assert!(helper.assert_status_code(404, 200).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AssertionHelper;

impl AssertionHelper {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    // Delegating operations
    // =========================================================================

    /// Alias for [`assert_equal`](Self::assert_equal).
    pub fn assert(&self, actual: &Value, expected: &Value, message: Option<&str>) -> Result<()> {
        self.assert_equal(actual, expected, message)
    }

    /// Loose (coercive) equality.
    pub fn assert_equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<()> {
        if loose_eq(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::comparison(actual, expected, Op::Equal, message))
        }
    }

    /// Loose (coercive) inequality.
    pub fn assert_not_equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<()> {
        if !loose_eq(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::comparison(actual, expected, Op::NotEqual, message))
        }
    }

    /// Structural equality with coercive comparison of nested fields.
    pub fn assert_deep_equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<()> {
        if loose_eq(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::comparison(actual, expected, Op::DeepEqual, message))
        }
    }

    /// Negation of [`assert_deep_equal`](Self::assert_deep_equal).
    pub fn assert_not_deep_equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<()> {
        if !loose_eq(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::comparison(actual, expected, Op::NotDeepEqual, message))
        }
    }

    /// Structural equality, strict (type-and-value) at every field.
    pub fn assert_deep_strict_equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<()> {
        if actual == expected {
            Ok(())
        } else {
            Err(AssertionError::comparison(
                actual,
                expected,
                Op::DeepStrictEqual,
                message,
            ))
        }
    }

    /// Negation of [`assert_deep_strict_equal`](Self::assert_deep_strict_equal).
    pub fn assert_not_deep_strict_equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<()> {
        if actual != expected {
            Ok(())
        } else {
            Err(AssertionError::comparison(
                actual,
                expected,
                Op::NotDeepStrictEqual,
                message,
            ))
        }
    }

    /// Fails when `value` is falsy.
    pub fn assert_ok(&self, value: &Value, message: Option<&str>) -> Result<()> {
        if is_truthy(value) {
            Ok(())
        } else {
            let message = message
                .map(str::to_string)
                .unwrap_or_else(|| format!("expected value to be truthy, got {}", value));
            Err(AssertionError {
                message,
                actual: Some(value.clone()),
                expected: None,
                operator: Some(Op::Ok.as_str().to_string()),
            })
        }
    }

    /// Unconditionally fails.
    ///
    /// With no message, the failure text is built from `actual`, `expected`,
    /// and the `operator` label when present, and is `"Failed"` otherwise.
    pub fn assert_fail(
        &self,
        actual: Option<&Value>,
        expected: Option<&Value>,
        message: Option<&str>,
        operator: Option<&str>,
    ) -> Result<()> {
        let message = match (message, actual, expected) {
            (Some(m), _, _) => m.to_string(),
            (None, Some(a), Some(e)) => {
                format!("{} {} {}", a, operator.unwrap_or(Op::Fail.as_str()), e)
            }
            _ => "Failed".to_string(),
        };
        Err(AssertionError {
            message,
            actual: actual.cloned(),
            expected: expected.cloned(),
            operator: Some(operator.unwrap_or(Op::Fail.as_str()).to_string()),
        })
    }

    // =========================================================================
    // Convenience operations
    // =========================================================================

    /// Compare expected and actual status code.
    pub fn assert_status_code(&self, actual: u16, expected: u16) -> Result<()> {
        self.assert(
            &Value::from(actual),
            &Value::from(expected),
            Some(&format!(
                "Expected status code to be {}, but found {}",
                expected, actual
            )),
        )
    }

    /// Fails when `body` is falsy.
    pub fn assert_body_is_not_empty(&self, body: &Value) -> Result<()> {
        self.assert_ok(body, Some("body is missing in response"))
    }

    /// Walk `key_path` into `obj`, failing at the first absent segment.
    ///
    /// The failure message carries the full original path plus the segment
    /// that was missing.
    pub fn assert_key_in_object_exists(&self, key_path: &str, obj: &Value) -> Result<()> {
        match keypath::resolve(key_path, obj) {
            PathLookup::Found(_) => Ok(()),
            PathLookup::Missing { segment, .. } => Err(AssertionError::new(format!(
                "Expected {} to exists in object, but actual not:( There is no {}",
                key_path, segment
            ))),
        }
    }

    /// Walk `key_path` into `obj`; any absent segment confirms the path is
    /// not present. Fails only when the full path resolves to a value.
    pub fn assert_key_in_object_not_exists(&self, key_path: &str, obj: &Value) -> Result<()> {
        match keypath::resolve(key_path, obj) {
            PathLookup::Missing { .. } => Ok(()),
            PathLookup::Found(_) => Err(AssertionError::new(format!(
                "Expected {} to not exists in object, but it is:(",
                key_path
            ))),
        }
    }

    /// Fails on the first element of `items` that does not satisfy
    /// `predicate`. An empty slice passes vacuously.
    pub fn assert_each<T: std::fmt::Display>(
        &self,
        items: &[T],
        predicate: &Predicate<T>,
        message: &str,
    ) -> Result<()> {
        match items.iter().find(|item| !predicate.test(item)) {
            None => Ok(()),
            Some(failed) => Err(AssertionError::new(format!(
                "Item {} don't satisfy predicate: {}: {}",
                failed, predicate, message
            ))),
        }
    }

    /// Fails unless at least one element of `items` satisfies `predicate`.
    /// An empty slice always fails.
    pub fn assert_exists<T>(
        &self,
        items: &[T],
        predicate: &Predicate<T>,
        message: &str,
    ) -> Result<()> {
        if items.iter().any(|item| predicate.test(item)) {
            Ok(())
        } else {
            Err(AssertionError::new(format!(
                "Items don't contains element, satisfied by predicate: {}: {}",
                predicate, message
            )))
        }
    }

    /// Case-sensitive substring containment.
    pub fn assert_string_includes(&self, actual: &str, substring: &str) -> Result<()> {
        if actual.contains(substring) {
            Ok(())
        } else {
            Err(AssertionError::new(format!(
                "String {} doesn't contain substring {}",
                actual, substring
            )))
        }
    }

    /// Regex match against `actual`. An invalid pattern is reported as an
    /// assertion failure rather than a distinct error kind.
    pub fn assert_string_matches(&self, actual: &str, pattern: &str) -> Result<()> {
        let re = Regex::new(pattern).map_err(|e| {
            AssertionError::new(format!("invalid regex '{}': {}", pattern, e))
        })?;
        if re.is_match(actual) {
            Ok(())
        } else {
            Err(AssertionError::new(format!(
                "String {} doesn't match pattern {}",
                actual, pattern
            )))
        }
    }
}

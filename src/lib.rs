//! # affirm
//!
//! An assertion helper facade for test-automation harnesses.
//!
//! This library exposes a standard set of assertion operations (equality,
//! deep equality, truthiness, unconditional failure) plus a handful of
//! convenience checks (status codes, key-path existence, predicate-based
//! collection checks, substring containment) as methods on one stateless
//! [`AssertionHelper`]. Every method either returns `Ok(())` or an
//! [`AssertionError`] carrying a descriptive message; the host harness
//! decides how failures are recorded.
//!
//! ## Quick Start
//!
//! ```rust
//! use affirm::{predicate, AssertionHelper};
//! use serde_json::json;
//!
//! let helper = AssertionHelper::new();
//!
//! helper.assert_equal(&json!(1), &json!("1"), None).unwrap();
//! helper.assert_status_code(200, 200).unwrap();
//! helper
//!     .assert_key_in_object_exists("user.id", &json!({"user": {"id": 7}}))
//!     .unwrap();
//!
//! let even = predicate!("is even", |n: &i64| n % 2 == 0);
//! helper.assert_each(&[2, 4, 6], &even, "all items even").unwrap();
//! ```
//!
//! ## Propagating Failures
//!
//! Methods return `Result`, so a test step propagates with `?`:
//!
//! ```rust
//! use affirm::{AssertionHelper, AssertionError};
//! use serde_json::json;
//!
//! fn check_response(helper: &AssertionHelper) -> Result<(), AssertionError> {
//!     let body = json!({"status": "ok"});
//!     helper.assert_body_is_not_empty(&body)?;
//!     helper.assert_key_in_object_exists("status", &body)?;
//!     Ok(())
//! }
//! # check_response(&AssertionHelper::new()).unwrap();
//! ```

pub mod compare;
pub mod error;
pub mod helper;
pub mod keypath;
pub mod predicate;

// Core types
pub use error::{AssertionError, Op};
pub use helper::AssertionHelper;
pub use predicate::Predicate;

// Comparison primitives
pub use compare::{is_truthy, loose_eq};

// Key-path resolution
pub use keypath::{resolve as resolve_key_path, PathLookup};

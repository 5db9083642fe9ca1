//! Described predicates for collection assertions.
//!
//! Failure messages interpolate the predicate itself, so a predicate is a
//! test function paired with an explicit description rather than a bare
//! closure. Use [`Predicate::new`] or the [`predicate!`](crate::predicate)
//! macro, which defaults the description to the stringified closure.

/// A unary boolean test with a textual description.
pub struct Predicate<T: ?Sized> {
    description: String,
    test: Box<dyn Fn(&T) -> bool>,
}

impl<T: ?Sized> Predicate<T> {
    /// Create a predicate from a description and a test function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::Predicate;
    ///
    /// let even = Predicate::new("is even", |n: &i64| n % 2 == 0);
    /// assert!(even.test(&4));
    /// assert_eq!(even.description(), "is even");
    /// ```
    pub fn new(description: impl Into<String>, test: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            description: description.into(),
            test: Box::new(test),
        }
    }

    /// Apply the predicate to an item.
    pub fn test(&self, item: &T) -> bool {
        (self.test)(item)
    }

    /// The description interpolated into failure messages.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<T: ?Sized> std::fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl<T: ?Sized> std::fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Build a [`Predicate`], defaulting the description to the closure source.
///
/// # Example
///
/// ```rust
/// use affirm::predicate;
///
/// let even = predicate!(|n: &i64| n % 2 == 0);
/// assert_eq!(even.description(), "|n: &i64| n % 2 == 0");
///
/// let named = predicate!("is even", |n: &i64| n % 2 == 0);
/// assert_eq!(named.description(), "is even");
/// ```
#[macro_export]
macro_rules! predicate {
    ($description:expr, $test:expr) => {
        $crate::Predicate::new($description, $test)
    };
    ($test:expr) => {
        $crate::Predicate::new(stringify!($test), $test)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_applies_test() {
        let positive = Predicate::new("is positive", |n: &i64| *n > 0);
        assert!(positive.test(&3));
        assert!(!positive.test(&-3));
    }

    #[test]
    fn test_display_is_description() {
        let p = Predicate::new("has an id", |v: &serde_json::Value| v.get("id").is_some());
        assert_eq!(format!("{}", p), "has an id");
    }

    #[test]
    fn test_macro_stringifies_closure() {
        let even = predicate!(|n: &i64| n % 2 == 0);
        assert!(even.test(&2));
        assert_eq!(even.description(), "|n: &i64| n % 2 == 0");
    }

    #[test]
    fn test_macro_with_explicit_description() {
        let even = predicate!("is even", |n: &i64| n % 2 == 0);
        assert_eq!(even.description(), "is even");
    }
}

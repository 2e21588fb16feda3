//! Rule builder for single-field predicates.

use regex::Regex;

/// Type alias for predicate closures.
type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A set of predicates that a field value must all satisfy.
///
/// # Example
///
/// ```
/// use login_form_lib::validation::FieldRule;
///
/// let rule = FieldRule::new()
///     .pattern(r"^[A-Z]+$")
///     .rule(|v| v.len() <= 4);
///
/// assert!(rule.check("ABC"));
/// assert!(!rule.check("ABCDE"));
/// ```
#[derive(Default)]
pub struct FieldRule {
    predicates: Vec<Predicate>,
}

impl FieldRule {
    /// Create a rule with no predicates; it accepts everything until
    /// predicates are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom predicate.
    pub fn rule<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(f));
        self
    }

    /// Require the value to match a regex pattern.
    ///
    /// The pattern is not anchored implicitly; use `^...$` for a whole-value
    /// match. Patterns are expected to be literals, so an invalid one is a
    /// programming error.
    pub fn pattern(self, pattern: &str) -> Self {
        let re = Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(move |v| re.is_match(v))
    }

    /// Whether `value` passes every predicate.
    pub fn check(&self, value: &str) -> bool {
        self.predicates.iter().all(|p| p(value))
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

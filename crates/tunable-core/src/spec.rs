//! Validity specifications: the rule objects that decide which values a
//! parameter accepts.
//!
//! The [`ValiditySpec`] trait is the two-operation capability every
//! constraint kind implements: a pure membership predicate and a
//! human-readable rendering. The family is closed — [`Unconstrained`],
//! [`EnumeratedList`], [`Range`] (bounded), [`StepRange`] (stepped), and
//! [`PatternMatch`] — and a [`ParamDef`](crate::ParamDef) owns exactly one
//! boxed instance for its lifetime.

use core::fmt;

use regex::Regex;

use crate::convert::ParamValue;
use crate::range::{Range, StepRange, SteppedValue};

/// Rule object answering whether a candidate value is acceptable.
///
/// `is_valid` is a total, side-effect-free predicate: it has no failure
/// mode other than the boolean outcome. `describe` renders the constraint
/// for diagnostics; the text is never parsed back.
pub trait ValiditySpec<T>: fmt::Debug + Send + Sync {
    /// Returns `true` when `value` satisfies this specification.
    fn is_valid(&self, value: &T) -> bool;

    /// Human-readable rendering of the constraint.
    fn describe(&self) -> String;
}

/// Accepts every value of the parameter's type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl<T> ValiditySpec<T> for Unconstrained {
    fn is_valid(&self, _value: &T) -> bool {
        true
    }

    fn describe(&self) -> String {
        "any value".to_string()
    }
}

/// Accepts only values equal to one of an explicit list.
///
/// Membership is by value equality; the list order matters only for the
/// [`describe`](ValiditySpec::describe) rendering. An empty list rejects
/// every value.
#[derive(Debug, Clone)]
pub struct EnumeratedList<T> {
    values: Vec<T>,
}

impl<T: ParamValue> EnumeratedList<T> {
    /// Create a list specification over the given allowed values.
    pub fn new(values: impl Into<Vec<T>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// The allowed values, in declaration order.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: ParamValue> ValiditySpec<T> for EnumeratedList<T> {
    fn is_valid(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    fn describe(&self) -> String {
        let items = self
            .values
            .iter()
            .map(|v| v.to_text().unwrap_or_else(|_| format!("{v:?}")))
            .collect::<Vec<_>>()
            .join(", ");
        format!("one of {{{items}}}")
    }
}

impl<T> ValiditySpec<T> for Range<T>
where
    T: ParamValue + PartialOrd + fmt::Display,
{
    fn is_valid(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn describe(&self) -> String {
        format!("value in {self}")
    }
}

impl<T> ValiditySpec<T> for StepRange<T>
where
    T: ParamValue + PartialOrd + SteppedValue + fmt::Display,
{
    fn is_valid(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn describe(&self) -> String {
        format!("value in {self}")
    }
}

/// Accepts values whose string form fully matches a regular expression.
///
/// Validation always goes through the value's string form (via
/// [`ParamValue::to_text`]), never the in-memory representation, so the
/// behavior is uniform across value types. Partial matches fail: the
/// pattern is anchored at construction.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    pattern: String,
    anchored: Regex,
}

impl PatternMatch {
    /// Compile `pattern` into a full-match specification.
    ///
    /// The pattern is wrapped in `^(?:...)$` so a match must span the
    /// entire string form of the value.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            pattern: pattern.to_string(),
            anchored,
        })
    }

    /// The pattern as supplied, without the anchoring.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl<T: ParamValue> ValiditySpec<T> for PatternMatch {
    fn is_valid(&self, value: &T) -> bool {
        match value.to_text() {
            Ok(text) => self.anchored.is_match(&text),
            Err(_) => false,
        }
    }

    fn describe(&self) -> String {
        format!("matches pattern /{}/", self.pattern)
    }
}

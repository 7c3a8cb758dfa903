//! The generic parameter descriptor.
//!
//! [`ParamDef`] binds a name, description, and category to a typed default
//! value and one owned validity specification. The default is checked
//! against the specification exactly once, at construction — a descriptor
//! whose default fails its own rule never comes into existence. After
//! construction the descriptor is immutable and safe to share read-only
//! across threads; validating subsequent value assignments against the
//! same specification is the owning registry's job.

use core::fmt;

use crate::category::ParamCategory;
use crate::convert::{ParamValue, parse_value, render_value};
use crate::error::{ParamError, ParamResult};
use crate::range::{Range, StepRange, SteppedValue};
use crate::spec::{EnumeratedList, PatternMatch, Unconstrained, ValiditySpec};

/// A validated, immutable descriptor for one typed, runtime-tunable
/// parameter.
///
/// # Example
///
/// ```rust
/// use tunable_core::{ParamCategory, ParamDef, Range};
///
/// let gain = ParamDef::with_range(
///     "gain",
///     "sensor gain",
///     50,
///     Range::new(0, 100),
///     ParamCategory::default(),
/// )
/// .unwrap();
///
/// assert_eq!(gain.default_value(), 50);
/// assert_eq!(gain.default_value_string().unwrap(), "50");
/// assert_eq!(gain.valid_values_string(), "value in [0, 100]");
/// ```
#[derive(Debug)]
pub struct ParamDef<T: ParamValue> {
    name: String,
    description: String,
    category: ParamCategory,
    default: T,
    spec: Box<dyn ValiditySpec<T>>,
}

impl<T: ParamValue> ParamDef<T> {
    /// Descriptor accepting any value of `T`.
    ///
    /// The invariant check still runs for uniformity with the constrained
    /// constructors, though an unconstrained specification cannot reject.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        category: ParamCategory,
    ) -> ParamResult<Self> {
        Self::with_spec(name, description, default, Unconstrained, category)
    }

    /// Descriptor with a caller-supplied validity specification of any
    /// variant. The specification is moved into the descriptor and owned
    /// for its lifetime.
    pub fn with_spec(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        spec: impl ValiditySpec<T> + 'static,
        category: ParamCategory,
    ) -> ParamResult<Self> {
        Self::build(
            name.into(),
            description.into(),
            default,
            Box::new(spec),
            category,
        )
    }

    /// Descriptor restricted to an explicit list of allowed values.
    pub fn with_values(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        values: impl Into<Vec<T>>,
        category: ParamCategory,
    ) -> ParamResult<Self> {
        Self::with_spec(name, description, default, EnumeratedList::new(values), category)
    }

    /// Descriptor restricted to a closed interval.
    pub fn with_range(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        range: Range<T>,
        category: ParamCategory,
    ) -> ParamResult<Self>
    where
        T: PartialOrd + fmt::Display,
    {
        Self::with_spec(name, description, default, range, category)
    }

    /// Descriptor restricted to a stepped interval.
    pub fn with_step_range(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        range: StepRange<T>,
        category: ParamCategory,
    ) -> ParamResult<Self>
    where
        T: PartialOrd + SteppedValue + fmt::Display,
    {
        Self::with_spec(name, description, default, range, category)
    }

    /// Descriptor restricted to values whose string form matches a
    /// regular expression.
    pub fn with_pattern(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        pattern: PatternMatch,
        category: ParamCategory,
    ) -> ParamResult<Self> {
        Self::with_spec(name, description, default, pattern, category)
    }

    /// Enforce that the default value satisfies the specification before
    /// the descriptor can exist.
    fn build(
        name: String,
        description: String,
        default: T,
        spec: Box<dyn ValiditySpec<T>>,
        category: ParamCategory,
    ) -> ParamResult<Self> {
        if !spec.is_valid(&default) {
            let value = default
                .to_text()
                .unwrap_or_else(|_| format!("{default:?}"));
            return Err(ParamError::invalid_default(name, value, spec.describe()));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "param_def: '{}' defined, default satisfies {}",
            name,
            spec.describe()
        );

        Ok(Self {
            name,
            description,
            category,
            default,
            spec,
        })
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description of what the parameter tunes.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Classification category.
    pub fn category(&self) -> &ParamCategory {
        &self.category
    }

    /// Identifier used to attribute error messages to this parameter.
    pub fn descriptor(&self) -> &str {
        &self.name
    }

    /// The default value, by value.
    pub fn default_value(&self) -> T {
        self.default.clone()
    }

    /// String form of the default value, attributed to this parameter.
    ///
    /// The default was validated at construction, so this only fails when
    /// the type's own rendering is broken — and then the error names this
    /// parameter like every other conversion failure.
    pub fn default_value_string(&self) -> ParamResult<String> {
        render_value(&self.default, &self.name)
    }

    /// Description of the owned validity specification.
    pub fn valid_values_string(&self) -> String {
        self.spec.describe()
    }

    /// Check a candidate value against this parameter's specification.
    ///
    /// Construction validates only the default; registries layering live
    /// value assignment on top revalidate through this predicate.
    pub fn is_valid(&self, value: &T) -> bool {
        self.spec.is_valid(value)
    }

    /// Parse a candidate value from text, attributing failures to this
    /// parameter. The parsed value is *not* validated; pass it through
    /// [`is_valid`](Self::is_valid) before accepting it.
    pub fn parse_value(&self, text: &str) -> ParamResult<T> {
        parse_value(text, &self.name)
    }
}

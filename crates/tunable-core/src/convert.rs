//! Typed value ↔ string conversion with contextualized error reporting.
//!
//! Every parameter value type implements [`ParamValue`], a pair of
//! conversion primitives between the value and its canonical string form.
//! The free functions [`parse_value`] and [`render_value`] are the bridge
//! the rest of the crate goes through: they wrap any underlying conversion
//! failure into a [`ParamError`] carrying the owning parameter's
//! descriptor, the offending text or type, and the raw failure reason.
//! A raw conversion error is never surfaced un-annotated.

use core::fmt;

use crate::error::{ParamError, ParamResult};

/// String conversion primitives for a parameter value type.
///
/// Implementations are provided for the integer and floating-point
/// primitives, `bool`, `char`, `String`, and space-separated `Vec<T>`.
/// Frameworks add support for their own value types (enums, small structs)
/// by implementing this trait; the errors returned from the primitives are
/// plain reason strings and get wrapped with parameter context by
/// [`parse_value`] / [`render_value`].
pub trait ParamValue: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Display name of the type, used in diagnostics.
    #[must_use]
    fn type_display() -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Render the value as its canonical string form.
    fn to_text(&self) -> Result<String, String>;

    /// Parse a value from its string form.
    fn from_text(text: &str) -> Result<Self, String>;
}

macro_rules! param_value_via_str {
    ($($t:ty),* $(,)?) => {$(
        impl ParamValue for $t {
            fn to_text(&self) -> Result<String, String> {
                Ok(self.to_string())
            }

            fn from_text(text: &str) -> Result<Self, String> {
                text.trim().parse::<$t>().map_err(|e| e.to_string())
            }
        }
    )*};
}

param_value_via_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl ParamValue for String {
    fn to_text(&self) -> Result<String, String> {
        Ok(self.clone())
    }

    // Strings pass through verbatim, whitespace included.
    fn from_text(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }
}

/// Space-separated sequences. An empty string parses to an empty vector.
impl<T: ParamValue> ParamValue for Vec<T> {
    fn to_text(&self) -> Result<String, String> {
        let parts = self
            .iter()
            .map(ParamValue::to_text)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(" "))
    }

    fn from_text(text: &str) -> Result<Self, String> {
        text.split_whitespace().map(T::from_text).collect()
    }
}

/// Parse `text` into a `T`, attributing any failure to `descriptor`.
///
/// Either returns a fully-constructed value or fails with
/// [`ParamError::Parse`]; there are no partial results.
pub fn parse_value<T: ParamValue>(text: &str, descriptor: &str) -> ParamResult<T> {
    T::from_text(text).map_err(|reason| ParamError::parse(descriptor, text, T::type_display(), reason))
}

/// Render `value` to its string form, attributing any failure to `descriptor`.
pub fn render_value<T: ParamValue>(value: &T, descriptor: &str) -> ParamResult<String> {
    value
        .to_text()
        .map_err(|reason| ParamError::render(descriptor, T::type_display(), reason))
}

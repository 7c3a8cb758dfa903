//! Tunable Core - typed, self-validating parameter descriptors
//!
//! This crate lets components of a larger framework declare named, typed,
//! runtime-tunable parameters with string-based I/O — for CLIs, network
//! control surfaces, or persisted configuration handled by the caller.
//!
//! # Core Abstractions
//!
//! ## Descriptors
//!
//! - [`ParamDef`] - Generic descriptor binding name/description/category to
//!   a default value and one owned validity specification
//! - [`ParamCategory`] - Classification tag for grouping parameters
//!
//! ## Validity Specifications
//!
//! A closed family implementing the [`ValiditySpec`] capability
//! (`is_valid` + `describe`):
//!
//! - [`Unconstrained`] - Every value is acceptable
//! - [`EnumeratedList`] - Membership in an explicit list
//! - [`Range`] - Closed interval, endpoints inclusive
//! - [`StepRange`] - Closed interval quantized to fixed increments
//! - [`PatternMatch`] - Full regex match over the value's string form
//!
//! ## String Conversion
//!
//! - [`ParamValue`] - Per-type value ↔ string primitives
//! - [`parse_value`] / [`render_value`] - The conversion bridge; wraps any
//!   underlying failure into a parameter-attributed [`ParamError`]
//!
//! # Example
//!
//! ```rust
//! use tunable_core::{ParamCategory, ParamDef, Range};
//!
//! let cat = ParamCategory::new("Camera", "Sensor controls");
//! let gain = ParamDef::with_range("gain", "sensor gain", 50, Range::new(0, 100), cat)?;
//!
//! assert_eq!(gain.default_value_string()?, "50");
//! assert_eq!(gain.valid_values_string(), "value in [0, 100]");
//!
//! // A default that fails its own specification prevents construction:
//! let bad = ParamDef::with_range(
//!     "gain",
//!     "sensor gain",
//!     150,
//!     Range::new(0, 100),
//!     ParamCategory::default(),
//! );
//! assert!(bad.is_err());
//! # Ok::<(), tunable_core::ParamError>(())
//! ```
//!
//! # Design Principles
//!
//! - **Validate once**: the default is checked at construction; a
//!   descriptor with an invalid default never exists
//! - **Immutable after construction**: safe to share read-only across
//!   threads without locking
//! - **Uniform diagnostics**: every conversion failure carries the owning
//!   parameter's descriptor, the offending text or type, and the
//!   underlying reason

pub mod category;
pub mod convert;
pub mod def;
pub mod error;
pub mod range;
pub mod spec;

// Re-export main types at crate root
pub use category::ParamCategory;
pub use convert::{ParamValue, parse_value, render_value};
pub use def::ParamDef;
pub use error::{ParamError, ParamResult};
pub use range::{Range, StepRange, SteppedValue};
pub use spec::{EnumeratedList, PatternMatch, Unconstrained, ValiditySpec};

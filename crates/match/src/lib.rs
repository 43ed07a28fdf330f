#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `matching` decides whether the errors reported by an API correspond
//! one-to-one with a set of expected error descriptors. It owns the descriptor
//! model, the field constraint semantics and the assignment algorithm; the
//! `matchers` crate layers HTTP status checks and failure descriptions on top.
//!
//! # Design
//!
//! - [`ErrorDescriptor`] captures one expectation: an exact code, an exact or
//!   absent location type and location, and a [`MessageRule`].
//! - [`ExpectationSet`] keeps descriptors in the order they were declared.
//! - [`ErrorRecord`] is an owned snapshot of an actual error taken at
//!   evaluation time.
//! - [`assign`] pairs descriptors with records and returns an immutable
//!   [`Assignment`] listing bindings, unmet expectations and leftover records.
//!
//! # Invariants
//!
//! - Descriptors are processed in declaration order. Each one binds to the
//!   first unconsumed record satisfying all of its constraints; a bound record
//!   is never reused. Earlier bindings are never revisited.
//! - An absent location type or location on a descriptor requires the record's
//!   field to be absent as well. Absence is a constraint, not a wildcard.
//! - Patterns must match the whole message. Exact messages compare by string
//!   equality. Without a message rule the record's message must be present and
//!   non-empty.
//! - An assignment is exact only when no descriptor is unmet and no record is
//!   left over.
//!
//! # Errors
//!
//! [`FullPattern::new`] and [`FullPattern::with_flags`] report [`PatternError`]
//! when the message pattern is not a valid regular expression or is too large
//! to compile. Nothing else in the crate is fallible.
//!
//! # Examples
//!
//! ```
//! use matching::{ErrorDescriptor, ErrorRecord, ExpectationSet, assign};
//!
//! let expected: ExpectationSet = [
//!     ErrorDescriptor::new(1000).at("json", "/name").with_message("required"),
//!     ErrorDescriptor::new(1001),
//! ]
//! .into_iter()
//! .collect();
//!
//! let actual = [
//!     ErrorRecord::new(1001).with_message("rate limited"),
//!     ErrorRecord::new(1000).at("json", "/name").with_message("required"),
//! ];
//!
//! let assignment = assign(&expected, &actual);
//! assert!(assignment.is_exact());
//! ```
//!
//! # See also
//!
//! - [`debug_match`] for the optional tracing instrumentation.

pub mod debug_match;
mod descriptor;
mod engine;
mod error;
mod pattern;
mod record;
mod rule;
mod set;

pub use descriptor::{DescriptorOptions, ErrorDescriptor};
pub use engine::{Assignment, Binding, assign};
pub use error::PatternError;
pub use pattern::{FullPattern, PatternFlags};
pub use record::ErrorRecord;
pub use rule::MessageRule;
pub use set::ExpectationSet;

#[cfg(test)]
mod tests;

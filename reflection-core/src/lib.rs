//! Reflection Core Library
//!
//! Domain types for the reflection service: the submitted payload, the
//! confirmation returned for it, and the fixed sample list served to readers.
//! Nothing here touches HTTP or storage.

pub mod error;
pub mod types;

pub use error::{IssueKind, Result, ValidationError, ValidationIssue};
pub use types::{
    sample_reflections, NewReflection, Reflection, ReflectionReceipt, RECEIVED_MESSAGE,
    SAMPLE_CONTENT,
};

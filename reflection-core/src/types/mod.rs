//! Core types for reflections

mod reflection;
mod sample;

pub use reflection::{NewReflection, Reflection, ReflectionReceipt, RECEIVED_MESSAGE};
pub use sample::{sample_reflections, SAMPLE_CONTENT};

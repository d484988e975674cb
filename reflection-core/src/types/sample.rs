//! The fixed reflection list served to readers

use super::Reflection;

/// Content of the only listed reflection
pub const SAMPLE_CONTENT: &str = "今日は集中できた";

/// The reflection list. Always the same single entry, regardless of what has
/// been submitted.
pub fn sample_reflections() -> Vec<Reflection> {
    vec![Reflection {
        id: 1,
        content: SAMPLE_CONTENT.to_string(),
    }]
}

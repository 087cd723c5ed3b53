//! Named example presets.

use crate::engine::SequenceError;
use crate::params::SequenceParameters;

/// A named set of sequence parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Lookup name, kebab-case.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub parameters: SequenceParameters,
}

/// Built-in presets.
pub static PRESETS: [Preset; 3] = [
    Preset {
        name: "even-numbers",
        label: "Even numbers",
        parameters: SequenceParameters::new(2.0, 2.0, 10),
    },
    Preset {
        name: "counting-by-fives",
        label: "Counting by 5s",
        parameters: SequenceParameters::new(5.0, 5.0, 10),
    },
    Preset {
        name: "decreasing",
        label: "Decreasing sequence",
        parameters: SequenceParameters::new(100.0, -7.0, 15),
    },
];

/// Names of all built-in presets.
#[must_use]
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// Look up a preset by name.
///
/// Matching ignores case and treats `_` like `-`.
pub fn find_preset(name: &str) -> Result<&'static Preset, SequenceError> {
    let key = name.trim().to_ascii_lowercase().replace('_', "-");
    PRESETS.iter().find(|p| p.name == key).ok_or_else(|| {
        SequenceError::InvalidArgument(format!(
            "unknown preset: {name} (available: {})",
            preset_names().join(", ")
        ))
    })
}

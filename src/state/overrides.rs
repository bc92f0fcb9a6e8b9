//! The override selector state.
//!
//! The form presents "no school" and "school not found" as two independent
//! checkboxes, but they are mutually exclusive. Modeling them as a single
//! three-state enumeration makes the invalid combination unrepresentable:
//! the engine drives both checkbox controls from this one value.

use serde::{Deserialize, Serialize};

/// Which override, if any, is currently active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideMode {
    /// Cascade-driven selection.
    #[default]
    Normal,

    /// "No school": the contestant attends no school. School id is forced
    /// to the `"1"` sentinel, the district to its disabled default, and the
    /// grade level to its maximum sentinel.
    NoSchool,

    /// "School not found": manual school info is supplied. School id is
    /// forced to the `"0"` sentinel and the info panel is shown.
    NotFound,
}

impl OverrideMode {
    pub fn is_normal(self) -> bool {
        self == OverrideMode::Normal
    }

    pub fn name(self) -> &'static str {
        match self {
            OverrideMode::Normal => "normal",
            OverrideMode::NoSchool => "no_school",
            OverrideMode::NotFound => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal() {
        assert!(OverrideMode::default().is_normal());
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(OverrideMode::NoSchool.name(), "no_school");
        assert_eq!(OverrideMode::NotFound.name(), "not_found");
    }
}

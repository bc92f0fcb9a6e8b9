//! Form-control effects as data.
//!
//! These types describe mutations of the host form without performing them.
//! The engine returns lists of `FormEffect`; a [`super::FormBinding`]
//! implementation applies them to the real controls (or to the in-memory
//! [`crate::form::FormModel`] in tests).

use serde::{Deserialize, Serialize};

use crate::types::{CountyId, DistrictId, LocationOption, SchoolId};

/// The grade-level value forced while the "no school" override is active.
pub const NO_SCHOOL_GRADE: u8 = 13;

/// A form control the engine enables or disables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormControl {
    County,
    District,
    SchoolName,
    NoSchoolBox,
    NotFoundBox,
}

/// One of the two override checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideFlag {
    NoSchool,
    NotFound,
}

/// Which grade-level options are selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeLock {
    /// Everything selectable except the "no school" sentinel grade.
    #[default]
    Standard,
    /// Only the "no school" sentinel grade selectable.
    NoSchoolOnly,
}

/// A single form mutation.
///
/// Replacing a select's option list keeps the "unselected" placeholder and
/// resets the selection; a value is re-applied afterwards by a separate
/// `SetDistrict` effect when one is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum FormEffect {
    /// Set the county select's value.
    SetCounty { value: Option<CountyId> },

    /// Set the district select's value.
    SetDistrict { value: Option<DistrictId> },

    /// Set the hidden school identifier.
    SetSchool { value: Option<SchoolId> },

    /// Set the school display-name text input.
    SetSchoolName { value: Option<String> },

    /// Clear and repopulate the district option list.
    ReplaceDistrictOptions { options: Vec<LocationOption> },

    /// Reduce the district option list to its placeholder.
    ClearDistrictOptions,

    /// Enable or disable a control.
    SetEnabled { control: FormControl, enabled: bool },

    /// Check or uncheck an override checkbox (without re-entering its
    /// handler; the engine synthesizes the follow-up event itself).
    SetChecked { flag: OverrideFlag, checked: bool },

    /// Show or hide the auxiliary "manual school info" panel.
    SetInfoPanelVisible { visible: bool },

    /// Set the grade-level select's value.
    SetGrade { value: Option<u8> },

    /// Restrict which grade-level options are selectable.
    SetGradeLock { lock: GradeLock },
}

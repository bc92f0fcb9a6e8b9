//! A concrete [`FormBinding`] backed by plain structs.
//!
//! `FormModel` mirrors the controls a real form would have and applies
//! effects to them verbatim. It is the binding used by the controller tests
//! and doubles as a reference for what a DOM-backed binding must do.

use std::convert::Infallible;

use crate::effects::{FormBinding, FormControl, FormEffect, GradeLock, OverrideFlag};
use crate::types::{CountyId, DistrictId, LocationOption, SchoolId};

/// A select control: a value, an option list and an enabled bit.
///
/// Replacing the option list resets the value; the placeholder row is
/// implicit and always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField<T> {
    pub enabled: bool,
    pub value: Option<T>,
    pub options: Vec<LocationOption>,
}

impl<T> Default for SelectField<T> {
    fn default() -> Self {
        SelectField {
            enabled: true,
            value: None,
            options: Vec::new(),
        }
    }
}

impl<T> SelectField<T> {
    fn replace_options(&mut self, options: Vec<LocationOption>) {
        self.options = options;
        self.value = None;
    }

    fn clear_options(&mut self) {
        self.options.clear();
        self.value = None;
    }
}

/// A free-text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub enabled: bool,
    pub value: Option<String>,
}

/// A checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxField {
    pub enabled: bool,
    pub checked: bool,
}

/// The grade-level select with its selectability lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeField {
    pub value: Option<u8>,
    pub lock: GradeLock,
}

impl GradeField {
    /// Whether a given grade option is currently selectable.
    pub fn selectable(&self, grade: u8) -> bool {
        match self.lock {
            GradeLock::Standard => grade != crate::effects::NO_SCHOOL_GRADE,
            GradeLock::NoSchoolOnly => grade == crate::effects::NO_SCHOOL_GRADE,
        }
    }
}

/// All controls of the selector, as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    pub county: SelectField<CountyId>,
    pub district: SelectField<DistrictId>,
    pub school: Option<SchoolId>,
    pub school_name: TextField,
    pub no_school_box: CheckboxField,
    pub not_found_box: CheckboxField,
    pub info_panel_visible: bool,
    pub grade: GradeField,
}

impl Default for FormModel {
    fn default() -> Self {
        // Everything starts enabled, as a server-rendered form would; the
        // engine's initialization pass disables what should be disabled.
        FormModel {
            county: SelectField::default(),
            district: SelectField::default(),
            school: None,
            school_name: TextField {
                enabled: true,
                value: None,
            },
            no_school_box: CheckboxField {
                enabled: true,
                checked: false,
            },
            not_found_box: CheckboxField {
                enabled: true,
                checked: false,
            },
            info_panel_visible: true,
            grade: GradeField::default(),
        }
    }
}

impl FormModel {
    pub fn new() -> Self {
        FormModel::default()
    }

    fn set_enabled(&mut self, control: FormControl, enabled: bool) {
        match control {
            FormControl::County => self.county.enabled = enabled,
            FormControl::District => self.district.enabled = enabled,
            FormControl::SchoolName => self.school_name.enabled = enabled,
            FormControl::NoSchoolBox => self.no_school_box.enabled = enabled,
            FormControl::NotFoundBox => self.not_found_box.enabled = enabled,
        }
    }

    fn checkbox_mut(&mut self, flag: OverrideFlag) -> &mut CheckboxField {
        match flag {
            OverrideFlag::NoSchool => &mut self.no_school_box,
            OverrideFlag::NotFound => &mut self.not_found_box,
        }
    }
}

impl FormBinding for FormModel {
    type Error = Infallible;

    fn apply(&mut self, effect: FormEffect) -> Result<(), Self::Error> {
        match effect {
            FormEffect::SetCounty { value } => self.county.value = value,
            FormEffect::SetDistrict { value } => self.district.value = value,
            FormEffect::SetSchool { value } => self.school = value,
            FormEffect::SetSchoolName { value } => self.school_name.value = value,
            FormEffect::ReplaceDistrictOptions { options } => {
                self.district.replace_options(options)
            }
            FormEffect::ClearDistrictOptions => self.district.clear_options(),
            FormEffect::SetEnabled { control, enabled } => self.set_enabled(control, enabled),
            FormEffect::SetChecked { flag, checked } => {
                self.checkbox_mut(flag).checked = checked;
            }
            FormEffect::SetInfoPanelVisible { visible } => self.info_panel_visible = visible,
            FormEffect::SetGrade { value } => self.grade.value = value,
            FormEffect::SetGradeLock { lock } => self.grade.lock = lock,
        }
        Ok(())
    }
}

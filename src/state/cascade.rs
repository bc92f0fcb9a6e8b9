//! The controller-owned cascade state.
//!
//! One `CascadeState` exists per form render. It is mutated only by the
//! engine's event handlers and discarded when the form unmounts; the server
//! is the system of record.

use crate::autocomplete::SchoolAutocomplete;
use crate::types::{CountyId, DistrictId, LocationOption, SchoolId};

use super::OverrideMode;

/// Server-rendered initial field values, captured once at initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialValues {
    pub county: Option<CountyId>,
    pub district: Option<DistrictId>,
    pub school: Option<SchoolId>,
    pub school_name: Option<String>,
}

/// Values to re-apply once their dependent option list has loaded.
///
/// Each field is consumed at most once, immediately after the matching
/// option list was repopulated from a lookup — never against a stale or
/// empty list. Entering an override discards the school portion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingRestore {
    pub district: Option<DistrictId>,
    pub school: Option<SchoolId>,
    pub school_name: Option<String>,
}

impl PendingRestore {
    pub fn is_empty(&self) -> bool {
        self.district.is_none() && self.school.is_none() && self.school_name.is_none()
    }

    /// Drops the school portion, keeping a still-pending district restore.
    pub fn discard_school_fields(&mut self) {
        self.school = None;
        self.school_name = None;
    }
}

/// The authoritative state of the county → district → school cascade.
///
/// Request generations are bumped whenever a level is invalidated or a new
/// lookup is issued; a lookup completion carrying an older generation is
/// stale and must be dropped ("last request wins").
#[derive(Debug, Clone, Default)]
pub struct CascadeState {
    pub county: Option<CountyId>,
    pub district: Option<DistrictId>,
    pub school: Option<SchoolId>,
    pub school_name: Option<String>,
    pub override_mode: OverrideMode,
    pub pending_restore: PendingRestore,

    /// Candidate schools of the currently selected district.
    pub schools: Vec<LocationOption>,

    district_generation: u64,
    school_generation: u64,
}

impl CascadeState {
    pub fn new() -> Self {
        CascadeState::default()
    }

    /// Invalidates any in-flight district lookup and returns the generation
    /// for the next one.
    pub fn bump_district_generation(&mut self) -> u64 {
        self.district_generation += 1;
        self.district_generation
    }

    /// Invalidates any in-flight school lookup and returns the generation
    /// for the next one.
    pub fn bump_school_generation(&mut self) -> u64 {
        self.school_generation += 1;
        self.school_generation
    }

    pub fn is_current_district_generation(&self, generation: u64) -> bool {
        generation == self.district_generation
    }

    pub fn is_current_school_generation(&self, generation: u64) -> bool {
        generation == self.school_generation
    }

    /// Autocomplete view over the current candidate schools.
    pub fn autocomplete(&self) -> SchoolAutocomplete<'_> {
        SchoolAutocomplete::new(&self.schools)
    }
}

//! Events entering the cascade engine and lookup requests leaving it.

use crate::state::InitialValues;
use crate::types::{CountyId, DistrictId, LocationOption};

/// Which dependent level a lookup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeLevel {
    District,
    School,
}

/// A lookup the engine wants performed.
///
/// The generation ties the eventual completion back to the request that
/// issued it; a completion whose generation no longer matches the state's
/// current one is stale and is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Districts { county: CountyId, generation: u64 },
    Schools { district: DistrictId, generation: u64 },
}

/// Everything that can happen to the selector.
///
/// User-driven events (`CountyChanged`, `DistrictChanged`, toggles,
/// commits) arrive from the host form; completion events
/// (`DistrictsLoaded`, `SchoolsLoaded`, `LookupFailed`) are fed back by the
/// driver when a lookup resolves; the engine itself synthesizes follow-up
/// events to cascade a change downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeEvent {
    /// Capture initial values and kick off edit-mode restoration.
    Initialize { initial: InitialValues },

    /// The county selection changed (`None` = back to the placeholder).
    CountyChanged { county: Option<CountyId> },

    /// A district lookup resolved.
    DistrictsLoaded {
        county: CountyId,
        generation: u64,
        options: Vec<LocationOption>,
    },

    /// The district selection changed.
    DistrictChanged { district: Option<DistrictId> },

    /// A school lookup resolved.
    SchoolsLoaded {
        district: DistrictId,
        generation: u64,
        options: Vec<LocationOption>,
    },

    /// A lookup failed; the UI stays in its pre-request state.
    LookupFailed {
        level: CascadeLevel,
        generation: u64,
    },

    /// The school-name input was committed (blur-equivalent, not a
    /// keystroke).
    SchoolNameCommitted { text: String },

    /// An autocomplete suggestion was selected.
    SchoolPicked { option: LocationOption },

    /// The "no school" checkbox was toggled.
    NoSchoolToggled { checked: bool },

    /// The "school not found" checkbox was toggled.
    NotFoundToggled { checked: bool },
}

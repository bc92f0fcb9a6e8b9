//! Newtype wrappers for the selector's identifiers.
//!
//! County, district and school identifiers travel as strings (they are
//! option values in the host form), but mixing them up is an easy mistake.
//! The newtypes also carry the reserved sentinel values: a school id of
//! `"0"` means "school not found" and `"1"` means "no school"; county `"9"`
//! is the "abroad" pseudo-county whose only district is `"901"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A county identifier as carried by the county select control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountyId(pub String);

impl CountyId {
    pub fn new(s: impl Into<String>) -> Self {
        CountyId(s.into())
    }

    /// The "abroad" pseudo-county.
    pub fn abroad() -> Self {
        CountyId("9".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CountyId {
    fn from(s: &str) -> Self {
        CountyId(s.to_string())
    }
}

impl From<String> for CountyId {
    fn from(s: String) -> Self {
        CountyId(s)
    }
}

/// A district identifier as carried by the district select control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictId(pub String);

impl DistrictId {
    pub fn new(s: impl Into<String>) -> Self {
        DistrictId(s.into())
    }

    /// The fixed district of the "abroad" pseudo-county.
    pub fn abroad() -> Self {
        DistrictId("901".to_string())
    }

    /// The disabled default the district control is forced to while the
    /// "no school" override is active.
    pub fn no_school_default() -> Self {
        DistrictId("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DistrictId {
    fn from(s: &str) -> Self {
        DistrictId(s.to_string())
    }
}

impl From<String> for DistrictId {
    fn from(s: String) -> Self {
        DistrictId(s)
    }
}

/// A school identifier: either a real lookup result or one of the two
/// sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolId(pub String);

impl SchoolId {
    pub fn new(s: impl Into<String>) -> Self {
        SchoolId(s.into())
    }

    /// Sentinel for "school not found" (manual school info supplied).
    pub fn not_found() -> Self {
        SchoolId("0".to_string())
    }

    /// Sentinel for "no school" (contestant is not attending any school).
    pub fn no_school() -> Self {
        SchoolId("1".to_string())
    }

    pub fn is_not_found(&self) -> bool {
        self.0 == "0"
    }

    pub fn is_no_school(&self) -> bool {
        self.0 == "1"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SchoolId {
    fn from(s: &str) -> Self {
        SchoolId(s.to_string())
    }
}

impl From<String> for SchoolId {
    fn from(s: String) -> Self {
        SchoolId(s)
    }
}

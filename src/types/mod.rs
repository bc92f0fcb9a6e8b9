//! Core domain types for the school selector.

pub mod ids;
pub mod location;

pub use ids::{CountyId, DistrictId, SchoolId};
pub use location::LocationOption;

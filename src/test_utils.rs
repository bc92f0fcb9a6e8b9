//! Shared proptest strategies.

use std::ops::Range;

use proptest::prelude::*;

use crate::state::InitialValues;
use crate::types::{CountyId, DistrictId, LocationOption, SchoolId};

/// Numeric-looking identifiers, including the sentinel range.
fn arb_id() -> impl Strategy<Value = String> {
    (0u32..=9999).prop_map(|n| n.to_string())
}

/// School names with Slovak diacritics in the mix.
fn arb_school_name() -> impl Strategy<Value = String> {
    "[a-zA-Záäčďéíľňóôŕšťúýž ]{1,30}"
}

pub(crate) fn arb_location_options(len: Range<usize>) -> impl Strategy<Value = Vec<LocationOption>> {
    prop::collection::vec(
        (arb_id(), arb_school_name()).prop_map(|(id, name)| LocationOption::new(id, name)),
        len,
    )
}

pub(crate) fn arb_initial_values() -> impl Strategy<Value = InitialValues> {
    (
        prop::option::of(arb_id().prop_map(CountyId::new)),
        prop::option::of(arb_id().prop_map(DistrictId::new)),
        prop::option::of(prop_oneof![
            Just(SchoolId::no_school()),
            Just(SchoolId::not_found()),
            arb_id().prop_map(SchoolId::new),
        ]),
        prop::option::of(arb_school_name()),
    )
        .prop_map(|(county, district, school, school_name)| InitialValues {
            county,
            district,
            school,
            school_name,
        })
}

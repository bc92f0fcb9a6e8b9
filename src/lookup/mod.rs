//! Fetching district and school option lists.
//!
//! The engine never talks to the network; it emits [`LookupRequest`]s and
//! the controller resolves them through a [`LookupClient`]. The production
//! client is [`HttpLookupClient`]; tests substitute in-memory maps.
//!
//! [`LookupRequest`]: crate::cascade::LookupRequest

pub mod http;
pub mod stub;

use std::future::Future;

use crate::types::{CountyId, DistrictId, LocationOption};

pub use http::{HttpLookupClient, LookupError};

/// Resolves option lists for the two dependent levels.
pub trait LookupClient {
    type Error;

    fn fetch_districts(
        &self,
        county: &CountyId,
    ) -> impl Future<Output = Result<Vec<LocationOption>, Self::Error>> + Send;

    fn fetch_schools(
        &self,
        district: &DistrictId,
    ) -> impl Future<Output = Result<Vec<LocationOption>, Self::Error>> + Send;
}

/// An endpoint URL with a `0` placeholder where the parent identifier goes.
///
/// Templates look like `https://host/districts/0/`; expansion substitutes
/// the first `0` in the string, so the template must not contain a `0`
/// before the placeholder (e.g. in a port number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        UrlTemplate(template.into())
    }

    pub fn expand(&self, id: &str) -> String {
        self.0.replacen('0', id, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_substitutes_the_placeholder() {
        let template = UrlTemplate::new("http://example.test/districts/0/");
        assert_eq!(template.expand("9"), "http://example.test/districts/9/");
    }

    #[test]
    fn expand_replaces_only_the_first_zero() {
        // Identifiers containing zeros must not cascade into further
        // replacements.
        let template = UrlTemplate::new("http://example.test/schools/0/");
        assert_eq!(template.expand("205"), "http://example.test/schools/205/");
    }
}

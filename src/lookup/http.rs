//! HTTP-backed lookup client.

use crate::types::{CountyId, DistrictId, LocationOption};

use super::{LookupClient, UrlTemplate};

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("lookup endpoint returned status {status}")]
    Status { status: reqwest::StatusCode },
}

/// Fetches option lists from the two filter endpoints as JSON arrays of
/// `{pk, name}` objects.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    client: reqwest::Client,
    districts: UrlTemplate,
    schools: UrlTemplate,
}

impl HttpLookupClient {
    pub fn new(districts: UrlTemplate, schools: UrlTemplate) -> Self {
        HttpLookupClient {
            client: reqwest::Client::new(),
            districts,
            schools,
        }
    }

    pub fn with_client(
        client: reqwest::Client,
        districts: UrlTemplate,
        schools: UrlTemplate,
    ) -> Self {
        HttpLookupClient {
            client,
            districts,
            schools,
        }
    }

    async fn get_options(&self, url: String) -> Result<Vec<LocationOption>, LookupError> {
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { status });
        }
        Ok(response.json().await?)
    }
}

impl LookupClient for HttpLookupClient {
    type Error = LookupError;

    async fn fetch_districts(
        &self,
        county: &CountyId,
    ) -> Result<Vec<LocationOption>, LookupError> {
        self.get_options(self.districts.expand(&county.0)).await
    }

    async fn fetch_schools(
        &self,
        district: &DistrictId,
    ) -> Result<Vec<LocationOption>, LookupError> {
        self.get_options(self.schools.expand(&district.0)).await
    }
}

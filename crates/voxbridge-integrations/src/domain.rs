// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain availability lookups via the RDAP bootstrap service.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;
use voxbridge_core::VoxError;

/// TLD variations probed when the caller supplies none of its own.
const DEFAULT_VARIATIONS: &[&str] = &[".com", ".net", ".org", ".io", ".co"];

/// Availability verdict for a single domain name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DomainStatus {
    Available,
    Registered,
    Unknown,
}

/// Result of checking one domain.
#[derive(Debug, Clone, Serialize)]
pub struct DomainCheck {
    pub domain: String,
    pub status: DomainStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Client for RDAP domain queries. RDAP needs no API key.
#[derive(Debug, Clone)]
pub struct DomainChecker {
    client: reqwest::Client,
    base_url: String,
}

impl DomainChecker {
    pub fn new(timeout: Duration) -> Result<Self, VoxError> {
        Self::with_base_url("https://rdap.org".into(), timeout)
    }

    pub fn with_base_url(base_url: String, timeout: Duration) -> Result<Self, VoxError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VoxError::ExternalService {
                service: "rdap",
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { client, base_url })
    }

    /// Checks a single domain. Lookup failures land in the `error` field
    /// rather than failing the whole call.
    pub async fn check(&self, domain: &str) -> DomainCheck {
        let url = format!("{}/domain/{domain}", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = match response.status().as_u16() {
                    404 => DomainStatus::Available,
                    200 => DomainStatus::Registered,
                    _ => DomainStatus::Unknown,
                };
                debug!(domain, status = ?status, "domain check completed");
                DomainCheck {
                    domain: domain.to_string(),
                    status,
                    error: None,
                }
            }
            Err(e) => DomainCheck {
                domain: domain.to_string(),
                status: DomainStatus::Unknown,
                error: Some(format!("lookup failed: {e}")),
            },
        }
    }

    /// Checks the base domain plus variations.
    ///
    /// Caller-supplied variations may use a `{domain}` placeholder for the
    /// base name. With no variations the default TLD list is probed against
    /// the name stripped of any existing TLD.
    pub async fn check_with_variations(
        &self,
        domain: &str,
        variations: Option<&[String]>,
    ) -> Result<Vec<DomainCheck>, VoxError> {
        let domain = domain.trim().to_lowercase();
        if domain.is_empty() {
            return Err(VoxError::Validation("domain must not be empty".into()));
        }

        let mut candidates = vec![domain.clone()];
        match variations {
            Some(variations) => {
                for variation in variations {
                    candidates.push(variation.replace("{domain}", &domain));
                }
            }
            None => {
                let base = match domain.split_once('.') {
                    Some((name, _tld)) => name,
                    None => domain.as_str(),
                };
                for tld in DEFAULT_VARIATIONS {
                    let candidate = format!("{base}{tld}");
                    if candidate != domain {
                        candidates.push(candidate);
                    }
                }
            }
        }

        let mut checks = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            checks.push(self.check(candidate).await);
        }
        Ok(checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn checker(server: &MockServer) -> DomainChecker {
        DomainChecker::with_base_url(server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn not_found_means_available() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domain/example.dev"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let check = checker(&server).check("example.dev").await;
        assert_eq!(check.status, DomainStatus::Available);
        assert!(check.error.is_none());
    }

    #[tokio::test]
    async fn ok_means_registered() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"objectClassName": "domain"})),
            )
            .mount(&server)
            .await;

        let check = checker(&server).check("example.com").await;
        assert_eq!(check.status, DomainStatus::Registered);
    }

    #[tokio::test]
    async fn default_variations_cover_standard_tlds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let checks = checker(&server)
            .check_with_variations("example.com", None)
            .await
            .unwrap();

        // example.com itself plus the four variations that differ from it.
        assert_eq!(checks.len(), 5);
        assert!(checks.iter().any(|c| c.domain == "example.io"));
        assert_eq!(
            checks.iter().filter(|c| c.domain == "example.com").count(),
            1
        );
    }

    #[tokio::test]
    async fn caller_variations_substitute_placeholder() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let variations = vec!["{domain}.app".to_string(), "get{domain}.com".to_string()];
        let checks = checker(&server)
            .check_with_variations("acme", Some(&variations))
            .await
            .unwrap();

        let domains: Vec<&str> = checks.iter().map(|c| c.domain.as_str()).collect();
        assert_eq!(domains, vec!["acme", "acme.app", "getacme.com"]);
    }

    #[tokio::test]
    async fn empty_domain_is_a_validation_error() {
        let server = MockServer::start().await;
        let err = checker(&server)
            .check_with_variations("  ", None)
            .await
            .unwrap_err();
        assert!(matches!(err, VoxError::Validation(_)));
    }
}

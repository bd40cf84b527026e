// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain availability tool, gated behind the `domain-checker-tool` integration.

use async_trait::async_trait;
use serde_json::json;
use voxbridge_core::VoxError;
use voxbridge_integrations::DomainChecker;

use crate::tool::{Tool, ToolContext};

/// Checks domain availability over RDAP, optionally probing variations.
pub struct DomainCheckTool {
    checker: DomainChecker,
}

impl DomainCheckTool {
    pub fn new(checker: DomainChecker) -> Self {
        Self { checker }
    }
}

#[async_trait]
impl Tool for DomainCheckTool {
    fn name(&self) -> &str {
        "check_domain_availability"
    }

    fn description(&self) -> &str {
        "Check domain availability using RDAP with customizable variations"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "domain": {
                    "type": "string",
                    "description": "Base domain name to check (without TLD)"
                },
                "variations": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Optional domain variations to check. Use {domain} as placeholder. If not provided, uses default variations."
                }
            },
            "required": ["domain"]
        })
    }

    fn required_integrations(&self) -> &[&str] {
        &["domain-checker-tool"]
    }

    async fn execute(
        &self,
        _ctx: &ToolContext,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError> {
        let domain = args["domain"].as_str().unwrap_or_default();
        if domain.is_empty() {
            return Err(VoxError::Validation(
                "domain is required for domain check".into(),
            ));
        }
        let variations: Option<Vec<String>> = args["variations"].as_array().map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        });

        let checks = self
            .checker
            .check_with_variations(domain, variations.as_deref())
            .await?;
        let total = checks.len();

        Ok(json!({
            "success": true,
            "domain": domain,
            "results": checks,
            "total_checked": total,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use voxbridge_core::{SessionId, SubjectProfile};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ctx() -> ToolContext {
        ToolContext {
            session_id: SessionId("voice_session_1_cafebabe".into()),
            profile: SubjectProfile::default(),
        }
    }

    #[tokio::test]
    async fn reports_all_checked_domains() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domain/acme.app"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"objectClassName": "domain"})),
            )
            .mount(&server)
            .await;

        let checker =
            DomainChecker::with_base_url(server.uri(), Duration::from_secs(5)).unwrap();
        let result = DomainCheckTool::new(checker)
            .execute(
                &ctx(),
                json!({"domain": "acme", "variations": ["{domain}.app"]}),
            )
            .await
            .unwrap();

        assert_eq!(result["success"], true);
        assert_eq!(result["total_checked"], 2);
        assert_eq!(result["results"][1]["domain"], "acme.app");
        assert_eq!(result["results"][1]["status"], "available");
    }

    #[tokio::test]
    async fn missing_domain_is_a_validation_error() {
        let server = MockServer::start().await;
        let checker =
            DomainChecker::with_base_url(server.uri(), Duration::from_secs(5)).unwrap();
        let err = DomainCheckTool::new(checker)
            .execute(&ctx(), json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, VoxError::Validation(_)));
    }
}

// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry for voice-session function calling.
//!
//! The [`Tool`] trait defines the unified interface for every capability the
//! model can invoke during a session. The [`ToolRegistry`] manages lookup by
//! name and builds the per-session declaration set: the always-on tools plus
//! whichever gated tools the subject profile has enabled.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use voxbridge_core::{SessionId, SubjectProfile, ToolDeclaration, VoxError};

/// Per-invocation context handed to a tool.
///
/// Carries an immutable snapshot of the owning session; tools never reach
/// back into the session store.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Identifier of the session this call belongs to.
    pub session_id: SessionId,
    /// The persona the session speaks as.
    pub profile: SubjectProfile,
}

/// Unified trait for all function-calling tools.
///
/// Every tool provides a name, description, JSON Schema for its parameters,
/// an optional integration gate, and an async `execute` method. The
/// dispatcher calls `execute` with the parsed JSON arguments from the model's
/// function-call request.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool's unique name (used for lookup and declarations).
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Returns the JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Integration ids this tool is gated behind. The tool is declared when
    /// any of them is enabled; an empty slice means always-on.
    fn required_integrations(&self) -> &[&str] {
        &[]
    }

    /// Executes the tool and returns its JSON result.
    async fn execute(
        &self,
        ctx: &ToolContext,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError>;
}

/// Registry of available tools, indexed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool. The tool is indexed by its `name()`.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Builds the declaration set a new session freezes at creation: every
    /// always-on tool, plus gated tools with at least one of their
    /// integrations enabled on the profile.
    pub fn declarations_for(&self, profile: &SubjectProfile) -> Vec<ToolDeclaration> {
        let enabled = profile.enabled_integrations();
        let mut decls: Vec<ToolDeclaration> = self
            .tools
            .values()
            .filter(|t| {
                let gates = t.required_integrations();
                gates.is_empty() || gates.iter().any(|gate| enabled.contains(gate))
            })
            .map(|t| ToolDeclaration {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters_schema(),
            })
            .collect();
        decls.sort_by(|a, b| a.name.cmp(&b.name));
        decls
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxbridge_core::IntegrationSetting;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes the input back"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string", "description": "Message to echo" }
                },
                "required": ["message"]
            })
        }

        async fn execute(
            &self,
            _ctx: &ToolContext,
            args: serde_json::Value,
        ) -> Result<serde_json::Value, VoxError> {
            Ok(serde_json::json!({"echo": args["message"]}))
        }
    }

    struct GatedTool;

    #[async_trait]
    impl Tool for GatedTool {
        fn name(&self) -> &str {
            "gated"
        }

        fn description(&self) -> &str {
            "Only available with an integration"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object", "properties": {}})
        }

        fn required_integrations(&self) -> &[&str] {
            &["gated-integration", "gated-integration-alt"]
        }

        async fn execute(
            &self,
            _ctx: &ToolContext,
            _args: serde_json::Value,
        ) -> Result<serde_json::Value, VoxError> {
            Ok(serde_json::json!({"success": true}))
        }
    }

    fn profile_with(integrations: Vec<IntegrationSetting>) -> SubjectProfile {
        SubjectProfile {
            name: "Bot".into(),
            description: String::new(),
            voice: None,
            integrations,
        }
    }

    #[test]
    fn registry_registers_and_retrieves_tools() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        assert!(registry.get("echo").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn declarations_exclude_gated_tools_by_default() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(GatedTool));

        let decls = registry.declarations_for(&profile_with(vec![]));
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "echo");
    }

    #[test]
    fn declarations_include_gated_tools_when_enabled() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(GatedTool));

        let profile = profile_with(vec![IntegrationSetting::enabled("gated-integration")]);
        let decls = registry.declarations_for(&profile);
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].name, "echo");
        assert_eq!(decls[1].name, "gated");
    }

    #[test]
    fn any_listed_integration_unlocks_a_gated_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(GatedTool));

        let profile = profile_with(vec![IntegrationSetting::enabled("gated-integration-alt")]);
        let decls = registry.declarations_for(&profile);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "gated");
    }

    #[test]
    fn disabled_integration_does_not_unlock_gated_tools() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(GatedTool));

        let profile = profile_with(vec![IntegrationSetting::disabled("gated-integration")]);
        assert!(registry.declarations_for(&profile).is_empty());
    }

    #[tokio::test]
    async fn tool_execute_returns_json() {
        let ctx = ToolContext {
            session_id: SessionId("voice_session_1_deadbeef".into()),
            profile: profile_with(vec![]),
        };
        let output = EchoTool
            .execute(&ctx, serde_json::json!({"message": "hi"}))
            .await
            .unwrap();
        assert_eq!(output["echo"], "hi");
    }
}

// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session lifecycle: creation, termination, context reads, expiry sweep.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};
use voxbridge_core::{SessionId, SessionStatus, SubjectProfile, ToolDeclaration, VoxError};
use voxbridge_tools::ToolRegistry;

use crate::prompt::build_system_prompt;
use crate::store::{InteractionRecord, Session, SessionEntry, SessionStore};
use crate::token::TokenSigner;

/// What the caller gets back from session creation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionDescriptor {
    pub session_id: String,
    pub ephemeral_token: String,
    pub function_declarations: Vec<ToolDeclaration>,
    pub system_prompt: String,
    /// Credential lifetime in seconds.
    pub expires_in: u64,
}

/// Session snapshot plus interaction log, as returned by context reads.
#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    pub session: Session,
    pub interactions: Vec<InteractionRecord>,
}

/// Creates, reads, ends, and sweeps voice sessions.
pub struct SessionManager {
    store: Arc<SessionStore>,
    registry: Arc<ToolRegistry>,
    signer: TokenSigner,
    token_ttl_secs: u64,
    max_age_secs: u64,
}

fn new_session_id() -> String {
    let suffix: String = {
        let mut rng = rand::thread_rng();
        (0..8)
            .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0'))
            .collect()
    };
    format!("voice_session_{}_{suffix}", Utc::now().timestamp())
}

impl SessionManager {
    pub fn new(
        store: Arc<SessionStore>,
        registry: Arc<ToolRegistry>,
        signer: TokenSigner,
        token_ttl_secs: u64,
        max_age_secs: u64,
    ) -> Self {
        Self {
            store,
            registry,
            signer,
            token_ttl_secs,
            max_age_secs,
        }
    }

    /// Creates a session for `owner` speaking as `profile`.
    ///
    /// The tool schema set is computed here, once, from the profile's enabled
    /// integrations and never changes for the life of the session.
    pub fn create(
        &self,
        owner: &str,
        profile: SubjectProfile,
    ) -> Result<SessionDescriptor, VoxError> {
        let mut id = new_session_id();
        // Random suffix plus the time component makes collisions negligible;
        // regenerate anyway if one occurs.
        while self.store.get(&id).is_some() {
            id = new_session_id();
        }

        let ephemeral_token = self.signer.issue(&id, owner, self.token_ttl_secs)?;
        let tool_schemas = self.registry.declarations_for(&profile);
        let system_prompt = build_system_prompt(&profile);

        let session = Session {
            id: SessionId(id.clone()),
            owner: owner.to_string(),
            profile,
            ephemeral_token: ephemeral_token.clone(),
            tool_schemas: tool_schemas.clone(),
            system_prompt: system_prompt.clone(),
            status: SessionStatus::Initialized,
            created_at: Utc::now(),
            ended_at: None,
        };
        self.store.put(SessionEntry::new(session));

        info!(session_id = %id, owner, "created voice session");

        Ok(SessionDescriptor {
            session_id: id,
            ephemeral_token,
            function_declarations: tool_schemas,
            system_prompt,
            expires_in: self.token_ttl_secs,
        })
    }

    /// Ends a session and purges it from the store, returning its lifetime
    /// in seconds. A second end for the same id fails with NotFound.
    pub async fn end(&self, id: &str) -> Result<u64, VoxError> {
        let entry = self
            .store
            .remove(id)
            .ok_or_else(|| VoxError::session_not_found(id))?;

        let mut entry = entry.lock().await;
        let now = Utc::now();
        entry.session.status = SessionStatus::Ended;
        entry.session.ended_at = Some(now);
        let duration = (now - entry.session.created_at).num_seconds().max(0) as u64;

        info!(session_id = %id, duration_secs = duration, "ended voice session");
        Ok(duration)
    }

    /// Returns a snapshot of the session and its interaction log.
    pub async fn get_context(&self, id: &str) -> Result<SessionContext, VoxError> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| VoxError::session_not_found(id))?;
        let entry = entry.lock().await;
        Ok(SessionContext {
            session: entry.session.clone(),
            interactions: entry.interactions.clone(),
        })
    }

    /// Ends and purges every session older than the configured maximum age.
    /// Returns how many sessions were purged.
    ///
    /// Snapshot of ids first, then a per-id lock for each eviction, so the
    /// scan never blocks unrelated sessions.
    pub async fn sweep_expired(&self) -> usize {
        let cutoff = Utc::now() - chrono::Duration::seconds(self.max_age_secs as i64);
        let mut purged = 0;

        for id in self.store.ids() {
            let Some(entry) = self.store.get(&id) else {
                continue;
            };
            let expired = entry.lock().await.session.created_at < cutoff;
            if expired && self.store.remove(&id).is_some() {
                warn!(session_id = %id, "purged expired voice session");
                purged += 1;
            }
        }
        purged
    }

    /// The shared store, for collaborators like the dispatcher.
    pub fn store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use voxbridge_tools::{Tool, ToolContext};

    struct PingTool;

    #[async_trait]
    impl Tool for PingTool {
        fn name(&self) -> &str {
            "ping"
        }

        fn description(&self) -> &str {
            "Replies with pong"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object", "properties": {}})
        }

        async fn execute(
            &self,
            _ctx: &ToolContext,
            _args: serde_json::Value,
        ) -> Result<serde_json::Value, VoxError> {
            Ok(serde_json::json!({"pong": true}))
        }
    }

    fn manager() -> SessionManager {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(PingTool));
        SessionManager::new(
            Arc::new(SessionStore::new()),
            Arc::new(registry),
            TokenSigner::new("test-secret"),
            3600,
            7200,
        )
    }

    fn profile() -> SubjectProfile {
        SubjectProfile {
            name: "Bot".into(),
            description: "helpful".into(),
            ..SubjectProfile::default()
        }
    }

    #[tokio::test]
    async fn create_returns_descriptor_with_frozen_schemas() {
        let manager = manager();
        let descriptor = manager.create("user-1", profile()).unwrap();

        assert!(descriptor.session_id.starts_with("voice_session_"));
        assert!(descriptor.ephemeral_token.starts_with("ephemeral_"));
        assert_eq!(descriptor.expires_in, 3600);
        assert_eq!(descriptor.function_declarations.len(), 1);
        assert!(descriptor.system_prompt.starts_with("You are Bot, helpful."));

        // Repeated context reads see the same schema set.
        let first = manager.get_context(&descriptor.session_id).await.unwrap();
        let second = manager.get_context(&descriptor.session_id).await.unwrap();
        assert_eq!(first.session.tool_schemas.len(), 1);
        assert_eq!(
            first.session.tool_schemas[0].name,
            second.session.tool_schemas[0].name
        );
    }

    #[tokio::test]
    async fn end_returns_duration_and_purges() {
        let manager = manager();
        let descriptor = manager.create("user-1", profile()).unwrap();

        let duration = manager.end(&descriptor.session_id).await.unwrap();
        assert!(duration < 5);

        // Purged: context read and a second end both fail with NotFound.
        assert!(matches!(
            manager.get_context(&descriptor.session_id).await,
            Err(VoxError::NotFound { .. })
        ));
        assert!(matches!(
            manager.end(&descriptor.session_id).await,
            Err(VoxError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn sweep_purges_only_overage_sessions() {
        let manager = manager();
        let old = manager.create("user-1", profile()).unwrap();
        let young = manager.create("user-1", profile()).unwrap();

        // Backdate the first session past the 2 hour limit.
        {
            let entry = manager.store().get(&old.session_id).unwrap();
            entry.lock().await.session.created_at =
                Utc::now() - chrono::Duration::seconds(7201);
        }

        assert_eq!(manager.sweep_expired().await, 1);
        assert!(manager.store().get(&old.session_id).is_none());
        assert!(manager.store().get(&young.session_id).is_some());
    }

    #[tokio::test]
    async fn sweep_on_empty_store_is_a_no_op() {
        assert_eq!(manager().sweep_expired().await, 0);
    }
}

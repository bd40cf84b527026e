// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory session store.
//!
//! A single process-wide map of session id to entry. Each entry sits behind
//! its own async mutex, so operations on one session are serialized while
//! distinct sessions proceed independently. Nothing is persisted; sessions
//! are lost on restart by design.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::Mutex;
use voxbridge_core::{SessionId, SessionStatus, SubjectProfile, ToolDeclaration};

/// One live session's immutable-ish descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: SessionId,
    pub owner: String,
    pub profile: SubjectProfile,
    /// Ephemeral credential issued at creation, returned once to the caller.
    pub ephemeral_token: String,
    /// Tool declarations frozen at creation from the profile's integrations.
    pub tool_schemas: Vec<ToolDeclaration>,
    pub system_prompt: String,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

/// One entry in the append-only interaction log.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionRecord {
    pub tool: String,
    pub args: serde_json::Value,
    /// Tool result or error payload, always carrying a `success` marker.
    pub result: serde_json::Value,
    pub success: bool,
    pub at: DateTime<Utc>,
}

/// A session plus its interaction log, guarded together.
#[derive(Debug)]
pub struct SessionEntry {
    pub session: Session,
    pub interactions: Vec<InteractionRecord>,
}

impl SessionEntry {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            interactions: Vec::new(),
        }
    }
}

/// Process-wide session map.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Arc<Mutex<SessionEntry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fresh entry under its session id.
    pub fn put(&self, entry: SessionEntry) {
        let id = entry.session.id.0.clone();
        self.sessions.insert(id, Arc::new(Mutex::new(entry)));
    }

    /// Returns the guarded entry for `id`, if present.
    pub fn get(&self, id: &str) -> Option<Arc<Mutex<SessionEntry>>> {
        self.sessions.get(id).map(|e| Arc::clone(e.value()))
    }

    /// Removes and returns the entry for `id`. Later lookups see NotFound.
    pub fn remove(&self, id: &str) -> Option<Arc<Mutex<SessionEntry>>> {
        self.sessions.remove(id).map(|(_, entry)| entry)
    }

    /// Snapshot of all live session ids. Used by the expiry sweep so no
    /// per-session lock is held across the whole scan.
    pub fn ids(&self) -> Vec<String> {
        self.sessions.iter().map(|e| e.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ephemeral session credentials.
//!
//! A credential is `ephemeral_{payload}.{signature}` where the payload is
//! URL-safe base64 of the JSON claims and the signature is hex-encoded
//! HMAC-SHA256 over the payload. The caller hands the credential to a
//! downstream realtime connection; validation checks the signature before
//! the expiry.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use voxbridge_core::VoxError;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_PREFIX: &str = "ephemeral_";

/// Claims carried inside an ephemeral credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub session_id: String,
    pub owner: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Issues and validates HMAC-signed ephemeral credentials.
#[derive(Clone)]
pub struct TokenSigner {
    key: Vec<u8>,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}

impl TokenSigner {
    /// Creates a signer from a configured secret.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self { key: secret.into() }
    }

    /// Creates a signer with a random per-process secret. Credentials do not
    /// survive a restart, which matches the in-memory session store.
    pub fn random() -> Self {
        let mut key = vec![0u8; 32];
        rand::thread_rng().fill_bytes(&mut key);
        Self { key }
    }

    fn sign(&self, payload: &str) -> Result<String, VoxError> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|e| VoxError::Internal(format!("invalid HMAC key: {e}")))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Issues a credential for `session_id` owned by `owner`, valid for
    /// `ttl_secs` from now.
    pub fn issue(
        &self,
        session_id: &str,
        owner: &str,
        ttl_secs: u64,
    ) -> Result<String, VoxError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            session_id: session_id.to_string(),
            owner: owner.to_string(),
            issued_at: now,
            expires_at: now + ttl_secs as i64,
        };
        let json = serde_json::to_vec(&claims)
            .map_err(|e| VoxError::Internal(format!("failed to encode claims: {e}")))?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = self.sign(&payload)?;
        Ok(format!("{TOKEN_PREFIX}{payload}.{signature}"))
    }

    /// Validates a credential: shape, signature, then expiry. Returns the
    /// decoded claims.
    pub fn validate(&self, token: &str) -> Result<TokenClaims, VoxError> {
        let rest = token
            .strip_prefix(TOKEN_PREFIX)
            .ok_or_else(|| VoxError::Validation("malformed ephemeral credential".into()))?;
        let (payload, signature) = rest
            .split_once('.')
            .ok_or_else(|| VoxError::Validation("malformed ephemeral credential".into()))?;

        // Constant-time comparison via the Mac verify API.
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|e| VoxError::Internal(format!("invalid HMAC key: {e}")))?;
        mac.update(payload.as_bytes());
        let sig_bytes = hex::decode(signature)
            .map_err(|_| VoxError::Validation("malformed credential signature".into()))?;
        mac.verify_slice(&sig_bytes)
            .map_err(|_| VoxError::Validation("credential signature mismatch".into()))?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| VoxError::Validation("malformed credential payload".into()))?;
        let claims: TokenClaims = serde_json::from_slice(&json)
            .map_err(|_| VoxError::Validation("malformed credential payload".into()))?;

        if claims.expires_at <= Utc::now().timestamp() {
            return Err(VoxError::Validation("credential expired".into()));
        }
        Ok(claims)
    }
}

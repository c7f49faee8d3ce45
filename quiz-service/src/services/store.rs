//! Session storage behind a narrow trait so the in-memory map can be swapped
//! for a bounded or persistent backend without touching the handlers.

use crate::models::DocumentSession;
use async_trait::async_trait;
use dashmap::DashMap;
use rand::RngCore;
use rand::rngs::OsRng;
use service_core::error::AppError;
use std::sync::Arc;

/// Number of random bytes in a session token (hex-encoded to twice this).
const SESSION_TOKEN_BYTES: usize = 16;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a fully-built session and return its newly assigned id.
    async fn insert(&self, session: DocumentSession) -> Result<String, AppError>;

    /// Look up a session by id. `None` when the id is unknown.
    async fn get(&self, session_id: &str) -> Result<Option<Arc<DocumentSession>>, AppError>;
}

/// Process-local session store. No TTL and no capacity bound: sessions live
/// until the process exits.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Arc<DocumentSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_token() -> String {
        let mut bytes = [0u8; SESSION_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, mut session: DocumentSession) -> Result<String, AppError> {
        let session_id = Self::generate_token();
        session.session_id = session_id.clone();
        self.sessions.insert(session_id.clone(), Arc::new(session));
        Ok(session_id)
    }

    async fn get(&self, session_id: &str) -> Result<Option<Arc<DocumentSession>>, AppError> {
        Ok(self.sessions.get(session_id).map(|entry| entry.clone()))
    }
}

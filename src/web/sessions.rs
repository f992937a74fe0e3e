//! In-memory session store for the web API.
//!
//! Each session owns a [`SessionAssets`] so suggestions do not repeat for
//! the same client. Nothing is persisted; restarting the server forgets
//! every session. The store holds at most `max_sessions` entries and evicts
//! the least recently used one to make room.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use tracing::{debug, info};
use uuid::Uuid;

use crate::session::SessionAssets;

/// Default cap on live sessions.
pub const MAX_SESSIONS: usize = 1024;

#[derive(Debug)]
struct SessionEntry {
    assets: SessionAssets,
    /// Value of the store's clock at the last create or access.
    last_used: u64,
}

/// Sessions indexed by UUID v4 string.
#[derive(Debug)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    /// Logical clock for recency; bumped on every create and access.
    clock: AtomicU64,
    /// Maximum number of live sessions (at least 1).
    max_sessions: usize,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::with_max_sessions(MAX_SESSIONS)
    }
}

impl SessionManager {
    /// Creates an empty store capped at [`MAX_SESSIONS`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store holding at most `max_sessions` sessions.
    #[must_use]
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            clock: AtomicU64::new(0),
            max_sessions: max_sessions.max(1),
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Starts a new session and returns its id, evicting the least recently
    /// used session when the store is full.
    pub fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(oldest) => {
                    sessions.remove(&oldest);
                    debug!(session = %oldest, "session evicted");
                }
                None => break,
            }
        }

        sessions.insert(
            id.clone(),
            SessionEntry {
                assets: SessionAssets::new(),
                last_used: self.tick(),
            },
        );
        drop(sessions);

        info!(session = %id, "session created");
        id
    }

    /// Whether a session exists. Does not count as a use.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Runs `f` against a session's assets and marks it recently used.
    /// Returns `None` for unknown ids.
    pub fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut SessionAssets) -> T) -> Option<T> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let entry = sessions.get_mut(id)?;
        entry.last_used = self.tick();
        Some(f(&mut entry.assets))
    }

    /// Resets and drops a session. Returns false for unknown ids.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        match removed {
            Some(mut entry) => {
                entry.assets.reset();
                info!(session = %id, "session closed");
                true
            }
            None => false,
        }
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no session is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of live sessions.
    #[must_use]
    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}

//! Session state access.
//!
//! The host environment owns a per-session key-value store that survives
//! re-execution passes. The kernel reads the viewer identity from it and
//! nothing else; writes stay on the host side.

use std::collections::HashMap;

/// Session key holding the current viewer identity.
pub const VIEWER_KEY: &str = "username";

/// Narrow view of the host's per-session key-value store.
pub trait SessionStore {
    /// Read a session value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a session value. The kernel never calls this; it exists for
    /// the host shell that owns the store.
    fn set(&mut self, key: &str, value: String);
}

/// Current viewer identity, if one has been stored.
pub fn current_viewer(session: &dyn SessionStore) -> Option<String> {
    session.get(VIEWER_KEY)
}

/// In-process session store backed by a plain map.
///
/// Each render pass is single-threaded and the store lives on the host
/// side of the seam, so no locking is involved.
#[derive(Debug, Default, Clone)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

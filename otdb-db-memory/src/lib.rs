use std::sync::Arc;

use parking_lot::RwLock;

use otdb_core::entities::*;

mod repo_impl;

#[derive(Debug, Default)]
struct Store {
    suggestions: Vec<TreeSuggestion>,
    reports: Vec<DamageReport>,
    highlights: Vec<Highlight>,
    users: Vec<User>,
}

/// In-memory implementation of the repository traits.
///
/// Mirrors the concurrency profile of the remote row store it stands
/// in for: many concurrent readers, a single writer at a time, and
/// last write wins between sequential writers. Each repository call
/// holds the lock for its whole duration, so a failed call leaves the
/// store untouched.
#[derive(Debug, Clone, Default)]
pub struct MemoryDb {
    store: Arc<RwLock<Store>>,
}

impl MemoryDb {
    pub fn init() -> Self {
        log::debug!("Initializing the in-memory database");
        Self::default()
    }
}

//! Storage collaborator interfaces
//!
//! The core never persists anything itself; these traits are the narrow
//! seam to the storage layer. Saves carry an expected revision so that
//! two concurrent transitions on the same article cannot both commit: the
//! loser gets [`SaveConflict`] and must re-fetch and re-evaluate.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use newsdesk_org::{ArticleState, Role, RoleRegistry};

/// A save lost a concurrent race: the stored revision no longer matches
/// the snapshot the decision was evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stored article revision does not match the evaluated snapshot")]
pub struct SaveConflict;

/// Read access to persisted role configuration.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Fetch a role by slug.
    async fn role(&self, slug: &str) -> Option<Role>;

    /// Fetch all roles, for building a registry snapshot.
    async fn roles(&self) -> Vec<Role>;
}

/// Read/write access to persisted article state.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Fetch an article by ID.
    async fn article(&self, id: Uuid) -> Option<ArticleState>;

    /// Commit an article state if the stored revision still matches.
    ///
    /// `expected_revision` is the revision of the snapshot the caller
    /// read and evaluated against; the passed `article` already carries
    /// the bumped revision. A mismatch means a concurrent writer won the
    /// race and the caller must re-fetch.
    async fn save(&self, article: ArticleState, expected_revision: u64)
        -> Result<(), SaveConflict>;
}

/// Build a role registry snapshot from a role store.
///
/// Taken once per authorization decision (typically once per request) so
/// role configuration cannot change mid-decision.
pub async fn registry_snapshot(store: &dyn RoleStore) -> RoleRegistry {
    RoleRegistry::from_roles(store.roles().await)
}

// ============================================================================
// In-memory stores (feature: memory)
// ============================================================================

#[cfg(feature = "memory")]
pub use memory::{MemoryArticleStore, MemoryRoleStore};

#[cfg(feature = "memory")]
mod memory {
    //! In-memory reference implementations.
    //!
    //! Suitable for single-process applications and tests. A real
    //! deployment backs these traits with its database and enforces the
    //! revision check with a row-level lock or compare-and-set.

    use std::sync::Arc;

    use tokio::sync::RwLock;

    use super::*;

    /// In-memory article store with revision-checked saves.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryArticleStore {
        articles: Arc<RwLock<HashMap<Uuid, ArticleState>>>,
    }

    impl MemoryArticleStore {
        /// Create an empty store.
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed an article, bypassing the revision check.
        pub async fn seed(&self, article: ArticleState) {
            let mut articles = self.articles.write().await;
            articles.insert(article.id, article);
        }

        /// Number of stored articles.
        pub async fn len(&self) -> usize {
            self.articles.read().await.len()
        }

        /// Whether the store is empty.
        pub async fn is_empty(&self) -> bool {
            self.articles.read().await.is_empty()
        }
    }

    #[async_trait]
    impl ArticleStore for MemoryArticleStore {
        async fn article(&self, id: Uuid) -> Option<ArticleState> {
            self.articles.read().await.get(&id).cloned()
        }

        async fn save(
            &self,
            article: ArticleState,
            expected_revision: u64,
        ) -> Result<(), SaveConflict> {
            let mut articles = self.articles.write().await;

            if let Some(stored) = articles.get(&article.id) {
                if stored.revision != expected_revision {
                    return Err(SaveConflict);
                }
            }

            articles.insert(article.id, article);
            Ok(())
        }
    }

    /// In-memory role store.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryRoleStore {
        roles: Arc<RwLock<HashMap<String, Role>>>,
    }

    impl MemoryRoleStore {
        /// Create an empty store.
        pub fn new() -> Self {
            Self::default()
        }

        /// Insert or replace a role.
        pub async fn upsert(&self, role: Role) {
            let mut roles = self.roles.write().await;
            roles.insert(role.slug.clone(), role);
        }
    }

    #[async_trait]
    impl RoleStore for MemoryRoleStore {
        async fn role(&self, slug: &str) -> Option<Role> {
            self.roles.read().await.get(slug).cloned()
        }

        async fn roles(&self) -> Vec<Role> {
            self.roles.read().await.values().cloned().collect()
        }
    }
}

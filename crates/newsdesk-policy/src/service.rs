//! Transition service: where decision meets mutation
//!
//! The engine's decisions are pure; the race lives at the boundary where
//! a decision is applied to the backing store. This service keeps the
//! read → evaluate → commit sequence to one atomic unit per article: the
//! decision is evaluated against a snapshot, and the commit only lands if
//! that snapshot is still current. A lost race triggers exactly one
//! automatic re-evaluation before [`PolicyError::StaleState`] surfaces.

use chrono::Utc;
use uuid::Uuid;

use newsdesk_org::{ArticleState, ArticleStatus, Principal};

use crate::engine::PolicyEngine;
use crate::error::{PolicyError, PolicyResult};
use crate::store::ArticleStore;

/// Applies workflow transitions against an article store.
///
/// Concurrent transitions on *different* articles are fully independent;
/// two concurrent transitions on the *same* article cannot both succeed,
/// because the store's revision check rejects the loser.
///
/// # Examples
///
/// ```no_run
/// use newsdesk_org::{ArticleStatus, Principal, RoleRegistry};
/// use newsdesk_policy::{MemoryArticleStore, PolicyEngine, TransitionService};
/// use uuid::Uuid;
///
/// # async fn example(article_id: Uuid) {
/// let engine = PolicyEngine::new(RoleRegistry::new());
/// let service = TransitionService::new(engine, MemoryArticleStore::new());
///
/// let editor = Principal::new("editor");
/// match service.transition(&editor, article_id, ArticleStatus::Approved).await {
///     Ok(article) => assert!(article.is_published()),
///     Err(denied) => eprintln!("{denied}"),
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TransitionService<S> {
    engine: PolicyEngine,
    store: S,
}

impl<S: ArticleStore> TransitionService<S> {
    /// Create a service over an engine snapshot and an article store.
    pub fn new(engine: PolicyEngine, store: S) -> Self {
        Self { engine, store }
    }

    /// The policy engine this service decides with.
    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    /// The underlying article store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Move an article to the target status on behalf of a principal.
    ///
    /// Reads the current state, evaluates the transition against that
    /// snapshot, and commits the new state with the snapshot's revision.
    /// If a concurrent transition wins the race, the sequence re-runs
    /// once against the fresh state; a second loss surfaces
    /// [`PolicyError::StaleState`].
    ///
    /// On success the returned state carries the target status and the
    /// paired publication timestamp (set when approving, cleared
    /// otherwise).
    ///
    /// # Arguments
    ///
    /// * `principal` - The acting principal
    /// * `article_id` - The article to transition
    /// * `target` - The requested status
    pub async fn transition(
        &self,
        principal: &Principal,
        article_id: Uuid,
        target: ArticleStatus,
    ) -> PolicyResult<ArticleState> {
        match self.try_transition(principal, article_id, target).await {
            Err(PolicyError::StaleState) => {
                tracing::warn!(
                    article = %article_id,
                    to = %target,
                    "transition lost a race, re-evaluating once"
                );
                self.try_transition(principal, article_id, target).await
            }
            outcome => outcome,
        }
    }

    /// One read → evaluate → commit attempt.
    async fn try_transition(
        &self,
        principal: &Principal,
        article_id: Uuid,
        target: ArticleStatus,
    ) -> PolicyResult<ArticleState> {
        // Missing articles fail closed: there is nothing to authorize
        // against.
        let current = self
            .store
            .article(article_id)
            .await
            .ok_or_else(|| PolicyError::denied(format!("articles.transition -> {target}")))?;

        if !self.engine.can_transition(principal, &current, target) {
            return Err(PolicyError::denied(format!(
                "articles.transition {} -> {}",
                current.status, target
            )));
        }

        let expected = current.revision;
        let mut next = current.clone();
        next.apply_transition(target, Utc::now());

        self.store
            .save(next.clone(), expected)
            .await
            .map_err(|_| PolicyError::StaleState)?;

        tracing::debug!(
            article = %article_id,
            from = %current.status,
            to = %target,
            "workflow transition committed"
        );

        Ok(next)
    }
}

//! Article lifecycle state
//!
//! The persisted lifecycle snapshot of a content item: owner, status,
//! and the timestamps that track creation, publication, and soft deletion.
//! Status only changes through [`apply_transition`](ArticleState::apply_transition),
//! which keeps the publication timestamp paired with the approved status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::principal::Principal;

/// Article workflow status.
///
/// The lifecycle is draft → review → approved. There is no terminal,
/// rejected, or archived status: approved articles remain editable by a
/// manage-permission holder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    /// Being written by its owner.
    Draft,

    /// Submitted for editorial review.
    Review,

    /// Approved and published.
    Approved,
}

impl ArticleStatus {
    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Approved => "approved",
        }
    }

    /// Parse a status from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use newsdesk_org::ArticleStatus;
    ///
    /// assert_eq!(ArticleStatus::parse("review"), Some(ArticleStatus::Review));
    /// assert_eq!(ArticleStatus::parse("APPROVED"), Some(ArticleStatus::Approved));
    /// assert_eq!(ArticleStatus::parse("archived"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "review" => Some(Self::Review),
            "approved" => Some(Self::Approved),
            _ => None,
        }
    }

    /// All statuses in lifecycle order.
    pub fn all() -> [Self; 3] {
        [Self::Draft, Self::Review, Self::Approved]
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted lifecycle snapshot of an article.
///
/// Decisions are evaluated against an immutable snapshot; the storage
/// layer commits the mutation together with the decision using the
/// `revision` counter as an optimistic concurrency token.
///
/// # Invariants
///
/// - `published_at` is set if and only if `status` is `Approved`
/// - Status only changes through [`apply_transition`](Self::apply_transition)
/// - Articles are soft-deleted, never removed
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use newsdesk_org::{ArticleState, ArticleStatus, Principal};
///
/// let reporter = Principal::new("reporter");
/// let mut article = ArticleState::drafted_by(reporter.id);
/// assert_eq!(article.status, ArticleStatus::Draft);
/// assert!(article.owned_by(&reporter));
///
/// article.apply_transition(ArticleStatus::Approved, Utc::now());
/// assert!(article.is_published());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleState {
    /// Unique article ID
    pub id: Uuid,

    /// The principal that owns (authored) the article
    pub owner: Uuid,

    /// Current workflow status
    pub status: ArticleStatus,

    /// When the article was created
    pub created_at: DateTime<Utc>,

    /// When the article was approved for publication, if it is approved
    pub published_at: Option<DateTime<Utc>>,

    /// When the article was soft-deleted, if it has been
    pub deleted_at: Option<DateTime<Utc>>,

    /// Optimistic concurrency token, bumped on every state change
    #[serde(default)]
    pub revision: u64,
}

impl ArticleState {
    /// Creates a new draft owned by the given principal.
    ///
    /// # Arguments
    ///
    /// * `owner` - The authoring principal's ID
    pub fn drafted_by(owner: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            owner,
            status: ArticleStatus::Draft,
            created_at: Utc::now(),
            published_at: None,
            deleted_at: None,
            revision: 0,
        }
    }

    /// Whether the given principal owns this article.
    pub fn owned_by(&self, principal: &Principal) -> bool {
        self.owner == principal.id
    }

    /// Whether the article is approved and carries a publication time.
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Approved && self.published_at.is_some()
    }

    /// Apply a workflow transition as one unit.
    ///
    /// Sets the status and the publication timestamp together: the
    /// timestamp is set to `now` exactly when the target is `Approved`,
    /// and cleared otherwise. Bumps the revision counter. Callers must
    /// only invoke this after the policy engine allowed the transition,
    /// and must commit the result atomically with that decision.
    ///
    /// # Arguments
    ///
    /// * `target` - The status to move to
    /// * `now` - The commit time, used for the publication timestamp
    pub fn apply_transition(&mut self, target: ArticleStatus, now: DateTime<Utc>) {
        self.status = target;
        self.published_at = if target == ArticleStatus::Approved {
            Some(now)
        } else {
            None
        };
        self.revision += 1;
    }

    /// Whether the article has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Mark the article as deleted at the given time.
    ///
    /// Soft-deleted articles stay retrievable and keep their status.
    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
        self.revision += 1;
    }

    /// Clear the deletion marker.
    pub fn restore(&mut self) {
        self.deleted_at = None;
        self.revision += 1;
    }
}

//! # Newsdesk Policy
//!
//! This crate provides the authorization and workflow-state engine for
//! the Newsdesk editorial platform: the rules that decide what a role may
//! do, and whether a status transition on an article is legal for the
//! acting principal.
//!
//! ## Overview
//!
//! The newsdesk-policy crate handles:
//! - **PolicyEngine**: Pure allow/deny decisions composed from permission
//!   lookups and the workflow rules
//! - **WorkflowStateMachine**: The draft → review → approved transition
//!   table with per-row guards and the manage bypass
//! - **Stores**: The narrow async seam to the storage layer, with
//!   revision-checked saves
//! - **TransitionService**: The read → evaluate → commit loop that keeps
//!   decision and mutation atomic per article
//!
//! ## Architecture
//!
//! ```text
//! request handler (collaborator)
//!     │  Principal + article id + target status
//!     ▼
//! TransitionService ──reads──→ ArticleStore
//!     │  snapshot
//!     ▼
//! PolicyEngine ──permissions──→ RoleRegistry
//!     │            └─ transition rules ─→ WorkflowStateMachine
//!     ▼
//! commit (revision-checked) or typed denial
//! ```
//!
//! Decisions are boolean and final, never partial or graded. Every
//! failure is a typed [`PolicyError`] for the caller to map to a
//! transport response; denials are expected outcomes, not server errors.
//!
//! ## Usage
//!
//! ```rust
//! use newsdesk_org::{ArticleState, ArticleStatus, Principal, RoleRegistry};
//! use newsdesk_policy::PolicyEngine;
//!
//! let engine = PolicyEngine::new(RoleRegistry::new());
//!
//! let reporter = Principal::new("reporter");
//! let article = ArticleState::drafted_by(reporter.id);
//!
//! // Reporters submit their own drafts for review...
//! assert!(engine.can_transition(&reporter, &article, ArticleStatus::Review));
//!
//! // ...but approval is the editor's call, and only from review.
//! assert!(!engine.can_transition(&reporter, &article, ArticleStatus::Approved));
//! ```
//!
//! ## Concurrency
//!
//! Engine and state-machine operations are pure functions over immutable
//! snapshots: deterministic, non-blocking, and safe to call from any
//! number of threads. The only race lives at the storage boundary, where
//! [`TransitionService`] pairs each decision with a revision-checked
//! commit so concurrent transitions on one article cannot both succeed.
//!
//! ## Feature Flags
//!
//! - `memory`: In-memory store implementations (enabled by default)

pub mod engine;
pub mod error;
pub mod service;
pub mod store;
pub mod workflow;

// Re-export main types for convenience
pub use engine::{ArticleAbilities, PolicyEngine, ViewScope};
pub use error::{PolicyError, PolicyResult};
pub use service::TransitionService;
pub use store::{registry_snapshot, ArticleStore, RoleStore, SaveConflict};
#[cfg(feature = "memory")]
pub use store::{MemoryArticleStore, MemoryRoleStore};
pub use workflow::WorkflowStateMachine;

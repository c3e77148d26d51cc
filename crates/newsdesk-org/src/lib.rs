//! # Newsdesk Organization
//!
//! This crate provides the newsroom identity and content-state model for
//! the Newsdesk platform: roles and their grants, the acting principal,
//! and the article lifecycle snapshot consumed by the policy engine.
//!
//! ## Overview
//!
//! The newsdesk-org crate handles:
//! - **Roles**: Named permission sets, built-in and configured
//! - **RoleRegistry**: Two-tier role resolution (configuration, then the
//!   built-in table), failing closed for unknown roles
//! - **Principal**: The acting identity (role + active flag)
//! - **ArticleState**: The article lifecycle snapshot (status, owner,
//!   timestamps, soft delete)
//!
//! ## Architecture
//!
//! ```text
//! Principal (role slug, active)
//!     └─ RoleRegistry ─→ Role ─→ PermissionSet
//!            └─ fallback: BuiltinRole default table
//!
//! ArticleState (owner, status: draft | review | approved, timestamps)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use newsdesk_org::{ArticleState, BuiltinRole, Principal, Role, RoleRegistry};
//!
//! // Registry over persisted role configuration
//! let registry = RoleRegistry::from_roles([Role::builtin(BuiltinRole::Editor)]);
//!
//! // A reporter falls back to the built-in default table
//! let reporter = Principal::new(BuiltinRole::Reporter.as_str());
//! assert!(reporter.has_permission(&registry, "articles.create"));
//!
//! // Articles start life as drafts owned by their author
//! let article = ArticleState::drafted_by(reporter.id);
//! assert!(article.owned_by(&reporter));
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `newsdesk-rbac`: The permission vocabulary and grant sets
//! - `newsdesk-policy`: The authorization and workflow decision engine

pub mod article;
pub mod principal;
pub mod registry;
pub mod roles;

// Re-export main types for convenience
pub use article::{ArticleState, ArticleStatus};
pub use principal::Principal;
pub use registry::RoleRegistry;
pub use roles::{default_permissions_for, BuiltinRole, Role, RoleSummary};

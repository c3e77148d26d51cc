//! # Newsdesk RBAC (Role-Based Access Control)
//!
//! This crate provides the permission vocabulary for the Newsdesk editorial
//! platform, shared by the identity, policy, and administration layers.
//!
//! ## Overview
//!
//! The newsdesk-rbac crate handles:
//! - **Permission keys**: Dotted capability strings, namespaced by resource
//! - **Catalog**: The assignable keys with their human-readable labels
//! - **Permission sets**: The grant collection attached to a role
//!
//! ## Architecture
//!
//! ```text
//! PermissionKey = "<resource>.<capability>"
//!
//! Examples:
//!   "articles.create"    - Draft new articles
//!   "articles.approve"   - Approve articles in review
//!   "roles.manage"       - Administer roles
//!
//! The single sentinel "*" grants every permission.
//! ```
//!
//! Keys are opaque, case-sensitive strings to the decision engine; the
//! catalog in [`keys`] is the authoritative list of assignable keys.
//!
//! ## Usage
//!
//! ```rust
//! use newsdesk_rbac::{keys, PermissionSet};
//!
//! // A reporter-shaped grant set
//! let mut set = PermissionSet::new();
//! set.grant(keys::ARTICLES_CREATE);
//! set.grant(keys::ARTICLES_EDIT);
//!
//! assert!(set.grants(keys::ARTICLES_CREATE));
//! assert!(!set.grants(keys::ARTICLES_APPROVE));
//!
//! // The wildcard set grants everything
//! let admin = PermissionSet::all();
//! assert!(admin.grants(keys::ROLES_MANAGE));
//! ```
//!
//! ## Wildcard Invariant
//!
//! A set holding the sentinel ignores any explicit keys: every check
//! against it succeeds. Deserializing a list that contains `"*"`
//! normalizes to the unrestricted set.

pub mod keys;
pub mod set;

// Re-export main types for convenience
pub use keys::{PermissionOption, WILDCARD};
pub use set::PermissionSet;

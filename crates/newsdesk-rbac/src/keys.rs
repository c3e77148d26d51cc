//! # Permission Keys
//!
//! The permission vocabulary of the platform. Keys are dotted,
//! case-sensitive strings namespaced by resource (`articles.*`, `users.*`,
//! `roles.*`); the decision engine treats them as opaque identifiers and
//! only this catalog defines which keys are assignable.

use serde::Serialize;

/// The universal wildcard sentinel.
///
/// A permission set containing this value grants every permission,
/// regardless of which explicit keys it also holds.
pub const WILDCARD: &str = "*";

/// View any article, not just owned ones.
pub const ARTICLES_VIEW_ALL: &str = "articles.view_all";

/// Draft new articles.
pub const ARTICLES_CREATE: &str = "articles.create";

/// Edit own articles (while not approved).
pub const ARTICLES_EDIT: &str = "articles.edit";

/// Edit any article (while not approved).
pub const ARTICLES_EDIT_ALL: &str = "articles.edit_all";

/// Submit own articles to review.
pub const ARTICLES_REVIEW: &str = "articles.review";

/// Approve articles that are in review.
pub const ARTICLES_APPROVE: &str = "articles.approve";

/// Full control over every article action, bypassing the normal flow.
pub const ARTICLES_MANAGE: &str = "articles.manage";

/// Administer user accounts.
pub const USERS_MANAGE: &str = "users.manage";

/// Administer roles and their permission sets.
pub const ROLES_MANAGE: &str = "roles.manage";

/// An assignable permission key with its human-readable label.
///
/// Administrative UIs render the catalog as checkboxes when editing a
/// role's grants.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PermissionOption {
    /// The permission key (e.g., "articles.create").
    pub key: &'static str,
    /// Human-readable label for administrative UIs.
    pub label: &'static str,
}

/// Every assignable permission key, in display order.
///
/// The wildcard is deliberately absent: unrestricted access is granted by
/// assigning a role the wildcard set, not by ticking a catalog entry.
const CATALOG: &[PermissionOption] = &[
    PermissionOption {
        key: ARTICLES_VIEW_ALL,
        label: "View all articles",
    },
    PermissionOption {
        key: ARTICLES_CREATE,
        label: "Create articles",
    },
    PermissionOption {
        key: ARTICLES_EDIT,
        label: "Edit own articles",
    },
    PermissionOption {
        key: ARTICLES_EDIT_ALL,
        label: "Edit any article",
    },
    PermissionOption {
        key: ARTICLES_REVIEW,
        label: "Submit to review",
    },
    PermissionOption {
        key: ARTICLES_APPROVE,
        label: "Approve articles",
    },
    PermissionOption {
        key: ARTICLES_MANAGE,
        label: "Manage all article actions",
    },
    PermissionOption {
        key: USERS_MANAGE,
        label: "Manage users",
    },
    PermissionOption {
        key: ROLES_MANAGE,
        label: "Manage roles",
    },
];

/// Get the catalog of assignable permission keys.
///
/// # Returns
///
/// The options in a stable display order.
///
/// # Example
///
/// ```
/// use newsdesk_rbac::keys;
///
/// let catalog = keys::catalog();
/// assert!(catalog.iter().any(|option| option.key == keys::ARTICLES_APPROVE));
/// ```
pub fn catalog() -> &'static [PermissionOption] {
    CATALOG
}

/// Check whether a key is part of the assignable catalog.
///
/// The wildcard sentinel is not an assignable key and returns `false`.
///
/// # Example
///
/// ```
/// use newsdesk_rbac::keys;
///
/// assert!(keys::is_known("articles.create"));
/// assert!(!keys::is_known("articles.destroy"));
/// assert!(!keys::is_known("*"));
/// ```
pub fn is_known(key: &str) -> bool {
    CATALOG.iter().any(|option| option.key == key)
}

//! The acting principal
//!
//! A principal is the authenticated identity on whose behalf every
//! authorization decision is evaluated: a role identifier plus an active
//! flag. The session layer rejects inactive principals before the engine
//! sees them, but the engine re-checks regardless.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use newsdesk_rbac::PermissionSet;

use crate::registry::RoleRegistry;

/// The authenticated actor for an authorization decision.
///
/// Principals carry no credentials: authentication happens upstream and
/// the session layer hands the core a resolved `Principal`. The derived
/// permission set comes from the [`RoleRegistry`] at decision time, so a
/// principal value stays valid across role reconfiguration.
///
/// # Examples
///
/// ```
/// use newsdesk_org::{Principal, RoleRegistry};
///
/// let registry = RoleRegistry::new();
/// let reporter = Principal::new("reporter");
///
/// assert!(reporter.is_active());
/// assert!(reporter.has_permission(&registry, "articles.create"));
/// assert!(!reporter.has_permission(&registry, "articles.approve"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    /// Unique principal ID
    pub id: Uuid,

    /// The role identifier this principal is assigned
    pub role: String,

    /// Whether the account is active
    ///
    /// An inactive principal is denied every action regardless of
    /// permissions.
    pub is_active: bool,
}

impl Principal {
    /// Creates a new active principal with the given role.
    ///
    /// # Arguments
    ///
    /// * `role` - The role identifier
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: role.into(),
            is_active: true,
        }
    }

    /// Set an explicit principal ID.
    ///
    /// Useful when reconstructing a principal from session data.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Returns a deactivated copy of this principal.
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether the account is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Resolve this principal's permission set through the registry.
    ///
    /// Two-tier resolution: persisted role configuration first, then the
    /// built-in default table, then the empty set.
    pub fn permissions(&self, registry: &RoleRegistry) -> PermissionSet {
        registry.lookup(&self.role)
    }

    /// Check a single permission key against the resolved set.
    ///
    /// The wildcard grants every key. This does not consider the active
    /// flag; decision entry points check that separately.
    ///
    /// # Arguments
    ///
    /// * `registry` - The role registry snapshot for this decision
    /// * `key` - The permission key to check
    pub fn has_permission(&self, registry: &RoleRegistry, key: &str) -> bool {
        self.permissions(registry).grants(key)
    }

    /// Whether this principal's role is one of the given identifiers.
    ///
    /// Route-level guards use this for coarse role gating before any
    /// per-article policy runs. An empty list matches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsdesk_org::Principal;
    ///
    /// let editor = Principal::new("editor");
    /// assert!(editor.has_role_in(&["admin", "editor"]));
    /// assert!(!editor.has_role_in(&["admin"]));
    /// ```
    pub fn has_role_in(&self, roles: &[&str]) -> bool {
        roles.iter().any(|role| *role == self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{BuiltinRole, Role};
    use newsdesk_rbac::keys;

    #[test]
    fn test_principal_creation() {
        let principal = Principal::new("reporter");
        assert_eq!(principal.role, "reporter");
        assert!(principal.is_active());
    }

    #[test]
    fn test_deactivated() {
        let principal = Principal::new("editor").deactivated();
        assert!(!principal.is_active());
    }

    #[test]
    fn test_permissions_resolve_through_configuration() {
        let configured = Role::builtin(BuiltinRole::Reporter).with_permissions(
            newsdesk_rbac::PermissionSet::from_keys([keys::ARTICLES_CREATE]),
        );
        let registry = RoleRegistry::from_roles([configured]);
        let reporter = Principal::new("reporter");

        assert!(reporter.has_permission(&registry, keys::ARTICLES_CREATE));
        // Narrowed configuration removed the default edit grant.
        assert!(!reporter.has_permission(&registry, keys::ARTICLES_EDIT));
    }

    #[test]
    fn test_permissions_fall_back_to_builtin_table() {
        let registry = RoleRegistry::new();
        let editor = Principal::new("editor");

        assert!(editor.has_permission(&registry, keys::ARTICLES_APPROVE));
        assert!(!editor.has_permission(&registry, keys::ARTICLES_CREATE));
    }

    #[test]
    fn test_unknown_role_has_no_permissions() {
        let registry = RoleRegistry::new();
        let stringer = Principal::new("stringer");

        assert!(stringer.permissions(&registry).is_empty());
        assert!(!stringer.has_permission(&registry, keys::ARTICLES_CREATE));
    }

    #[test]
    fn test_has_role_in() {
        let admin = Principal::new("admin");
        assert!(admin.has_role_in(&["admin"]));
        assert!(admin.has_role_in(&["editor", "admin"]));
        assert!(!admin.has_role_in(&["editor", "reporter"]));
        assert!(!admin.has_role_in(&[]));
    }
}

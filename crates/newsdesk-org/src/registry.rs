//! Role registry: two-tier role resolution
//!
//! The registry is an immutable snapshot of persisted role configuration
//! taken at the start of an authorization decision. Resolution is explicit
//! lookup against that configuration, falling back to the built-in default
//! table, and finally to the empty set, never a failure.

use std::collections::HashMap;

use newsdesk_rbac::PermissionSet;

use crate::roles::{default_permissions_for, Role};

/// Read-only view over the persisted roles for one authorization decision.
///
/// Because the registry owns a snapshot, repeated lookups within a single
/// decision are consistent: role configuration cannot change mid-decision.
///
/// # Resolution Order
///
/// 1. A configured (non-deleted) role with a matching slug
/// 2. The built-in default table (admin / editor / reporter)
/// 3. The empty permission set (fail closed)
///
/// # Examples
///
/// ```
/// use newsdesk_org::{BuiltinRole, Role, RoleRegistry};
/// use newsdesk_rbac::{keys, PermissionSet};
///
/// let custom = Role::new("columnist", "Columnist")
///     .with_permissions(PermissionSet::from_keys([keys::ARTICLES_CREATE]));
/// let registry = RoleRegistry::from_roles([custom]);
///
/// // Configured role wins
/// assert!(registry.lookup("columnist").grants(keys::ARTICLES_CREATE));
///
/// // Built-in fallback applies without configuration
/// assert!(registry.lookup("admin").is_unrestricted());
///
/// // Unknown roles fail closed
/// assert!(registry.lookup("stringer").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    /// Configured roles keyed by slug.
    roles: HashMap<String, Role>,
}

impl RoleRegistry {
    /// Create an empty registry.
    ///
    /// Lookups resolve purely through the built-in default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry snapshot from persisted roles.
    ///
    /// Soft-deleted roles are skipped: a deleted role no longer grants
    /// anything, though its built-in fallback (if any) still applies.
    ///
    /// # Arguments
    ///
    /// * `roles` - The persisted roles, as loaded by the storage layer
    pub fn from_roles<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        let roles = roles
            .into_iter()
            .filter(|role| !role.is_deleted())
            .map(|role| (role.slug.clone(), role))
            .collect();

        Self { roles }
    }

    /// Resolve a role identifier to its permission set.
    ///
    /// Fails closed: unknown identifiers with no built-in default resolve
    /// to the empty set.
    ///
    /// # Arguments
    ///
    /// * `role` - The role identifier to resolve
    pub fn lookup(&self, role: &str) -> PermissionSet {
        match self.roles.get(role) {
            Some(configured) => configured.permissions.clone(),
            None => self.default_for(role),
        }
    }

    /// Resolve a role identifier through the built-in default table only.
    ///
    /// # Returns
    ///
    /// The static table entry for admin/editor/reporter, or the empty set
    pub fn default_for(&self, role: &str) -> PermissionSet {
        default_permissions_for(role)
    }

    /// Whether the identifier resolves to anything: a configured role or a
    /// built-in default.
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(role) || !default_permissions_for(role).is_empty()
    }

    /// Get a configured role by slug.
    ///
    /// Returns `None` for identifiers that only exist in the built-in
    /// table; use [`lookup`](Self::lookup) for permission resolution.
    pub fn role(&self, slug: &str) -> Option<&Role> {
        self.roles.get(slug)
    }

    /// All configured roles, ordered by name for administrative listings.
    pub fn roles(&self) -> Vec<&Role> {
        let mut roles: Vec<&Role> = self.roles.values().collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        roles
    }

    /// Number of configured roles in the snapshot.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the snapshot holds no configured roles.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::BuiltinRole;
    use chrono::Utc;
    use newsdesk_rbac::keys;

    #[test]
    fn test_configured_role_overrides_builtin_default() {
        // An editor stripped down to approval only
        let narrowed = Role::builtin(BuiltinRole::Editor)
            .with_permissions(newsdesk_rbac::PermissionSet::from_keys([
                keys::ARTICLES_APPROVE,
            ]));
        let registry = RoleRegistry::from_roles([narrowed]);

        let resolved = registry.lookup("editor");
        assert!(resolved.grants(keys::ARTICLES_APPROVE));
        assert!(!resolved.grants(keys::ARTICLES_EDIT_ALL));
    }

    #[test]
    fn test_builtin_fallback_without_configuration() {
        let registry = RoleRegistry::new();

        assert!(registry.lookup("admin").is_unrestricted());
        assert!(registry.lookup("reporter").grants(keys::ARTICLES_CREATE));
        assert!(registry.contains("editor"));
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        let registry = RoleRegistry::new();

        assert!(registry.lookup("stringer").is_empty());
        assert!(!registry.contains("stringer"));
        assert!(registry.role("stringer").is_none());
    }

    #[test]
    fn test_deleted_roles_are_skipped() {
        let mut role = Role::new("columnist", "Columnist")
            .with_permissions(newsdesk_rbac::PermissionSet::from_keys([
                keys::ARTICLES_CREATE,
            ]));
        role.soft_delete(Utc::now());

        let registry = RoleRegistry::from_roles([role]);
        assert!(registry.lookup("columnist").is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_deleted_builtin_still_falls_back() {
        // Deleting the persisted editor row must not strip the built-in
        // table entry.
        let mut editor = Role::builtin(BuiltinRole::Editor);
        editor.soft_delete(Utc::now());

        let registry = RoleRegistry::from_roles([editor]);
        assert!(registry.lookup("editor").grants(keys::ARTICLES_APPROVE));
    }

    #[test]
    fn test_roles_ordered_by_name() {
        let registry = RoleRegistry::from_roles([
            Role::new("stringer", "Stringer"),
            Role::new("columnist", "Columnist"),
        ]);

        let names: Vec<&str> = registry.roles().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Columnist", "Stringer"]);
        assert_eq!(registry.len(), 2);
    }
}

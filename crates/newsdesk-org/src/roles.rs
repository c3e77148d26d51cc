//! Roles and their permission grants
//!
//! This module defines the three built-in newsroom roles with their static
//! default permission table, and the configurable [`Role`] entity that an
//! administrator edits at runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use newsdesk_rbac::{keys, PermissionSet};

/// The three well-known newsroom roles.
///
/// These identifiers always resolve to a permission set: when no persisted
/// role configuration matches, the static default table below applies.
/// Built-in roles can be reconfigured but never deleted.
///
/// # Default Permission Table
///
/// - **Admin**: the wildcard (every permission)
/// - **Editor**: view all, edit all, approve
/// - **Reporter**: create, edit own, submit to review
///
/// # Examples
///
/// ```
/// use newsdesk_org::BuiltinRole;
///
/// let role = BuiltinRole::Editor;
/// assert_eq!(role.as_str(), "editor");
/// assert!(role.default_permissions().grants("articles.approve"));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinRole {
    /// Full system access.
    Admin,

    /// Reviews and approves newsroom content.
    Editor,

    /// Creates and submits drafts.
    Reporter,
}

impl BuiltinRole {
    /// Get string representation of the role identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsdesk_org::BuiltinRole;
    ///
    /// assert_eq!(BuiltinRole::Admin.as_str(), "admin");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Reporter => "reporter",
        }
    }

    /// Parse a role identifier from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(BuiltinRole)` if the identifier is one of the three built-ins,
    /// `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use newsdesk_org::BuiltinRole;
    ///
    /// assert_eq!(BuiltinRole::parse("editor"), Some(BuiltinRole::Editor));
    /// assert_eq!(BuiltinRole::parse("ADMIN"), Some(BuiltinRole::Admin));
    /// assert_eq!(BuiltinRole::parse("columnist"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "editor" => Some(Self::Editor),
            "reporter" => Some(Self::Reporter),
            _ => None,
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Editor => "Editor",
            Self::Reporter => "Reporter",
        }
    }

    /// Get the role's description for administrative listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Admin => "Full system access",
            Self::Editor => "Review and approve newsroom content",
            Self::Reporter => "Create and submit drafts",
        }
    }

    /// The static default permission table entry for this role.
    ///
    /// This is the second tier of role resolution: it applies whenever no
    /// persisted configuration overrides the role.
    pub fn default_permissions(&self) -> PermissionSet {
        match self {
            Self::Admin => PermissionSet::all(),
            Self::Editor => PermissionSet::from_keys([
                keys::ARTICLES_VIEW_ALL,
                keys::ARTICLES_EDIT_ALL,
                keys::ARTICLES_APPROVE,
            ]),
            Self::Reporter => PermissionSet::from_keys([
                keys::ARTICLES_CREATE,
                keys::ARTICLES_EDIT,
                keys::ARTICLES_REVIEW,
            ]),
        }
    }

    /// Get all built-in roles.
    pub fn all() -> [Self; 3] {
        [Self::Admin, Self::Editor, Self::Reporter]
    }
}

/// Resolve the built-in default permission set for a role identifier.
///
/// The fallback rule in one place: a known built-in identifier maps to its
/// table entry, anything else maps to the empty set (fail closed).
///
/// # Examples
///
/// ```
/// use newsdesk_org::default_permissions_for;
///
/// assert!(default_permissions_for("admin").is_unrestricted());
/// assert!(default_permissions_for("columnist").is_empty());
/// ```
pub fn default_permissions_for(role: &str) -> PermissionSet {
    BuiltinRole::parse(role)
        .map(|builtin| builtin.default_permissions())
        .unwrap_or_default()
}

/// A configurable role: a named permission set assignable to principals.
///
/// Roles are created and edited by administrators; the three built-in
/// identifiers are protected and a role with assigned principals cannot be
/// deleted until they are reassigned.
///
/// # Examples
///
/// ```
/// use newsdesk_org::Role;
/// use newsdesk_rbac::{keys, PermissionSet};
///
/// let role = Role::new("columnist", "Columnist")
///     .with_description("Writes opinion pieces")
///     .with_permissions(PermissionSet::from_keys([keys::ARTICLES_CREATE]));
///
/// assert!(!role.is_system());
/// assert!(role.can_delete());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Unique role ID
    pub id: Uuid,

    /// Unique role identifier (the key principals reference)
    pub slug: String,

    /// Human-readable role name
    pub name: String,

    /// Description shown in administrative listings
    pub description: Option<String>,

    /// The role's permission grants
    #[serde(default)]
    pub permissions: PermissionSet,

    /// Number of principals currently assigned this role
    ///
    /// Maintained by the storage layer; used only to gate deletion.
    #[serde(default)]
    pub assigned_users: usize,

    /// When the role was soft-deleted, if it has been
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Role {
    /// Creates a new role with an empty permission set.
    ///
    /// # Arguments
    ///
    /// * `slug` - The unique role identifier
    /// * `name` - Human-readable role name
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            slug: slug.into(),
            name: name.into(),
            description: None,
            permissions: PermissionSet::new(),
            assigned_users: 0,
            deleted_at: None,
        }
    }

    /// Creates one of the built-in roles with its default permission table
    /// entry, display name, and description.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsdesk_org::{BuiltinRole, Role};
    ///
    /// let editor = Role::builtin(BuiltinRole::Editor);
    /// assert_eq!(editor.slug, "editor");
    /// assert!(editor.permissions.grants("articles.approve"));
    /// ```
    pub fn builtin(role: BuiltinRole) -> Self {
        Self {
            id: Uuid::now_v7(),
            slug: role.as_str().to_string(),
            name: role.display_name().to_string(),
            description: Some(role.description().to_string()),
            permissions: role.default_permissions(),
            assigned_users: 0,
            deleted_at: None,
        }
    }

    /// Set the role description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the role's permission grants.
    pub fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = permissions;
        self
    }

    /// Set the assigned-principal reference count.
    ///
    /// The storage layer supplies this when loading roles for
    /// administration; it gates deletion only.
    pub fn with_assigned_users(mut self, count: usize) -> Self {
        self.assigned_users = count;
        self
    }

    /// Whether this is one of the three protected built-in roles.
    pub fn is_system(&self) -> bool {
        BuiltinRole::parse(&self.slug).is_some()
    }

    /// Whether the role may be deleted.
    ///
    /// System roles are never deletable; other roles require that no
    /// principal is currently assigned.
    pub fn can_delete(&self) -> bool {
        !self.is_system() && self.assigned_users == 0
    }

    /// Whether the role has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Mark the role as deleted at the given time.
    ///
    /// Deletion gating ([`can_delete`](Self::can_delete)) is evaluated by
    /// the policy engine before the caller gets here.
    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
    }

    /// Clear the deletion marker.
    pub fn restore(&mut self) {
        self.deleted_at = None;
    }

    /// Build the administrative listing view of this role.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsdesk_org::{BuiltinRole, Role};
    ///
    /// let summary = Role::builtin(BuiltinRole::Reporter).summary();
    /// assert!(summary.is_system);
    /// assert!(!summary.can_delete);
    /// ```
    pub fn summary(&self) -> RoleSummary {
        RoleSummary {
            id: self.id,
            slug: self.slug.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            permissions: self.permissions.clone(),
            assigned_users: self.assigned_users,
            can_delete: self.can_delete(),
            is_system: self.is_system(),
        }
    }
}

/// Administrative listing view of a role.
///
/// Carries the deletion gating flags the role administration UI renders
/// next to each row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSummary {
    /// Role ID
    pub id: Uuid,
    /// Role identifier
    pub slug: String,
    /// Human-readable name
    pub name: String,
    /// Description
    pub description: Option<String>,
    /// Permission grants
    pub permissions: PermissionSet,
    /// Principals currently assigned
    pub assigned_users: usize,
    /// Whether deletion is currently allowed
    pub can_delete: bool,
    /// Whether this is a protected built-in role
    pub is_system: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_role_parse() {
        assert_eq!(BuiltinRole::parse("admin"), Some(BuiltinRole::Admin));
        assert_eq!(BuiltinRole::parse("EDITOR"), Some(BuiltinRole::Editor));
        assert_eq!(BuiltinRole::parse("reporter"), Some(BuiltinRole::Reporter));
        assert_eq!(BuiltinRole::parse("columnist"), None);
    }

    #[test]
    fn test_builtin_default_table() {
        assert!(BuiltinRole::Admin.default_permissions().is_unrestricted());

        let editor = BuiltinRole::Editor.default_permissions();
        assert!(editor.grants(keys::ARTICLES_VIEW_ALL));
        assert!(editor.grants(keys::ARTICLES_EDIT_ALL));
        assert!(editor.grants(keys::ARTICLES_APPROVE));
        assert!(!editor.grants(keys::ARTICLES_CREATE));

        let reporter = BuiltinRole::Reporter.default_permissions();
        assert!(reporter.grants(keys::ARTICLES_CREATE));
        assert!(reporter.grants(keys::ARTICLES_EDIT));
        assert!(reporter.grants(keys::ARTICLES_REVIEW));
        assert!(!reporter.grants(keys::ARTICLES_APPROVE));
    }

    #[test]
    fn test_default_permissions_for_unknown_role_is_empty() {
        assert!(default_permissions_for("columnist").is_empty());
        assert!(default_permissions_for("").is_empty());
    }

    #[test]
    fn test_role_creation() {
        let role = Role::new("columnist", "Columnist")
            .with_description("Writes opinion pieces");

        assert_eq!(role.slug, "columnist");
        assert_eq!(role.name, "Columnist");
        assert!(role.permissions.is_empty());
        assert!(!role.is_deleted());
    }

    #[test]
    fn test_system_roles_are_protected() {
        for builtin in BuiltinRole::all() {
            let role = Role::builtin(builtin);
            assert!(role.is_system());
            assert!(!role.can_delete());
        }
    }

    #[test]
    fn test_custom_role_deletable_only_when_unreferenced() {
        let role = Role::new("columnist", "Columnist");
        assert!(role.can_delete());

        let referenced = role.clone().with_assigned_users(3);
        assert!(!referenced.can_delete());
    }

    #[test]
    fn test_soft_delete_and_restore() {
        let mut role = Role::new("columnist", "Columnist");
        role.soft_delete(Utc::now());
        assert!(role.is_deleted());

        role.restore();
        assert!(!role.is_deleted());
    }

    #[test]
    fn test_summary_carries_gating_flags() {
        let summary = Role::new("columnist", "Columnist")
            .with_assigned_users(2)
            .summary();

        assert!(!summary.is_system);
        assert!(!summary.can_delete);
        assert_eq!(summary.assigned_users, 2);
    }
}

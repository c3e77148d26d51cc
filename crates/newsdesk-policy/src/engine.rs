//! The policy engine
//!
//! Pure decision component for the newsroom: given a principal, an action,
//! and optionally an article snapshot, it answers allow or deny. Decisions
//! compose permission-set lookups (via the role registry snapshot) with
//! the workflow state machine's transition rules.
//!
//! Allow conditions are expressed as explicit rule lists evaluated in a
//! fixed order with early exit on the first matching rule, rather than
//! nested conditionals. Each rule is a conjunction of conditions; a
//! decision allows when any rule matches. The wildcard folds into the
//! permission condition through [`PermissionSet::grants`].

use serde::{Deserialize, Serialize};

use newsdesk_org::{ArticleState, ArticleStatus, Principal, Role, RoleRegistry};
use newsdesk_rbac::{keys, PermissionSet};

use crate::error::{PolicyError, PolicyResult};
use crate::workflow::WorkflowStateMachine;

/// One condition of an allow rule.
#[derive(Debug, Clone, Copy)]
enum Condition {
    /// The principal's resolved set grants this key (wildcard included).
    Permission(&'static str),
    /// The principal owns the article under decision.
    Owner,
    /// The article under decision is not in this status.
    StatusNot(ArticleStatus),
}

/// An allow rule: a conjunction of conditions. First matching rule wins.
#[derive(Debug, Clone, Copy)]
struct AllowRule(&'static [Condition]);

/// View an article: managers and view-all holders see everything, owners
/// see their own.
const VIEW_RULES: &[AllowRule] = &[
    AllowRule(&[Condition::Permission(keys::ARTICLES_MANAGE)]),
    AllowRule(&[Condition::Permission(keys::ARTICLES_VIEW_ALL)]),
    AllowRule(&[Condition::Owner]),
];

/// Create an article.
const CREATE_RULES: &[AllowRule] = &[
    AllowRule(&[Condition::Permission(keys::ARTICLES_MANAGE)]),
    AllowRule(&[Condition::Permission(keys::ARTICLES_CREATE)]),
];

/// Edit an article: manage is unconditional; edit-all and own-edit stop
/// once the article is approved.
const EDIT_RULES: &[AllowRule] = &[
    AllowRule(&[Condition::Permission(keys::ARTICLES_MANAGE)]),
    AllowRule(&[
        Condition::Permission(keys::ARTICLES_EDIT_ALL),
        Condition::StatusNot(ArticleStatus::Approved),
    ]),
    AllowRule(&[
        Condition::Permission(keys::ARTICLES_EDIT),
        Condition::Owner,
        Condition::StatusNot(ArticleStatus::Approved),
    ]),
];

/// How much of the article index a principal may see.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewScope {
    /// Every article, regardless of owner.
    Everything,
    /// Only articles the principal owns.
    OwnOnly,
}

impl ViewScope {
    /// Whether a specific article falls inside this scope for the
    /// principal. Inactive principals see nothing.
    pub fn permits(&self, principal: &Principal, article: &ArticleState) -> bool {
        if !principal.is_active() {
            return false;
        }
        match self {
            Self::Everything => true,
            Self::OwnOnly => article.owned_by(principal),
        }
    }
}

/// The per-article ability map rendered by UIs.
///
/// Computed once per article row so templates never re-derive policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleAbilities {
    /// May open the article.
    pub view: bool,
    /// May edit the article.
    pub edit: bool,
    /// May submit the article to review.
    pub move_to_review: bool,
    /// May approve the article.
    pub approve: bool,
}

/// Pure authorization decision component.
///
/// The engine owns a [`RoleRegistry`] snapshot, so every decision within
/// its lifetime resolves permissions consistently. All operations are
/// deterministic functions of their inputs, with no mutation or I/O, and
/// safe to call concurrently without synchronization.
///
/// Every decision re-checks the principal's active flag and denies for
/// inactive principals, even though the session layer rejects those
/// upstream.
///
/// # Examples
///
/// ```
/// use newsdesk_org::{ArticleState, ArticleStatus, Principal, RoleRegistry};
/// use newsdesk_policy::PolicyEngine;
///
/// let engine = PolicyEngine::new(RoleRegistry::new());
///
/// let reporter = Principal::new("reporter");
/// let article = ArticleState::drafted_by(reporter.id);
///
/// assert!(engine.can_edit(&reporter, &article));
/// assert!(engine.can_transition(&reporter, &article, ArticleStatus::Review));
/// assert!(!engine.can_transition(&reporter, &article, ArticleStatus::Approved));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    /// Role configuration snapshot for this engine's lifetime.
    registry: RoleRegistry,
}

impl PolicyEngine {
    /// Create an engine over a role registry snapshot.
    pub fn new(registry: RoleRegistry) -> Self {
        Self { registry }
    }

    /// The registry snapshot this engine decides against.
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Evaluate a rule list: the first rule whose conditions all hold
    /// allows; no match denies.
    fn allowed(
        rules: &[AllowRule],
        permissions: &PermissionSet,
        principal: &Principal,
        article: Option<&ArticleState>,
    ) -> bool {
        rules.iter().any(|rule| {
            rule.0.iter().all(|condition| match condition {
                Condition::Permission(key) => permissions.grants(key),
                Condition::Owner => article.is_some_and(|a| a.owned_by(principal)),
                Condition::StatusNot(status) => article.is_some_and(|a| a.status != *status),
            })
        })
    }

    /// Whether the principal may view the article.
    ///
    /// Allowed for manage or view-all holders, or the article's owner.
    pub fn can_view(&self, principal: &Principal, article: &ArticleState) -> bool {
        if !principal.is_active() {
            return false;
        }
        let permissions = principal.permissions(&self.registry);
        Self::allowed(VIEW_RULES, &permissions, principal, Some(article))
    }

    /// Whether the principal may create articles.
    pub fn can_create(&self, principal: &Principal) -> bool {
        if !principal.is_active() {
            return false;
        }
        let permissions = principal.permissions(&self.registry);
        Self::allowed(CREATE_RULES, &permissions, principal, None)
    }

    /// Whether the principal may edit the article.
    ///
    /// Manage holders edit unconditionally; edit-all holders edit anything
    /// not yet approved; own-edit holders edit their own unapproved
    /// articles.
    pub fn can_edit(&self, principal: &Principal, article: &ArticleState) -> bool {
        if !principal.is_active() {
            return false;
        }
        let permissions = principal.permissions(&self.registry);
        Self::allowed(EDIT_RULES, &permissions, principal, Some(article))
    }

    /// Whether the principal may move the article to the target status.
    ///
    /// Delegates to the [`WorkflowStateMachine`] transition table after
    /// the defensive active check.
    pub fn can_transition(
        &self,
        principal: &Principal,
        article: &ArticleState,
        target: ArticleStatus,
    ) -> bool {
        if !principal.is_active() {
            return false;
        }
        let permissions = principal.permissions(&self.registry);
        WorkflowStateMachine::can_transition(
            &permissions,
            article.owned_by(principal),
            article.status,
            target,
        )
    }

    /// Whether the principal may administer user accounts.
    pub fn can_manage_users(&self, principal: &Principal) -> bool {
        principal.is_active() && principal.has_permission(&self.registry, keys::USERS_MANAGE)
    }

    /// Whether the principal may administer roles.
    pub fn can_manage_roles(&self, principal: &Principal) -> bool {
        principal.is_active() && principal.has_permission(&self.registry, keys::ROLES_MANAGE)
    }

    /// How much of the article index the principal may see.
    ///
    /// Manage and view-all holders see everything; everyone else is
    /// scoped to their own articles.
    pub fn visible_scope(&self, principal: &Principal) -> ViewScope {
        if principal.is_active()
            && principal
                .permissions(&self.registry)
                .grants_any(&[keys::ARTICLES_MANAGE, keys::ARTICLES_VIEW_ALL])
        {
            ViewScope::Everything
        } else {
            ViewScope::OwnOnly
        }
    }

    /// Compute the per-article ability map for a principal.
    pub fn abilities(&self, principal: &Principal, article: &ArticleState) -> ArticleAbilities {
        ArticleAbilities {
            view: self.can_view(principal, article),
            edit: self.can_edit(principal, article),
            move_to_review: self.can_transition(principal, article, ArticleStatus::Review),
            approve: self.can_transition(principal, article, ArticleStatus::Approved),
        }
    }

    /// Whether the actor may deactivate the target principal's account.
    ///
    /// Requires the users-manage permission; self-deactivation is refused
    /// so an administrator cannot lock themselves out.
    pub fn can_deactivate(&self, actor: &Principal, target: &Principal) -> PolicyResult<()> {
        if !self.can_manage_users(actor) {
            return Err(PolicyError::denied(keys::USERS_MANAGE));
        }
        if actor.id == target.id {
            return Err(PolicyError::SelfDeactivation);
        }
        Ok(())
    }

    /// Whether the principal may delete the role.
    ///
    /// Requires the roles-manage permission, then the deletion gates:
    /// built-in roles are protected, and a role with assigned principals
    /// must be vacated first.
    pub fn can_delete_role(&self, principal: &Principal, role: &Role) -> PolicyResult<()> {
        if !self.can_manage_roles(principal) {
            return Err(PolicyError::denied(keys::ROLES_MANAGE));
        }
        if role.is_system() {
            return Err(PolicyError::ProtectedRole {
                slug: role.slug.clone(),
            });
        }
        if role.assigned_users > 0 {
            return Err(PolicyError::RoleInUse {
                slug: role.slug.clone(),
                assigned: role.assigned_users,
            });
        }
        Ok(())
    }

    /// Resolve the principal's permission set, reporting unknown roles.
    ///
    /// The `can_*` decisions never need this: they fail closed on
    /// unknown roles. Callers that want to distinguish "unknown role"
    /// from "role with no grants" use this instead.
    pub fn resolve_strict(&self, principal: &Principal) -> PolicyResult<PermissionSet> {
        if self.registry.contains(&principal.role) {
            Ok(principal.permissions(&self.registry))
        } else {
            Err(PolicyError::UnknownRole {
                role: principal.role.clone(),
            })
        }
    }
}

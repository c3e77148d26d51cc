//! Workflow state machine for the article lifecycle
//!
//! Legal status transitions and the guard each one requires. The machine
//! is pure: it looks at a permission set, an ownership flag, and the
//! current/target statuses, and returns a decision. Appliers pair the
//! decision with [`ArticleState::apply_transition`] in one atomic unit.
//!
//! [`ArticleState::apply_transition`]: newsdesk_org::ArticleState::apply_transition

use newsdesk_org::ArticleStatus;
use newsdesk_rbac::{keys, PermissionSet};

use crate::error::{PolicyError, PolicyResult};

/// One row of the transition table: a from/to pair with its guard.
#[derive(Debug, Clone, Copy)]
struct TransitionRule {
    /// Status the article must currently be in.
    from: ArticleStatus,
    /// Status the transition moves to.
    to: ArticleStatus,
    /// Permission key the acting principal must hold.
    permission: &'static str,
    /// Whether the principal must own the article.
    requires_ownership: bool,
}

/// The normal editorial flow. The manage bypass is handled separately and
/// deliberately not duplicated per row.
const TRANSITIONS: &[TransitionRule] = &[
    // Owners submit their own drafts for review.
    TransitionRule {
        from: ArticleStatus::Draft,
        to: ArticleStatus::Review,
        permission: keys::ARTICLES_REVIEW,
        requires_ownership: true,
    },
    // Approvers sign off on anything in review; ownership not required.
    TransitionRule {
        from: ArticleStatus::Review,
        to: ArticleStatus::Approved,
        permission: keys::ARTICLES_APPROVE,
        requires_ownership: false,
    },
];

/// Decides which article status transitions are legal.
///
/// States are `draft`, `review`, and `approved`; there is no terminal,
/// rejected, or archived state. Evaluation order:
///
/// 1. A wildcard or `articles.manage` holder may move between any two
///    *distinct* statuses. The escape hatch bypasses the flow but a
///    no-op transition is still rejected.
/// 2. Otherwise the transition must match a row of the table above, with
///    its permission and ownership guard satisfied.
/// 3. Everything else is denied: draft→approved, review→draft,
///    approved→anything, and same→same.
///
/// Both entry points are pure and idempotent: identical inputs always
/// yield identical results, so they are safe to call concurrently.
///
/// # Examples
///
/// ```
/// use newsdesk_org::ArticleStatus;
/// use newsdesk_policy::WorkflowStateMachine;
/// use newsdesk_rbac::{keys, PermissionSet};
///
/// let reporter = PermissionSet::from_keys([keys::ARTICLES_REVIEW]);
///
/// // Owners submit their drafts for review...
/// assert!(WorkflowStateMachine::can_transition(
///     &reporter, true, ArticleStatus::Draft, ArticleStatus::Review,
/// ));
///
/// // ...but cannot skip straight to approved.
/// assert!(!WorkflowStateMachine::can_transition(
///     &reporter, true, ArticleStatus::Draft, ArticleStatus::Approved,
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowStateMachine;

impl WorkflowStateMachine {
    /// Decide whether a transition is legal.
    ///
    /// # Arguments
    ///
    /// * `permissions` - The acting principal's resolved permission set
    /// * `is_owner` - Whether the principal owns the article
    /// * `current` - The article's current status
    /// * `target` - The requested status
    ///
    /// # Returns
    ///
    /// `true` if the transition is allowed, `false` otherwise
    pub fn can_transition(
        permissions: &PermissionSet,
        is_owner: bool,
        current: ArticleStatus,
        target: ArticleStatus,
    ) -> bool {
        // The single manage-bypass rule: any move except a no-op.
        if permissions.grants(keys::ARTICLES_MANAGE) {
            return target != current;
        }

        TRANSITIONS.iter().any(|rule| {
            rule.from == current
                && rule.to == target
                && permissions.grants(rule.permission)
                && (!rule.requires_ownership || is_owner)
        })
    }

    /// Decide a transition, expressing denial as a typed error.
    ///
    /// # Returns
    ///
    /// `Ok(())` when allowed; [`PolicyError::Denied`] naming the refused
    /// transition otherwise
    pub fn check_transition(
        permissions: &PermissionSet,
        is_owner: bool,
        current: ArticleStatus,
        target: ArticleStatus,
    ) -> PolicyResult<()> {
        if Self::can_transition(permissions, is_owner, current, target) {
            Ok(())
        } else {
            Err(PolicyError::denied(format!(
                "articles.transition {current} -> {target}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter() -> PermissionSet {
        PermissionSet::from_keys([
            keys::ARTICLES_CREATE,
            keys::ARTICLES_EDIT,
            keys::ARTICLES_REVIEW,
        ])
    }

    fn editor() -> PermissionSet {
        PermissionSet::from_keys([
            keys::ARTICLES_VIEW_ALL,
            keys::ARTICLES_EDIT_ALL,
            keys::ARTICLES_APPROVE,
        ])
    }

    fn manager() -> PermissionSet {
        PermissionSet::from_keys([keys::ARTICLES_MANAGE])
    }

    #[test]
    fn test_owner_submits_draft_for_review() {
        assert!(WorkflowStateMachine::can_transition(
            &reporter(),
            true,
            ArticleStatus::Draft,
            ArticleStatus::Review,
        ));
    }

    #[test]
    fn test_draft_to_review_needs_both_ownership_and_permission() {
        // Permission without ownership
        assert!(!WorkflowStateMachine::can_transition(
            &reporter(),
            false,
            ArticleStatus::Draft,
            ArticleStatus::Review,
        ));

        // Ownership without permission
        assert!(!WorkflowStateMachine::can_transition(
            &editor(),
            true,
            ArticleStatus::Draft,
            ArticleStatus::Review,
        ));
    }

    #[test]
    fn test_approver_does_not_need_ownership() {
        assert!(WorkflowStateMachine::can_transition(
            &editor(),
            false,
            ArticleStatus::Review,
            ArticleStatus::Approved,
        ));
    }

    #[test]
    fn test_approval_requires_review_status() {
        // Straight from draft is denied even with the approve permission.
        assert!(!WorkflowStateMachine::can_transition(
            &editor(),
            false,
            ArticleStatus::Draft,
            ArticleStatus::Approved,
        ));
    }

    #[test]
    fn test_reporter_cannot_approve() {
        assert!(!WorkflowStateMachine::can_transition(
            &reporter(),
            true,
            ArticleStatus::Review,
            ArticleStatus::Approved,
        ));
    }

    #[test]
    fn test_reversals_denied_without_manage() {
        assert!(!WorkflowStateMachine::can_transition(
            &editor(),
            false,
            ArticleStatus::Review,
            ArticleStatus::Draft,
        ));
        assert!(!WorkflowStateMachine::can_transition(
            &editor(),
            false,
            ArticleStatus::Approved,
            ArticleStatus::Review,
        ));
        assert!(!WorkflowStateMachine::can_transition(
            &reporter(),
            true,
            ArticleStatus::Approved,
            ArticleStatus::Draft,
        ));
    }

    #[test]
    fn test_manage_bypasses_flow_in_both_directions() {
        for current in ArticleStatus::all() {
            for target in ArticleStatus::all() {
                let allowed = WorkflowStateMachine::can_transition(
                    &manager(),
                    false,
                    current,
                    target,
                );
                assert_eq!(allowed, current != target, "{current} -> {target}");
            }
        }
    }

    #[test]
    fn test_wildcard_behaves_like_manage() {
        let admin = PermissionSet::all();
        assert!(WorkflowStateMachine::can_transition(
            &admin,
            false,
            ArticleStatus::Approved,
            ArticleStatus::Draft,
        ));
        // No-op is still rejected.
        assert!(!WorkflowStateMachine::can_transition(
            &admin,
            false,
            ArticleStatus::Review,
            ArticleStatus::Review,
        ));
    }

    #[test]
    fn test_same_to_same_denied_for_everyone() {
        for target in ArticleStatus::all() {
            assert!(!WorkflowStateMachine::can_transition(
                &reporter(),
                true,
                target,
                target,
            ));
        }
    }

    #[test]
    fn test_empty_set_denied_everywhere() {
        let nothing = PermissionSet::new();
        for current in ArticleStatus::all() {
            for target in ArticleStatus::all() {
                assert!(!WorkflowStateMachine::can_transition(
                    &nothing, true, current, target,
                ));
            }
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let perms = editor();
        let first = WorkflowStateMachine::can_transition(
            &perms,
            false,
            ArticleStatus::Review,
            ArticleStatus::Approved,
        );
        let second = WorkflowStateMachine::can_transition(
            &perms,
            false,
            ArticleStatus::Review,
            ArticleStatus::Approved,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_transition_names_the_refusal() {
        let err = WorkflowStateMachine::check_transition(
            &reporter(),
            true,
            ArticleStatus::Draft,
            ArticleStatus::Approved,
        )
        .unwrap_err();

        assert_eq!(
            err,
            PolicyError::denied("articles.transition draft -> approved")
        );
    }
}

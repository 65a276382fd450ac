//! Access policies and the render-vs-redirect decision.
//!
//! This is the pure half of the authorization gate: given a policy and a
//! stable session reading, decide whether a guarded region renders, redirects,
//! or waits. The HTTP adapter in the site crate performs the navigation side
//! effect; nothing here does I/O.

use crate::types::identity::Identity;
use crate::types::role::{Role, paths};

/// The session's authentication state as observed by a consumer.
///
/// `Resolving` means identity re-validation is still in flight; consumers
/// must not treat it as unauthenticated. `Anonymous` is the definitive
/// "no user" reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Identity is being resolved (startup or token refresh).
    Resolving,
    /// Definitively unauthenticated.
    Anonymous,
    /// A resolved, authenticated identity.
    Authenticated(Identity),
}

impl SessionState {
    /// The authenticated identity, if resolution has produced one.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Resolving | Self::Anonymous => None,
        }
    }
}

/// The access rule attached to a guarded region.
///
/// Exactly one variant applies per region. The legacy flag triple
/// (`require_admin`, `require_member`, `allowed_roles`) is normalized through
/// [`AccessPolicy::from_flags`], which fixes the allow-list-first precedence
/// so supplying several knobs at once stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Any authenticated user.
    Authenticated,
    /// Admins only.
    AdminOnly,
    /// Season members only.
    MemberOnly,
    /// Users whose role appears in the allow-list.
    AllowRoles(&'static [Role]),
}

impl AccessPolicy {
    /// Normalize the legacy policy knobs into a single tagged policy.
    ///
    /// Precedence (most specific first): allow-list, then admin, then
    /// member, else plain authentication.
    #[must_use]
    pub const fn from_flags(
        require_admin: bool,
        require_member: bool,
        allowed_roles: Option<&'static [Role]>,
    ) -> Self {
        match (allowed_roles, require_admin, require_member) {
            (Some(roles), _, _) => Self::AllowRoles(roles),
            (None, true, _) => Self::AdminOnly,
            (None, false, true) => Self::MemberOnly,
            (None, false, false) => Self::Authenticated,
        }
    }
}

/// The gate's verdict for one (policy, session) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session still resolving: show a placeholder, decide nothing yet.
    Pending,
    /// Render the guarded region.
    Grant,
    /// Navigate away to the given path; render nothing meanwhile.
    Redirect(&'static str),
}

/// Decide whether a guarded region renders or redirects.
///
/// Evaluation order, first match wins:
///
/// 1. A resolving session suspends the decision ([`AccessDecision::Pending`]).
/// 2. No authenticated user redirects to the login entry point.
/// 3. An allow-list miss redirects to the *caller's own* dashboard, so an
///    out-of-scope role never loops between pages it cannot see.
/// 4. An admin requirement miss redirects to the member dashboard.
/// 5. A member requirement miss redirects to the member dashboard.
/// 6. Otherwise the region renders.
///
/// Unauthorized access is handled entirely by redirect, never an error.
#[must_use]
pub fn evaluate(policy: AccessPolicy, session: &SessionState) -> AccessDecision {
    let identity = match session {
        SessionState::Resolving => return AccessDecision::Pending,
        SessionState::Anonymous => return AccessDecision::Redirect(paths::LOGIN),
        SessionState::Authenticated(identity) => identity,
    };

    match policy {
        AccessPolicy::Authenticated => AccessDecision::Grant,
        AccessPolicy::AllowRoles(roles) => {
            if roles.contains(&identity.role) {
                AccessDecision::Grant
            } else {
                AccessDecision::Redirect(identity.role.dashboard_path())
            }
        }
        AccessPolicy::AdminOnly => {
            if identity.is_admin() {
                AccessDecision::Grant
            } else {
                AccessDecision::Redirect(paths::MEMBER_DASHBOARD)
            }
        }
        AccessPolicy::MemberOnly => {
            if identity.is_member() {
                AccessDecision::Grant
            } else {
                AccessDecision::Redirect(paths::MEMBER_DASHBOARD)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::email::Email;
    use crate::types::id::UserId;

    fn identity(role: Role) -> Identity {
        Identity {
            id: UserId::new(1),
            email: Email::parse("user@example.com").unwrap(),
            first_name: "Dana".to_owned(),
            last_name: "Oboe".to_owned(),
            role,
        }
    }

    fn authenticated(role: Role) -> SessionState {
        SessionState::Authenticated(identity(role))
    }

    #[test]
    fn test_resolving_session_never_redirects() {
        for policy in [
            AccessPolicy::Authenticated,
            AccessPolicy::AdminOnly,
            AccessPolicy::MemberOnly,
            AccessPolicy::AllowRoles(&[Role::Staff]),
        ] {
            assert_eq!(
                evaluate(policy, &SessionState::Resolving),
                AccessDecision::Pending
            );
        }
    }

    #[test]
    fn test_anonymous_always_goes_to_login() {
        for policy in [
            AccessPolicy::Authenticated,
            AccessPolicy::AdminOnly,
            AccessPolicy::MemberOnly,
            AccessPolicy::AllowRoles(&[Role::Auditor, Role::Admin]),
        ] {
            assert_eq!(
                evaluate(policy, &SessionState::Anonymous),
                AccessDecision::Redirect(paths::LOGIN)
            );
        }
    }

    #[test]
    fn test_allow_list_miss_redirects_to_own_dashboard() {
        let policy = AccessPolicy::AllowRoles(&[Role::Staff, Role::Admin]);
        for role in Role::ALL {
            let decision = evaluate(policy, &authenticated(role));
            if role == Role::Staff || role == Role::Admin {
                assert_eq!(decision, AccessDecision::Grant);
            } else {
                // Never the login page, never the guarded content.
                assert_eq!(decision, AccessDecision::Redirect(role.dashboard_path()));
            }
        }
    }

    #[test]
    fn test_admin_only() {
        assert_eq!(
            evaluate(AccessPolicy::AdminOnly, &authenticated(Role::Admin)),
            AccessDecision::Grant
        );
        assert_eq!(
            evaluate(AccessPolicy::AdminOnly, &authenticated(Role::Manager)),
            AccessDecision::Redirect(paths::MEMBER_DASHBOARD)
        );
    }

    #[test]
    fn test_member_only() {
        assert_eq!(
            evaluate(AccessPolicy::MemberOnly, &authenticated(Role::Member)),
            AccessDecision::Grant
        );
        assert_eq!(
            evaluate(AccessPolicy::MemberOnly, &authenticated(Role::Volunteer)),
            AccessDecision::Redirect(paths::MEMBER_DASHBOARD)
        );
    }

    #[test]
    fn test_any_authenticated_user_passes_plain_policy() {
        for role in Role::ALL {
            assert_eq!(
                evaluate(AccessPolicy::Authenticated, &authenticated(role)),
                AccessDecision::Grant
            );
        }
    }

    #[test]
    fn test_from_flags_allow_list_wins() {
        const ROLES: &[Role] = &[Role::Auditor];
        assert_eq!(
            AccessPolicy::from_flags(true, true, Some(ROLES)),
            AccessPolicy::AllowRoles(ROLES)
        );
        assert_eq!(
            AccessPolicy::from_flags(true, true, None),
            AccessPolicy::AdminOnly
        );
        assert_eq!(
            AccessPolicy::from_flags(false, true, None),
            AccessPolicy::MemberOnly
        );
        assert_eq!(
            AccessPolicy::from_flags(false, false, None),
            AccessPolicy::Authenticated
        );
    }
}

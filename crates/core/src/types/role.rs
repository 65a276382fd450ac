//! Roles and per-role dashboard routing.
//!
//! The box office is the source of truth for role assignment; this module
//! only classifies roles and maps each one to its landing route.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Named routes the access layer redirects to.
pub mod paths {
    /// Login entry point for unauthenticated visitors.
    pub const LOGIN: &str = "/auth/login";
    /// Generic member dashboard, the safe default landing route.
    pub const MEMBER_DASHBOARD: &str = "/account";
    /// Admin console.
    pub const CONSOLE_ADMIN: &str = "/console/admin";
    /// Staff console.
    pub const CONSOLE_STAFF: &str = "/console/staff";
    /// Manager console.
    pub const CONSOLE_MANAGER: &str = "/console/manager";
    /// Auditor console.
    pub const CONSOLE_AUDITOR: &str = "/console/auditor";
    /// Volunteer console.
    pub const CONSOLE_VOLUNTEER: &str = "/console/volunteer";
}

/// A user's role within the organization.
///
/// Roles arrive from the box office as strings. Unrecognized values
/// deserialize to [`Role::Member`] so that routing stays total; a brand-new
/// back-office role must never strand its holder on an error page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full access to all back-office consoles including user management.
    Admin,
    /// Concert and ticketing operations.
    Staff,
    /// Sales and reporting.
    Manager,
    /// Read-only order inspection.
    Auditor,
    /// Event shift coordination.
    Volunteer,
    /// A season member; the general authenticated audience.
    Member,
}

impl Role {
    /// Every known role, in precedence-of-privilege order.
    pub const ALL: [Self; 6] = [
        Self::Admin,
        Self::Staff,
        Self::Manager,
        Self::Auditor,
        Self::Volunteer,
        Self::Member,
    ];

    /// Whether this role is the admin role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role is the member audience (distinct from staff/admin).
    #[must_use]
    pub const fn is_member(self) -> bool {
        matches!(self, Self::Member)
    }

    /// The wire name of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Manager => "manager",
            Self::Auditor => "auditor",
            Self::Volunteer => "volunteer",
            Self::Member => "member",
        }
    }

    /// Parse a wire role name, mapping anything unrecognized to `Member`.
    #[must_use]
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Member)
    }

    /// The default landing route for this role.
    ///
    /// Total over the role set: every role maps to exactly one path. The
    /// access layer relies on this never being partial.
    #[must_use]
    pub const fn dashboard_path(self) -> &'static str {
        match self {
            Self::Admin => paths::CONSOLE_ADMIN,
            Self::Staff => paths::CONSOLE_STAFF,
            Self::Manager => paths::CONSOLE_MANAGER,
            Self::Auditor => paths::CONSOLE_AUDITOR,
            Self::Volunteer => paths::CONSOLE_VOLUNTEER,
            Self::Member => paths::MEMBER_DASHBOARD,
        }
    }
}

/// The landing route for an optional role.
///
/// `None` (no authenticated identity) falls back to the login entry point.
#[must_use]
pub const fn dashboard_path_for(role: Option<Role>) -> &'static str {
    match role {
        Some(role) => role.dashboard_path(),
        None => paths::LOGIN,
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "manager" => Ok(Self::Manager),
            "auditor" => Ok(Self::Auditor),
            "volunteer" => Ok(Self::Volunteer),
            "member" => Ok(Self::Member),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_deserializes_to_member() {
        let role: Role = serde_json::from_str("\"concertmaster\"").unwrap();
        assert_eq!(role, Role::Member);
    }

    #[test]
    fn test_dashboard_path_is_total_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for role in Role::ALL {
            assert!(seen.insert(role.dashboard_path()));
        }
    }

    #[test]
    fn test_unauthenticated_fallback() {
        assert_eq!(dashboard_path_for(None), paths::LOGIN);
        assert_eq!(
            dashboard_path_for(Some(Role::Staff)),
            paths::CONSOLE_STAFF
        );
    }

    #[test]
    fn test_predicates() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Admin.is_member());
        assert!(Role::Member.is_member());
        assert!(!Role::Staff.is_admin());
    }
}

//! The authenticated identity record.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;
use crate::types::id::UserId;
use crate::types::role::Role;

/// The identity record the box office returns at login and re-validation.
///
/// Stored in the session verbatim; the gate and the role predicates are
/// read-only consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Box-office user ID.
    pub id: UserId,
    /// The user's email address.
    pub email: Email,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Assigned role.
    pub role: Role,
}

impl Identity {
    /// Whether this identity holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether this identity is a season member.
    #[must_use]
    pub const fn is_member(&self) -> bool {
        self.role.is_member()
    }

    /// The identity's default landing route.
    #[must_use]
    pub const fn dashboard_path(&self) -> &'static str {
        self.role.dashboard_path()
    }

    /// Display name for page headers.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

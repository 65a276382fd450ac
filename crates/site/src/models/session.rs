//! Session-related types.
//!
//! Types stored in the session for authentication and cart state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use meridian_core::Identity;

/// Session-stored authentication record.
///
/// The identity plus the box-office bearer token backing it. Written only by
/// the login/logout/refresh flow in `services::auth`; everything else reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAuth {
    /// The authenticated identity.
    pub user: Identity,
    /// Box-office bearer token for calls on this user's behalf.
    pub token: String,
    /// When the token stops being trustworthy without re-validation.
    pub expires_at: DateTime<Utc>,
}

impl StoredAuth {
    /// Whether the token can still be used without a re-validation round-trip.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl From<crate::api::LoginGrant> for StoredAuth {
    fn from(grant: crate::api::LoginGrant) -> Self {
        Self {
            user: grant.user,
            token: grant.token,
            expires_at: grant.expires_at,
        }
    }
}

/// Session keys for persisted state.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the serialized cart slot.
    pub const CART: &str = "cart";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;
    use meridian_core::{Email, Role, UserId};

    fn stored(expires_in: Duration) -> StoredAuth {
        StoredAuth {
            user: Identity {
                id: UserId::new(1),
                email: Email::parse("member@example.com").unwrap(),
                first_name: "Kai".to_owned(),
                last_name: "Viola".to_owned(),
                role: Role::Member,
            },
            token: "tok".to_owned(),
            expires_at: Utc::now() + expires_in,
        }
    }

    #[test]
    fn test_freshness() {
        let now = Utc::now();
        assert!(stored(Duration::minutes(5)).is_fresh(now));
        assert!(!stored(Duration::minutes(-5)).is_fresh(now));
    }
}

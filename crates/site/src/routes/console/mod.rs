//! Back-office consoles.
//!
//! Each console is one gated router nest with its own role allow-list.
//! Allow-list misses redirect to the caller's own dashboard (see
//! `meridian_core::access`), so a volunteer hitting the staff console lands
//! on the volunteer console, not an error page or a login loop.

pub mod admin;
pub mod auditor;
pub mod manager;
pub mod staff;
pub mod volunteer;

use axum::Router;

use meridian_core::Role;
use meridian_core::access::AccessPolicy;

use crate::routes::gated;
use crate::state::AppState;

/// Roles admitted to the staff console.
const STAFF_ROLES: &[Role] = &[Role::Staff, Role::Admin];
/// Roles admitted to the manager console.
const MANAGER_ROLES: &[Role] = &[Role::Manager, Role::Admin];
/// Roles admitted to the auditor console.
const AUDITOR_ROLES: &[Role] = &[Role::Auditor, Role::Admin];
/// Roles admitted to the volunteer console.
const VOLUNTEER_ROLES: &[Role] = &[Role::Volunteer, Role::Staff, Role::Admin];

/// Create the console router: one gated nest per console.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest(
            "/admin",
            gated(state, AccessPolicy::AdminOnly, admin::routes()),
        )
        .nest(
            "/staff",
            gated(
                state,
                AccessPolicy::AllowRoles(STAFF_ROLES),
                staff::routes(),
            ),
        )
        .nest(
            "/manager",
            gated(
                state,
                AccessPolicy::AllowRoles(MANAGER_ROLES),
                manager::routes(),
            ),
        )
        .nest(
            "/auditor",
            gated(
                state,
                AccessPolicy::AllowRoles(AUDITOR_ROLES),
                auditor::routes(),
            ),
        )
        .nest(
            "/volunteer",
            gated(
                state,
                AccessPolicy::AllowRoles(VOLUNTEER_ROLES),
                volunteer::routes(),
            ),
        )
}

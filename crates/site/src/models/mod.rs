//! Domain models for the site.

pub mod session;

pub use session::{StoredAuth, session_keys};

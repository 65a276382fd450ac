//! Services for the site.

pub mod auth;
pub mod cart;

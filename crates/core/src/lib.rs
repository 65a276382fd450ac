//! Meridian Core - Shared types library.
//!
//! This crate provides common types used across all Meridian Symphony
//! components:
//! - `site` - Public website, member area, and back-office consoles
//! - `cli` - Command-line tools for session-store maintenance
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices, and roles
//! - [`access`] - Access policies and the render-vs-redirect decision
//! - [`cart`] - The shopping cart container and its mutation semantics

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod access;
pub mod cart;
pub mod types;

pub use types::*;

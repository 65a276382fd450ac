//! Integration tests for the Meridian Symphony site.
//!
//! # Running Tests
//!
//! The tests drive a running site over HTTP, so they are `#[ignore]`d by
//! default. To run them:
//!
//! ```bash
//! # Start the database and the site
//! cargo run -p meridian-cli -- migrate
//! cargo run -p meridian-site
//!
//! # Run integration tests against it
//! cargo test -p meridian-integration-tests -- --ignored
//! ```
//!
//! Configuration via environment:
//! - `SITE_BASE_URL` - where the site listens (default: `http://localhost:3000`)
//! - `TEST_MEMBER_EMAIL` / `TEST_MEMBER_PASSWORD` - a member account on the
//!   box office, for the signed-in scenarios
//! - `TEST_PRODUCT_ID` - a purchasable product ID, for the cart flow

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use reqwest::redirect::Policy;

/// Base URL for the site (configurable via environment).
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A browser-like client: cookie jar on, redirects NOT followed, so tests
/// can assert on the gate's redirect decisions directly.
///
/// # Panics
///
/// Panics if the client cannot be constructed (test-only code).
#[must_use]
pub fn browser_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Log a test account in, leaving its session cookie in the client's jar.
///
/// # Panics
///
/// Panics if the login request cannot be sent (test-only code).
pub async fn login(client: &Client, email: &str, password: &str) {
    let base_url = site_base_url();
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[("email", email), ("password", password)])
        .send()
        .await
        .expect("Failed to send login request");

    assert!(
        resp.status().is_redirection(),
        "login should redirect, got {}",
        resp.status()
    );
}

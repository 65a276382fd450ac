//! Box-office API client implementation.
//!
//! Plain REST over `reqwest`; every success body is `{ "data": ... }`.
//! Public content is cached with `moka` (5-minute TTL). Calls on behalf of a
//! logged-in user pass that user's bearer token so the box office can apply
//! its own authorization on top of the site's gate.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use meridian_core::{ArticleId, ConcertId, EventId, Role, UserId};

use crate::api::ApiError;
use crate::api::cache::{CacheKey, CacheValue};
use crate::api::types::{
    Article, Concert, Envelope, Executive, LoginGrant, LoginRequest, ManagedUser, Musician,
    NewArticle, NewConcert, NewOrder, Order, Product, SalesReport, Shift, Ticket,
};
use crate::config::BoxOfficeConfig;

/// Client for the box-office API.
///
/// Cheaply cloneable; all clones share one HTTP connection pool and cache.
#[derive(Clone)]
pub struct BoxOfficeClient {
    inner: Arc<BoxOfficeClientInner>,
}

struct BoxOfficeClientInner {
    client: reqwest::Client,
    base_url: String,
    service_token: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl BoxOfficeClient {
    /// Create a new box-office client.
    #[must_use]
    pub fn new(config: &BoxOfficeConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(BoxOfficeClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                service_token: config.service_token.expose_secret().to_string(),
                cache,
            }),
        }
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn check_status(path: &str, status: reqwest::StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            return Ok(());
        }
        match status.as_u16() {
            401 | 403 => Err(ApiError::Unauthorized),
            404 => Err(ApiError::NotFound(path.to_string())),
            code => Err(ApiError::Status {
                status: code,
                endpoint: path.to_string(),
            }),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        debug!(path, "box-office GET");
        let response = self
            .inner
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;

        Self::check_status(path, response.status())?;
        Ok(response.json::<Envelope<T>>().await?.data)
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "box-office POST");
        let response = self
            .inner
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        Self::check_status(path, response.status())?;
        Ok(response.json::<Envelope<T>>().await?.data)
    }

    /// POST where the box office answers with no body (204).
    async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        debug!(path, "box-office POST");
        let response = self
            .inner
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        Self::check_status(path, response.status())
    }

    async fn delete(&self, path: &str, token: &str) -> Result<(), ApiError> {
        debug!(path, "box-office DELETE");
        let response = self
            .inner
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;

        Self::check_status(path, response.status())
    }

    fn service_token(&self) -> &str {
        &self.inner.service_token
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for an identity and bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for bad credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginGrant, ApiError> {
        self.post(
            "/auth/login",
            self.service_token(),
            &LoginRequest { email, password },
        )
        .await
    }

    /// Re-validate a user token, returning a fresh grant.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` if the token is no longer good.
    pub async fn refresh(&self, token: &str) -> Result<LoginGrant, ApiError> {
        self.get("/auth/me", token).await
    }

    // =========================================================================
    // Public content (cached)
    // =========================================================================

    /// List the orchestra's musicians.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn musicians(&self) -> Result<Vec<Musician>, ApiError> {
        if let Some(CacheValue::Musicians(cached)) =
            self.inner.cache.get(&CacheKey::Musicians).await
        {
            return Ok(cached);
        }

        let musicians: Vec<Musician> = self.get("/musicians", self.service_token()).await?;
        self.inner
            .cache
            .insert(CacheKey::Musicians, CacheValue::Musicians(musicians.clone()))
            .await;
        Ok(musicians)
    }

    /// List the organization's executives.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn executives(&self) -> Result<Vec<Executive>, ApiError> {
        if let Some(CacheValue::Executives(cached)) =
            self.inner.cache.get(&CacheKey::Executives).await
        {
            return Ok(cached);
        }

        let executives: Vec<Executive> = self.get("/executives", self.service_token()).await?;
        self.inner
            .cache
            .insert(
                CacheKey::Executives,
                CacheValue::Executives(executives.clone()),
            )
            .await;
        Ok(executives)
    }

    /// List published news articles, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn news(&self) -> Result<Vec<Article>, ApiError> {
        if let Some(CacheValue::News(cached)) = self.inner.cache.get(&CacheKey::News).await {
            return Ok(cached);
        }

        let articles: Vec<Article> = self.get("/news", self.service_token()).await?;
        self.inner
            .cache
            .insert(CacheKey::News, CacheValue::News(articles.clone()))
            .await;
        Ok(articles)
    }

    /// Fetch one article by slug.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown slug.
    pub async fn article(&self, slug: &str) -> Result<Article, ApiError> {
        let key = CacheKey::Article(slug.to_string());
        if let Some(CacheValue::Article(cached)) = self.inner.cache.get(&key).await {
            return Ok(*cached);
        }

        let article: Article = self
            .get(&format!("/news/{slug}"), self.service_token())
            .await?;
        self.inner
            .cache
            .insert(key, CacheValue::Article(Box::new(article.clone())))
            .await;
        Ok(article)
    }

    /// List purchasable products.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(CacheValue::Products(cached)) = self.inner.cache.get(&CacheKey::Products).await
        {
            return Ok(cached);
        }

        let products: Vec<Product> = self.get("/products", self.service_token()).await?;
        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Fetch one product by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown product.
    pub async fn product(&self, id: meridian_core::ProductId) -> Result<Product, ApiError> {
        let key = CacheKey::Product(id.as_i64());
        if let Some(CacheValue::Product(cached)) = self.inner.cache.get(&key).await {
            return Ok(*cached);
        }

        let product: Product = self
            .get(&format!("/products/{id}"), self.service_token())
            .await?;
        self.inner
            .cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }

    // =========================================================================
    // Member area
    // =========================================================================

    /// Tickets held by the token's owner.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn my_tickets(&self, token: &str) -> Result<Vec<Ticket>, ApiError> {
        self.get("/me/tickets", token).await
    }

    /// Orders placed by the token's owner.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn my_orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        self.get("/me/orders", token).await
    }

    /// Place an order on behalf of the token's owner.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office rejects the order.
    pub async fn create_order(&self, token: &str, order: &NewOrder) -> Result<Order, ApiError> {
        self.post("/orders", token, order).await
    }

    // =========================================================================
    // Back office proxies
    // =========================================================================

    /// List all users (admin console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn list_users(&self, token: &str) -> Result<Vec<ManagedUser>, ApiError> {
        self.get("/users", token).await
    }

    /// Change a user's role (admin console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office rejects the change.
    pub async fn set_user_role(
        &self,
        token: &str,
        user_id: UserId,
        role: Role,
    ) -> Result<(), ApiError> {
        self.post_no_content(
            &format!("/users/{user_id}/role"),
            token,
            &serde_json::json!({ "role": role }),
        )
        .await
    }

    /// Publish a news article (admin console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office rejects the article.
    pub async fn create_article(
        &self,
        token: &str,
        article: &NewArticle,
    ) -> Result<Article, ApiError> {
        let created = self.post("/news", token, article).await;
        if created.is_ok() {
            // The listing is stale the moment an article lands.
            self.inner.cache.invalidate(&CacheKey::News).await;
        }
        created
    }

    /// Delete a news article (admin console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office rejects the deletion.
    pub async fn delete_article(&self, token: &str, id: ArticleId) -> Result<(), ApiError> {
        self.delete(&format!("/news/by-id/{id}"), token).await?;
        self.inner.cache.invalidate(&CacheKey::News).await;
        Ok(())
    }

    /// List concerts (staff console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn concerts(&self, token: &str) -> Result<Vec<Concert>, ApiError> {
        self.get("/concerts", token).await
    }

    /// Schedule a concert (staff console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office rejects the concert.
    pub async fn create_concert(
        &self,
        token: &str,
        concert: &NewConcert,
    ) -> Result<Concert, ApiError> {
        self.post("/concerts", token, concert).await
    }

    /// Cancel a concert (staff console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office rejects the cancellation.
    pub async fn cancel_concert(&self, token: &str, id: ConcertId) -> Result<(), ApiError> {
        self.post_no_content(&format!("/concerts/{id}/cancel"), token, &serde_json::json!({}))
            .await
    }

    /// Current-period sales roll-up (manager console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn sales_report(&self, token: &str) -> Result<SalesReport, ApiError> {
        self.get("/reports/sales", token).await
    }

    /// Every order in the system (auditor console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn all_orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        self.get("/orders", token).await
    }

    /// Upcoming volunteer shifts (volunteer console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office is unreachable or errors.
    pub async fn shifts(&self, token: &str) -> Result<Vec<Shift>, ApiError> {
        self.get("/events/shifts", token).await
    }

    /// Sign the token's owner up for a shift (volunteer console).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the box office rejects the signup.
    pub async fn signup_shift(&self, token: &str, id: EventId) -> Result<(), ApiError> {
        self.post_no_content(
            &format!("/events/shifts/{id}/signup"),
            token,
            &serde_json::json!({}),
        )
        .await
    }
}

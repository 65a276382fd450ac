//! Shop page: merchandise and ticket products.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use meridian_core::cart::ItemKind;

use crate::api::types::Product;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: Option<String>,
    pub ships: bool,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            image: product.image.clone(),
            ships: product.kind == ItemKind::Physical,
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
        }
    }
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub products: Vec<ProductView>,
}

/// Display purchasable products.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = state.box_office().products().await?;
    Ok(ShopTemplate {
        products: products.iter().map(ProductView::from).collect(),
    })
}

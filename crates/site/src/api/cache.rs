//! Cache types for public box-office content.

use crate::api::types::{Article, Executive, Musician, Product};

/// Cache key for public content endpoints.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Musicians,
    Executives,
    News,
    Article(String),
    Products,
    Product(i64),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Musicians(Vec<Musician>),
    Executives(Vec<Executive>),
    News(Vec<Article>),
    Article(Box<Article>),
    Products(Vec<Product>),
    Product(Box<Product>),
}

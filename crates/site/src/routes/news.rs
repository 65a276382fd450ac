//! News route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::api::types::Article;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Article display data for templates.
#[derive(Clone)]
pub struct ArticleView {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub published: String,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            summary: article.summary.clone(),
            published: article.published_at.format("%B %e, %Y").to_string(),
        }
    }
}

/// News listing template.
#[derive(Template, WebTemplate)]
#[template(path = "news/index.html")]
pub struct NewsIndexTemplate {
    pub articles: Vec<ArticleView>,
}

/// Article page template.
#[derive(Template, WebTemplate)]
#[template(path = "news/show.html")]
pub struct NewsShowTemplate {
    pub title: String,
    pub published: String,
    pub body: String,
}

/// Display the news listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let articles = state.box_office().news().await?;

    Ok(NewsIndexTemplate {
        articles: articles.iter().map(ArticleView::from).collect(),
    })
}

/// Display one article. The body is markdown, rendered by the template.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let article = state.box_office().article(&slug).await?;

    Ok(NewsShowTemplate {
        title: article.title,
        published: article.published_at.format("%B %e, %Y").to_string(),
        body: article.body,
    })
}

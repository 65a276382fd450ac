//! Home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::news::ArticleView;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub articles: Vec<ArticleView>,
}

/// Display the home page with the latest news.
///
/// A box-office hiccup degrades to an empty news strip rather than a 502 -
/// the front door stays open.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let articles = match state.box_office().news().await {
        Ok(articles) => articles.iter().take(3).map(ArticleView::from).collect(),
        Err(e) => {
            tracing::warn!("failed to fetch news for home page: {e}");
            Vec::new()
        }
    };

    HomeTemplate { articles }
}

//! Admin console: user role management and news publishing.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use meridian_core::{ArticleId, Role, UserId};

use crate::api::types::NewArticle;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::bearer_token;
use crate::state::AppState;

/// User row for the console table.
#[derive(Clone)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Article row for the console table.
#[derive(Clone)]
pub struct ArticleRow {
    pub id: i64,
    pub title: String,
    pub published: String,
}

/// Admin console template.
#[derive(Template, WebTemplate)]
#[template(path = "console/admin.html")]
pub struct AdminConsoleTemplate {
    pub users: Vec<UserRow>,
    pub articles: Vec<ArticleRow>,
    pub roles: Vec<&'static str>,
}

/// Article creation form.
#[derive(Debug, Deserialize)]
pub struct NewArticleForm {
    pub title: String,
    pub summary: String,
    pub body: String,
}

/// Role change form.
#[derive(Debug, Deserialize)]
pub struct RoleForm {
    pub role: String,
}

/// Create the admin console router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/articles", post(create_article))
        .route("/articles/{id}/delete", post(delete_article))
        .route("/users/{id}/role", post(set_role))
}

/// Console landing: user and article tables.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let token = bearer_token(&session).await?;
    let users = state.box_office().list_users(&token).await?;
    let articles = state.box_office().news().await?;

    Ok(AdminConsoleTemplate {
        users: users
            .iter()
            .map(|u| UserRow {
                id: u.id.as_i64(),
                email: u.email.clone(),
                name: format!("{} {}", u.first_name, u.last_name),
                role: u.role.to_string(),
            })
            .collect(),
        articles: articles
            .iter()
            .map(|a| ArticleRow {
                id: a.id.as_i64(),
                title: a.title.clone(),
                published: a.published_at.format("%Y-%m-%d").to_string(),
            })
            .collect(),
        roles: Role::ALL.iter().map(|r| r.as_str()).collect(),
    })
}

/// Publish a news article.
#[instrument(skip(state, session, form))]
pub async fn create_article(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewArticleForm>,
) -> Result<Response> {
    if form.title.trim().is_empty() {
        return Err(AppError::BadRequest("article title is required".to_string()));
    }

    let token = bearer_token(&session).await?;
    let article = NewArticle {
        title: form.title,
        summary: form.summary,
        body: form.body,
    };
    state.box_office().create_article(&token, &article).await?;

    Ok(Redirect::to("/console/admin").into_response())
}

/// Delete a news article.
#[instrument(skip(state, session))]
pub async fn delete_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response> {
    let token = bearer_token(&session).await?;
    state
        .box_office()
        .delete_article(&token, ArticleId::new(id))
        .await?;

    Ok(Redirect::to("/console/admin").into_response())
}

/// Change a user's role.
///
/// The role string is parsed strictly here - a typo in a console form is a
/// bad request, unlike wire data from the box office which parses lossily.
#[instrument(skip(state, session, form))]
pub async fn set_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Form(form): Form<RoleForm>,
) -> Result<Response> {
    let role: Role = form.role.parse().map_err(AppError::BadRequest)?;

    let token = bearer_token(&session).await?;
    state
        .box_office()
        .set_user_role(&token, UserId::new(id), role)
        .await?;

    Ok(Redirect::to("/console/admin").into_response())
}

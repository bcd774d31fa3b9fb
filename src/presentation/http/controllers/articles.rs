// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{DeleteArticleCommand, StoreArticleCommand},
    dto::ArticleDto,
    error::ApplicationError,
    queries::articles::{FetchArticlesQuery, GetArticleByIdQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::JsonRejection},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const X_CURSOR: HeaderName = HeaderName::from_static("x-cursor");

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchArticlesParams {
    /// Page size; zero, negative, unparsable or absent selects the default.
    #[serde(default)]
    #[param(value_type = Option<i64>)]
    pub num: Option<String>,
    /// Value of the `X-Cursor` header from the previous page.
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorRef {
    pub id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StoreArticleRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorRef,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StoreArticleRequest {
    fn validate(&self) -> HttpResult<()> {
        let mut problems = Vec::new();
        if self.title.trim().is_empty() {
            problems.push("title is required");
        }
        if self.content.trim().is_empty() {
            problems.push("content is required");
        }
        if self.author.id <= 0 {
            problems.push("author.id must be a positive integer");
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(HttpError::bad_request(problems.join("; ")))
        }
    }
}

impl From<StoreArticleRequest> for StoreArticleCommand {
    fn from(request: StoreArticleRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            author_id: request.author.id,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

/// Unparsable values read as zero, which the use cases treat as "no such
/// article" for ids and "default size" for `num`.
fn lenient_int(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or_default()
}

#[utoipa::path(
    get,
    path = "/article",
    params(FetchArticlesParams),
    responses(
        (status = 200, description = "Newest-first page of articles.", body = [ArticleDto],
            headers(("x-cursor" = String, description = "Cursor of the next page, empty on the last page"))),
        (status = 400, description = "Malformed cursor.", body = ErrorResponse),
        (status = 500, description = "Storage failure or timeout.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn fetch_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<FetchArticlesParams>,
) -> HttpResult<(HeaderMap, Json<Vec<ArticleDto>>)> {

    let page = state
        .services
        .article_queries
        .fetch_articles(FetchArticlesQuery {
            cursor: params.cursor,
            num: lenient_int(params.num.as_deref()),
        })
        .await
        .into_http()?;

    let cursor = HeaderValue::from_str(page.next_cursor.as_deref().unwrap_or_default())
        .map_err(|err| HttpError::from_error(ApplicationError::internal(err.to_string())))?;
    let mut headers = HeaderMap::new();
    headers.insert(X_CURSOR, cursor);

    Ok((headers, Json(page.items)))
}

#[utoipa::path(
    get,
    path = "/article/{id}",
    params(("id" = String, Path, description = "Article id; non-numeric or non-positive values are not found")),
    responses(
        (status = 200, description = "The article with its author.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse),
        (status = 500, description = "Storage failure or timeout.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let id = lenient_int(Some(&raw_id));
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/article",
    request_body = StoreArticleRequest,
    responses(
        (status = 201, description = "Article stored.", body = ArticleDto),
        (status = 400, description = "Missing title, content or author.", body = ErrorResponse),
        (status = 404, description = "Author does not exist.", body = ErrorResponse),
        (status = 409, description = "Title already taken.", body = ErrorResponse),
        (status = 422, description = "Body could not be parsed.", body = ErrorResponse),
        (status = 500, description = "Storage failure or timeout.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn store_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<StoreArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let Json(payload) =
        payload.map_err(|rejection| HttpError::unprocessable(rejection.body_text()))?;
    payload.validate()?;

    let stored = state
        .services
        .article_commands
        .store_article(payload.into())
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(stored)))
}

#[utoipa::path(
    delete,
    path = "/article/{id}",
    params(("id" = String, Path, description = "Article id; non-numeric or non-positive values are not found")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No such article.", body = ErrorResponse),
        (status = 500, description = "Storage failure or timeout.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = lenient_int(Some(&raw_id));
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

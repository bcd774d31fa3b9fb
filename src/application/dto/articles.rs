use crate::application::dto::AuthorDto;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Article as exposed to callers, with its author resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn hydrated(article: Article, author: AuthorDto) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            author,
            updated_at: article.updated_at,
            created_at: article.created_at,
        }
    }
}

// src/application/commands/articles/store.rs
use super::ArticleCommandService;
use crate::{
    application::{
        deadline,
        dto::{ArticleDto, AuthorDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticle},
        author::AuthorId,
        errors::DomainError,
    },
};
use chrono::{DateTime, Utc};

pub struct StoreArticleCommand {
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl StoreArticleCommand {
    pub fn builder() -> StoreArticleCommandBuilder {
        StoreArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct StoreArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author_id: Option<i64>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl StoreArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn build(self) -> Result<StoreArticleCommand, &'static str> {
        Ok(StoreArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            author_id: self.author_id.ok_or("author is required")?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl ArticleCommandService {
    pub async fn store_article(&self, command: StoreArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let author_id = AuthorId::new(command.author_id)?;
        let (created_at, updated_at) = (command.created_at, command.updated_at);

        deadline::within(self.timeout, async {
            self.ensure_title_available(&title).await?;

            // A missing author surfaces as the lookup's own NotFound.
            let author = self.author_repo.get_by_id(author_id).await?;

            let now = self.clock.now();
            let new_article = NewArticle {
                title,
                content,
                author_id,
                created_at: created_at.unwrap_or(now),
                updated_at: updated_at.unwrap_or(now),
            };

            let stored = self.article_repo.store(new_article).await?;
            Ok::<_, ApplicationError>(ArticleDto::hydrated(stored, AuthorDto::from(author)))
        })
        .await
    }

    async fn ensure_title_available(&self, title: &ArticleTitle) -> ApplicationResult<()> {
        match self.article_repo.get_by_title(title).await {
            Ok(existing) => Err(ApplicationError::conflict(format!(
                "article titled {:?} already exists with id {}",
                title.as_str(),
                existing.id
            ))),
            Err(DomainError::NotFound(_)) => Ok(()),
            Err(other) => Err(other.into()),
        }
    }
}

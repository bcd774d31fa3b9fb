// src/application/services/hydration.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        dto::{ArticleDto, AuthorDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        author::{AuthorId, AuthorRepository},
    },
};

/// Joins articles with their authors through the author repository.
pub struct AuthorHydrator {
    author_repo: Arc<dyn AuthorRepository>,
}

impl AuthorHydrator {
    pub fn new(author_repo: Arc<dyn AuthorRepository>) -> Self {
        Self { author_repo }
    }

    pub async fn hydrate_one(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let author = self.resolve(article.author_id).await?;
        Ok(ArticleDto::hydrated(article, author))
    }

    /// Hydrates every article or none. Each distinct author is looked up
    /// once, in order of first appearance.
    pub async fn hydrate_all(&self, articles: Vec<Article>) -> ApplicationResult<Vec<ArticleDto>> {
        let mut authors: HashMap<AuthorId, AuthorDto> = HashMap::new();
        let mut hydrated = Vec::with_capacity(articles.len());

        for article in articles {
            let author = match authors.get(&article.author_id) {
                Some(author) => author.clone(),
                None => {
                    let author = self.resolve(article.author_id).await?;
                    authors.insert(article.author_id, author.clone());
                    author
                }
            };
            hydrated.push(ArticleDto::hydrated(article, author));
        }

        Ok(hydrated)
    }

    async fn resolve(&self, id: AuthorId) -> ApplicationResult<AuthorDto> {
        self.author_repo
            .get_by_id(id)
            .await
            .map(AuthorDto::from)
            .map_err(|err| {
                ApplicationError::internal(format!(
                    "failed to resolve author {}: {err}",
                    i64::from(id)
                ))
            })
    }
}

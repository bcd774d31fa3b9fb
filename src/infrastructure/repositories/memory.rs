// src/infrastructure/repositories/memory.rs
use crate::domain::article::{
    Article, ArticleCursor, ArticleId, ArticleRepository, ArticleTitle, NewArticle,
};
use crate::domain::author::{Author, AuthorId, AuthorRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
struct ArticleTable {
    rows: BTreeMap<i64, Article>,
    last_id: i64,
}

/// Process-local article store with the same paging contract as the SQL
/// repository. Ids are assigned from a monotonically increasing counter and
/// never reused after deletion.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    table: RwLock<ArticleTable>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn fetch(
        &self,
        cursor: Option<ArticleCursor>,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<ArticleCursor>)> {
        let limit = limit.max(1) as usize;
        let upper = cursor.map_or(i64::MAX, |c| i64::from(c.article_id));

        let table = self.table.read().await;
        let mut articles: Vec<Article> = table
            .rows
            .range(..upper)
            .rev()
            .take(limit + 1)
            .map(|(_, article)| article.clone())
            .collect();

        let mut next_cursor = None;
        if articles.len() > limit {
            articles.truncate(limit);
            next_cursor = articles.last().map(|last| ArticleCursor::new(last.id));
        }

        Ok((articles, next_cursor))
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        self.table
            .read()
            .await
            .rows
            .get(&i64::from(id))
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }

    async fn get_by_title(&self, title: &ArticleTitle) -> DomainResult<Article> {
        self.table
            .read()
            .await
            .rows
            .values()
            .find(|article| &article.title == title)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("article titled {title:?} not found")))
    }

    async fn store(&self, article: NewArticle) -> DomainResult<Article> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|existing| existing.title == article.title) {
            return Err(DomainError::Conflict(format!(
                "article titled {:?} already exists",
                article.title.as_str()
            )));
        }
        let id = ArticleId::new(table.last_id + 1)?;
        let stored = article.into_article(id);
        table.last_id = i64::from(id);
        table.rows.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }
}

#[derive(Default)]
pub struct InMemoryAuthorRepository {
    authors: RwLock<HashMap<AuthorId, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn with_authors(authors: impl IntoIterator<Item = Author>) -> Self {
        let authors = authors
            .into_iter()
            .map(|author| (author.id, author))
            .collect();
        Self {
            authors: RwLock::new(authors),
        }
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn get_by_id(&self, id: AuthorId) -> DomainResult<Author> {
        self.authors
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("author {} not found", i64::from(id))))
    }
}

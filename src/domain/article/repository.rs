use crate::domain::article::cursor::ArticleCursor;
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Newest-first page of at most `limit` articles after `cursor`. The
    /// returned cursor is `None` once no older article exists.
    async fn fetch(
        &self,
        cursor: Option<ArticleCursor>,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<ArticleCursor>)>;
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article>;
    async fn get_by_title(&self, title: &ArticleTitle) -> DomainResult<Article>;
    async fn store(&self, article: NewArticle) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

use super::ArticleQueryService;
use crate::{
    application::{
        deadline,
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        // No article can carry a non-positive id.
        let id = ArticleId::new(query.id)
            .map_err(|_| ApplicationError::not_found(format!("article {} not found", query.id)))?;
        deadline::within(self.timeout, async {
            let article = self.article_repo.get_by_id(id).await?;
            self.hydrator.hydrate_one(article).await
        })
        .await
    }
}

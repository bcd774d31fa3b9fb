use super::ArticleQueryService;
use crate::{
    application::{deadline, dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleTitle,
};

pub struct GetArticleByTitleQuery {
    pub title: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_title(
        &self,
        query: GetArticleByTitleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(query.title)?;
        deadline::within(self.timeout, async {
            let article = self.article_repo.get_by_title(&title).await?;
            self.hydrator.hydrate_one(article).await
        })
        .await
    }
}

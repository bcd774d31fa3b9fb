// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        deadline,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id).map_err(|_| {
            ApplicationError::not_found(format!("article {} not found", command.id))
        })?;

        deadline::within(self.timeout, async {
            self.article_repo.get_by_id(id).await?;
            self.article_repo.delete(id).await?;
            Ok::<_, ApplicationError>(())
        })
        .await
    }
}

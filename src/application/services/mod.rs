// src/application/services/mod.rs
mod hydration;

pub use hydration::AuthorHydrator;

use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        commands::articles::ArticleCommandService, ports::time::Clock,
        queries::articles::ArticleQueryService,
    },
    domain::{article::ArticleRepository, author::AuthorRepository},
};

pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(2);

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        clock: Arc<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        let hydrator = Arc::new(AuthorHydrator::new(Arc::clone(&author_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&author_repo),
            Arc::clone(&clock),
            timeout,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&hydrator),
            timeout,
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}

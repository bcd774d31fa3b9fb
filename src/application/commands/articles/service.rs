// src/application/commands/articles/service.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::ports::time::Clock,
    domain::{article::ArticleRepository, author::AuthorRepository},
};

pub struct ArticleCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) timeout: Duration,
}

impl ArticleCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        clock: Arc<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        Self {
            article_repo,
            author_repo,
            clock,
            timeout,
        }
    }
}

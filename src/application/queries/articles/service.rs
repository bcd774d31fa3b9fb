use std::{sync::Arc, time::Duration};

use crate::{application::services::AuthorHydrator, domain::article::ArticleRepository};

pub struct ArticleQueryService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) hydrator: Arc<AuthorHydrator>,
    pub(super) timeout: Duration,
}

impl ArticleQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        hydrator: Arc<AuthorHydrator>,
        timeout: Duration,
    ) -> Self {
        Self {
            article_repo,
            hydrator,
            timeout,
        }
    }
}

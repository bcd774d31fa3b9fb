// tests/support/builders.rs
use super::mocks::fixed_now;
use article_service::domain::article::{ArticleContent, ArticleTitle, NewArticle};
use article_service::domain::author::AuthorId;
use chrono::{DateTime, Utc};

pub struct NewArticleBuilder {
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl NewArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            content: "Test content".into(),
            author_id: 1,
            created_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn build(self) -> NewArticle {
        NewArticle {
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            author_id: AuthorId::new(self.author_id).unwrap(),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for NewArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

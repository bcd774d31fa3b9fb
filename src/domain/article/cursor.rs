use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Resume position for newest-first article listing. Pages continue with
/// articles whose id is strictly lower than `article_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleCursor {
    pub article_id: ArticleId,
}

impl ArticleCursor {
    pub fn new(article_id: ArticleId) -> Self {
        Self { article_id }
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(i64::from(self.article_id).to_string().as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());
        let bytes = URL_SAFE_NO_PAD.decode(token.trim()).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let id = raw.parse::<i64>().map_err(|_| invalid())?;
        let article_id = ArticleId::new(id).map_err(|_| invalid())?;
        Ok(Self::new(article_id))
    }
}

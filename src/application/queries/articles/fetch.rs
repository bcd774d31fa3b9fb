use super::ArticleQueryService;
use crate::{
    application::{
        deadline,
        dto::{ArticleDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleCursor, errors::DomainError},
};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct FetchArticlesQuery {
    pub cursor: Option<String>,
    pub num: i64,
}

impl ArticleQueryService {
    pub async fn fetch_articles(
        &self,
        query: FetchArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let limit = Self::normalize_limit(query.num);
        let cursor = Self::decode_cursor(query.cursor.as_deref())?;

        deadline::within(self.timeout, async {
            let (articles, next_cursor) = self.article_repo.fetch(cursor, limit).await?;
            let items = self.hydrator.hydrate_all(articles).await?;
            Ok::<_, ApplicationError>(CursorPage::new(
                items,
                next_cursor.map(|cursor| cursor.encode()),
            ))
        })
        .await
    }

    pub(super) fn normalize_limit(num: i64) -> u32 {
        if num <= 0 {
            return DEFAULT_PAGE_SIZE;
        }
        u32::try_from(num).map_or(MAX_PAGE_SIZE, |n| n.min(MAX_PAGE_SIZE))
    }

    pub(super) fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<ArticleCursor>> {
        match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(value) => match ArticleCursor::decode(value) {
                Ok(cursor) => Ok(Some(cursor)),
                Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
                Err(other) => Err(ApplicationError::from(other)),
            },
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_num_uses_default() {
        assert_eq!(ArticleQueryService::normalize_limit(0), DEFAULT_PAGE_SIZE);
        assert_eq!(ArticleQueryService::normalize_limit(-5), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn large_num_is_capped() {
        assert_eq!(ArticleQueryService::normalize_limit(3), 3);
        assert_eq!(ArticleQueryService::normalize_limit(1_000), MAX_PAGE_SIZE);
        assert_eq!(ArticleQueryService::normalize_limit(i64::MAX), MAX_PAGE_SIZE);
    }

    #[test]
    fn blank_cursor_means_start() {
        assert!(ArticleQueryService::decode_cursor(None).unwrap().is_none());
        assert!(ArticleQueryService::decode_cursor(Some("")).unwrap().is_none());
        assert!(matches!(
            ArticleQueryService::decode_cursor(Some("!!")),
            Err(ApplicationError::Validation(_))
        ));
    }
}

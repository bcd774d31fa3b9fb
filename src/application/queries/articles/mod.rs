mod fetch;
mod get_by_id;
mod get_by_title;
mod service;

pub use fetch::{DEFAULT_PAGE_SIZE, FetchArticlesQuery, MAX_PAGE_SIZE};
pub use get_by_id::GetArticleByIdQuery;
pub use get_by_title::GetArticleByTitleQuery;
pub use service::ArticleQueryService;

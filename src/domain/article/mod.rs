pub mod cursor;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use cursor::ArticleCursor;
pub use entity::{Article, NewArticle};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};

// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_article;
mod postgres_author;

pub use error::map_sqlx;
pub use memory::{InMemoryArticleRepository, InMemoryAuthorRepository};
pub use postgres_article::PostgresArticleRepository;
pub use postgres_author::PostgresAuthorRepository;

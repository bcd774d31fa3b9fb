// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod time;

pub use repos::{CountingAuthorRepo, FailingAuthorRepo, LaggingTitleCheckRepo, SlowArticleRepo};
pub use time::{FixedClock, fixed_now};

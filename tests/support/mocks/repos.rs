// tests/support/mocks/repos.rs
use article_service::domain::article::{
    Article, ArticleCursor, ArticleId, ArticleRepository, ArticleTitle, NewArticle,
};
use article_service::domain::author::{Author, AuthorId, AuthorRepository};
use article_service::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

/* -------------------------------- ArticleRepository -------------------------------- */

/// 読み取り・書き込みの前に `delay` だけ待ってから委譲する記事リポジトリ
pub struct SlowArticleRepo {
    inner: Arc<dyn ArticleRepository>,
    delay: Duration,
    slow_reads: bool,
    pub calls: AtomicUsize,
}

impl SlowArticleRepo {
    pub fn new(inner: Arc<dyn ArticleRepository>, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            slow_reads: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// 読み取りは即座に委譲し、書き込みだけを遅らせる
    pub fn slow_writes(inner: Arc<dyn ArticleRepository>, delay: Duration) -> Self {
        Self {
            slow_reads: false,
            ..Self::new(inner, delay)
        }
    }

    async fn pause(&self, is_read: bool) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if is_read && !self.slow_reads {
            return;
        }
        tokio::time::sleep(self.delay).await;
    }
}

#[async_trait]
impl ArticleRepository for SlowArticleRepo {
    async fn fetch(
        &self,
        cursor: Option<ArticleCursor>,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<ArticleCursor>)> {
        self.pause(true).await;
        self.inner.fetch(cursor, limit).await
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        self.pause(true).await;
        self.inner.get_by_id(id).await
    }

    async fn get_by_title(&self, title: &ArticleTitle) -> DomainResult<Article> {
        self.pause(true).await;
        self.inner.get_by_title(title).await
    }

    async fn store(&self, article: NewArticle) -> DomainResult<Article> {
        self.pause(false).await;
        self.inner.store(article).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.pause(false).await;
        self.inner.delete(id).await
    }
}

/// タイトル確認の結果を `delay` だけ遅れて返す記事リポジトリ。
/// 同じタイトルの並行保存が確認と書き込みの間で交差するようにする。
pub struct LaggingTitleCheckRepo {
    inner: Arc<dyn ArticleRepository>,
    delay: Duration,
}

impl LaggingTitleCheckRepo {
    pub fn new(inner: Arc<dyn ArticleRepository>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl ArticleRepository for LaggingTitleCheckRepo {
    async fn fetch(
        &self,
        cursor: Option<ArticleCursor>,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<ArticleCursor>)> {
        self.inner.fetch(cursor, limit).await
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        self.inner.get_by_id(id).await
    }

    async fn get_by_title(&self, title: &ArticleTitle) -> DomainResult<Article> {
        let result = self.inner.get_by_title(title).await;
        tokio::time::sleep(self.delay).await;
        result
    }

    async fn store(&self, article: NewArticle) -> DomainResult<Article> {
        self.inner.store(article).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}

/* -------------------------------- AuthorRepository -------------------------------- */

/// 呼び出し回数を数える著者リポジトリ
pub struct CountingAuthorRepo {
    inner: Arc<dyn AuthorRepository>,
    pub calls: AtomicUsize,
}

impl CountingAuthorRepo {
    pub fn new(inner: Arc<dyn AuthorRepository>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorRepository for CountingAuthorRepo {
    async fn get_by_id(&self, id: AuthorId) -> DomainResult<Author> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id).await
    }
}

/// 常にストレージ障害を返す著者リポジトリ
pub struct FailingAuthorRepo;

#[async_trait]
impl AuthorRepository for FailingAuthorRepo {
    async fn get_by_id(&self, _id: AuthorId) -> DomainResult<Author> {
        Err(DomainError::Internal("connection reset".into()))
    }
}

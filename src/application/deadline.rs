// src/application/deadline.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use std::{future::Future, time::Duration};

/// Run `operation` to completion or fail with [`ApplicationError::Timeout`].
///
/// On expiry the operation's future is dropped at its current await point,
/// so repository calls it has not reached yet are never issued.
pub async fn within<T, F>(timeout: Duration, operation: F) -> ApplicationResult<T>
where
    F: Future<Output = ApplicationResult<T>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => {
            tracing::debug!(?timeout, "operation deadline elapsed");
            Err(ApplicationError::Timeout(timeout))
        }
    }
}

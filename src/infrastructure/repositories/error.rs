// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_ARTICLE_AUTHOR: &str = "article_author_id_fkey";
const CNT_ARTICLE_TITLE: &str = "article_title_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        sqlx::Error::Database(db_err) => {
            match db_err.constraint() {
                Some(CNT_ARTICLE_AUTHOR) => {
                    return DomainError::Conflict("referenced author does not exist".into());
                }
                Some(CNT_ARTICLE_TITLE) => {
                    return DomainError::Conflict("article title already exists".into());
                }
                _ => {}
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::Conflict("foreign key constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Internal(db_err.message().to_string())
        }
        _ => DomainError::Internal(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_faults_are_internal() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Internal(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolClosed),
            DomainError::Internal(_)
        ));
    }

    #[test]
    fn missing_row_is_not_found() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(_)
        ));
    }
}

// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `created_at` / `updated_at` stamps for stored articles.
///
/// Implementations should return values the storage layer can round-trip
/// unchanged (microsecond precision for Postgres `TIMESTAMPTZ`).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

//! Persistence store for generated deed PDFs.
#![allow(dead_code)]
//!
//! `DeedStore` is an explicitly constructed, injected handle: handlers only
//! see the trait, so tests substitute `MemoryDeedStore` without a database.
//! Identifiers are generated server-side (UUID v4); writes are independent
//! inserts with no update-in-place, reads are independent lookups.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::deed::DeedRow;

#[async_trait]
pub trait DeedStore: Send + Sync {
    /// Stores one finished PDF and returns its generated identifier.
    async fn insert(&self, pdf_data: Vec<u8>) -> Result<Uuid, AppError>;

    /// Fetches a stored deed by identifier. `Ok(None)` when no row matches.
    async fn fetch(&self, id: Uuid) -> Result<Option<DeedRow>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL store
// ────────────────────────────────────────────────────────────────────────────

pub struct PgDeedStore {
    pool: PgPool,
}

impl PgDeedStore {
    pub fn new(pool: PgPool) -> Self {
        PgDeedStore { pool }
    }
}

#[async_trait]
impl DeedStore for PgDeedStore {
    async fn insert(&self, pdf_data: Vec<u8>) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO deeds (id, pdf_data) VALUES ($1, $2)")
            .bind(id)
            .bind(&pdf_data)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<DeedRow>, AppError> {
        let row = sqlx::query_as::<_, DeedRow>(
            "SELECT id, pdf_data, created_at FROM deeds WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store (test double)
// ────────────────────────────────────────────────────────────────────────────

/// HashMap-backed store with the same insert/fetch semantics as
/// `PgDeedStore`. Used by handler tests.
#[derive(Default)]
pub struct MemoryDeedStore {
    deeds: Mutex<HashMap<Uuid, DeedRow>>,
}

impl MemoryDeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents (for asserting that failed requests
    /// perform no writes).
    pub fn count(&self) -> usize {
        self.deeds.lock().expect("store lock poisoned").len()
    }
}

#[async_trait]
impl DeedStore for MemoryDeedStore {
    async fn insert(&self, pdf_data: Vec<u8>) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let row = DeedRow {
            id,
            pdf_data,
            created_at: Utc::now(),
        };
        self.deeds
            .lock()
            .expect("store lock poisoned")
            .insert(id, row);
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<DeedRow>, AppError> {
        Ok(self
            .deeds
            .lock()
            .expect("store lock poisoned")
            .get(&id)
            .cloned())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

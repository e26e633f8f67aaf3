//! SQLite-backed content store.
//!
//! Records are kept as JSON documents; the store owns `_id` assignment and the
//! `_createdDate` / `_updatedDate` audit stamps.

use std::path::Path;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use sqlx::{Row, SqliteConnection, SqlitePool};

use crate::errors::AppError;
use crate::models::Collection;
use crate::store::ContentStore;

/// Content repository over the `content_items` table.
#[derive(Clone)]
pub struct ContentRepository {
    pool: SqlitePool,
}

impl ContentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace a record, returning its `_id`.
    ///
    /// Records without an `_id` get a generated one.
    pub async fn upsert(&self, collection: Collection, record: Value) -> Result<String, AppError> {
        let mut conn = self.pool.acquire().await?;
        upsert_record(&mut *conn, collection, record).await
    }

    /// Load a seed file shaped like `{"events": [...], "projects": [...]}`.
    ///
    /// The whole file is applied in one transaction. Returns the number of
    /// records written.
    pub async fn import_seed(&self, path: &Path) -> Result<usize, AppError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Internal(format!("Failed to read seed {}: {}", path.display(), e))
        })?;
        let seed: Map<String, Value> = serde_json::from_str(&raw)?;

        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for (name, records) in seed {
            let collection = name.parse::<Collection>()?;
            let Value::Array(records) = records else {
                return Err(AppError::Validation(format!(
                    "Seed entry {} must be an array of records",
                    name
                )));
            };
            for record in records {
                upsert_record(&mut *tx, collection, record).await?;
                written += 1;
            }
        }

        tx.commit().await?;

        tracing::info!("Imported {} seed records from {}", written, path.display());
        Ok(written)
    }
}

#[async_trait]
impl ContentStore for ContentRepository {
    fn backend_tag(&self) -> &'static str {
        "sqlite"
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Value>, AppError> {
        let rows = sqlx::query(
            "SELECT id, data, created_date, updated_date FROM content_items WHERE collection = ? ORDER BY rowid",
        )
        .bind(collection.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    async fn find(&self, collection: Collection, id: &str) -> Result<Option<Value>, AppError> {
        let row = sqlx::query(
            "SELECT id, data, created_date, updated_date FROM content_items WHERE collection = ? AND id = ?",
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(record_from_row).transpose()
    }
}

async fn upsert_record(
    conn: &mut SqliteConnection,
    collection: Collection,
    record: Value,
) -> Result<String, AppError> {
    let Value::Object(mut data) = record else {
        return Err(AppError::Validation(format!(
            "{} records must be JSON objects",
            collection
        )));
    };

    let id = match data.get("_id") {
        Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
        None | Some(Value::Null) => uuid::Uuid::new_v4().to_string(),
        Some(other) => {
            return Err(AppError::Validation(format!(
                "Invalid _id in {} record: {}",
                collection, other
            )))
        }
    };

    // Audit stamps belong to the store, not the record author
    data.insert("_id".to_string(), Value::String(id.clone()));
    data.remove("_createdDate");
    data.remove("_updatedDate");

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let data_json = Value::Object(data).to_string();

    sqlx::query(
        r#"
        INSERT INTO content_items (collection, id, data, created_date, updated_date)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT (collection, id) DO UPDATE SET
            data = excluded.data,
            updated_date = excluded.updated_date
        "#,
    )
    .bind(collection.as_str())
    .bind(&id)
    .bind(&data_json)
    .bind(&now)
    .bind(&now)
    .execute(&mut *conn)
    .await?;

    Ok(id)
}

fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Value, AppError> {
    let id: String = row.get("id");
    let data: String = row.get("data");

    let mut record: Map<String, Value> = serde_json::from_str(&data).map_err(|e| {
        AppError::MalformedRecord(format!("Stored record {} is not a JSON object: {}", id, e))
    })?;
    record.insert(
        "_createdDate".to_string(),
        Value::String(row.get("created_date")),
    );
    record.insert(
        "_updatedDate".to_string(),
        Value::String(row.get("updated_date")),
    );

    Ok(Value::Object(record))
}

//! Collection-scoped document store.
//!
//! Documents are opaque JSON objects. Each gets a generated `_id` on insert;
//! the id lives in its own column and is merged back into the object on read.

use serde_json::Value;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::Document;

/// Field under which the generated identifier is exposed.
pub const ID_FIELD: &str = "_id";

/// Equality filter on top-level document fields. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    /// Filter matching every document in a collection.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching documents whose `field` equals `value`.
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::all().and_eq(field, value)
    }

    pub fn and_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.clauses.push((field.to_string(), value.into()));
        self
    }

    /// Append the `WHERE` fragment for this filter and return the bind values in order.
    fn push_sql(&self, sql: &mut String) -> Result<Vec<(String, String)>, AppError> {
        let mut binds = Vec::with_capacity(self.clauses.len());
        for (field, value) in &self.clauses {
            if field.is_empty() || !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(AppError::BadRequest(format!(
                    "Unsupported filter field: {}",
                    field
                )));
            }
            sql.push_str(" AND json_extract(body, ?) = json_extract(?, '$')");
            binds.push((format!("$.\"{}\"", field), value.to_string()));
        }
        Ok(binds)
    }
}

/// Document store over a SQLite pool.
#[derive(Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
    name: Option<String>,
}

impl DocumentStore {
    pub fn new(pool: SqlitePool, name: Option<String>) -> Self {
        Self { pool, name }
    }

    /// Reported database name, if one is known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Insert a document and return its identifier.
    ///
    /// A non-empty string `_id` in the document is used as the identifier; otherwise
    /// one is generated. Any other `_id` value is discarded.
    pub async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, AppError> {
        let id = match document.remove(ID_FIELD) {
            Some(Value::String(id)) if !id.is_empty() => id,
            Some(other) => {
                tracing::warn!(collection, "Discarding non-string {}: {}", ID_FIELD, other);
                uuid::Uuid::new_v4().simple().to_string()
            }
            None => uuid::Uuid::new_v4().simple().to_string(),
        };
        let body = serde_json::to_string(&document)?;

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(collection)
            .bind(&body)
            .execute(&self.pool)
            .await?;

        tracing::debug!(collection, id = %id, "Inserted document");
        Ok(id)
    }

    /// Find documents in insertion order, optionally capped at `limit`.
    pub async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<u32>,
    ) -> Result<Vec<Document>, AppError> {
        let mut sql = String::from("SELECT id, body FROM documents WHERE collection = ?");
        let binds = filter.push_sql(&mut sql)?;
        sql.push_str(" ORDER BY seq LIMIT ?");

        let mut query = sqlx::query(&sql).bind(collection);
        for (path, value) in &binds {
            query = query.bind(path.as_str()).bind(value.as_str());
        }
        // SQLite treats a negative LIMIT as unbounded
        let rows = query
            .bind(limit.map(i64::from).unwrap_or(-1))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(document_from_row).collect()
    }

    /// Delete every matching document, returning how many were removed.
    pub async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64, AppError> {
        let mut sql = String::from("DELETE FROM documents WHERE collection = ?");
        let binds = filter.push_sql(&mut sql)?;

        let mut query = sqlx::query(&sql).bind(collection);
        for (path, value) in &binds {
            query = query.bind(path.as_str()).bind(value.as_str());
        }
        let result = query.execute(&self.pool).await?;

        tracing::debug!(collection, deleted = result.rows_affected(), "Deleted documents");
        Ok(result.rows_affected())
    }

    /// Count matching documents.
    pub async fn count_documents(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<i64, AppError> {
        let mut sql = String::from("SELECT COUNT(*) AS n FROM documents WHERE collection = ?");
        let binds = filter.push_sql(&mut sql)?;

        let mut query = sqlx::query(&sql).bind(collection);
        for (path, value) in &binds {
            query = query.bind(path.as_str()).bind(value.as_str());
        }
        let row = query.fetch_one(&self.pool).await?;
        Ok(row.get("n"))
    }

    /// Names of all collections that hold at least one document.
    pub async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(|row| row.get("collection")).collect())
    }
}

fn document_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Document, AppError> {
    let id: String = row.get("id");
    let body: String = row.get("body");
    let mut document: Document = serde_json::from_str(&body)?;
    document.insert(ID_FIELD.to_string(), Value::String(id));
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_store;
    use serde_json::json;
    use tempfile::TempDir;

    async fn temp_store() -> (DocumentStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let url = format!("sqlite:{}", temp_dir.path().join("store.sqlite").display());
        let store = init_store(&url, Some("store".to_string()))
            .await
            .expect("Failed to init store");
        (store, temp_dir)
    }

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_preserves_fields() {
        let (store, _dir) = temp_store().await;

        let id = store
            .insert_one("skill", doc(json!({"name": "Go", "level": 70})))
            .await
            .unwrap();

        let found = store.find("skill", &Filter::all(), None).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["_id"], json!(id));
        assert_eq!(found[0]["name"], json!("Go"));
        assert_eq!(found[0]["level"], json!(70));
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let (store, _dir) = temp_store().await;

        store.insert_one("era", doc(json!({"key": "a"}))).await.unwrap();
        store.insert_one("project", doc(json!({"title": "b"}))).await.unwrap();

        assert_eq!(store.count_documents("era", &Filter::all()).await.unwrap(), 1);
        assert_eq!(store.count_documents("project", &Filter::all()).await.unwrap(), 1);
        assert_eq!(store.count_documents("skill", &Filter::all()).await.unwrap(), 0);
        assert_eq!(
            store.list_collection_names().await.unwrap(),
            vec!["era".to_string(), "project".to_string()]
        );
    }

    #[tokio::test]
    async fn test_filter_and_limit() {
        let (store, _dir) = temp_store().await;

        store.insert_one("styles", doc(json!({"key": "global", "glow": 0.6}))).await.unwrap();
        store.insert_one("styles", doc(json!({"key": "other", "glow": 0.1}))).await.unwrap();
        store.insert_one("styles", doc(json!({"key": "global", "glow": 0.9}))).await.unwrap();

        let global = store.find("styles", &Filter::eq("key", "global"), None).await.unwrap();
        assert_eq!(global.len(), 2);
        assert_eq!(global[0]["glow"], json!(0.6));

        let first = store.find("styles", &Filter::eq("key", "global"), Some(1)).await.unwrap();
        assert_eq!(first.len(), 1);

        let numeric = store.find("styles", &Filter::eq("glow", 0.1), None).await.unwrap();
        assert_eq!(numeric.len(), 1);
        assert_eq!(numeric[0]["key"], json!("other"));
    }

    #[tokio::test]
    async fn test_delete_many_scoped_by_filter() {
        let (store, _dir) = temp_store().await;

        store.insert_one("styles", doc(json!({"key": "global"}))).await.unwrap();
        store.insert_one("styles", doc(json!({"key": "other"}))).await.unwrap();

        let deleted = store.delete_many("styles", &Filter::eq("key", "global")).await.unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(store.count_documents("styles", &Filter::all()).await.unwrap(), 1);

        let deleted = store.delete_many("styles", &Filter::all()).await.unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(store.count_documents("styles", &Filter::all()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_caller_supplied_id_is_kept() {
        let (store, _dir) = temp_store().await;

        let id = store
            .insert_one("era", doc(json!({"_id": "fixed-id", "key": "cyber"})))
            .await
            .unwrap();
        assert_eq!(id, "fixed-id");

        // Duplicate identifiers are rejected by the store
        let dup = store
            .insert_one("era", doc(json!({"_id": "fixed-id", "key": "cosmic"})))
            .await;
        assert!(matches!(dup, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_non_string_id_is_replaced() {
        let (store, _dir) = temp_store().await;

        for bad_id in [json!(5), json!(""), json!(null), json!({"$oid": "abc"})] {
            let id = store
                .insert_one("era", doc(json!({"_id": bad_id, "key": "cyber"})))
                .await
                .unwrap();
            assert_eq!(id.len(), 32);
        }

        let eras = store.find("era", &Filter::all(), None).await.unwrap();
        assert_eq!(eras.len(), 4);
        for era in &eras {
            assert!(era["_id"].is_string());
            assert_eq!(era["key"], json!("cyber"));
        }
    }

    #[tokio::test]
    async fn test_row_holds_only_id_collection_and_body() {
        let (store, _dir) = temp_store().await;

        store.insert_one("skill", doc(json!({"name": "Go"}))).await.unwrap();

        let columns: Vec<String> = sqlx::query("SELECT name FROM pragma_table_info('documents')")
            .fetch_all(&store.pool)
            .await
            .unwrap()
            .iter()
            .map(|row| row.get("name"))
            .collect();
        assert_eq!(columns, vec!["seq", "id", "collection", "body"]);

        let body: String = sqlx::query("SELECT body FROM documents")
            .fetch_one(&store.pool)
            .await
            .unwrap()
            .get("body");
        assert_eq!(body, r#"{"name":"Go"}"#);
    }

    #[tokio::test]
    async fn test_rejects_unsafe_filter_field() {
        let (store, _dir) = temp_store().await;

        let result = store.find("era", &Filter::eq("key\") OR 1=1 --", "x"), None).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_name() {
        let (store, _dir) = temp_store().await;

        assert_eq!(store.name(), Some("store"));
    }
}

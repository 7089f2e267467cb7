// src/repositories/document.rs
//
// Generic document collection access
//
// Every moderation collection stores one JSON document per row: the row key
// is the document id, the data column is the serialized record. All six
// repositories are thin shells over this helper, differing only in record
// type and query predicates.
//
// CRITICAL RULES:
// - Field names passed to the query methods come from repository code,
//   never from callers.
// - Absence is `Ok(None)`; a row with no data is a hard error naming the id.
// - Composite lookups return the first match; multiplicity is not detected.

use rusqlite::params;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::db::{get_connection, ConnectionPool};
use crate::error::{AppError, AppResult};

/// A record stored as one document in a named collection.
///
/// The id is carried by the row key, never inside the document, so records
/// mark their id field `#[serde(skip)]` and have it re-attached on read.
pub trait DocumentRecord: Serialize + DeserializeOwned {
    /// Collection table this record is stored in
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Typed handle to one collection
pub struct DocumentCollection<T> {
    pool: Arc<ConnectionPool>,
    _record: PhantomData<T>,
}

impl<T: DocumentRecord> DocumentCollection<T> {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    /// Decode one row into a record, re-attaching the row key as the id.
    ///
    /// A NULL or blank data column means the document exists but carries no
    /// data; that is a malformed document, not an absence.
    fn decode(id: String, data: Option<String>) -> AppResult<T> {
        let data = match data {
            Some(d) if !d.trim().is_empty() => d,
            _ => return Err(AppError::MalformedDocument { id }),
        };

        let mut record: T = serde_json::from_str(&data)?;
        record.set_id(id);
        Ok(record)
    }

    /// Get one document by id; absence is `Ok(None)`
    pub fn get(&self, id: &str) -> AppResult<Option<T>> {
        let conn = get_connection(&self.pool)?;

        let sql = format!("SELECT id, data FROM {} WHERE id = ?1", T::COLLECTION);
        let mut stmt = conn.prepare(&sql)?;

        let row = stmt.query_row(params![id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
        });

        match row {
            Ok((id, data)) => Self::decode(id, data).map(Some),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    /// Upsert one document under its id
    pub fn put(&self, record: &T) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        let data = serde_json::to_string(record)?;

        let sql = format!(
            "INSERT OR REPLACE INTO {} (id, data) VALUES (?1, ?2)",
            T::COLLECTION
        );
        conn.execute(&sql, params![record.id(), data])?;

        Ok(())
    }

    /// Delete one document by id; a missing document is an error
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        let sql = format!("DELETE FROM {} WHERE id = ?1", T::COLLECTION);
        let rows_affected = conn.execute(&sql, params![id])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    /// All documents, newest first
    pub fn get_all(&self) -> AppResult<Vec<T>> {
        let conn = get_connection(&self.pool)?;

        let sql = format!(
            "SELECT id, data FROM {} ORDER BY json_extract(data, '$.createdAt') DESC",
            T::COLLECTION
        );
        let mut stmt = conn.prepare(&sql)?;

        let rows: Vec<(String, Option<String>)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, data)| Self::decode(id, data))
            .collect()
    }

    /// Documents matching all equality predicates, newest first
    pub fn find_by(&self, filters: &[(&str, &str)]) -> AppResult<Vec<T>> {
        let conn = get_connection(&self.pool)?;

        let mut sql = format!("SELECT id, data FROM {}", T::COLLECTION);
        for (i, (field, _)) in filters.iter().enumerate() {
            sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            sql.push_str(&format!("json_extract(data, '$.{}') = ?{}", field, i + 1));
        }
        sql.push_str(" ORDER BY json_extract(data, '$.createdAt') DESC");

        let mut stmt = conn.prepare(&sql)?;
        let values = rusqlite::params_from_iter(filters.iter().map(|(_, value)| *value));

        let rows: Vec<(String, Option<String>)> = stmt
            .query_map(values, |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, data)| Self::decode(id, data))
            .collect()
    }

    /// First document matching all equality predicates, or `None`
    ///
    /// Used for composite-key lookups where at most one logical result is
    /// expected. Extra matches are not treated as an error here.
    pub fn find_first(&self, filters: &[(&str, &str)]) -> AppResult<Option<T>> {
        let mut matches = self.find_by(filters)?;

        if matches.is_empty() {
            Ok(None)
        } else {
            Ok(Some(matches.swap_remove(0)))
        }
    }

    /// Documents created inside `[from, to]` (epoch milliseconds), newest first
    pub fn find_created_between(&self, from_millis: i64, to_millis: i64) -> AppResult<Vec<T>> {
        let conn = get_connection(&self.pool)?;

        let sql = format!(
            "SELECT id, data FROM {}
             WHERE json_extract(data, '$.createdAt') >= ?1
               AND json_extract(data, '$.createdAt') <= ?2
             ORDER BY json_extract(data, '$.createdAt') DESC",
            T::COLLECTION
        );
        let mut stmt = conn.prepare(&sql)?;

        let rows: Vec<(String, Option<String>)> = stmt
            .query_map(params![from_millis, to_millis], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, data)| Self::decode(id, data))
            .collect()
    }
}

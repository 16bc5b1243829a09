//! DuckDB connection wrapper holding the catalog tables.
//!
//! Each table keeps the canonical record as JSON text in `doc`, next to a
//! handful of projected columns used for filtering and ordering.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{CatalogError, Result};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS sets (
    set_code        VARCHAR PRIMARY KEY,
    set_name        VARCHAR NOT NULL,
    release_date    VARCHAR NOT NULL,
    set_type        VARCHAR NOT NULL,
    card_count      UBIGINT NOT NULL,
    block_code      VARCHAR,
    parent_set_code VARCHAR,
    doc             VARCHAR NOT NULL
);
CREATE TABLE IF NOT EXISTS cards (
    set_code            VARCHAR NOT NULL,
    collector_number    VARCHAR NOT NULL,
    name                VARCHAR NOT NULL,
    layout              VARCHAR NOT NULL,
    rarity              VARCHAR NOT NULL,
    converted_mana_cost DOUBLE  NOT NULL,
    doc                 VARCHAR NOT NULL,
    PRIMARY KEY (set_code, collector_number)
);
";

/// Wraps a DuckDB connection with the catalog schema applied.
pub struct Connection {
    conn: DuckDbConnection,
    path: Option<PathBuf>,
}

impl Connection {
    /// Open an in-memory catalog database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Self::init(conn, None)
    }

    /// Open (or create) a file-backed catalog database.
    ///
    /// Missing parent directories are created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = DuckDbConnection::open(path)?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    fn init(conn: DuckDbConnection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        match &path {
            Some(p) => info!(path = %p.display(), "opened catalog database"),
            None => info!("opened in-memory catalog database"),
        }
        Ok(Self { conn, path })
    }

    /// Database file, or `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values = bind(params);
        let mut rows_result = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the query has run
        let stmt_ref = rows_result
            .as_ref()
            .ok_or_else(|| CatalogError::Internal("statement has no result set".into()))?;
        let column_names: Vec<String> = stmt_ref
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        let mut out = Vec::new();
        while let Some(row) = rows_result.next()? {
            let mut map = HashMap::with_capacity(column_names.len());
            for (i, col_name) in column_names.iter().enumerate() {
                map.insert(col_name.clone(), convert_value_ref(row.get_ref(i)?));
            }
            out.push(map);
        }
        Ok(out)
    }

    /// Execute SQL and deserialize the JSON text in column `doc` of each row.
    pub fn execute_docs<T: DeserializeOwned>(&self, sql: &str, params: &[String]) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let doc = row
                .get("doc")
                .and_then(|v| v.as_str())
                .ok_or_else(|| CatalogError::Internal("query did not select doc".into()))?;
            results.push(serde_json::from_str(doc)?);
        }
        Ok(results)
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values = bind(params);
        let mut rows = stmt.query(param_values.as_slice())?;

        if let Some(row) = rows.next()? {
            Ok(Some(convert_value_ref(row.get_ref(0)?)))
        } else {
            Ok(None)
        }
    }

    /// Execute a data-changing statement and return the number of affected rows.
    pub fn execute_update(&self, sql: &str, params: &[String]) -> Result<usize> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values = bind(params);
        Ok(stmt.execute(param_values.as_slice())?)
    }
}

fn bind(params: &[String]) -> Vec<&dyn duckdb::ToSql> {
    params.iter().map(|p| p as &dyn duckdb::ToSql).collect()
}

/// Map a result cell onto JSON. The catalog schema only produces the
/// integer, double, boolean and text types handled here.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    use serde_json::Value;
    match val {
        ValueRef::Boolean(b) => Value::Bool(b),
        ValueRef::Int(n) => Value::from(n),
        ValueRef::BigInt(n) => Value::from(n),
        ValueRef::HugeInt(n) => i64::try_from(n)
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(n.to_string())),
        ValueRef::Double(f) => Value::from(f),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        _ => Value::Null,
    }
}

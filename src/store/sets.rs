//! Set storage keyed by `set_code`.

use tracing::info;

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::Set;
use crate::sql_builder::SqlBuilder;

// ---------------------------------------------------------------------------
// SetFilter
// ---------------------------------------------------------------------------

/// Filters for [`SetStore::list`]. `None` skips the filter.
#[derive(Debug, Clone, Default)]
pub struct SetFilter {
    /// Case-insensitive substring of `set_name`.
    pub name: Option<String>,
    pub set_type: Option<String>,
    pub block_code: Option<String>,
    pub parent_set_code: Option<String>,
    /// Inclusive lower bound on `release_date` (`YYYY-MM-DD`).
    pub released_after: Option<String>,
    /// Inclusive upper bound on `release_date` (`YYYY-MM-DD`).
    pub released_before: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// ---------------------------------------------------------------------------
// SetStore
// ---------------------------------------------------------------------------

pub struct SetStore<'a> {
    conn: &'a Connection,
}

impl<'a> SetStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert or replace the set stored under `set.set_code`.
    pub fn put(&self, set: &Set) -> Result<()> {
        let doc = serde_json::to_string(set)?;
        self.conn.execute_update(
            "INSERT OR REPLACE INTO sets \
             (set_code, set_name, release_date, set_type, card_count, block_code, parent_set_code, doc) \
             VALUES (?, ?, ?, ?, CAST(? AS UBIGINT), NULLIF(?, ''), NULLIF(?, ''), ?)",
            &[
                set.set_code.clone(),
                set.set_name.clone(),
                set.release_date.clone(),
                set.set_type.clone(),
                set.card_count.to_string(),
                set.block_code.clone().unwrap_or_default(),
                set.parent_set_code.clone().unwrap_or_default(),
                doc,
            ],
        )?;
        info!(set_code = %set.set_code, "stored set");
        Ok(())
    }

    pub fn get(&self, set_code: &str) -> Result<Option<Set>> {
        let (sql, params) = SqlBuilder::new(config::SETS_TABLE)
            .select(&["doc"])
            .where_eq("set_code", set_code)
            .limit(1)
            .build();
        Ok(self.conn.execute_docs(&sql, &params)?.into_iter().next())
    }

    pub fn exists(&self, set_code: &str) -> Result<bool> {
        let (sql, params) = SqlBuilder::new(config::SETS_TABLE)
            .select(&["COUNT(*) AS cnt"])
            .where_eq("set_code", set_code)
            .build();
        let cnt = self
            .conn
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_i64())
            .unwrap_or(0);
        Ok(cnt > 0)
    }

    /// Remove a set. Returns `false` if nothing was stored under the code.
    pub fn delete(&self, set_code: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute_update("DELETE FROM sets WHERE set_code = ?", &[set_code.to_string()])?;
        if removed > 0 {
            info!(set_code, "deleted set");
        }
        Ok(removed > 0)
    }

    /// List sets, newest release first (ties broken by code).
    pub fn list(&self, filter: &SetFilter) -> Result<Vec<Set>> {
        let mut qb = SqlBuilder::new(config::SETS_TABLE);
        qb.select(&["doc"]);
        qb.order_by(&["release_date DESC", "set_code ASC"]);

        if let Some(ref name) = filter.name {
            qb.where_like("set_name", &format!("%{}%", name));
        }
        if let Some(ref st) = filter.set_type {
            qb.where_eq("set_type", st);
        }
        if let Some(ref block) = filter.block_code {
            qb.where_eq("block_code", block);
        }
        if let Some(ref parent) = filter.parent_set_code {
            qb.where_eq("parent_set_code", parent);
        }
        if let Some(ref after) = filter.released_after {
            qb.where_gte("release_date", after);
        }
        if let Some(ref before) = filter.released_before {
            qb.where_lte("release_date", before);
        }

        qb.limit(config::page_size(filter.limit));
        qb.offset(filter.offset.unwrap_or(0));

        let (sql, params) = qb.build();
        self.conn.execute_docs(&sql, &params)
    }

    /// Count stored sets, optionally of one `set_type`.
    pub fn count(&self, set_type: Option<&str>) -> Result<i64> {
        let mut qb = SqlBuilder::new(config::SETS_TABLE);
        qb.select(&["COUNT(*) AS cnt"]);
        if let Some(st) = set_type {
            qb.where_eq("set_type", st);
        }
        let (sql, params) = qb.build();
        let cnt = self
            .conn
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_i64())
            .unwrap_or(0);
        Ok(cnt)
    }
}

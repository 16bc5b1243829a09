//! Card storage keyed by `(set_code, collector_number)`.

use tracing::info;

use crate::config;
use crate::connection::Connection;
use crate::error::{CatalogError, Result};
use crate::models::Card;
use crate::sql_builder::SqlBuilder;
use crate::validation::tokens;

// ---------------------------------------------------------------------------
// CardFilter
// ---------------------------------------------------------------------------

/// Filters for [`CardStore::list`]. `None` skips the filter.
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    pub set_code: Option<String>,
    /// Case-insensitive substring of `name`.
    pub name: Option<String>,
    pub rarity: Option<String>,
    pub layout: Option<String>,
    pub cmc_min: Option<f64>,
    pub cmc_max: Option<f64>,
    /// Play format the card must be flagged legal in, e.g. `"modern"`.
    pub legal_in: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// ---------------------------------------------------------------------------
// CardStore
// ---------------------------------------------------------------------------

pub struct CardStore<'a> {
    conn: &'a Connection,
}

impl<'a> CardStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert or replace the card stored under its `(set_code, collector_number)`.
    pub fn put(&self, card: &Card) -> Result<()> {
        let doc = serde_json::to_string(card)?;
        self.conn.execute_update(
            "INSERT OR REPLACE INTO cards \
             (set_code, collector_number, name, layout, rarity, converted_mana_cost, doc) \
             VALUES (?, ?, ?, ?, ?, CAST(? AS DOUBLE), ?)",
            &[
                card.set_code.clone(),
                card.collector_number.clone(),
                card.name.clone(),
                card.layout.clone(),
                card.rarity.clone(),
                card.converted_mana_cost.to_string(),
                doc,
            ],
        )?;
        info!(
            set_code = %card.set_code,
            collector_number = %card.collector_number,
            "stored card"
        );
        Ok(())
    }

    pub fn get(&self, set_code: &str, collector_number: &str) -> Result<Option<Card>> {
        let (sql, params) = SqlBuilder::new(config::CARDS_TABLE)
            .select(&["doc"])
            .where_eq("set_code", set_code)
            .where_eq("collector_number", collector_number)
            .limit(1)
            .build();
        Ok(self.conn.execute_docs(&sql, &params)?.into_iter().next())
    }

    /// Remove a card. Returns `false` if nothing was stored under the key.
    pub fn delete(&self, set_code: &str, collector_number: &str) -> Result<bool> {
        let removed = self.conn.execute_update(
            "DELETE FROM cards WHERE set_code = ? AND collector_number = ?",
            &[set_code.to_string(), collector_number.to_string()],
        )?;
        if removed > 0 {
            info!(set_code, collector_number, "deleted card");
        }
        Ok(removed > 0)
    }

    /// List cards ordered by set, then numerically by collector number.
    ///
    /// Fails with [`CatalogError::InvalidArgument`] for an unknown `legal_in`
    /// format.
    pub fn list(&self, filter: &CardFilter) -> Result<Vec<Card>> {
        let mut qb = SqlBuilder::new(config::CARDS_TABLE);
        qb.select(&["doc"]);
        qb.order_by(&[
            "set_code ASC",
            "TRY_CAST(collector_number AS INTEGER) ASC NULLS LAST",
            "collector_number ASC",
        ]);

        if let Some(ref sc) = filter.set_code {
            qb.where_eq("set_code", sc);
        }
        if let Some(ref name) = filter.name {
            qb.where_like("name", &format!("%{}%", name));
        }
        if let Some(ref rarity) = filter.rarity {
            qb.where_eq("rarity", rarity);
        }
        if let Some(ref layout) = filter.layout {
            qb.where_eq("layout", layout);
        }
        if let Some(min) = filter.cmc_min {
            qb.where_clause("converted_mana_cost >= CAST(? AS DOUBLE)", &[&min.to_string()]);
        }
        if let Some(max) = filter.cmc_max {
            qb.where_clause("converted_mana_cost <= CAST(? AS DOUBLE)", &[&max.to_string()]);
        }
        if let Some(ref format) = filter.legal_in {
            if !tokens::is_format(format) {
                return Err(CatalogError::InvalidArgument(format!(
                    "unknown play format: {format}"
                )));
            }
            // docs are compact serde_json output
            let flag = format!("\"is_{format}_legal\":true");
            qb.where_clause("contains(doc, ?)", &[&flag]);
        }

        qb.limit(config::page_size(filter.limit));
        qb.offset(filter.offset.unwrap_or(0));

        let (sql, params) = qb.build();
        self.conn.execute_docs(&sql, &params)
    }

    /// Count stored cards, optionally within one set.
    pub fn count(&self, set_code: Option<&str>) -> Result<i64> {
        let mut qb = SqlBuilder::new(config::CARDS_TABLE);
        qb.select(&["COUNT(*) AS cnt"]);
        if let Some(sc) = set_code {
            qb.where_eq("set_code", sc);
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

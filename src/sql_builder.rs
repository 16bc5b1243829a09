//! Parameterized `SELECT` construction for the catalog tables.
//!
//! Values always travel as `?` parameters, never through string
//! interpolation. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use mtg_catalog::SqlBuilder;
//! let (sql, params) = SqlBuilder::new("cards")
//!     .select(&["doc"])
//!     .where_eq("set_code", "ust")
//!     .where_like("name", "%Goblin%")
//!     .order_by(&["collector_number"])
//!     .limit(10)
//!     .build();
//! assert_eq!(params, vec!["ust", "%Goblin%"]);
//! assert!(sql.ends_with("LIMIT 10"));
//! ```

use std::fmt::Write;

/// Accumulates the pieces of one `SELECT` over a single table.
#[derive(Debug, Clone)]
pub struct SqlBuilder {
    table: String,
    columns: Vec<String>,
    conditions: Vec<String>,
    params: Vec<String>,
    ordering: Vec<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl SqlBuilder {
    /// Start a `SELECT *` over `table`.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_owned(),
            columns: Vec::new(),
            conditions: Vec::new(),
            params: Vec::new(),
            ordering: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Columns or expressions to return instead of `*`.
    pub fn select(&mut self, columns: &[&str]) -> &mut Self {
        self.columns = columns.iter().map(|c| (*c).to_owned()).collect();
        self
    }

    /// Add a raw condition; `params` fill its `?` placeholders in order.
    pub fn where_clause(&mut self, condition: &str, params: &[&str]) -> &mut Self {
        self.conditions.push(condition.to_owned());
        self.params.extend(params.iter().map(|p| (*p).to_owned()));
        self
    }

    pub fn where_eq(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clause(&format!("{column} = ?"), &[value])
    }

    /// Case-insensitive `LIKE`; the caller supplies any `%` wildcards.
    pub fn where_like(&mut self, column: &str, pattern: &str) -> &mut Self {
        self.where_clause(&format!("LOWER({column}) LIKE LOWER(?)"), &[pattern])
    }

    pub fn where_gte(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clause(&format!("{column} >= ?"), &[value])
    }

    pub fn where_lte(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clause(&format!("{column} <= ?"), &[value])
    }

    /// Append sort keys such as `"release_date DESC"`.
    pub fn order_by(&mut self, keys: &[&str]) -> &mut Self {
        self.ordering.extend(keys.iter().map(|k| (*k).to_owned()));
        self
    }

    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(&mut self, n: usize) -> &mut Self {
        self.offset = Some(n);
        self
    }

    /// Render the statement, one clause per line, with its parameters.
    pub fn build(&self) -> (String, Vec<String>) {
        let columns = if self.columns.is_empty() {
            "*".to_owned()
        } else {
            self.columns.join(", ")
        };
        let mut sql = format!("SELECT {columns}\nFROM {}", self.table);

        // writing to a String cannot fail
        if !self.conditions.is_empty() {
            let _ = write!(sql, "\nWHERE {}", self.conditions.join(" AND "));
        }
        if !self.ordering.is_empty() {
            let _ = write!(sql, "\nORDER BY {}", self.ordering.join(", "));
        }
        if let Some(n) = self.limit {
            let _ = write!(sql, "\nLIMIT {n}");
        }
        if let Some(n) = self.offset {
            let _ = write!(sql, "\nOFFSET {n}");
        }

        (sql, self.params.clone())
    }
}

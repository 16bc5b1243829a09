//! Validated storage for Magic: The Gathering sets and cards.
//!
//! Incoming JSON records are checked field by field, narrowed into canonical
//! [`models::Set`] / [`models::Card`] values and kept in a DuckDB database
//! keyed by each record's natural key.
//!
//! # Quick start
//!
//! ```no_run
//! use mtg_catalog::Catalog;
//! use serde_json::json;
//!
//! let catalog = Catalog::builder().build().unwrap();
//!
//! let set = catalog.create_set(&json!({
//!     "set_code": "ust",
//!     "set_name": "Unstable",
//!     "release_date": "2017-12-08",
//!     "set_type": "funny",
//!     "card_count": 268,
//!     "icon_uri": "https://img.example.com/sets/ust.svg"
//! })).unwrap();
//!
//! assert_eq!(catalog.sets().get("ust").unwrap(), Some(set));
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod import;
pub mod models;
pub mod normalize;
#[cfg(feature = "server")]
pub mod server;
pub mod sql_builder;
pub mod store;
pub mod validation;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalog;
pub use connection::Connection;
pub use error::{CatalogError, Result};
pub use normalize::{create_card, create_set};
pub use sql_builder::SqlBuilder;
pub use validation::{ValidationError, ViolationKind};

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::models::{Card, Set};

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    database: Option<PathBuf>,
}

impl CatalogBuilder {
    /// Store the catalog in a DuckDB file at `path`.
    ///
    /// Without this the catalog lives in memory and is lost on drop.
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database = Some(path.as_ref().to_path_buf());
        self
    }

    /// Open the database and create the tables if needed.
    pub fn build(self) -> Result<Catalog> {
        let conn = match self.database {
            Some(path) => Connection::open(path)?,
            None => Connection::open_in_memory()?,
        };
        Ok(Catalog { conn })
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The service handed to whatever serves requests.
///
/// Write operations always normalize the raw record first; nothing reaches
/// the stores without passing validation.
pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    /// Create a new builder for configuring the catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    // -- Store accessors ---------------------------------------------------

    /// Access the set store.
    pub fn sets(&self) -> store::SetStore<'_> {
        store::SetStore::new(&self.conn)
    }

    /// Access the card store.
    pub fn cards(&self) -> store::CardStore<'_> {
        store::CardStore::new(&self.conn)
    }

    // -- Writes ------------------------------------------------------------

    /// Normalize a raw set and store it under its `set_code`.
    pub fn create_set(&self, raw: &Value) -> Result<Set> {
        let set = normalize::create_set(raw)?;
        self.sets().put(&set)?;
        Ok(set)
    }

    /// Normalize a raw set and store it under `set_code`.
    ///
    /// The body's own `set_code` must equal `set_code`.
    pub fn replace_set(&self, set_code: &str, raw: &Value) -> Result<Set> {
        let set = normalize::create_set(raw)?;
        if set.set_code != set_code {
            return Err(CatalogError::InvalidArgument(format!(
                "set_code in body ({}) does not match path ({})",
                set.set_code, set_code
            )));
        }
        self.sets().put(&set)?;
        Ok(set)
    }

    /// Normalize a raw card and store it under `(set_code, collector_number)`.
    pub fn create_card(&self, raw: &Value) -> Result<Card> {
        let card = normalize::create_card(raw)?;
        self.cards().put(&card)?;
        Ok(card)
    }

    /// Normalize a raw card and store it under the given key.
    ///
    /// The body's own key must equal `(set_code, collector_number)`.
    pub fn replace_card(&self, set_code: &str, collector_number: &str, raw: &Value) -> Result<Card> {
        let card = normalize::create_card(raw)?;
        if card.key() != (set_code, collector_number) {
            return Err(CatalogError::InvalidArgument(format!(
                "card key in body ({}/{}) does not match path ({}/{})",
                card.set_code, card.collector_number, set_code, collector_number
            )));
        }
        self.cards().put(&card)?;
        Ok(card)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.conn.path() {
            Some(path) => write!(f, "Catalog(database={})", path.display()),
            None => write!(f, "Catalog(database=:memory:)"),
        }
    }
}

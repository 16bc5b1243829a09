//! Async wrapper around [`Catalog`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every catalog operation on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use mtg_catalog::AsyncCatalog;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let catalog = AsyncCatalog::builder().build().await.unwrap();
//!     let sets = catalog
//!         .run(|c| c.sets().list(&Default::default()))
//!         .await
//!         .unwrap();
//!     println!("{} sets", sets.len());
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{CatalogError, Result};
use crate::Catalog;

// ---------------------------------------------------------------------------
// AsyncCatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCatalog`].
#[derive(Debug, Default)]
pub struct AsyncCatalogBuilder {
    database: Option<PathBuf>,
}

impl AsyncCatalogBuilder {
    /// Store the catalog in a DuckDB file at `path`.
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database = Some(path.as_ref().to_path_buf());
        self
    }

    /// Open the catalog on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncCatalog> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Catalog::builder();
            if let Some(path) = self.database {
                builder = builder.database(path);
            }
            Ok(AsyncCatalog::from_catalog(builder.build()?))
        })
        .await
        .map_err(|e| CatalogError::Internal(format!("task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCatalog
// ---------------------------------------------------------------------------

/// Async, cloneable handle to a [`Catalog`].
///
/// The catalog holds a single DuckDB connection, so calls are serialized
/// behind a [`Mutex`].
#[derive(Clone)]
pub struct AsyncCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl AsyncCatalog {
    /// Create a new builder for configuring the async catalog.
    pub fn builder() -> AsyncCatalogBuilder {
        AsyncCatalogBuilder::default()
    }

    /// Wrap an already opened catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Run a sync catalog operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Catalog) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let catalog = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = catalog
                .lock()
                .map_err(|_| CatalogError::Internal("catalog lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CatalogError::Internal(format!("task join error: {e}")))?
    }
}

//! One-time catalog initialization shared across callers
//!
//! The first [`SharedCatalog::get`] loads the files; every later call, from
//! any thread, sees the same catalog. A failed load is remembered, so the
//! system stays visibly failed instead of serving from partial state.

use crate::loader::CatalogSource;
use bogortravel_core::{Catalog, Error, Result};
use bogortravel_ranking::HybridRanker;
use std::sync::{Arc, OnceLock};
use tracing::error;

type LoadOutcome = std::result::Result<Arc<Catalog>, Arc<Error>>;

pub struct SharedCatalog {
    source: CatalogSource,
    cell: OnceLock<LoadOutcome>,
}

impl SharedCatalog {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            cell: OnceLock::new(),
        }
    }

    /// Load on first use and return the shared catalog
    pub fn get(&self) -> Result<Arc<Catalog>> {
        let outcome = self.cell.get_or_init(|| {
            self.source.load().map(Arc::new).map_err(|e| {
                error!("Failed to load catalog: {}", e);
                Arc::new(e)
            })
        });
        match outcome {
            Ok(catalog) => Ok(Arc::clone(catalog)),
            Err(e) => Err(Error::Unavailable(Arc::clone(e))),
        }
    }

    /// Ranker over the shared catalog
    pub fn ranker(&self) -> Result<HybridRanker> {
        self.get().map(HybridRanker::new)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

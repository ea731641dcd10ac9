//! # BogorTravel
//!
//! Recommends tourist places similar to one the user likes, limited to a
//! radius around the user and ordered by quality signals.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! bogortravel --place "Kebun Raya Bogor" --radius-km 10 --limit 5
//! bogortravel --list
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use bogortravel::prelude::*;
//!
//! let shared = SharedCatalog::new(CatalogSource::new(CatalogPaths::default()));
//! let ranker = shared.ranker().unwrap();
//!
//! let results = ranker.recommend_from_place("Kebun Raya Bogor", 10.0, 5).unwrap();
//! for result in &results {
//!     println!("{} ({:.2} km)", result.place.name, result.distance_km);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `bogortravel-core` - Place, SimilarityMatrix, Catalog, haversine distance
//! - `bogortravel-ranking` - HybridRanker and presentation records
//! - `bogortravel-storage` - CSV and `.npy` loading, one-time shared init

// Re-export core types
pub use bogortravel_core::{
    haversine_km, Catalog, DuplicatePolicy, Error, GeoPoint, Place, Result, SimilarityMatrix,
};

// Re-export ranking
pub use bogortravel_ranking::{
    HybridRanker, MapMarker, MarkerKind, RecommendQuery, RecommendResponse, RecommendationCard,
    RecommendationResult, DEFAULT_LIMIT, DEFAULT_RADIUS_KM,
};

// Re-export storage
pub use bogortravel_storage::{
    load_catalog, CatalogPaths, CatalogSource, LoadOptions, SharedCatalog,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, CatalogPaths, CatalogSource, DuplicatePolicy, Error, GeoPoint, HybridRanker,
        LoadOptions, Place, RecommendQuery, RecommendResponse, RecommendationResult, Result,
        SharedCatalog, SimilarityMatrix,
    };
}

/// File format helpers
pub mod io {
    pub use bogortravel_storage::{load_matrix, load_places, parse_matrix, read_places, save_matrix};
}

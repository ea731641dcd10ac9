//! # BogorTravel Ranking
//!
//! Hybrid recommendation over a loaded [`Catalog`](bogortravel_core::Catalog).
//!
//! A query runs three layers in a fixed order:
//!
//! 1. **Similarity**: read the reference place's row of the similarity matrix
//! 2. **Geography**: drop the reference itself, then every place farther than
//!    the radius from the query origin
//! 3. **Quality**: sort by similarity, rating, rating count (all descending)
//!    and keep the first `limit`
//!
//! ## Example
//!
//! ```rust
//! use bogortravel_core::{Catalog, DuplicatePolicy, Place, SimilarityMatrix};
//! use bogortravel_ranking::{HybridRanker, RecommendResponse};
//! use std::sync::Arc;
//!
//! let places = vec![
//!     Place::new("Kebun Raya Bogor", "Taman", -6.5976, 106.7996).with_rating(4.7, 85000),
//!     Place::new("Taman Sempur", "Taman", -6.5916, 106.7996).with_rating(4.5, 9000),
//! ];
//! let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.8], vec![0.8, 1.0]]).unwrap();
//! let catalog = Arc::new(Catalog::new(places, matrix, DuplicatePolicy::Reject).unwrap());
//!
//! let ranker = HybridRanker::new(catalog);
//! let results = ranker.recommend("Kebun Raya Bogor", -6.5976, 106.7996, 10.0, 5).unwrap();
//! assert_eq!(results[0].place.name, "Taman Sempur");
//!
//! let response = RecommendResponse::new("Kebun Raya Bogor", results[0].place.location(), 10.0, &results);
//! assert_eq!(response.recommendations[0].rank, 1);
//! ```

pub mod ranker;
pub mod response;

pub use ranker::{HybridRanker, RecommendQuery, RecommendationResult, DEFAULT_LIMIT, DEFAULT_RADIUS_KM};
pub use response::{MapMarker, MarkerKind, RecommendResponse, RecommendationCard};

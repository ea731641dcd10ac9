//! # BogorTravel Core
//!
//! Core data structures for the BogorTravel recommender.
//!
//! - [`Place`] - One catalog entry with coordinates and quality signals
//! - [`SimilarityMatrix`] - Dense precomputed pairwise similarity scores
//! - [`Catalog`] - Immutable place table aligned with its matrix
//! - [`haversine_km`] / [`GeoPoint`] - Great-circle distance
//!
//! ## Example
//!
//! ```rust
//! use bogortravel_core::{Catalog, DuplicatePolicy, Place, SimilarityMatrix};
//!
//! let places = vec![
//!     Place::new("Kebun Raya Bogor", "Taman", -6.5976, 106.7996),
//!     Place::new("Museum Zoologi", "Museum", -6.5980, 106.7975),
//! ];
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.4],
//!     vec![0.4, 1.0],
//! ]).unwrap();
//!
//! let catalog = Catalog::new(places, matrix, DuplicatePolicy::Reject).unwrap();
//! let index = catalog.find_index_by_name("Museum Zoologi").unwrap();
//! assert_eq!(catalog.similarity_row(index).unwrap(), &[0.4, 1.0]);
//! ```

pub mod catalog;
pub mod error;
pub mod geo;
pub mod matrix;
pub mod place;

pub use catalog::{Catalog, DuplicatePolicy};
pub use error::{Error, Result};
pub use geo::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use matrix::{SimilarityMatrix, DIAGONAL_TOLERANCE, SYMMETRY_TOLERANCE};
pub use place::Place;

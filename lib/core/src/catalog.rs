use crate::{Error, GeoPoint, Place, Result, SimilarityMatrix};
use ahash::AHashMap;
use tracing::warn;

/// What to do when two catalog rows share a name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail construction with [`Error::DuplicatePlace`]
    #[default]
    Reject,
    /// Resolve the name to its first row and list it once
    KeepFirst,
}

/// Immutable table of places paired with their similarity matrix
///
/// Row `i` of the place table corresponds to row and column `i` of the
/// matrix. A catalog is built once and shared read-only (usually behind an
/// `Arc`) by every query.
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
    matrix: SimilarityMatrix,
    by_name: AHashMap<String, usize>,
}

impl Catalog {
    pub fn new(places: Vec<Place>, matrix: SimilarityMatrix, policy: DuplicatePolicy) -> Result<Self> {
        if matrix.dim() != places.len() {
            return Err(Error::DimensionMismatch {
                places: places.len(),
                rows: matrix.dim(),
                cols: matrix.dim(),
            });
        }

        let mut by_name = AHashMap::with_capacity(places.len());
        for (index, place) in places.iter().enumerate() {
            if let Some(&first) = by_name.get(place.name.as_str()) {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicatePlace {
                            name: place.name.clone(),
                            first,
                            second: index,
                        });
                    }
                    DuplicatePolicy::KeepFirst => {
                        warn!("Duplicate place {:?} at row {} (first at row {})", place.name, index, first);
                    }
                }
            } else {
                by_name.insert(place.name.clone(), index);
            }
        }

        Ok(Self { places, matrix, by_name })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Row index of the place with exactly this name (case-sensitive)
    pub fn find_index_by_name(&self, name: &str) -> Result<usize> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| Error::PlaceNotFound(name.to_string()))
    }

    pub fn get(&self, index: usize) -> Result<&Place> {
        self.places.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.places.len(),
        })
    }

    /// Unique place names in load order
    pub fn all_names(&self) -> Vec<&str> {
        self.places
            .iter()
            .enumerate()
            .filter(|(index, place)| self.by_name.get(place.name.as_str()) == Some(index))
            .map(|(_, place)| place.name.as_str())
            .collect()
    }

    /// Similarity of `index` to every row, self-similarity included
    pub fn similarity_row(&self, index: usize) -> Result<&[f64]> {
        self.matrix.row(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.places.len(),
        })
    }

    /// Coordinate of the named place, used as the assumed user location
    pub fn location_of(&self, name: &str) -> Result<GeoPoint> {
        let index = self.find_index_by_name(name)?;
        Ok(self.places[index].location())
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places(names: &[&str]) -> Vec<Place> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Place::new(*name, "Taman", -6.6 + i as f64 * 0.01, 106.8))
            .collect()
    }

    fn identity(dim: usize) -> SimilarityMatrix {
        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        SimilarityMatrix::new(dim, data).unwrap()
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = Catalog::new(places(&["A", "B", "C"]), identity(3), DuplicatePolicy::Reject).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find_index_by_name("B").unwrap(), 1);
        assert_eq!(catalog.get(2).unwrap().name, "C");
        assert_eq!(catalog.similarity_row(1).unwrap(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::new(places(&["Kebun Raya"]), identity(1), DuplicatePolicy::Reject).unwrap();

        match catalog.find_index_by_name("kebun raya") {
            Err(Error::PlaceNotFound(name)) => assert_eq!(name, "kebun raya"),
            other => panic!("Expected PlaceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range() {
        let catalog = Catalog::new(places(&["A"]), identity(1), DuplicatePolicy::Reject).unwrap();
        assert!(matches!(catalog.get(1), Err(Error::IndexOutOfRange { index: 1, len: 1 })));
        assert!(catalog.similarity_row(5).is_err());
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = Catalog::new(places(&["A", "B"]), identity(3), DuplicatePolicy::Reject);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { places: 2, rows: 3, cols: 3 })
        ));
    }

    #[test]
    fn test_duplicates_rejected_by_default() {
        let result = Catalog::new(places(&["A", "B", "A"]), identity(3), DuplicatePolicy::default());
        match result {
            Err(Error::DuplicatePlace { name, first, second }) => {
                assert_eq!(name, "A");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("Expected DuplicatePlace, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicates_keep_first() {
        let catalog = Catalog::new(
            places(&["A", "B", "A", "C", "B"]),
            identity(5),
            DuplicatePolicy::KeepFirst,
        )
        .unwrap();

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.all_names(), vec!["A", "B", "C"]);
        assert_eq!(catalog.find_index_by_name("A").unwrap(), 0);
        assert_eq!(catalog.find_index_by_name("B").unwrap(), 1);
    }

    #[test]
    fn test_location_of() {
        let catalog = Catalog::new(places(&["A", "B"]), identity(2), DuplicatePolicy::Reject).unwrap();
        let loc = catalog.location_of("B").unwrap();
        assert!((loc.latitude - (-6.59)).abs() < 1e-9);
        assert!(catalog.location_of("Z").is_err());
    }
}

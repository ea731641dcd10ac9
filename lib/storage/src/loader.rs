use crate::csv_loader::load_places;
use crate::npy::load_matrix;
use bogortravel_core::{Catalog, DuplicatePolicy, Result, DIAGONAL_TOLERANCE, SYMMETRY_TOLERANCE};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CATALOG_FILE: &str = "df_lookup_wisata.csv";
pub const DEFAULT_MATRIX_FILE: &str = "similarity_matrix.npy";

/// Locations of the two input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub catalog: PathBuf,
    pub matrix: PathBuf,
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG_FILE),
            matrix: PathBuf::from(DEFAULT_MATRIX_FILE),
        }
    }
}

impl CatalogPaths {
    pub fn new(catalog: impl Into<PathBuf>, matrix: impl Into<PathBuf>) -> Self {
        Self {
            catalog: catalog.into(),
            matrix: matrix.into(),
        }
    }

    /// Default file names inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_CATALOG_FILE), dir.join(DEFAULT_MATRIX_FILE))
    }
}

/// Validation applied while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub duplicate_policy: DuplicatePolicy,
    /// Also require a symmetric matrix with self-similarity of 1.0
    pub strict_matrix: bool,
}

/// Everything needed to build a [`Catalog`] from disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSource {
    pub paths: CatalogPaths,
    pub options: LoadOptions,
}

impl CatalogSource {
    pub fn new(paths: CatalogPaths) -> Self {
        Self {
            paths,
            options: LoadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Read both files and assemble the catalog
    ///
    /// Nothing is returned unless both files load and agree in size.
    pub fn load(&self) -> Result<Catalog> {
        let places = load_places(&self.paths.catalog)?;
        info!("Loaded {} places from {:?}", places.len(), self.paths.catalog);

        let matrix = load_matrix(&self.paths.matrix)?;
        info!(
            "Loaded {}x{} similarity matrix from {:?}",
            matrix.dim(),
            matrix.dim(),
            self.paths.matrix
        );

        if self.options.strict_matrix {
            matrix.check_symmetric(SYMMETRY_TOLERANCE)?;
            matrix.check_self_similarity(DIAGONAL_TOLERANCE)?;
        }

        Catalog::new(places, matrix, self.options.duplicate_policy)
    }
}

/// Load a catalog with default validation
pub fn load_catalog(paths: &CatalogPaths) -> Result<Catalog> {
    CatalogSource::new(paths.clone()).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npy::save_matrix;
    use bogortravel_core::{Error, SimilarityMatrix};
    use std::io::Write;

    const HEADER: &str = "nama_tempat_wisata,kategori,latitude,longitude,rating,jumlah_rating,link";

    fn write_catalog(dir: &Path, rows: &[&str]) {
        let mut file = std::fs::File::create(dir.join(DEFAULT_CATALOG_FILE)).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
    }

    fn write_matrix(dir: &Path, rows: Vec<Vec<f64>>) {
        let matrix = SimilarityMatrix::from_rows(rows).unwrap();
        save_matrix(dir.join(DEFAULT_MATRIX_FILE), &matrix).unwrap();
    }

    #[test]
    fn test_default_paths() {
        let paths = CatalogPaths::default();
        assert_eq!(paths.catalog, PathBuf::from("df_lookup_wisata.csv"));
        assert_eq!(paths.matrix, PathBuf::from("similarity_matrix.npy"));
    }

    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path(), &["A,Taman,-6.6,106.8,4.5,10,x", "B,Museum,-6.61,106.8,4.0,20,y"]);
        write_matrix(dir.path(), vec![vec![1.0, 0.3], vec![0.3, 1.0]]);

        let catalog = load_catalog(&CatalogPaths::in_dir(dir.path())).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.similarity_row(1).unwrap(), &[0.3, 1.0]);
    }

    #[test]
    fn test_size_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path(), &["A,Taman,-6.6,106.8,4.5,10,x"]);
        write_matrix(dir.path(), vec![vec![1.0, 0.3], vec![0.3, 1.0]]);

        let result = load_catalog(&CatalogPaths::in_dir(dir.path()));
        assert!(matches!(result, Err(Error::DimensionMismatch { places: 1, rows: 2, cols: 2 })));
    }

    #[test]
    fn test_missing_matrix_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path(), &["A,Taman,-6.6,106.8,4.5,10,x"]);

        match load_catalog(&CatalogPaths::in_dir(dir.path())) {
            Err(Error::FileNotFound { path }) => assert!(path.ends_with(DEFAULT_MATRIX_FILE)),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_matrix() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path(), &["A,Taman,-6.6,106.8,4.5,10,x", "B,Museum,-6.61,106.8,4.0,20,y"]);
        write_matrix(dir.path(), vec![vec![1.0, 0.3], vec![0.9, 1.0]]);

        let lenient = CatalogSource::new(CatalogPaths::in_dir(dir.path()));
        assert!(lenient.load().is_ok());

        let strict = lenient.clone().with_options(LoadOptions {
            strict_matrix: true,
            ..LoadOptions::default()
        });
        assert!(matches!(strict.load(), Err(Error::MalformedMatrix(_))));
    }

    #[test]
    fn test_duplicate_policy() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path(), &["A,Taman,-6.6,106.8,4.5,10,x", "A,Taman,-6.6,106.8,4.5,10,x"]);
        write_matrix(dir.path(), vec![vec![1.0, 1.0], vec![1.0, 1.0]]);

        let source = CatalogSource::new(CatalogPaths::in_dir(dir.path()));
        assert!(matches!(source.load(), Err(Error::DuplicatePlace { .. })));

        let keep_first = source.with_options(LoadOptions {
            duplicate_policy: DuplicatePolicy::KeepFirst,
            strict_matrix: false,
        });
        let catalog = keep_first.load().unwrap();
        assert_eq!(catalog.all_names(), vec!["A"]);
    }
}

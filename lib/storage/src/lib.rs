pub mod csv_loader;
pub mod loader;
pub mod npy;
pub mod shared;

pub use csv_loader::{load_places, read_places};
pub use loader::{load_catalog, CatalogPaths, CatalogSource, LoadOptions, DEFAULT_CATALOG_FILE, DEFAULT_MATRIX_FILE};
pub use npy::{encode_matrix, load_matrix, parse_matrix, save_matrix};
pub use shared::SharedCatalog;

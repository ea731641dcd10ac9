use bogortravel_core::{Error, Place, Result};
use std::io::Read;
use std::path::Path;

/// Read the place table from a CSV file
///
/// The file must have a header row containing at least `nama_tempat_wisata`,
/// `kategori`, `latitude`, `longitude`, `rating`, `jumlah_rating` and `link`.
/// Other columns are ignored. Row order is kept: it defines catalog indices.
pub fn load_places<P: AsRef<Path>>(path: P) -> Result<Vec<Place>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound { path: path.to_path_buf() },
        _ => Error::Io(e),
    })?;
    read_places(file, path)
}

/// Read the place table from any reader; `path` is only used in errors
pub fn read_places<R: Read>(reader: R, path: &Path) -> Result<Vec<Place>> {
    let malformed = |message: String| Error::MalformedCatalog {
        path: path.to_path_buf(),
        message,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut places = Vec::new();
    for (row, record) in rdr.deserialize::<Place>().enumerate() {
        let place = record.map_err(|e| malformed(format!("row {}: {}", row, e)))?;
        place
            .validate()
            .map_err(|message| malformed(format!("row {}: {}", row, message)))?;
        places.push(place);
    }

    Ok(places)
}

//! NumPy `.npy` reader and writer for square similarity matrices
//!
//! Supports format versions 1.0, 2.0 and 3.0 with 2-D arrays of `f4` or
//! `f8` in either byte order. Fortran-ordered arrays are transposed into
//! row-major order on load. Scores are kept as `f64` in memory; `f4`
//! input widens exactly.

use bogortravel_core::{Error, Result, SimilarityMatrix};
use std::path::Path;

const MAGIC: &[u8; 6] = b"\x93NUMPY";
/// Header blocks are padded so the data starts on this alignment
const HEADER_ALIGN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endian {
    Little,
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dtype {
    F32(Endian),
    F64(Endian),
}

impl Dtype {
    fn parse(descr: &str) -> Result<Self> {
        match descr {
            "<f4" => Ok(Dtype::F32(Endian::Little)),
            ">f4" => Ok(Dtype::F32(Endian::Big)),
            "<f8" => Ok(Dtype::F64(Endian::Little)),
            ">f8" => Ok(Dtype::F64(Endian::Big)),
            other => Err(malformed(format!("unsupported dtype {:?}, expected f4 or f8", other))),
        }
    }

    fn size(&self) -> usize {
        match self {
            Dtype::F32(_) => 4,
            Dtype::F64(_) => 8,
        }
    }

    fn decode(&self, chunk: &[u8]) -> f64 {
        match *self {
            Dtype::F32(endian) => {
                let bytes = [chunk[0], chunk[1], chunk[2], chunk[3]];
                let v = match endian {
                    Endian::Little => f32::from_le_bytes(bytes),
                    Endian::Big => f32::from_be_bytes(bytes),
                };
                f64::from(v)
            }
            Dtype::F64(endian) => {
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(chunk);
                match endian {
                    Endian::Little => f64::from_le_bytes(bytes),
                    Endian::Big => f64::from_be_bytes(bytes),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Header {
    dtype: Dtype,
    fortran_order: bool,
    shape: Vec<usize>,
}

fn malformed(message: String) -> Error {
    Error::MalformedMatrix(message)
}

/// Load a square similarity matrix from an `.npy` file
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SimilarityMatrix> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound { path: path.to_path_buf() },
        _ => Error::Io(e),
    })?;
    parse_matrix(&bytes).map_err(|e| match e {
        Error::MalformedMatrix(message) => {
            Error::MalformedMatrix(format!("{}: {}", path.display(), message))
        }
        other => other,
    })
}

/// Decode a square similarity matrix from `.npy` bytes
pub fn parse_matrix(bytes: &[u8]) -> Result<SimilarityMatrix> {
    let (header, data_start) = read_header(bytes)?;

    let (rows, cols) = match header.shape.as_slice() {
        [rows, cols] => (*rows, *cols),
        other => {
            return Err(malformed(format!("expected a 2-D array, got shape {:?}", other)));
        }
    };
    if rows != cols {
        return Err(malformed(format!("matrix is {}x{}, expected square", rows, cols)));
    }

    let count = rows
        .checked_mul(cols)
        .ok_or_else(|| malformed(format!("shape ({}, {}) overflows", rows, cols)))?;
    let size = header.dtype.size();
    let expected_bytes = count
        .checked_mul(size)
        .ok_or_else(|| malformed(format!("shape ({}, {}) overflows", rows, cols)))?;
    let data = &bytes[data_start..];
    if data.len() != expected_bytes {
        return Err(malformed(format!(
            "expected {} data bytes for shape ({}, {}), found {}",
            expected_bytes,
            rows,
            cols,
            data.len()
        )));
    }

    let mut values: Vec<f64> = data.chunks_exact(size).map(|c| header.dtype.decode(c)).collect();
    if header.fortran_order {
        values = transpose(&values, rows);
    }

    SimilarityMatrix::new(rows, values)
}

fn transpose(values: &[f64], dim: usize) -> Vec<f64> {
    let mut out = vec![0.0f64; values.len()];
    for i in 0..dim {
        for j in 0..dim {
            out[i * dim + j] = values[j * dim + i];
        }
    }
    out
}

fn read_header(bytes: &[u8]) -> Result<(Header, usize)> {
    if bytes.len() < 10 || &bytes[..6] != MAGIC {
        return Err(malformed("missing NumPy magic string".to_string()));
    }

    let major = bytes[6];
    let (header_len, prefix) = match major {
        1 => (u16::from_le_bytes([bytes[8], bytes[9]]) as usize, 10),
        2 | 3 => {
            if bytes.len() < 12 {
                return Err(malformed("truncated header".to_string()));
            }
            let len = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
            (len as usize, 12)
        }
        other => return Err(malformed(format!("unsupported format version {}", other))),
    };

    let end = prefix + header_len;
    if bytes.len() < end {
        return Err(malformed("truncated header".to_string()));
    }
    let text = std::str::from_utf8(&bytes[prefix..end])
        .map_err(|_| malformed("header is not valid text".to_string()))?;

    Ok((parse_header_dict(text)?, end))
}

/// Parse the Python dict literal, e.g.
/// `{'descr': '<f8', 'fortran_order': False, 'shape': (3, 3), }`
fn parse_header_dict(text: &str) -> Result<Header> {
    let descr = dict_value(text, "descr")?;
    let descr = descr
        .strip_prefix('\'')
        .and_then(|s| s.split('\'').next())
        .ok_or_else(|| malformed(format!("bad descr in header {:?}", text)))?;
    let dtype = Dtype::parse(descr)?;

    let fortran_order = match dict_value(text, "fortran_order")? {
        v if v.starts_with("True") => true,
        v if v.starts_with("False") => false,
        _ => return Err(malformed(format!("bad fortran_order in header {:?}", text))),
    };

    let shape_text = dict_value(text, "shape")?;
    let inner = shape_text
        .strip_prefix('(')
        .and_then(|s| s.split(')').next())
        .ok_or_else(|| malformed(format!("bad shape in header {:?}", text)))?;
    let shape = inner
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.trim_end_matches('L')
                .parse::<usize>()
                .map_err(|_| malformed(format!("bad shape dimension {:?}", s)))
        })
        .collect::<Result<Vec<usize>>>()?;

    Ok(Header { dtype, fortran_order, shape })
}

/// Text following `'key':`, with leading whitespace removed
fn dict_value<'a>(text: &'a str, key: &str) -> Result<&'a str> {
    let quoted = format!("'{}'", key);
    let start = text
        .find(&quoted)
        .ok_or_else(|| malformed(format!("header has no {:?} entry", key)))?;
    let rest = text[start + quoted.len()..].trim_start();
    rest.strip_prefix(':')
        .map(str::trim_start)
        .ok_or_else(|| malformed(format!("bad {:?} entry in header", key)))
}

/// Encode a matrix as a version 1.0 `.npy` array of little-endian `f8`
pub fn encode_matrix(matrix: &SimilarityMatrix) -> Vec<u8> {
    let dim = matrix.dim();
    let mut header = format!(
        "{{'descr': '<f8', 'fortran_order': False, 'shape': ({}, {}), }}",
        dim, dim
    );
    // magic + version + u16 length + header + trailing newline
    let unpadded = MAGIC.len() + 2 + 2 + header.len() + 1;
    let padding = (HEADER_ALIGN - unpadded % HEADER_ALIGN) % HEADER_ALIGN;
    header.push_str(&" ".repeat(padding));
    header.push('\n');

    let mut out = Vec::with_capacity(unpadded + padding + matrix.as_slice().len() * 8);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&[1, 0]);
    out.extend_from_slice(&(header.len() as u16).to_le_bytes());
    out.extend_from_slice(header.as_bytes());
    for v in matrix.as_slice() {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

/// Write a matrix to an `.npy` file
pub fn save_matrix<P: AsRef<Path>>(path: P, matrix: &SimilarityMatrix) -> Result<()> {
    std::fs::write(path, encode_matrix(matrix))?;
    Ok(())
}

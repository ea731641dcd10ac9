use crate::{Error, Result};

/// Tolerance for [`SimilarityMatrix::check_symmetric`]
pub const SYMMETRY_TOLERANCE: f64 = 1e-4;
/// Tolerance for [`SimilarityMatrix::check_self_similarity`]
pub const DIAGONAL_TOLERANCE: f64 = 1e-3;

/// Dense square matrix of pairwise similarity scores, stored row-major
///
/// `get(i, j)` is the similarity between catalog rows `i` and `j`.
/// Construction guarantees the matrix is square and every score is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build a `dim` x `dim` matrix from row-major scores
    pub fn new(dim: usize, data: Vec<f64>) -> Result<Self> {
        let expected = dim.checked_mul(dim).ok_or_else(|| {
            Error::MalformedMatrix(format!("dimension {} overflows", dim))
        })?;
        if data.len() != expected {
            return Err(Error::MalformedMatrix(format!(
                "expected {} scores for a {}x{} matrix, got {}",
                expected,
                dim,
                dim,
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(Error::MalformedMatrix(format!(
                "non-finite score {} at ({}, {})",
                data[pos],
                pos / dim,
                pos % dim
            )));
        }
        Ok(Self { dim, data })
    }

    /// Build a matrix from nested rows, failing if it is not square
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(Error::MalformedMatrix(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    dim
                )));
            }
            data.extend(row);
        }
        Self::new(dim, data)
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.dim {
            return None;
        }
        let start = index * self.dim;
        Some(&self.data[start..start + self.dim])
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.dim || j >= self.dim {
            return None;
        }
        Some(self.data[i * self.dim + j])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Fail if any `(i, j)` and `(j, i)` differ by more than `tolerance`
    pub fn check_symmetric(&self, tolerance: f64) -> Result<()> {
        for i in 0..self.dim {
            for j in (i + 1)..self.dim {
                let a = self.data[i * self.dim + j];
                let b = self.data[j * self.dim + i];
                if (a - b).abs() > tolerance {
                    return Err(Error::MalformedMatrix(format!(
                        "not symmetric: ({}, {}) = {} but ({}, {}) = {}",
                        i, j, a, j, i, b
                    )));
                }
            }
        }
        Ok(())
    }

    /// Fail if any diagonal score is further than `tolerance` from 1.0
    pub fn check_self_similarity(&self, tolerance: f64) -> Result<()> {
        for i in 0..self.dim {
            let v = self.data[i * self.dim + i];
            if (v - 1.0).abs() > tolerance {
                return Err(Error::MalformedMatrix(format!(
                    "self-similarity of row {} is {}, expected 1.0",
                    i, v
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimilarityMatrix {
        SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.9, 0.2],
            vec![0.9, 1.0, 0.4],
            vec![0.2, 0.4, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_rows_and_cells() {
        let m = sample();
        assert_eq!(m.dim(), 3);
        assert_eq!(m.row(1), Some(&[0.9, 1.0, 0.4][..]));
        assert_eq!(m.get(2, 1), Some(0.4));
        assert_eq!(m.row(3), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn test_not_square_rejected() {
        let result = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5]]);
        assert!(matches!(result, Err(Error::MalformedMatrix(_))));

        let result = SimilarityMatrix::new(2, vec![1.0, 0.5, 0.5]);
        assert!(matches!(result, Err(Error::MalformedMatrix(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = SimilarityMatrix::new(2, vec![1.0, f64::NAN, 0.5, 1.0]);
        match result {
            Err(Error::MalformedMatrix(msg)) => assert!(msg.contains("(0, 1)"), "{}", msg),
            other => panic!("Expected MalformedMatrix, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_matrix() {
        let m = SimilarityMatrix::new(0, Vec::new()).unwrap();
        assert_eq!(m.dim(), 0);
        assert!(m.row(0).is_none());
    }

    #[test]
    fn test_symmetry_check() {
        assert!(sample().check_symmetric(SYMMETRY_TOLERANCE).is_ok());

        let skewed = SimilarityMatrix::from_rows(vec![vec![1.0, 0.9], vec![0.3, 1.0]]).unwrap();
        assert!(skewed.check_symmetric(SYMMETRY_TOLERANCE).is_err());
    }

    #[test]
    fn test_self_similarity_check() {
        assert!(sample().check_self_similarity(DIAGONAL_TOLERANCE).is_ok());

        let off = SimilarityMatrix::from_rows(vec![vec![0.5, 0.1], vec![0.1, 1.0]]).unwrap();
        assert!(off.check_self_similarity(DIAGONAL_TOLERANCE).is_err());
    }
}

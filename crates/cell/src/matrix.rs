//! Weight storage for the W and U projections
//!
//! All matrices borrow caller-owned weights; nothing here copies or allocates.

use fastgrnn_fixed_point::{Index, Q15};

use crate::error::ConfigError;

/// Row-major dense matrix
#[derive(Debug, Clone, Copy)]
pub struct DenseMatrix<'a> {
    data: &'a [Q15],
    rows: usize,
    cols: usize,
}

impl<'a> DenseMatrix<'a> {
    /// Checks that `data` holds exactly `rows * cols` values
    pub fn new(data: &'a [Q15], rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if data.len() != rows * cols {
            return Err(ConfigError::DimensionMismatch {
                what: "dense matrix",
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Row-major values
    pub fn data(&self) -> &'a [Q15] {
        self.data
    }

    /// Output length
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Input length
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<Q15> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }
}

/// Column-compressed sparse matrix.
///
/// `row_ids` lists, column by column, the 1-based rows holding a non-zero
/// value, each column closed by a `0` sentinel. `values` holds the matching
/// non-zero entries in the same order, without sentinels.
#[derive(Debug, Clone, Copy)]
pub struct SparseMatrix<'a> {
    row_ids: &'a [Index],
    values: &'a [Q15],
    rows: usize,
    cols: usize,
}

impl<'a> SparseMatrix<'a> {
    /// Checks the sentinel count, id range, and value count
    pub fn new(
        row_ids: &'a [Index],
        values: &'a [Q15],
        rows: usize,
        cols: usize,
    ) -> Result<Self, ConfigError> {
        let sentinels = row_ids.iter().filter(|&&id| id == 0).count();
        if sentinels != cols {
            return Err(ConfigError::DimensionMismatch {
                what: "sparse column count",
                expected: cols,
                got: sentinels,
            });
        }
        if cols > 0 && row_ids.last() != Some(&0) {
            return Err(ConfigError::MalformedSparse("last column is not terminated"));
        }

        let nnz = row_ids.len() - sentinels;
        if nnz != values.len() {
            return Err(ConfigError::DimensionMismatch {
                what: "sparse values",
                expected: nnz,
                got: values.len(),
            });
        }
        if row_ids.iter().any(|&id| usize::from(id) > rows) {
            return Err(ConfigError::MalformedSparse("row index out of range"));
        }

        Ok(Self {
            row_ids,
            values,
            rows,
            cols,
        })
    }

    /// 1-based row ids, column by column, `0` ends a column
    pub fn row_ids(&self) -> &'a [Index] {
        self.row_ids
    }

    /// Non-zero values matching `row_ids` minus the sentinels
    pub fn values(&self) -> &'a [Q15] {
        self.values
    }

    /// Output length
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Input length
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }
}

/// A full-rank projection matrix, dense or sparse
#[derive(Debug, Clone, Copy)]
pub enum FullRank<'a> {
    Dense(DenseMatrix<'a>),
    Sparse(SparseMatrix<'a>),
}

impl<'a> From<DenseMatrix<'a>> for FullRank<'a> {
    fn from(matrix: DenseMatrix<'a>) -> Self {
        Self::Dense(matrix)
    }
}

impl<'a> From<SparseMatrix<'a>> for FullRank<'a> {
    fn from(matrix: SparseMatrix<'a>) -> Self {
        Self::Sparse(matrix)
    }
}

/// `M = first · second`, never materialized.
///
/// `first` is `rows × rank`, `second` is `rank × cols`.
#[derive(Debug, Clone, Copy)]
pub struct LowRank<'a> {
    first: DenseMatrix<'a>,
    second: DenseMatrix<'a>,
}

impl<'a> LowRank<'a> {
    /// `first` is `rows x rank` and `second` is `rank x cols`
    pub fn new(first: DenseMatrix<'a>, second: DenseMatrix<'a>) -> Result<Self, ConfigError> {
        if first.cols() != second.rows() {
            return Err(ConfigError::DimensionMismatch {
                what: "low-rank inner dimension",
                expected: first.cols(),
                got: second.rows(),
            });
        }
        Ok(Self { first, second })
    }

    /// Outer factor
    pub fn first(&self) -> &DenseMatrix<'a> {
        &self.first
    }

    /// Inner factor, applied to the vector first
    pub fn second(&self) -> &DenseMatrix<'a> {
        &self.second
    }

    /// Inner dimension shared by the factors
    pub fn rank(&self) -> usize {
        self.first.cols()
    }
}

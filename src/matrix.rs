//! Square integer matrix with a naive O(n^3) product.

use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    SizeMismatch { left: usize, right: usize },
    NotSquare { rows: usize, row: usize, len: usize },
    IndexOutOfBounds { i: usize, j: usize, size: usize },
    /// Entry (i, j) of a product does not fit in an i64
    Overflow { i: usize, j: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::SizeMismatch { left, right } => {
                write!(f, "cannot multiply {left}x{left} by {right}x{right}")
            }
            MatrixError::NotSquare { rows, row, len } => {
                write!(f, "row {row} has {len} entries, expected {rows}")
            }
            MatrixError::IndexOutOfBounds { i, j, size } => {
                write!(f, "index ({i}, {j}) out of bounds for {size}x{size} matrix")
            }
            MatrixError::Overflow { i, j } => {
                write!(f, "product entry ({i}, {j}) overflows i64")
            }
        }
    }
}

impl Error for MatrixError {}

/// n x n matrix stored row-major in one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    size: usize,
    data: Vec<i64>,
}

impl SquareMatrix {
    /// Zero matrix
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0; size * size],
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Self::new(size);
        for i in 0..size {
            m[(i, i)] = 1;
        }
        m
    }

    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != size {
                return Err(MatrixError::NotSquare { rows: size, row, len: r.len() });
            }
            data.extend(r);
        }
        Ok(Self { size, data })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<i64> {
        if i < self.size && j < self.size {
            Some(self.data[i * self.size + j])
        } else {
            None
        }
    }

    pub fn set(&mut self, i: usize, j: usize, value: i64) -> Result<(), MatrixError> {
        if i >= self.size || j >= self.size {
            return Err(MatrixError::IndexOutOfBounds { i, j, size: self.size });
        }
        self.data[i * self.size + j] = value;
        Ok(())
    }

    /// self * other, failing instead of wrapping when an entry overflows
    pub fn multiply(&self, other: &SquareMatrix) -> Result<SquareMatrix, MatrixError> {
        if self.size != other.size {
            return Err(MatrixError::SizeMismatch {
                left: self.size,
                right: other.size,
            });
        }

        let n = self.size;
        let mut out = SquareMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let mut sum: i64 = 0;
                for k in 0..n {
                    sum = self[(i, k)]
                        .checked_mul(other[(k, j)])
                        .and_then(|p| sum.checked_add(p))
                        .ok_or(MatrixError::Overflow { i, j })?;
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }
}

/// Row access, `m[i][j]`
impl Index<usize> for SquareMatrix {
    type Output = [i64];

    fn index(&self, i: usize) -> &[i64] {
        assert!(i < self.size, "row {i} out of bounds for size {}", self.size);
        &self.data[i * self.size..(i + 1) * self.size]
    }
}

impl IndexMut<usize> for SquareMatrix {
    fn index_mut(&mut self, i: usize) -> &mut [i64] {
        assert!(i < self.size, "row {i} out of bounds for size {}", self.size);
        let n = self.size;
        &mut self.data[i * n..(i + 1) * n]
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = i64;

    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        &self[i][j]
    }
}

impl IndexMut<(usize, usize)> for SquareMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i64 {
        &mut self[i][j]
    }
}

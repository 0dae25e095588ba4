use crate::error::{NnError, Result};

/// Dense row-major matrix of `f64`.
///
/// Every operation allocates and returns a new matrix; operands are never
/// mutated. Shape checks fail with `NnError::DimensionMismatch` instead of
/// truncating or broadcasting.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    pub fn ones_like(other: &Matrix) -> Matrix {
        Matrix {
            rows: other.rows,
            cols: other.cols,
            data: vec![vec![1.0; other.cols]; other.rows],
        }
    }

    /// Builds a matrix from row data. All rows must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);

        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(NnError::mismatch("from_data", (1, cols), (1, bad.len())));
        }

        Ok(Matrix { rows, cols, data })
    }

    /// A `rows x cols` matrix filled element by element, row by row.
    pub fn from_fn<F>(rows: usize, cols: usize, mut functor: F) -> Matrix
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = functor(i, j);
            }
        }

        res
    }

    /// A `len x 1` column vector.
    pub fn column(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row_data(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Flattens the matrix in row-major order. For a column vector this is
    /// just its values.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().flatten().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flatten().copied()
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Matrix product `self · rhs`. Requires `self.cols == rhs.rows`.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(NnError::mismatch("dot", self.shape(), rhs.shape()));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("hadamard", rhs, |a, b| a * b)
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("add", rhs, |a, b| a + b)
    }

    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("sub", rhs, |a, b| a - b)
    }

    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        self.map_indexed(|_, _, x| functor(x))
    }

    /// Like `map`, but the functor also receives the element's row and column.
    pub fn map_indexed<F>(&self, functor: F) -> Matrix
    where
        F: Fn(usize, usize, f64) -> f64,
    {
        let data = self.data.iter().enumerate()
            .map(|(i, row)| row.iter().enumerate().map(|(j, &x)| functor(i, j, x)).collect())
            .collect();

        Matrix { rows: self.rows, cols: self.cols, data }
    }

    fn zip_with<F>(&self, op: &'static str, rhs: &Matrix, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(NnError::mismatch(op, self.shape(), rhs.shape()));
        }

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(&a, &b)| functor(a, b)).collect()
            })
            .collect();

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }
}

//! Dense matrix arithmetic over f64

use crate::error::{KataError, Result};

/// Row-major dense matrix. Construction rejects ragged rows; dimension
/// mismatches in arithmetic surface as [`KataError::Matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn new(data: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(first) = data.first() {
            let cols = first.len();
            if data.iter().any(|row| row.len() != cols) {
                return Err(KataError::Matrix("rows have unequal lengths".to_string()));
            }
        }
        Ok(Matrix { data })
    }

    /// n x n identity
    pub fn identity(n: usize) -> Self {
        let data = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Matrix { data }
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Matrix product, O(n^3)
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(KataError::Matrix(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }

        let data = (0..self.rows())
            .map(|i| {
                (0..other.cols())
                    .map(|j| {
                        (0..self.cols())
                            .map(|k| self.data[i][k] * other.data[k][j])
                            .sum()
                    })
                    .collect()
            })
            .collect();

        Ok(Matrix { data })
    }

    /// Element-wise sum
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(KataError::Matrix(format!(
                "cannot add {}x{} and {}x{}",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| x + y).collect())
            .collect();

        Ok(Matrix { data })
    }

    pub fn scalar_multiply(&self, scalar: f64) -> Matrix {
        let data = self
            .data
            .iter()
            .map(|row| row.iter().map(|x| x * scalar).collect())
            .collect();
        Matrix { data }
    }

    pub fn transpose(&self) -> Matrix {
        let data = (0..self.cols())
            .map(|j| (0..self.rows()).map(|i| self.data[i][j]).collect())
            .collect();
        Matrix { data }
    }

    /// Raise a square matrix to a non-negative power by squaring
    pub fn power(&self, n: u32) -> Result<Matrix> {
        if !self.is_square() {
            return Err(KataError::Matrix(format!(
                "cannot raise non-square {}x{} matrix to a power",
                self.rows(),
                self.cols()
            )));
        }

        match n {
            0 => Ok(Matrix::identity(self.rows())),
            1 => Ok(self.clone()),
            n if n % 2 == 0 => {
                let half = self.power(n / 2)?;
                half.multiply(&half)
            }
            n => self.multiply(&self.power(n - 1)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> Matrix {
        Matrix::new(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        assert!(Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn test_multiply_example() {
        let a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = matrix(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product, matrix(&[&[58.0, 64.0], &[139.0, 154.0]]));
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = matrix(&[&[1.0, 2.0]]);
        let b = matrix(&[&[1.0, 2.0]]);
        assert!(a.multiply(&b).is_err());
    }

    #[test]
    fn test_add_and_scalar_multiply() {
        let c = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let d = matrix(&[&[5.0, 6.0], &[7.0, 8.0]]);
        assert_eq!(c.add(&d).unwrap(), matrix(&[&[6.0, 8.0], &[10.0, 12.0]]));
        assert_eq!(
            c.scalar_multiply(2.0),
            matrix(&[&[2.0, 4.0], &[6.0, 8.0]])
        );
        assert!(c.add(&matrix(&[&[1.0]])).is_err());
    }

    #[test]
    fn test_transpose() {
        let a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(
            a.transpose(),
            matrix(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]])
        );
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_identity_and_power() {
        let c = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(c.power(0).unwrap(), Matrix::identity(2));
        assert_eq!(c.power(1).unwrap(), c);
        assert_eq!(c.power(2).unwrap(), c.multiply(&c).unwrap());
        assert_eq!(
            c.power(3).unwrap(),
            c.multiply(&c).unwrap().multiply(&c).unwrap()
        );
        assert!(matrix(&[&[1.0, 2.0]]).power(2).is_err());
    }

    #[test]
    fn test_identity_is_multiplicative_unit() {
        let c = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(c.multiply(&Matrix::identity(2)).unwrap(), c);
        assert_eq!(Matrix::identity(2).multiply(&c).unwrap(), c);
    }
}

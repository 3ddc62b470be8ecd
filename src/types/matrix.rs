//! Dense 5x5 matrix for flux Jacobians.
//!
//! Row i is flux component i, column j is the conserved-state component j
//! being differentiated. The boundary Jacobians never grow beyond 5x5, so a
//! fixed-size array beats a general dense-matrix type here.

use std::ops::{Index, IndexMut, Mul};

/// A 5x5 row-major matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix5 {
    data: [[f64; 5]; 5],
}

impl Matrix5 {
    /// Zero matrix.
    #[inline(always)]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..5 {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Build from explicit rows.
    #[inline(always)]
    pub fn from_rows(rows: [[f64; 5]; 5]) -> Self {
        Self { data: rows }
    }

    /// Matrix-matrix product `self * other`.
    pub fn matmul(&self, other: &Matrix5) -> Matrix5 {
        let mut out = Matrix5::zeros();
        for i in 0..5 {
            for k in 0..5 {
                let a = self.data[i][k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..5 {
                    out.data[i][j] += a * other.data[k][j];
                }
            }
        }
        out
    }

    /// Matrix-vector product.
    pub fn mul_vec(&self, v: &[f64; 5]) -> [f64; 5] {
        let mut out = [0.0; 5];
        for i in 0..5 {
            for j in 0..5 {
                out[i] += self.data[i][j] * v[j];
            }
        }
        out
    }

    /// Largest absolute entry, useful for scaling tolerances.
    pub fn max_abs(&self) -> f64 {
        self.data
            .iter()
            .flatten()
            .fold(0.0_f64, |m, &x| m.max(x.abs()))
    }
}

impl Index<(usize, usize)> for Matrix5 {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix5 {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i][j]
    }
}

impl Mul for Matrix5 {
    type Output = Matrix5;

    fn mul(self, other: Matrix5) -> Matrix5 {
        self.matmul(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matmul() {
        let mut a = Matrix5::zeros();
        for i in 0..5 {
            for j in 0..5 {
                a[(i, j)] = (i * 5 + j) as f64;
            }
        }
        let id = Matrix5::identity();
        assert_eq!(a.matmul(&id), a);
        assert_eq!(id.matmul(&a), a);
    }

    #[test]
    fn test_matmul_known_product() {
        let mut a = Matrix5::identity();
        a[(0, 1)] = 2.0; // row op: r0 += 2 r1
        let mut b = Matrix5::zeros();
        b[(1, 3)] = 4.0;
        let c = a.matmul(&b);
        assert_eq!(c[(0, 3)], 8.0);
        assert_eq!(c[(1, 3)], 4.0);
    }

    #[test]
    fn test_mul_vec() {
        let id = Matrix5::identity();
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(id.mul_vec(&v), v);
    }
}

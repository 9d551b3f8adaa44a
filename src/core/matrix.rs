//! Small row-major matrix, mainly for building 2D rotations.
//!
//! Not used by the simulation passes.

use crate::error::EngineError;
use crate::rigid_body::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    elements: Vec<Vec<f64>>,
}

impl Matrix {
    /// Build from rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, EngineError> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != columns) {
            return Err(EngineError::InvalidDimension {
                op: "from_rows",
                rows: rows.len(),
                columns,
                rhs: None,
            });
        }
        Ok(Self { elements: rows })
    }

    pub fn new_2x2(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { elements: vec![vec![a, b], vec![c, d]] }
    }

    /// Counter-clockwise rotation by `theta` radians
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new_2x2(cos, -sin, sin, cos)
    }

    pub fn rows(&self) -> usize {
        self.elements.len()
    }

    pub fn columns(&self) -> usize {
        self.elements.first().map_or(0, Vec::len)
    }

    pub fn is_dimension(&self, rows: usize, columns: usize) -> bool {
        self.rows() == rows && self.columns() == columns
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.elements.get(i).map(Vec::as_slice)
    }

    pub fn column(&self, i: usize) -> Option<Vec<f64>> {
        if i >= self.columns() {
            return None;
        }
        Some(self.elements.iter().map(|r| r[i]).collect())
    }

    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        self.elements.get(r)?.get(c).copied()
    }

    pub fn contents(&self) -> &[Vec<f64>] {
        &self.elements
    }

    /// Map every element with its `(row, column)` index
    pub fn each(&self, mut f: impl FnMut(f64, (usize, usize)) -> f64) -> Self {
        let elements = self
            .elements
            .iter()
            .enumerate()
            .map(|(ir, row)| row.iter().enumerate().map(|(ic, &el)| f(el, (ir, ic))).collect())
            .collect();
        Self { elements }
    }

    pub fn scale(&self, lambda: f64) -> Self {
        self.each(|el, _| el * lambda)
    }

    pub fn transpose(&self) -> Self {
        let elements = (0..self.columns())
            .map(|c| self.elements.iter().map(|r| r[c]).collect())
            .collect();
        Self { elements }
    }

    pub fn det(&self) -> Result<f64, EngineError> {
        self.require_2x2("det")?;
        let m = &self.elements;
        Ok(m[0][0] * m[1][1] - m[0][1] * m[1][0])
    }

    /// 2x2 inverse. A singular matrix yields non-finite entries.
    pub fn inverse(&self) -> Result<Self, EngineError> {
        let det = self.det()?;
        let m = &self.elements;
        Ok(Self::new_2x2(m[1][1], -m[0][1], -m[1][0], m[0][0]).scale(1.0 / det))
    }

    /// Matrix product `self * rhs`
    pub fn multiply(&self, rhs: &Matrix) -> Result<Self, EngineError> {
        if self.columns() != rhs.rows() {
            return Err(EngineError::InvalidDimension {
                op: "multiply",
                rows: self.rows(),
                columns: self.columns(),
                rhs: Some((rhs.rows(), rhs.columns())),
            });
        }
        let elements = self
            .elements
            .iter()
            .map(|row| {
                (0..rhs.columns())
                    .map(|c| row.iter().zip(rhs.elements.iter()).map(|(a, r)| a * r[c]).sum::<f64>())
                    .collect()
            })
            .collect();
        Ok(Self { elements })
    }

    /// Transform a vector by a 2x2 matrix
    pub fn apply(&self, v: Vec2) -> Result<Vec2, EngineError> {
        self.require_2x2("apply")?;
        let m = &self.elements;
        Ok(Vec2::new(m[0][0] * v.x + m[0][1] * v.y, m[1][0] * v.x + m[1][1] * v.y))
    }

    fn require_2x2(&self, op: &'static str) -> Result<(), EngineError> {
        if self.is_dimension(2, 2) {
            Ok(())
        } else {
            Err(EngineError::InvalidDimension {
                op,
                rows: self.rows(),
                columns: self.columns(),
                rhs: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx(a: &Matrix, b: &Matrix) -> bool {
        a.is_dimension(b.rows(), b.columns())
            && a.contents()
                .iter()
                .flatten()
                .zip(b.contents().iter().flatten())
                .all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn accessors_follow_row_major_layout() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(m.column(2), Some(vec![3.0, 6.0]));
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.column(3), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn det_and_inverse_of_2x2() {
        let m = Matrix::new_2x2(4.0, 7.0, 2.0, 6.0);
        assert!((m.det().unwrap() - 10.0).abs() < EPS);
        let product = m.multiply(&m.inverse().unwrap()).unwrap();
        assert!(approx(&product, &Matrix::new_2x2(1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn det_requires_2x2() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(
            m.det(),
            Err(EngineError::InvalidDimension { op: "det", rows: 1, columns: 3, rhs: None })
        );
        assert!(m.inverse().is_err());
    }

    #[test]
    fn multiply_non_square() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c, Matrix::new_2x2(58.0, 64.0, 139.0, 154.0));
    }

    #[test]
    fn multiply_mismatch_reports_both_shapes() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::new_2x2(1.0, 0.0, 0.0, 1.0);
        let err = a.multiply(&b).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDimension { op: "multiply", rows: 2, columns: 3, rhs: Some((2, 2)) }
        );
        assert_eq!(err.to_string(), "multiply is undefined for 2x3 and 2x2 matrices");
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = a.transpose();
        assert!(t.is_dimension(3, 2));
        assert_eq!(t.row(0), Some(&[1.0, 4.0][..]));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let r = Matrix::rotation(0.7);
        assert!((r.det().unwrap() - 1.0).abs() < EPS);
        assert!(approx(&r.inverse().unwrap(), &r.transpose()));
        assert!(approx(
            &Matrix::rotation(0.3).multiply(&Matrix::rotation(0.4)).unwrap(),
            &r
        ));
    }

    #[test]
    fn rotation_applied_to_vector() {
        let v = Matrix::rotation(std::f64::consts::FRAC_PI_2)
            .apply(Vec2::new(1.0, 0.0))
            .unwrap();
        assert!(v.x.abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);
    }

    #[test]
    fn each_passes_indices() {
        let m = Matrix::new_2x2(0.0, 0.0, 0.0, 0.0).each(|_, (r, c)| (r * 10 + c) as f64);
        assert_eq!(m, Matrix::new_2x2(0.0, 1.0, 10.0, 11.0));
        assert_eq!(m.scale(2.0), Matrix::new_2x2(0.0, 2.0, 20.0, 22.0));
    }
}

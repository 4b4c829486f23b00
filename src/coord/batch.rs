//! Batch coordinate substrate — one axis column of N points, backed by
//! `ndarray`.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use ndarray::{Array1, Zip};

use crate::coord::Coordinate;

/// A column of N coordinate values.
///
/// All [`Coordinate`] operations apply elementwise and independently per
/// index, so a batch of N points computes exactly what N scalar points would.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch(Array1<f64>);

impl Batch {
    pub fn new(values: Array1<f64>) -> Self {
        Self(values)
    }

    pub fn from_vec(values: Vec<f64>) -> Self {
        Self(Array1::from_vec(values))
    }

    /// `n` values evenly spaced over `[start, end]`, endpoints included.
    pub fn linspace(start: f64, end: f64, n: usize) -> Self {
        Self(Array1::linspace(start, end, n))
    }

    pub fn zeros(n: usize) -> Self {
        Self(Array1::zeros(n))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.0
    }
}

impl From<Vec<f64>> for Batch {
    fn from(values: Vec<f64>) -> Self {
        Self::from_vec(values)
    }
}

impl Add for Batch {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Batch {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Batch {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Batch {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Batch {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add<f64> for Batch {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub<f64> for Batch {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self(self.0 - rhs)
    }
}

impl Mul<f64> for Batch {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Batch {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl AddAssign<f64> for Batch {
    fn add_assign(&mut self, rhs: f64) {
        self.0 += rhs;
    }
}

impl SubAssign<f64> for Batch {
    fn sub_assign(&mut self, rhs: f64) {
        self.0 -= rhs;
    }
}

impl Coordinate for Batch {
    fn fill(&self, value: f64) -> Self {
        Self(Array1::from_elem(self.0.len(), value))
    }

    fn sin(&self) -> Self {
        Self(self.0.mapv(f64::sin))
    }

    fn cos(&self) -> Self {
        Self(self.0.mapv(f64::cos))
    }

    fn atan(&self) -> Self {
        Self(self.0.mapv(f64::atan))
    }

    fn sqrt(&self) -> Self {
        Self(self.0.mapv(f64::sqrt))
    }

    fn recip(&self) -> Self {
        Self(self.0.mapv(f64::recip))
    }

    fn powi(&self, n: i32) -> Self {
        Self(self.0.mapv(|v| v.powi(n)))
    }

    fn hypot(&self, other: &Self) -> Self {
        Self(Zip::from(&self.0).and(&other.0).map_collect(|&a, &b| a.hypot(b)))
    }

    fn atan2(&self, x: &Self) -> Self {
        Self(Zip::from(&self.0).and(&x.0).map_collect(|&y, &x| y.atan2(x)))
    }

    fn select<F>(&self, predicate: F, if_true: Self, if_false: Self) -> Self
    where
        F: Fn(f64) -> bool,
    {
        Self(
            Zip::from(&self.0)
                .and(&if_true.0)
                .and(&if_false.0)
                .map_collect(|&cond, &t, &f| if predicate(cond) { t } else { f }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_elementwise_ops_match_scalar() {
        let values = [0.1, -0.5, 1.2, 3.4];
        let batch = Batch::from(values.to_vec());

        let result = (batch.clone() * 2.0 + 1.0).sin();
        for (i, &v) in values.iter().enumerate() {
            assert_relative_eq!(result.values()[i], (v * 2.0 + 1.0).sin());
        }
    }

    #[test]
    fn test_hypot_atan2_elementwise() {
        let y = Batch::from_vec(vec![3.0, 1.0, -2.0]);
        let x = Batch::from_vec(vec![4.0, 0.0, -2.0]);

        let h = y.hypot(&x);
        let a = y.atan2(&x);
        for i in 0..3 {
            assert_relative_eq!(h.values()[i], y.values()[i].hypot(x.values()[i]));
            assert_relative_eq!(a.values()[i], y.values()[i].atan2(x.values()[i]));
        }
    }

    #[test]
    fn test_select_elementwise() {
        let cond = Batch::from_vec(vec![0.0, 2.0, 0.0]);
        let ones = cond.fill(1.0);
        let other = Batch::from_vec(vec![10.0, 20.0, 30.0]);

        let picked = cond.select(|v| v == 0.0, ones, other);
        assert_relative_eq!(picked.values()[0], 1.0);
        assert_relative_eq!(picked.values()[1], 20.0);
        assert_relative_eq!(picked.values()[2], 1.0);
    }

    #[test]
    fn test_linspace_endpoints() {
        let batch = Batch::linspace(-180.0, 180.0, 5);
        assert_eq!(batch.len(), 5);
        assert_relative_eq!(batch.values()[0], -180.0);
        assert_relative_eq!(batch.values()[2], 0.0);
        assert_relative_eq!(batch.values()[4], 180.0);
    }
}

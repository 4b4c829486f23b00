//! Coordinate triple, generic over the scalar/batch substrate.

use crate::coord::{Batch, Coordinate};
use crate::error::GeorefError;

/// Named axis of a [`Point`], usable as a constant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// An ordered (x, y, z) triple.
///
/// The substrate `C` is either `f64` (one point) or [`Batch`] (N points with
/// uniform length across the three axes). A point carries no frame tag — its
/// meaning (geodetic, geocentric, topocentric) is determined by which
/// transform was last applied, and it must only be interpreted against the
/// `Georef` that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<C> {
    coords: [C; 3],
}

impl<C> Point<C> {
    pub fn new(x: C, y: C, z: C) -> Self {
        Self { coords: [x, y, z] }
    }

    pub fn x(&self) -> &C {
        &self.coords[0]
    }

    pub fn y(&self) -> &C {
        &self.coords[1]
    }

    pub fn z(&self) -> &C {
        &self.coords[2]
    }

    pub fn x_mut(&mut self) -> &mut C {
        &mut self.coords[0]
    }

    pub fn y_mut(&mut self) -> &mut C {
        &mut self.coords[1]
    }

    pub fn z_mut(&mut self) -> &mut C {
        &mut self.coords[2]
    }

    pub fn axis(&self, axis: Axis) -> &C {
        &self.coords[axis as usize]
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut C {
        &mut self.coords[axis as usize]
    }

    /// Exchange the values of two axes.
    pub fn swap(&mut self, a: Axis, b: Axis) {
        self.coords.swap(a as usize, b as usize);
    }
}

impl<C: Coordinate> Point<C> {
    /// Plane rotation of the (`a`, `b`) axis pair by a (cos, sin) pair:
    ///
    ///   new_a =  cos·a + sin·b
    ///   new_b = −sin·a + cos·b
    ///
    /// Both right-hand sides are evaluated from the pre-rotation values;
    /// neither axis is overwritten before the other has been read.
    pub fn rotate(&mut self, a: Axis, b: Axis, cos: f64, sin: f64) {
        let va = self.axis(a).clone();
        let vb = self.axis(b).clone();
        *self.axis_mut(a) = va.clone() * cos + vb.clone() * sin;
        *self.axis_mut(b) = vb * cos - va * sin;
    }
}

impl Point<Batch> {
    /// Build a batch point from three axis columns of equal length.
    pub fn from_batches(x: Batch, y: Batch, z: Batch) -> Result<Self, GeorefError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(GeorefError::Shape(format!(
                "batch axis lengths differ: x={}, y={}, z={}",
                x.len(),
                y.len(),
                z.len()
            )));
        }
        Ok(Self::new(x, y, z))
    }

    /// Number of points in the batch.
    pub fn len(&self) -> usize {
        self.x().len()
    }

    pub fn is_empty(&self) -> bool {
        self.x().is_empty()
    }

    /// Extract point `index` as a scalar point.
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Point<f64> {
        Point::new(
            self.x().values()[index],
            self.y().values()[index],
            self.z().values()[index],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_accessors_alias_named_accessors() {
        let mut point = Point::new(1.0, 2.0, 3.0);
        assert_relative_eq!(*point.axis(Axis::X), *point.x());
        assert_relative_eq!(*point.axis(Axis::Y), *point.y());
        assert_relative_eq!(*point.axis(Axis::Z), *point.z());

        *point.axis_mut(Axis::Z) = 7.0;
        assert_relative_eq!(*point.z(), 7.0);
    }

    #[test]
    fn test_swap() {
        let mut point = Point::new(1.0, 2.0, 3.0);
        point.swap(Axis::X, Axis::Z);
        assert_relative_eq!(*point.x(), 3.0);
        assert_relative_eq!(*point.z(), 1.0);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut point = Point::new(1.0, 2.0, 3.0);
        point.rotate(Axis::X, Axis::Y, 0.0, 1.0);
        assert_relative_eq!(*point.x(), 2.0);
        assert_relative_eq!(*point.y(), -1.0);
        assert_relative_eq!(*point.z(), 3.0);
    }

    #[test]
    fn test_rotate_reads_both_axes_before_writing() {
        // With cos = sin = 1: new_x = x + y, new_y = -x + y. A rotation that
        // overwrote x first would compute new_y from the already-updated x.
        let mut point = Point::new(1.0, 2.0, 0.0);
        point.rotate(Axis::X, Axis::Y, 1.0, 1.0);
        assert_relative_eq!(*point.x(), 3.0);
        assert_relative_eq!(*point.y(), 1.0);
    }

    #[test]
    fn test_batch_rotate_matches_scalar() {
        let xs = [1.0, -2.0, 0.5];
        let ys = [4.0, 0.25, -3.0];
        let (sin, cos) = 0.7f64.sin_cos();

        let mut batch = Point::from_batches(
            Batch::from_vec(xs.to_vec()),
            Batch::from_vec(ys.to_vec()),
            Batch::zeros(3),
        )
        .unwrap();
        batch.rotate(Axis::X, Axis::Y, cos, sin);

        for i in 0..3 {
            let mut scalar = Point::new(xs[i], ys[i], 0.0);
            scalar.rotate(Axis::X, Axis::Y, cos, sin);
            assert_relative_eq!(*batch.get(i).x(), *scalar.x());
            assert_relative_eq!(*batch.get(i).y(), *scalar.y());
        }
    }

    #[test]
    fn test_from_batches_rejects_mismatched_lengths() {
        let result = Point::from_batches(Batch::zeros(3), Batch::zeros(2), Batch::zeros(3));
        assert!(matches!(result, Err(GeorefError::Shape(_))));
    }
}

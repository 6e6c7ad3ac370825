use std::ops;

pub trait Point: Copy + Sized + IntoIterator<Item = f64> {
    /// Set all the values to this value.
    fn all(v: f64) -> Self;

    /// Set all values to zero.
    fn zero() -> Self {
        Self::all(0.)
    }

    /// Scale point by multiplying all dimensions by `scalar`.
    fn scale(self, scalar: f64) -> Self;

    /// Calculate the magnitude of the vector.
    fn mag(self) -> f64 {
        self.into_iter()
            .zip(self)
            .map(|(a, b)| a * b)
            .sum::<f64>()
            .sqrt()
    }

    /// All dimensions are finite (not NaN or infinite).
    fn is_finite(self) -> bool {
        self.into_iter().all(f64::is_finite)
    }

    /// Perform a transformation on each pair of dimensions.
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self;
}

pub trait Add<Rhs = Self> {
    fn add(self, rhs: Rhs) -> Self;
    fn sub(self, rhs: Rhs) -> Self
    where
        Self: Sized + Copy,
        Rhs: Point,
    {
        self.add(rhs.scale(-1.0))
    }
}

/// 2D Point (X,Y).
pub type Point2 = [f64; 2];

/// 3D Point (X,Y,Z).
///
/// Mesh boundaries usually come as 3D vertices; only X,Y are used for drawing.
pub type Point3 = [f64; 3];

impl Add for Point2 {
    fn add(self, rhs: Self) -> Self {
        self.xfm(rhs, ops::Add::add)
    }

    fn sub(self, rhs: Self) -> Self {
        self.xfm(rhs, ops::Sub::sub)
    }
}
impl Point for Point2 {
    fn all(v: f64) -> Self {
        [v; 2]
    }
    fn scale(self, scalar: f64) -> Self {
        self.map(|f| f * scalar)
    }
    fn xfm<F: Fn(f64, f64) -> f64>(self, b: Self, f: F) -> Self {
        let [ax, ay] = self;
        let [bx, by] = b;
        [f(ax, bx), f(ay, by)]
    }
}

pub trait ToPoint2 {
    fn to_p2(self) -> Point2;
}

impl ToPoint2 for Point2 {
    fn to_p2(self) -> Point2 {
        self
    }
}
impl ToPoint2 for &Point2 {
    fn to_p2(self) -> Point2 {
        *self
    }
}
impl ToPoint2 for Point3 {
    fn to_p2(self) -> Point2 {
        let [x, y, _] = self;
        [x, y]
    }
}
impl ToPoint2 for &Point3 {
    fn to_p2(self) -> Point2 {
        (*self).to_p2()
    }
}
impl ToPoint2 for (f64, f64) {
    fn to_p2(self) -> Point2 {
        [self.0, self.1]
    }
}

/// Euclidean distance between two points.
pub fn dist(a: impl ToPoint2, b: impl ToPoint2) -> f64 {
    b.to_p2().sub(a.to_p2()).mag()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_adding() {
        let p = [0.0, 1.0].add([3.0, 1.0]);
        assert_eq!(p, [3.0, 2.0]);

        let p = [0.0, 1.0].sub([3.0, 1.0]);
        assert_eq!(p, [-3.0, 0.0]);
    }

    #[test]
    fn point_scaling() {
        let p = [0.0, 1.0].scale(2.0);
        assert_eq!(p, [0.0, 2.0]);

        let p = [-2.0, 0.5].scale(-0.5);
        assert_eq!(p, [1.0, -0.25]);
    }

    #[test]
    fn to_point_testing() {
        assert_eq!([0.0, 1.0].to_p2(), [0.0, 1.0]);
        assert_eq!([0.0, 1.0, 2.0].to_p2(), [0.0, 1.0]);
        assert_eq!((4.0, 5.0).to_p2(), [4.0, 5.0]);
    }

    #[test]
    fn mag_testing() {
        let m = [3.0, 4.0].mag() - 5.0;
        assert!(m.abs() < 1e-11);

        let m = [3.0, -4.0].mag() - 5.0;
        assert!(m.abs() < 1e-11);

        let m = [-3.0, 4.0].mag() - 5.0;
        assert!(m.abs() < 1e-11);

        assert_eq!(<Point2 as Point>::zero().mag(), 0.0);
    }

    #[test]
    fn dist_testing() {
        assert_eq!(dist([0.0, 0.0], [0.0, 2.0]), 2.0);
        assert_eq!(dist([0.0, 2.0], [3.0, 2.0]), 3.0);
        assert_eq!(dist([1.0, 1.0, 9.0], [4.0, 5.0, -9.0]), 5.0);
    }

    #[test]
    fn finite_testing() {
        assert!([0.0, 1.0].is_finite());
        assert!(![f64::NAN, 1.0].is_finite());
        assert!(![0.0, f64::INFINITY].is_finite());
    }
}

use crate::*;

/// An ordered, non-empty sequence of finite 2D points.
///
/// The order is the traversal order of the drawn path.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Point2>", into = "Vec<Point2>")]
pub struct Polyline2(Vec<Point2>);

impl Polyline2 {
    pub fn new<I, P>(points: I) -> std::result::Result<Self, &'static str>
    where
        I: IntoIterator<Item = P>,
        P: ToPoint2,
    {
        let points = points.into_iter().map(ToPoint2::to_p2).collect::<Vec<_>>();
        if points.is_empty() {
            Err("polyline requires 1 or more points to be valid")
        } else if !points.iter().copied().all(Point::is_finite) {
            Err("polyline points must have finite coordinates")
        } else {
            Ok(Polyline2(points))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pts(&self) -> &[Point2] {
        &self.0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point2> + '_ {
        self.0.iter().copied()
    }

    /// Returns a new polyline with every point multiplied by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        Polyline2(self.iter().map(|p| p.scale(scalar)).collect())
    }

    /// Sum of segment lengths, first point to last.
    pub fn length(&self) -> f64 {
        self.0.windows(2).map(|w| dist(w[0], w[1])).sum()
    }
}

impl AsRef<[Point2]> for Polyline2 {
    fn as_ref(&self) -> &[Point2] {
        &self.0
    }
}

impl TryFrom<Vec<Point2>> for Polyline2 {
    type Error = &'static str;

    fn try_from(points: Vec<Point2>) -> std::result::Result<Self, Self::Error> {
        Polyline2::new(points)
    }
}

impl From<Polyline2> for Vec<Point2> {
    fn from(polyline: Polyline2) -> Self {
        polyline.0
    }
}

impl IntoIterator for Polyline2 {
    type Item = Point2;
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

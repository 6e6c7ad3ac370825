//! Draw 2D polylines and loops as TikZ paths, with optional direction arrows and a label.
//!
//! The [`tikz`] module holds the path emitter. The [`io`] module (`io` feature) adds the
//! conventions of mesh boundary documents on top of it.
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod error;
#[cfg(feature = "io")]
pub mod io;
mod point;
mod polyline;
pub mod tikz;

pub use error::*;
pub use point::*;
pub use polyline::*;

/// A short sequence of finite points, possibly empty.
#[cfg(test)]
#[derive(Clone, Debug)]
struct ArbPoints(pub Vec<Point2>);

#[cfg(test)]
impl quickcheck::Arbitrary for ArbPoints {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = <usize as quickcheck::Arbitrary>::arbitrary(g) % 40;
        // eighths are exact in binary
        let mut coord = || f64::from(<i16 as quickcheck::Arbitrary>::arbitrary(g)) / 8.0;
        let points = std::iter::repeat_with(|| [coord(), coord()])
            .take(len)
            .collect();
        Self(points)
    }
}

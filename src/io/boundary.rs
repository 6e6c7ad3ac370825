use super::*;
use rayon::prelude::*;

/// First line of every boundary fragment, pointing the TeX toolchain at the main document.
pub const ROOT_DIRECTIVE: &str = "%!TEX root = main.tex";

/// Draw style of boundary loops.
pub const STYLE: &str = "color=boundaryBlue";

/// The conventional file name of the `index`th boundary fragment.
pub fn file_name(index: usize) -> String {
    format!("boundary-{}.txt", index)
}

/// Write a boundary fragment: the root directive, then the points multiplied by `scale` as a
/// closed loop with default [`tikz::EmitOptions`].
///
/// Points can be 3D mesh vertices, the z value is ignored.
/// Nothing is written if the points or the scale are invalid.
pub fn write<W, I, P>(sink: &mut W, points: I, scale: f64) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = P>,
    P: ToPoint2,
{
    if !scale.is_finite() || scale == 0.0 {
        return Err(Error::invalid(format!(
            "boundary scale must be finite and non-zero, got {}",
            scale
        )));
    }

    let polyline = Polyline2::new(points)
        .map_err(Error::invalid)?
        .scale(scale);

    writeln!(sink, "{}", ROOT_DIRECTIVE)?;
    tikz::write_loop(sink, STYLE, &polyline, &tikz::EmitOptions::default())
}

/// Render each boundary into its own buffer, in parallel.
///
/// Buffers are returned in the order of `boundaries`. Fails if any boundary is invalid.
pub fn to_tikz_all<B>(boundaries: &[B], scale: f64) -> Result<Vec<Vec<u8>>>
where
    B: AsRef<[Point2]> + Sync,
{
    log::debug!("rendering {} boundaries at scale {}", boundaries.len(), scale);

    boundaries
        .par_iter()
        .map(|b| {
            let mut buf = Vec::new();
            write(&mut buf, b.as_ref(), scale)?;
            Ok(buf)
        })
        .collect()
}

//! TikZ path emission.
//!
//! A point sequence is first turned into a list of [`Statement`]s by [`statements`], a pure
//! geometry pass. Each statement then serialises itself with [`Statement::write_to`], which is
//! the only place that knows TikZ syntax.
//!
//! ```rust
//! use tikz_path::tikz::*;
//!
//! let s = render_line("red", &[[0.0, 0.0], [0.0, 2.0]], &EmitOptions::default()).unwrap();
//! assert_eq!(
//!     s,
//!     "\\draw[red] (0.0000cm, 0.0000cm)\n\
//!      --(0.0000cm,2.0000cm) node[sloped,pos=0.5,allow upside down]{\\ArrowIn}\n\
//!      ;\n"
//! );
//! ```
use crate::*;
use std::io::Write;

mod options;

pub use options::EmitOptions;

/// Arrow glyph decorating a segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    /// `\ArrowIn`, for segments longer than the threshold.
    Large,
    /// `\arrowIn`.
    Small,
}

impl Marker {
    /// Picks the marker for a segment of length `len`.
    /// Only lengths strictly greater than `threshold` get [`Marker::Large`].
    pub fn for_length(len: f64, threshold: f64) -> Self {
        if len > threshold {
            Marker::Large
        } else {
            Marker::Small
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Marker::Large => "\\ArrowIn",
            Marker::Small => "\\arrowIn",
        }
    }
}

/// How a path statement is ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Terminator {
    /// Connect back to the first point: `--cycle;`.
    Cycle,
    /// Leave the path open: `;`.
    End,
}

/// A single line of TikZ output.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Statement<'a> {
    /// `\node[draw] at (X, Y) {VALUE};`
    Label { at: Point2, value: f64 },
    /// `\draw[STYLE] (X, Y)`
    MoveTo { style: &'a str, at: Point2 },
    /// `--(X,Y) DECOR`
    LineTo { to: Point2, marker: Option<Marker> },
    Terminator(Terminator),
}

impl<'a> Statement<'a> {
    /// Writes the statement, including its trailing newline.
    ///
    /// Coordinates use 4 decimal places suffixed with `unit`, label values use 2.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W, unit: &str) -> std::io::Result<()> {
        match *self {
            Statement::Label { at: [x, y], value } => writeln!(
                sink,
                "\\node[draw] at ({x:.4}{unit}, {y:.4}{unit}) {{{value:.2}}};"
            ),
            Statement::MoveTo { style, at: [x, y] } => {
                writeln!(sink, "\\draw[{style}] ({x:.4}{unit}, {y:.4}{unit})")
            }
            Statement::LineTo { to: [x, y], marker } => {
                write!(sink, "--({x:.4}{unit},{y:.4}{unit}) ")?;
                if let Some(m) = marker {
                    write!(sink, "node[sloped,pos=0.5,allow upside down]{{{}}}", m.glyph())?;
                }
                writeln!(sink)
            }
            Statement::Terminator(Terminator::Cycle) => writeln!(sink, "--cycle;"),
            Statement::Terminator(Terminator::End) => writeln!(sink, ";"),
        }
    }
}

/// Builds the statements of a path, without a terminator.
///
/// # Errors
/// [`Error::InvalidInput`] if `points` is empty, or any coordinate, the label or the arrow
/// threshold is not finite.
pub fn statements<'a>(
    style: &'a str,
    points: &[Point2],
    opts: &EmitOptions,
) -> Result<Vec<Statement<'a>>> {
    if let Some(v) = opts.label.filter(|v| !v.is_finite()) {
        return Err(Error::invalid(format!("label must be finite, got {}", v)));
    }
    if !opts.arrow_threshold.is_finite() {
        return Err(Error::invalid(format!(
            "arrow threshold must be finite, got {}",
            opts.arrow_threshold
        )));
    }

    let (&first, rest) = points
        .split_first()
        .ok_or_else(|| Error::invalid("path requires 1 or more points"))?;

    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(Error::invalid(format!(
            "point {} has non-finite coordinates {:?}",
            i, points[i]
        )));
    }

    let mut stmts = Vec::with_capacity(points.len() + 1);

    if let Some(value) = opts.label {
        stmts.push(Statement::Label { at: first, value });
    }
    stmts.push(Statement::MoveTo { style, at: first });

    let mut prev = first;
    for &p in rest {
        let marker = opts.direction.then(|| {
            let len = dist(prev, p);
            let m = Marker::for_length(len, opts.arrow_threshold);
            log::trace!("segment {:?} -> {:?} has length {}, using {:?}", prev, p, len, m);
            m
        });
        prev = p;
        stmts.push(Statement::LineTo { to: p, marker });
    }

    Ok(stmts)
}

/// Writes the path statements for `points` into `sink`. No terminator is written.
///
/// Nothing is written if the input is invalid.
pub fn write<W, P>(sink: &mut W, style: &str, points: P, opts: &EmitOptions) -> Result<()>
where
    W: Write + ?Sized,
    P: AsRef<[Point2]>,
{
    let stmts = statements(style, points.as_ref(), opts)?;

    let large = stmts
        .iter()
        .filter(|s| matches!(s, Statement::LineTo { marker: Some(Marker::Large), .. }))
        .count();
    log::debug!(
        "emitting path [{}] with {} points ({} large arrows)",
        style,
        points.as_ref().len(),
        large
    );

    for s in &stmts {
        s.write_to(sink, &opts.unit)?;
    }

    Ok(())
}

fn write_terminated<W, P>(
    sink: &mut W,
    style: &str,
    points: P,
    opts: &EmitOptions,
    end: Terminator,
) -> Result<()>
where
    W: Write + ?Sized,
    P: AsRef<[Point2]>,
{
    write(sink, style, points, opts)?;
    Statement::Terminator(end).write_to(sink, &opts.unit)?;
    Ok(())
}

/// Writes a closed path, ending with `--cycle;`.
pub fn write_loop<W, P>(sink: &mut W, style: &str, points: P, opts: &EmitOptions) -> Result<()>
where
    W: Write + ?Sized,
    P: AsRef<[Point2]>,
{
    write_terminated(sink, style, points, opts, Terminator::Cycle)
}

/// Writes an open path, ending with `;`.
pub fn write_line<W, P>(sink: &mut W, style: &str, points: P, opts: &EmitOptions) -> Result<()>
where
    W: Write + ?Sized,
    P: AsRef<[Point2]>,
{
    write_terminated(sink, style, points, opts, Terminator::End)
}

/// [`write_loop`] into a new string.
pub fn render_loop<P>(style: &str, points: P, opts: &EmitOptions) -> Result<String>
where
    P: AsRef<[Point2]>,
{
    let mut buf = Vec::new();
    write_loop(&mut buf, style, points, opts)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// [`write_line`] into a new string.
pub fn render_line<P>(style: &str, points: P, opts: &EmitOptions) -> Result<String>
where
    P: AsRef<[Point2]>,
{
    let mut buf = Vec::new();
    write_line(&mut buf, style, points, opts)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

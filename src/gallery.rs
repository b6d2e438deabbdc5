use std::io::{self, Write};
use std::ops::Range;

use rand::Rng;

use crate::circle::Circle;
use crate::error::FigureError;
use crate::figure::Figure;
use crate::shape::Shape;
use crate::square::Square;

/// How many figures the driver generates.
pub const FIGURE_COUNT: usize = 10;

/// The fixed amount added to every square's side length before printing.
pub const SQUARE_GROWTH: f64 = 5.0;

/// Generated dimensions are drawn uniformly from this half-open range, so a
/// freshly generated figure can never trip the dimension validation.
pub const DIMENSION_RANGE: Range<f64> = 1.0..10.0;

/// Builds `count` randomly-typed, randomly-sized figures, in generation
/// order. A coin flip picks the variant, an independent uniform draw picks
/// the dimension. The validating constructors are still on the path, so an
/// out-of-range dimension would propagate as [`FigureError`] instead of
/// slipping through.
pub fn random_gallery(rng: &mut impl Rng, count: usize) -> Result<Vec<Figure>, FigureError> {
    let mut figures = Vec::with_capacity(count);
    for _ in 0..count {
        let dimension = rng.gen_range(DIMENSION_RANGE);
        let figure = if rng.gen_bool(0.5) {
            Figure::from(Circle::new(dimension)?)
        } else {
            Figure::from(Square::new(dimension)?)
        };

        figures.push(figure);
    }

    Ok(figures)
}

/// Grows every square's side length by `delta` through the validating
/// setter; circles are left untouched. This is the capability-checked
/// dispatch step: only figures that reveal themselves as squares are
/// mutated.
pub fn grow_squares(figures: &mut [Figure], delta: f64) -> Result<(), FigureError> {
    for figure in figures.iter_mut() {
        if let Some(square) = figure.as_square_mut() {
            square.set_side_length(square.side_length() + delta)?;
        }
    }

    Ok(())
}

/// Writes the gallery in insertion order: per figure one metrics line
/// (`"<area> <circumference>"`), the three-line report, then a blank line.
pub fn write_gallery(figures: &[Figure], out: &mut dyn Write) -> io::Result<()> {
    for figure in figures {
        writeln!(out, "{} {}", figure.area(), figure.circumference())?;
        figure.report(out)?;
        writeln!(out)?;
    }

    Ok(())
}

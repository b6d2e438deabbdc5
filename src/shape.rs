use std::io::{self, Write};

/// The polymorphic contract shared by every figure variant.
///
/// `area` and `circumference` are pure functions of the current state and
/// never fail. `report` is a template method: the variant supplies its
/// descriptive line and label, the trait supplies the shared two-line
/// area/circumference tail. The trait is object-safe so heterogeneous
/// collections can hold `&dyn Shape` / `Box<dyn Shape>`.
pub trait Shape {
    fn area(&self) -> f64;

    fn circumference(&self) -> f64;

    /// Stable human-readable variant tag, e.g. "square".
    fn label(&self) -> &'static str;

    /// The variant-specific descriptive line, e.g.
    /// "Side length of the square is 7".
    fn dimension_line(&self) -> String;

    /// Writes the full three-line report: the descriptive line, then the
    /// shared area and circumference lines, in that fixed order.
    fn report(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.dimension_line())?;
        writeln!(out, "Area of the {} is {}", self.label(), self.area())?;
        writeln!(
            out,
            "Circumference of the {} is {}",
            self.label(),
            self.circumference()
        )
    }
}

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use figure_gallery::gallery::{self, FIGURE_COUNT, SQUARE_GROWTH};

fn main() -> Result<()> {
    let mut rng = rand::thread_rng();

    let mut figures = gallery::random_gallery(&mut rng, FIGURE_COUNT)?;
    gallery::grow_squares(&mut figures, SQUARE_GROWTH)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    gallery::write_gallery(&figures, &mut out)?;
    out.flush()?;

    // Pause before exiting; the line itself is discarded.
    eprint!("{}", "Press Enter to exit".dimmed());
    let mut pause = String::new();
    io::stdin().lock().read_line(&mut pause)?;

    Ok(())
}

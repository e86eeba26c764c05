//! Draw command: render a figure as ASCII art or a PNG.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{write_png, Canvas, Colour};

use super::figure::FigureArgs;

/// Rasterize a figure and show it
#[derive(Args, Debug)]
pub struct DrawArgs {
    #[command(flatten)]
    pub figure: FigureArgs,

    /// Write a PNG here instead of printing ASCII art
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Integer upscaling for PNG output
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Colour of the figure's pixels
    #[arg(long, default_value = "#000000")]
    pub ink: Colour,

    /// Background colour
    #[arg(long, default_value = "#FFFFFF")]
    pub paper: Colour,
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    let figure = args.figure.build()?;
    let mut canvas = Canvas::fitting(&figure, args.paper);
    let written = canvas.draw(&figure, args.ink);
    let rect = canvas.rect();
    let summary = format!(
        "{} {}x{} ({})",
        figure.name(),
        rect.width(),
        rect.height(),
        plural(written, "pixel", "pixels")
    );

    match &args.png {
        Some(path) => {
            write_png(&canvas, path, args.scale)?;
            printer.success(
                "Rendered",
                &format!("{} {} {}", summary, printer.dim("->"), printer.cyan(&display_path(path))),
            );
        }
        None => {
            printer.status("Drawing", &summary);
            println!("{}", canvas.to_ascii());
        }
    }
    Ok(())
}

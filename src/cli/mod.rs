pub mod completions;
pub mod draw;
pub mod figure;
pub mod points;

use clap::{Parser, Subcommand};

/// pxshape - Pixel-perfect lines, paths and shapes
#[derive(Parser, Debug)]
#[command(name = "pxshape")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// More log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the chosen verbosity; `RUST_LOG` overrides it.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "pxshape=warn",
            1 => "pxshape=debug",
            _ => "pxshape=trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rasterize a figure as ASCII art or a PNG
    Draw(draw::DrawArgs),

    /// Print the pixels of a figure in drawing order
    Points(points::PointsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

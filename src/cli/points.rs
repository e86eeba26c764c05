//! Points command: list the pixels of a figure.

use clap::Args;
use serde::Serialize;

use crate::error::{Result, ShapeError};
use crate::geometry::{IntRect, IntVector2};
use crate::output::{plural, Printer};
use crate::shapes::Shape;

use super::figure::{Figure, FigureArgs};

/// Print the pixels of a figure in drawing order
#[derive(Args, Debug)]
pub struct PointsArgs {
    #[command(flatten)]
    pub figure: FigureArgs,

    /// Emit JSON instead of one `x,y` pair per line
    #[arg(long)]
    pub json: bool,

    /// Also report whether these points are part of the figure (repeatable)
    #[arg(long, allow_hyphen_values = true)]
    pub contains: Vec<IntVector2>,
}

#[derive(Serialize)]
struct Listing<'a> {
    kind: &'a str,
    filled: bool,
    bounds: IntRect,
    count: usize,
    points: Vec<IntVector2>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    queries: Vec<Query>,
}

#[derive(Serialize)]
struct Query {
    point: IntVector2,
    contained: bool,
}

fn listing(figure: &Figure, queries: &[IntVector2]) -> Listing<'static> {
    let points: Vec<IntVector2> = figure.points().collect();
    Listing {
        kind: figure.name(),
        filled: figure.is_filled(),
        bounds: figure.bounding_rect(),
        count: points.len(),
        points,
        queries: queries
            .iter()
            .map(|&point| Query {
                point,
                contained: figure.contains(point),
            })
            .collect(),
    }
}

pub fn run(args: PointsArgs, printer: &Printer) -> Result<()> {
    let figure = args.figure.build()?;
    let listing = listing(&figure, &args.contains);
    printer.status(
        "Listing",
        &format!("{} of {}", plural(listing.count, "point", "points"), figure),
    );

    if args.json {
        let json = serde_json::to_string_pretty(&listing).map_err(|e| ShapeError::Parse {
            message: format!("Failed to serialize points: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for p in &listing.points {
        println!("{},{}", p.x, p.y);
    }
    for query in &listing.queries {
        let verdict = if query.contained { "inside" } else { "outside" };
        printer.info("Contains", &format!("{} {}", query.point, verdict));
    }
    Ok(())
}

use crate::commands::{OutputFormat, PolygonCmd};
use crate::scene::Scene;

use anyhow::{Context, Result};
use serde::Serialize;
use sightline::algorithms::aabb::bounding_box;
use sightline::algorithms::area::signed_area;
use sightline::algorithms::simplify::remove_collinear;
use sightline::algorithms::winding::compute_winding;
use sightline::geom::Polygon;
use sightline::math::{LineSegment, Point, EPSILON};
use sightline::VisibilitySweep;

use std::io::Write;
use std::iter::once;

#[derive(Serialize)]
struct PolygonOutput<'l> {
    observer: Point,
    polygon: &'l [Point],
}

pub fn polygon(scene: &Scene, mut cmd: PolygonCmd) -> Result<()> {
    let observer = scene.observer();
    let occluders = scene.occluders();

    let mut polygon = Vec::new();
    VisibilitySweep::new()
        .compute(observer, &occluders, &cmd.options, &mut polygon)
        .context("Could not compute the visibility polygon")?;

    if cmd.options.simplify {
        remove_collinear(&mut polygon, EPSILON);
    }

    log::info!(
        "{} occluders, {} polygon vertices.",
        occluders.len(),
        polygon.len()
    );
    log::debug!(
        "Polygon area: {}, winding: {:?}",
        signed_area(Polygon::new(&polygon[..])).abs(),
        compute_winding(Polygon::new(&polygon[..]))
    );

    match cmd.format {
        OutputFormat::Json => {
            let output = PolygonOutput {
                observer,
                polygon: &polygon,
            };
            serde_json::to_writer_pretty(&mut *cmd.output, &output)?;
            writeln!(&mut *cmd.output)?;
        }
        OutputFormat::Svg => {
            write_svg(&mut *cmd.output, observer, &occluders, &polygon)?;
        }
    }

    Ok(())
}

fn write_svg(
    output: &mut dyn Write,
    observer: Point,
    occluders: &[LineSegment],
    polygon: &[Point],
) -> Result<()> {
    let points = once(observer)
        .chain(polygon.iter().cloned())
        .chain(occluders.iter().flat_map(|s| [s.from, s.to]));
    let bounds = bounding_box(points);
    let size = bounds.size();
    let unit = size.width.max(size.height).max(1.0) / 200.0;
    let bounds = bounds.inflate(unit * 4.0, unit * 4.0);
    let size = bounds.size();

    writeln!(
        output,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bounds.min.x, bounds.min.y, size.width, size.height
    )?;

    if !polygon.is_empty() {
        write!(output, r##"  <path fill="#fce94f" fill-opacity="0.6" d=""##)?;
        for (i, p) in polygon.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { "L" };
            write!(output, "{} {} {} ", cmd, p.x, p.y)?;
        }
        writeln!(output, r#"Z"/>"#)?;
    }

    for s in occluders {
        writeln!(
            output,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="{}"/>"#,
            s.from.x, s.from.y, s.to.x, s.to.y, unit
        )?;
    }

    writeln!(
        output,
        r#"  <circle cx="{}" cy="{}" r="{}" fill="red"/>"#,
        observer.x,
        observer.y,
        unit * 2.0
    )?;
    writeln!(output, "</svg>")?;

    Ok(())
}

use crate::commands::ContainsCmd;
use crate::scene::Scene;

use anyhow::{Context, Result};
use sightline::VisibilitySweep;

use std::io::Write;

pub fn contains(scene: &Scene, mut cmd: ContainsCmd) -> Result<()> {
    let mut polygon = Vec::new();
    VisibilitySweep::new()
        .compute(scene.observer(), &scene.occluders(), &cmd.options, &mut polygon)
        .context("Could not compute the visibility polygon")?;

    let inside = sightline::is_point_in_polygon(cmd.point, &polygon);
    log::debug!("{:?} inside: {}", cmd.point, inside);

    writeln!(
        &mut *cmd.output,
        "{}",
        if inside { "inside" } else { "outside" }
    )?;

    Ok(())
}

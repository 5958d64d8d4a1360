use sightline::math::Point;
use sightline::VisibilityOptions;

use std::io;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Svg,
}

pub struct PolygonCmd {
    pub options: VisibilityOptions,
    pub format: OutputFormat,
    pub output: Box<dyn io::Write>,
}

pub struct ContainsCmd {
    pub options: VisibilityOptions,
    pub point: Point,
    pub output: Box<dyn io::Write>,
}

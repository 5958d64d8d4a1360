use anyhow::{bail, Context, Result};
use serde::Deserialize;
use sightline::math::{point, LineSegment, Point};

use std::fs;

/// A scene file: an observer and the occluders around it.
///
/// ```json
/// {
///     "observer": [0.0, 0.0],
///     "segments": [[[5.0, -1.0], [5.0, 1.0]]],
///     "polygons": [[[-10.0, -10.0], [10.0, -10.0], [10.0, 10.0], [-10.0, 10.0]]]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scene {
    pub observer: [f64; 2],
    #[serde(default)]
    pub segments: Vec<[[f64; 2]; 2]>,
    #[serde(default)]
    pub polygons: Vec<Vec<[f64; 2]>>,
}

impl Scene {
    pub fn load(path: &str) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Cannot open scene file {}", path))?;

        Scene::parse(&source).with_context(|| format!("Invalid scene file {}", path))
    }

    pub fn parse(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn observer(&self) -> Point {
        to_point(self.observer)
    }

    /// The segments followed by the edges of the polygons.
    pub fn occluders(&self) -> Vec<LineSegment> {
        let mut output: Vec<LineSegment> = self
            .segments
            .iter()
            .map(|&[from, to]| LineSegment {
                from: to_point(from),
                to: to_point(to),
            })
            .collect();

        let polygons: Vec<Vec<Point>> = self
            .polygons
            .iter()
            .map(|polygon| polygon.iter().cloned().map(to_point).collect())
            .collect();
        output.extend(sightline::polygons_to_segments(&polygons));

        output
    }
}

fn to_point(p: [f64; 2]) -> Point {
    point(p[0], p[1])
}

fn parse_numbers(src: &str, expected: usize) -> Result<Vec<f64>> {
    let numbers = src
        .split(',')
        .map(|n| {
            n.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid number {:?}", n))
        })
        .collect::<Result<Vec<f64>>>()?;

    if numbers.len() != expected {
        bail!("Expected {} comma-separated numbers, got {:?}", expected, src);
    }

    Ok(numbers)
}

/// Parses `x,y`.
pub fn parse_point(src: &str) -> Result<Point> {
    let n = parse_numbers(src, 2)?;
    Ok(point(n[0], n[1]))
}

/// Parses `min_x,min_y,max_x,max_y`.
pub fn parse_viewport(src: &str) -> Result<(Point, Point)> {
    let n = parse_numbers(src, 4)?;
    Ok((point(n[0], n[1]), point(n[2], n[3])))
}

#[test]
fn scene_file() {
    let scene = Scene::parse(
        r#"{
            "observer": [1.0, 2.0],
            "segments": [[[5.0, -1.0], [5.0, 1.0]]],
            "polygons": [[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]]
        }"#,
    )
    .unwrap();

    assert_eq!(scene.observer(), point(1.0, 2.0));

    let occluders = scene.occluders();
    assert_eq!(occluders.len(), 4);
    assert_eq!(
        occluders[0],
        LineSegment {
            from: point(5.0, -1.0),
            to: point(5.0, 1.0)
        }
    );
    assert_eq!(
        occluders[3],
        LineSegment {
            from: point(0.0, 1.0),
            to: point(0.0, 0.0)
        }
    );
}

#[test]
fn optional_fields() {
    let scene = Scene::parse(r#"{ "observer": [0, 0] }"#).unwrap();
    assert!(scene.occluders().is_empty());

    assert!(Scene::parse(r#"{ "segments": [] }"#).is_err());
}

#[test]
fn command_line_values() {
    assert_eq!(parse_point("1.5, -2").unwrap(), point(1.5, -2.0));
    assert_eq!(
        parse_viewport("0,0,10,20").unwrap(),
        (point(0.0, 0.0), point(10.0, 20.0))
    );

    assert!(parse_point("1.5").is_err());
    assert!(parse_point("1,2,3").is_err());
    assert!(parse_point("a,b").is_err());
    assert!(parse_viewport("0,0,10").is_err());
}

extern crate clap;
extern crate sightline;

mod commands;
mod contains;
mod polygon;
mod scene;

use anyhow::{bail, Context, Result};
use clap::*;
use commands::*;
use scene::{parse_point, parse_viewport, Scene};
use sightline::math::Box2D;
use sightline::VisibilityOptions;

use std::fs::File;
use std::io::{self, stdout};

fn main() -> Result<()> {
    let matches = App::new("Sightline command-line interface")
        .version("0.1")
        .about("Visibility polygons among 2D occluders")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            scene_args(SubCommand::with_name("polygon"))
                .about("Computes the visibility polygon of the scene's observer")
                .arg(
                    Arg::with_name("FORMAT")
                        .short("f")
                        .long("format")
                        .help("Sets the output format (json by default)")
                        .value_name("FORMAT")
                        .possible_values(&["json", "svg"])
                        .takes_value(true),
                ),
        )
        .subcommand(
            scene_args(SubCommand::with_name("contains"))
                .about("Tells whether a point is visible from the scene's observer")
                .arg(
                    Arg::with_name("POINT")
                        .short("p")
                        .long("point")
                        .help("The point to test, as x,y")
                        .value_name("POINT")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .required(true),
                ),
        )
        .get_matches();

    let (name, sub_matches) = matches.subcommand();
    let sub_matches = match sub_matches {
        Some(m) => m,
        None => bail!("Missing command"),
    };

    init_logger(sub_matches.occurrences_of("VERBOSE"));

    let input = sub_matches.value_of("INPUT").unwrap_or_default();
    let scene = Scene::load(input)?;
    let options = get_options(sub_matches)?;
    let output = get_output(sub_matches)?;

    match name {
        "polygon" => {
            let format = match sub_matches.value_of("FORMAT") {
                Some("svg") => OutputFormat::Svg,
                _ => OutputFormat::Json,
            };

            polygon::polygon(
                &scene,
                PolygonCmd {
                    options,
                    format,
                    output,
                },
            )
        }
        "contains" => {
            let point = parse_point(sub_matches.value_of("POINT").unwrap_or_default())
                .context("Invalid --point")?;

            contains::contains(
                &scene,
                ContainsCmd {
                    options,
                    point,
                    output,
                },
            )
        }
        _ => bail!("Unknown command {}", name),
    }
}

fn scene_args<'a, 'b>(cmd: App<'a, 'b>) -> App<'a, 'b> {
    cmd.arg(
        Arg::with_name("INPUT")
            .help("Sets the scene file to use")
            .short("i")
            .long("input")
            .value_name("FILE")
            .takes_value(true)
            .required(true),
    )
    .arg(
        Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("VIEWPORT")
            .help("Clips the visibility polygon to a rectangle")
            .long("viewport")
            .value_name("MIN_X,MIN_Y,MAX_X,MAX_Y")
            .takes_value(true)
            .allow_hyphen_values(true),
    )
    .arg(
        Arg::with_name("SANITIZE")
            .long("sanitize")
            .help("Splits the occluders where they cross each other"),
    )
    .arg(
        Arg::with_name("SIMPLIFY")
            .long("simplify")
            .help("Removes duplicate vertices from the polygon"),
    )
    .arg(
        Arg::with_name("MARGIN")
            .long("margin")
            .help("Sets the distance between the scene and its frame (1.0 by default)")
            .value_name("MARGIN")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("VERBOSE")
            .short("v")
            .long("verbose")
            .multiple(true)
            .help("Prints more logs (can be repeated)"),
    )
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG takes precedence over the verbosity flags.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn get_options(matches: &ArgMatches) -> Result<VisibilityOptions> {
    let mut options = VisibilityOptions::DEFAULT
        .with_intersections_broken(matches.is_present("SANITIZE"))
        .with_simplification(matches.is_present("SIMPLIFY"));

    if let Some(viewport) = matches.value_of("VIEWPORT") {
        let (min, max) = parse_viewport(viewport).context("Invalid --viewport")?;
        options = options.with_viewport(Box2D { min, max });
    }

    if let Some(margin) = matches.value_of("MARGIN") {
        let margin: f64 = margin
            .parse()
            .with_context(|| format!("Invalid --margin {:?}", margin))?;
        options = options.with_frame_margin(margin);
    }

    Ok(options)
}

fn get_output(matches: &ArgMatches) -> Result<Box<dyn io::Write>> {
    Ok(match matches.value_of("OUTPUT") {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Cannot create file {}", path))?,
        ),
        None => Box::new(stdout()),
    })
}

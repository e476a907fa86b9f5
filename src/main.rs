extern crate clap;
extern crate serde_json;

mod ozgeo;
use ozgeo::commands;
use ozgeo::error::Error;
use ozgeo::text;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::io;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

fn run(matches: ArgMatches) -> Result<(), Error> {
    match matches.subcommand() {
        ("trim", Some(m)) => commands::trim::run(m),
        ("compare", Some(m)) => commands::compare::run(m),
        ("geoids", Some(m)) => commands::geoids::run(m),
        _ => Err(Error::UnknownCommand),
    }
}

/// Diagnostics go to STDERR so STDOUT stays reserved for reports.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

fn main() {
    let trim = SubCommand::with_name("trim")
        .about(text::TRIM_ABOUT)
        .after_help(text::TRIM_AFTER_HELP)
        .arg(
            Arg::with_name("input")
                .help("Path to input GeoJSON FeatureCollection")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Path to output trimmed GeoJSON")
                .long("output")
                .short("o")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("decimals")
                .help("Coordinate decimal places (6 ≈ 0.1m, 5 ≈ 1m). Default 6.")
                .long("decimals")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("keep-id")
                .help("Keep feature id in output")
                .long("keep-id"),
        );

    let compare = SubCommand::with_name("compare")
        .about(text::COMPARE_ABOUT)
        .after_help(text::COMPARE_AFTER_HELP)
        .arg(
            Arg::with_name("full")
                .help("Path to the full Opportunity Zone GeoJSON")
                .index(1),
        );

    let geoids = SubCommand::with_name("geoids")
        .about(text::GEOIDS_ABOUT)
        .after_help(text::GEOIDS_AFTER_HELP)
        .arg(
            Arg::with_name("input")
                .help("Path to the full Opportunity Zone GeoJSON")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Path to write the minimal GEOID list")
                .long("output")
                .short("o")
                .takes_value(true)
                .required(true),
        );

    let matches = App::new("ozgeo")
        .version(VERSION)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .about("ozgeo - Opportunity Zone GeoJSON tools")
        .after_help(text::MAIN_AFTER_HELP)
        .subcommand(trim)
        .subcommand(compare)
        .subcommand(geoids)
        .get_matches();

    init_tracing();

    if let Err(e) = run(matches) {
        eprintln!("Application error: {}", e);
        process::exit(1);
    }
}

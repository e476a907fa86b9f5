use crate::ozgeo::error::Error;
use crate::ozgeo::geoids::geoid_source;
use crate::ozgeo::minimal;
use clap::ArgMatches;
use std::path::Path;
use tracing::info;

pub fn run(m: &ArgMatches) -> Result<(), Error> {
    let input = m.value_of("input").ok_or(Error::MissingArgument("input"))?;
    let output = m.value_of("output").ok_or(Error::MissingArgument("output"))?;

    let source = geoid_source();
    info!("Loading full GeoJSON: {} ({})", input, source.name());
    let full = source.load(Path::new(input))?;
    info!("  Full file: {} features, {} unique GEOID10", full.features, full.unique());

    info!("Writing {} ...", output);
    minimal::write_minimal(Path::new(output), &full)?;
    Ok(())
}

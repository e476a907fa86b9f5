use crate::ozgeo::compare::{self, write_report};
use crate::ozgeo::config::{self, CompareConfig};
use crate::ozgeo::error::Error;
use crate::ozgeo::geoids::geoid_source;
use clap::ArgMatches;
use std::io;
use std::path::PathBuf;

pub fn run(m: &ArgMatches) -> Result<(), Error> {
    let full = m.value_of("full");
    // Home is only needed for the default full path.
    let home = match full {
        Some(_) => PathBuf::new(),
        None => config::home_dir(),
    };
    let config = CompareConfig::with_defaults(&config::install_root(), &home).with_full_path(full);
    let source = geoid_source();
    let comparison = compare::compare(&config, source.as_ref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&comparison, &mut out)?;
    Ok(())
}

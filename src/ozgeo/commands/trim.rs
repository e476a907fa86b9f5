use crate::ozgeo::error::Error;
use crate::ozgeo::trim::{self, TrimOptions};
use clap::ArgMatches;
use std::path::Path;

fn decimals(m: &ArgMatches) -> Result<usize, Error> {
    match m.value_of("decimals") {
        Some(arg) => arg.parse::<usize>().map_err(|_| {
            eprintln!("Invalid decimals: {:?} - must be a non-negative integer, e.g. 6.", arg);
            Error::InvalidNumberFormat(arg.to_string())
        }),
        None => Ok(trim::DEFAULT_DECIMALS),
    }
}

pub fn run(m: &ArgMatches) -> Result<(), Error> {
    let opts = TrimOptions {
        decimals: decimals(m)?,
        keep_id: m.is_present("keep-id"),
    };
    let input = m.value_of("input").ok_or(Error::MissingArgument("input"))?;
    let output = m.value_of("output").ok_or(Error::MissingArgument("output"))?;
    trim::trim_file(Path::new(input), Path::new(output), &opts)?;
    Ok(())
}

//! The minimal reference file: `{"geoids": ["...", ...]}`.
use crate::ozgeo::error::{self, Error};
use crate::ozgeo::geoids::FullGeoids;
use crate::ozgeo::output;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct MinimalFile {
    #[serde(default)]
    geoids: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MinimalOut<'a> {
    geoids: &'a BTreeSet<String>,
}

/// The checker's GEOID list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReferenceGeoids {
    pub geoids: BTreeSet<String>,
    /// Length of the list as stored, duplicates included.
    pub count: usize,
}

pub fn read_reference<R: Read>(reader: R) -> Result<ReferenceGeoids, Error> {
    let minimal: MinimalFile = serde_json::from_reader(reader)?;
    let count = minimal.geoids.len();
    Ok(ReferenceGeoids {
        geoids: minimal.geoids.into_iter().collect(),
        count,
    })
}

pub fn load_reference(path: &Path) -> Result<ReferenceGeoids, Error> {
    error::require_file("Minimal GEOID file", path)?;
    read_reference(BufReader::new(File::open(path)?))
}

/// Write the sorted, deduplicated GEOIDs of `full` as a reference file.
pub fn write_minimal(path: &Path, full: &FullGeoids) -> Result<(), Error> {
    output::write_compact_json(
        path,
        &MinimalOut {
            geoids: &full.geoids,
        },
    )
}

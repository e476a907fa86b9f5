use crate::ozgeo::error::{self, Error};
use crate::ozgeo::output;
use crate::ozgeo::round::round_coords;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_DECIMALS: usize = 6;
const PROGRESS_EVERY: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimOptions {
    pub decimals: usize,
    pub keep_id: bool,
}

impl Default for TrimOptions {
    fn default() -> Self {
        TrimOptions {
            decimals: DEFAULT_DECIMALS,
            keep_id: false,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TrimmedGeometry {
    #[serde(rename = "type")]
    pub geom_type: Value,
    pub coordinates: Value,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TrimmedFeature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub geometry: TrimmedGeometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

/// Output document: the CRS and any other collection members are dropped.
#[derive(Debug, Serialize, PartialEq)]
pub struct TrimmedCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<TrimmedFeature>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrimStats {
    pub read: usize,
    pub kept: usize,
}

impl TrimStats {
    pub fn dropped(&self) -> usize {
        self.read - self.kept
    }
}

/// Reduce one feature to its geometry (and optionally its id).
///
/// Returns `None` when the feature has no usable geometry: `geometry` is
/// missing, null, not an object, or lacks `type` or `coordinates`.
pub fn trim_feature(feature: Value, opts: &TrimOptions) -> Option<TrimmedFeature> {
    let mut feature = match feature {
        Value::Object(o) => o,
        _ => return None,
    };
    let mut geom = match feature.remove("geometry") {
        Some(Value::Object(g)) => g,
        _ => return None,
    };
    let coordinates = geom.remove("coordinates")?;
    let geom_type = geom.remove("type")?;
    let id = if opts.keep_id {
        feature.remove("id")
    } else {
        None
    };
    Some(TrimmedFeature {
        kind: "Feature",
        geometry: TrimmedGeometry {
            geom_type,
            coordinates: round_coords(coordinates, opts.decimals),
        },
        id,
    })
}

fn take_features(doc: Value) -> Result<Vec<Value>, Error> {
    let mut doc: Map<String, Value> = match doc {
        Value::Object(o) => o,
        _ => return Err(shape_error()),
    };
    if doc.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        return Err(shape_error());
    }
    match doc.remove("features") {
        Some(Value::Array(features)) => Ok(features),
        Some(_) => Err(Error::InvalidInput(
            "expected 'features' to be an array".to_string(),
        )),
        None => Err(shape_error()),
    }
}

fn shape_error() -> Error {
    Error::InvalidInput("expected a FeatureCollection with 'features'".to_string())
}

/// Trim every feature of a parsed FeatureCollection, preserving order.
pub fn trim_collection(
    doc: Value,
    opts: &TrimOptions,
) -> Result<(TrimmedCollection, TrimStats), Error> {
    let features = take_features(doc)?;
    info!("Features: {}", features.len());

    let mut stats = TrimStats::default();
    let mut trimmed = Vec::with_capacity(features.len());
    for (i, f) in features.into_iter().enumerate() {
        stats.read += 1;
        match trim_feature(f, opts) {
            Some(t) => trimmed.push(t),
            None => debug!(index = i, "dropping feature without geometry"),
        }
        if (i + 1) % PROGRESS_EVERY == 0 {
            info!("  trimmed {} ...", i + 1);
        }
    }
    stats.kept = trimmed.len();

    let fc = TrimmedCollection {
        kind: "FeatureCollection",
        features: trimmed,
    };
    Ok((fc, stats))
}

pub fn read_json(label: &'static str, path: &Path) -> Result<Value, Error> {
    error::require_file(label, path)?;
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Read `input`, trim it and write the compact result to `output`.
pub fn trim_file(input: &Path, output: &Path, opts: &TrimOptions) -> Result<TrimStats, Error> {
    info!("Reading {} ...", input.display());
    let doc = read_json("Input GeoJSON", input)?;
    let (fc, stats) = trim_collection(doc, opts)?;

    info!("Writing {} ...", output.display());
    output::write_compact_json(output, &fc)?;
    info!(kept = stats.kept, dropped = stats.dropped(), "Done.");
    Ok(stats)
}

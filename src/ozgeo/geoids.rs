//! GEOID extraction from a full Opportunity Zone GeoJSON.
//!
//! Two interchangeable sources read `properties.GEOID10` from every feature:
//! [`StreamingSource`] visits the `features` array one element at a time so
//! memory stays proportional to the identifier set, and [`InMemorySource`]
//! parses the whole document first. Both must yield the same [`FullGeoids`]
//! for the same file.
//!
//! Only `properties` is decoded from a feature. Geometry, `type` and every
//! other member are skipped unread, so degenerate features are counted
//! rather than failing the run.
use crate::ozgeo::error::{self, Error};
use serde::de::{DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

pub const GEOID_PROPERTY: &str = "GEOID10";
const PROGRESS_EVERY: usize = 1000;

/// The part of a feature the comparator looks at.
#[derive(Debug, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FullGeoids {
    pub geoids: BTreeSet<String>,
    /// Raw number of features seen, with or without a GEOID.
    pub features: usize,
}

impl FullGeoids {
    pub fn unique(&self) -> usize {
        self.geoids.len()
    }

    fn add(&mut self, feature: &FeatureProperties) {
        self.features += 1;
        if let Some(g) = feature_geoid(feature) {
            self.geoids.insert(g);
        }
        if self.features % PROGRESS_EVERY == 0 {
            info!("  ... {} features", self.features);
        }
    }
}

/// Normalized `GEOID10` of a feature, if it has a non-null one.
///
/// Strings are trimmed. Other scalars use their JSON text, so `123` becomes
/// `"123"` and `true` becomes the JSON spelling `"true"`, never `"True"`.
pub fn feature_geoid(feature: &FeatureProperties) -> Option<String> {
    let value = feature.properties.as_ref()?.get(GEOID_PROPERTY)?;
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string().trim().to_string()),
    }
}

pub trait GeoidSource {
    fn name(&self) -> &'static str;
    fn read(&self, reader: Box<dyn Read + '_>) -> Result<FullGeoids, Error>;

    fn load(&self, path: &Path) -> Result<FullGeoids, Error> {
        error::require_file("Full GeoJSON", path)?;
        self.read(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Visits the top-level object, descending only into `features`.
struct CollectionVisitor<'a> {
    out: &'a mut FullGeoids,
}

impl<'de, 'a> Visitor<'de> for CollectionVisitor<'a> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a GeoJSON FeatureCollection object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        let out = self.out;
        while let Some(key) = map.next_key::<String>()? {
            if key == "features" {
                map.next_value_seed(FeaturesSeed { out: &mut *out })?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(())
    }
}

/// Folds the `features` array into `out` element by element. A `null`
/// array counts as empty.
struct FeaturesSeed<'a> {
    out: &'a mut FullGeoids,
}

impl<'de, 'a> DeserializeSeed<'de> for FeaturesSeed<'a> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de, 'a> Visitor<'de> for FeaturesSeed<'a> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of features")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        let out = self.out;
        while let Some(feature) = seq.next_element::<FeatureProperties>()? {
            out.add(&feature);
        }
        Ok(())
    }
}

pub struct StreamingSource;

impl GeoidSource for StreamingSource {
    fn name(&self) -> &'static str {
        "streaming"
    }

    fn read(&self, reader: Box<dyn Read + '_>) -> Result<FullGeoids, Error> {
        let mut out = FullGeoids::default();
        let mut de = serde_json::Deserializer::from_reader(reader);
        (&mut de).deserialize_map(CollectionVisitor { out: &mut out })?;
        de.end()?;
        Ok(out)
    }
}

pub struct InMemorySource;

impl GeoidSource for InMemorySource {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn read(&self, reader: Box<dyn Read + '_>) -> Result<FullGeoids, Error> {
        info!("  (Loading full file into memory; may use significant RAM)");
        let doc: Value = serde_json::from_reader(reader)?;
        let mut doc = match doc {
            Value::Object(o) => o,
            _ => {
                return Err(Error::InvalidInput(
                    "expected a GeoJSON FeatureCollection object".to_string(),
                ))
            }
        };
        let features = match doc.remove("features") {
            Some(Value::Array(features)) => features,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                return Err(Error::InvalidInput(
                    "expected 'features' to be an array".to_string(),
                ))
            }
        };
        let mut out = FullGeoids::default();
        for feature in features {
            out.add(&serde_json::from_value::<FeatureProperties>(feature)?);
        }
        Ok(out)
    }
}

/// The preferred source for this build: streaming when the `streaming`
/// feature is enabled.
#[cfg(feature = "streaming")]
pub fn geoid_source() -> Box<dyn GeoidSource> {
    Box::new(StreamingSource)
}

#[cfg(not(feature = "streaming"))]
pub fn geoid_source() -> Box<dyn GeoidSource> {
    Box::new(InMemorySource)
}

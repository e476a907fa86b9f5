use crate::ozgeo::config::CompareConfig;
use crate::ozgeo::error::{self, Error};
use crate::ozgeo::geoids::{FullGeoids, GeoidSource};
use crate::ozgeo::minimal::{self, ReferenceGeoids};
use std::collections::BTreeSet;
use std::io::{self, Write};
use tracing::info;

const LIST_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub checker_count: usize,
    pub full_features: usize,
    pub full_unique: usize,
    pub in_both: BTreeSet<String>,
    pub only_in_reference: BTreeSet<String>,
    pub only_in_full: BTreeSet<String>,
}

impl Comparison {
    pub fn new(reference: &ReferenceGeoids, full: &FullGeoids) -> Comparison {
        Comparison {
            checker_count: reference.count,
            full_features: full.features,
            full_unique: full.unique(),
            in_both: reference.geoids.intersection(&full.geoids).cloned().collect(),
            only_in_reference: reference.geoids.difference(&full.geoids).cloned().collect(),
            only_in_full: full.geoids.difference(&reference.geoids).cloned().collect(),
        }
    }

    /// Same set, and the checker list holds no duplicates.
    pub fn is_exact_match(&self) -> bool {
        self.only_in_reference.is_empty()
            && self.only_in_full.is_empty()
            && self.checker_count == self.full_unique
    }
}

/// Load both inputs named by `config` and compare their GEOID sets.
///
/// Both paths are checked before anything is read.
pub fn compare(config: &CompareConfig, source: &dyn GeoidSource) -> Result<Comparison, Error> {
    error::require_file("Full GeoJSON", &config.full_path)?;
    error::require_file("Minimal GEOID file", &config.reference_path)?;

    info!("Loading checker GEOIDs ({})...", config.reference_path.display());
    let reference = minimal::load_reference(&config.reference_path)?;
    info!("  Checker: {} GEOIDs", reference.count);

    info!("Loading full GeoJSON: {} ({})", config.full_path.display(), source.name());
    let full = source.load(&config.full_path)?;
    info!("  Full file: {} features, {} unique GEOID10", full.features, full.unique());

    Ok(Comparison::new(&reference, &full))
}

fn write_listing<W: Write>(out: &mut W, heading: &str, geoids: &BTreeSet<String>) -> io::Result<()> {
    if geoids.is_empty() {
        return Ok(());
    }
    writeln!(out, "{} (first {}):", heading, LIST_LIMIT)?;
    for g in geoids.iter().take(LIST_LIMIT) {
        writeln!(out, "  {}", g)?;
    }
    if geoids.len() > LIST_LIMIT {
        writeln!(out, "  ... and {} more", geoids.len() - LIST_LIMIT)?;
    }
    writeln!(out)
}

pub fn write_report<W: Write>(c: &Comparison, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Comparison ===")?;
    writeln!(out, "Checker list count:     {}", c.checker_count)?;
    writeln!(out, "Full file feature count: {}", c.full_features)?;
    writeln!(out, "Full file unique GEOID10: {}", c.full_unique)?;
    writeln!(out, "In both:               {}", c.in_both.len())?;
    writeln!(out, "Only in checker list:  {}", c.only_in_reference.len())?;
    writeln!(out, "Only in full GeoJSON:   {}", c.only_in_full.len())?;
    writeln!(out)?;

    write_listing(
        out,
        "GEOIDs in checker list but NOT in full GeoJSON",
        &c.only_in_reference,
    )?;
    write_listing(
        out,
        "GEOIDs in full GeoJSON but NOT in checker list",
        &c.only_in_full,
    )?;

    if c.is_exact_match() {
        writeln!(
            out,
            "Result: Checker list and full GeoJSON have the EXACT same {} zones (same GEOID set).",
            group_thousands(c.full_unique)
        )
    } else {
        writeln!(
            out,
            "Result: Lists DIFFER. Consider regenerating oz-geoid-minimal.json from the full GeoJSON."
        )
    }
}

/// `8765` -> `"8,765"`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{compare, group_thousands, write_report, Comparison};
    use crate::ozgeo::config::CompareConfig;
    use crate::ozgeo::geoids::{FullGeoids, InMemorySource, StreamingSource};
    use crate::ozgeo::minimal::ReferenceGeoids;
    use serde_json::json;
    use std::collections::BTreeSet;
    use std::fs;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn reference(ids: &[&str]) -> ReferenceGeoids {
        ReferenceGeoids {
            geoids: set(ids),
            count: ids.len(),
        }
    }

    fn full(ids: &[&str]) -> FullGeoids {
        FullGeoids {
            geoids: set(ids),
            features: ids.len(),
        }
    }

    fn report(c: &Comparison) -> String {
        let mut out = Vec::new();
        write_report(c, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn full_geojson(ids: &[&str]) -> String {
        let features: Vec<serde_json::Value> = ids
            .iter()
            .map(|g| json!({"type": "Feature", "geometry": null, "properties": {"GEOID10": g}}))
            .collect();
        json!({"type": "FeatureCollection", "features": features}).to_string()
    }

    #[test]
    fn set_algebra_partitions_both_sides() {
        let r = reference(&["A", "B", "C", "D"]);
        let f = full(&["C", "D", "E"]);
        let c = Comparison::new(&r, &f);
        assert_eq!(r.geoids.len(), c.in_both.len() + c.only_in_reference.len());
        assert_eq!(f.unique(), c.in_both.len() + c.only_in_full.len());
        assert_eq!(set(&["C", "D"]), c.in_both);
        assert_eq!(set(&["A", "B"]), c.only_in_reference);
        assert_eq!(set(&["E"]), c.only_in_full);
    }

    #[test]
    fn exact_match_report() {
        let r = reference(&["A", "B", "C"]);
        let f = FullGeoids {
            geoids: set(&["C", "A", "B"]),
            features: 4,
        };
        let c = Comparison::new(&r, &f);
        assert!(c.is_exact_match());
        let expected = "
=== Comparison ===
Checker list count:     3
Full file feature count: 4
Full file unique GEOID10: 3
In both:               3
Only in checker list:  0
Only in full GeoJSON:   0

Result: Checker list and full GeoJSON have the EXACT same 3 zones (same GEOID set).
";
        assert_eq!(expected, report(&c));
    }

    #[test]
    fn mismatch_report() {
        let c = Comparison::new(&reference(&["A", "B"]), &full(&["A", "C"]));
        assert_eq!(set(&["B"]), c.only_in_reference);
        assert_eq!(set(&["C"]), c.only_in_full);
        let text = report(&c);
        assert!(text.contains("GEOIDs in checker list but NOT in full GeoJSON (first 20):\n  B\n\n"));
        assert!(text.contains("GEOIDs in full GeoJSON but NOT in checker list (first 20):\n  C\n\n"));
        assert!(text.ends_with(
            "Result: Lists DIFFER. Consider regenerating oz-geoid-minimal.json from the full GeoJSON.\n"
        ));
    }

    #[test]
    fn duplicate_checker_entries_are_not_an_exact_match() {
        let r = ReferenceGeoids {
            geoids: set(&["A", "B"]),
            count: 3,
        };
        let c = Comparison::new(&r, &full(&["A", "B"]));
        assert!(c.only_in_reference.is_empty() && c.only_in_full.is_empty());
        assert!(!c.is_exact_match());
        assert!(report(&c).contains("Result: Lists DIFFER."));
    }

    #[test]
    fn long_listings_are_truncated_in_order() {
        let ids: Vec<String> = (0..25).rev().map(|i| format!("T{:02}", i)).collect();
        let refs: Vec<&str> = ids.iter().map(|s| s.as_str()).collect();
        let c = Comparison::new(&reference(&refs), &full(&[]));
        let text = report(&c);
        assert!(text.contains("  T00\n  T01\n"));
        assert!(text.contains("  T19\n  ... and 5 more\n"));
        assert!(!text.contains("T20"));
    }

    #[test]
    fn thousands() {
        assert_eq!("0", group_thousands(0));
        assert_eq!("999", group_thousands(999));
        assert_eq!("8,765", group_thousands(8765));
        assert_eq!("1,234,567", group_thousands(1234567));
    }

    #[test]
    fn compares_files_with_either_source() {
        let dir = tempfile::tempdir().unwrap();
        let config = CompareConfig {
            reference_path: dir.path().join("minimal.json"),
            full_path: dir.path().join("full.geojson"),
        };
        fs::write(&config.reference_path, r#"{"geoids":["A","B","C"]}"#).unwrap();
        fs::write(&config.full_path, full_geojson(&["B", "A", "C", "A"])).unwrap();

        let streamed = compare(&config, &StreamingSource).unwrap();
        let loaded = compare(&config, &InMemorySource).unwrap();
        assert_eq!(streamed, loaded);
        assert_eq!(3, streamed.checker_count);
        assert_eq!(4, streamed.full_features);
        assert_eq!(3, streamed.full_unique);
        assert!(streamed.is_exact_match());
    }

    #[test]
    fn missing_inputs_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = CompareConfig {
            reference_path: dir.path().join("minimal.json"),
            full_path: dir.path().join("full.geojson"),
        };
        let err = compare(&config, &StreamingSource).unwrap_err();
        assert_eq!(
            format!("Full GeoJSON not found: {}", config.full_path.display()),
            err.to_string()
        );

        fs::write(&config.full_path, full_geojson(&["A"])).unwrap();
        let err = compare(&config, &StreamingSource).unwrap_err();
        assert_eq!(
            format!("Minimal GEOID file not found: {}", config.reference_path.display()),
            err.to_string()
        );
    }
}

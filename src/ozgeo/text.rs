pub const MAIN_AFTER_HELP: &str = r#"
Tools for preparing and checking the Opportunity Zone boundary dataset.

Diagnostics and progress are written to STDERR. Set RUST_LOG=debug
for more detail, or RUST_LOG=warn to silence progress lines.
"#;

pub const TRIM_ABOUT: &str = "Trim a GeoJSON FeatureCollection down to geometry (and optionally id)";

pub const TRIM_AFTER_HELP: &str = r#"
Drops the collection's CRS and every feature's properties, and rounds
coordinates to --decimals places (6 is about 0.1m, 5 about 1m). Vertices
are never removed. Features without a geometry are skipped.

The whole input is held in memory while trimming.

Examples:

$ ozgeo trim Opportunity_Zones.geojson -o oz-trimmed.geojson
$ ozgeo trim Opportunity_Zones.geojson -o oz-trimmed.geojson --decimals 5 --keep-id
"#;

pub const COMPARE_ABOUT: &str = "Compare checker GEOIDs (oz-geoid-minimal.json) against a full GeoJSON";

pub const COMPARE_AFTER_HELP: &str = r#"
Reads public/data/oz-geoid-minimal.json from the installation root and
the GEOID10 property of every feature in the full GeoJSON, then reports
counts and differences on STDOUT.

A mismatch is reported, not treated as a failure: the exit status is
non-zero only when an input file is missing or unreadable.

Default full GeoJSON:
  ~/Downloads/Opportunity_Zones_2244808886865986276.geojson

Example:

$ ozgeo compare ~/data/Opportunity_Zones.geojson
"#;

pub const GEOIDS_ABOUT: &str = "Regenerate a minimal GEOID list from a full GeoJSON";

pub const GEOIDS_AFTER_HELP: &str = r#"
Writes {"geoids":[...]} with every distinct GEOID10 in ascending order.

Example:

$ ozgeo geoids Opportunity_Zones.geojson -o public/data/oz-geoid-minimal.json
"#;

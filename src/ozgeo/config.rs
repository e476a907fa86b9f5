use std::path::{Path, PathBuf};
use tracing::warn;

pub const MINIMAL_RELATIVE_PATH: &str = "public/data/oz-geoid-minimal.json";
pub const DEFAULT_FULL_FILENAME: &str = "Opportunity_Zones_2244808886865986276.geojson";

/// Where `compare` reads its two inputs from.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    /// Minimal GEOID list (`{"geoids": [...]}`).
    pub reference_path: PathBuf,
    /// Full Opportunity Zone GeoJSON.
    pub full_path: PathBuf,
}

impl CompareConfig {
    /// Reference file under `root`, full file under `home`'s Downloads folder.
    pub fn with_defaults(root: &Path, home: &Path) -> CompareConfig {
        CompareConfig {
            reference_path: root.join(MINIMAL_RELATIVE_PATH),
            full_path: home.join("Downloads").join(DEFAULT_FULL_FILENAME),
        }
    }

    pub fn with_full_path<P: Into<PathBuf>>(mut self, path: Option<P>) -> CompareConfig {
        if let Some(p) = path {
            self.full_path = p.into();
        }
        self
    }
}

/// Root directory the binary was built from.
pub fn install_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn home_dir() -> PathBuf {
    home_or_current(home::home_dir())
}

/// Falls back to the current directory, with a warning, when no home
/// directory can be determined.
fn home_or_current(home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(h) => h,
        None => {
            warn!("could not determine home directory; resolving the default full GeoJSON path against the current directory");
            PathBuf::from(".")
        }
    }
}

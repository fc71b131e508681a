//! XDG Base Directory Support
//!
//! Resolves where the café finder looks for its configuration file
//! and an optional catalog file on Linux/Unix systems.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "cafe-finder";

/// Where a directory comes from, in lookup order
struct DirSource {
    /// Full-path override for this app only
    app_var: &'static str,
    /// XDG base variable; the app directory is appended
    xdg_var: &'static str,
    /// Fallback under `$HOME` when neither variable is set
    home_default: &'static [&'static str],
}

const CONFIG: DirSource = DirSource {
    app_var: "CAFE_CONFIG_DIR",
    xdg_var: "XDG_CONFIG_HOME",
    home_default: &[".config"],
};

const DATA: DirSource = DirSource {
    app_var: "CAFE_DATA_DIR",
    xdg_var: "XDG_DATA_HOME",
    home_default: &[".local", "share"],
};

impl DirSource {
    fn resolve(&self) -> PathBuf {
        if let Ok(dir) = env::var(self.app_var) {
            return PathBuf::from(dir);
        }

        let base = match env::var(self.xdg_var) {
            Ok(xdg) => PathBuf::from(xdg),
            Err(_) => self.home_default.iter().fold(
                dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
                |path, segment| path.join(segment),
            ),
        };
        base.join(APP_DIR)
    }
}

/// Directories the café finder reads from
///
/// `CAFE_*_DIR` wins over `XDG_*_HOME`, which wins over the
/// `$HOME`-relative default.
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    pub fn new() -> Self {
        Self {
            config_dir: CONFIG.resolve(),
            data_dir: DATA.resolve(),
        }
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Catalog file picked up when none is configured explicitly
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("catalog.toml")
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config file: {:?}", self.config_file());
        tracing::debug!("  Catalog file: {:?}", self.catalog_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

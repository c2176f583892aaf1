//! Engine configuration (`gantry.toml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use gantry_types::error::{GantryError, Result};
use gantry_types::geometry::Size;

/// Where screens are loaded from and how large the screen is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScreenConfig {
    /// Directory screen markup files are resolved against.
    #[serde(default = "default_gui_dir")]
    pub gui_dir: PathBuf,
    #[serde(default = "default_width")]
    pub screen_width: u32,
    #[serde(default = "default_height")]
    pub screen_height: u32,
}

fn default_gui_dir() -> PathBuf {
    PathBuf::from("data/gui")
}
fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            gui_dir: default_gui_dir(),
            screen_width: default_width(),
            screen_height: default_height(),
        }
    }
}

impl ScreenConfig {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| GantryError::Config(format!("gantry.toml: {e}")))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| GantryError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&source)
            .map_err(|e| GantryError::Config(format!("{}: {e}", path.display())))
    }

    /// Screen bounds root widgets are laid out against.
    pub fn screen_size(&self) -> Size {
        Size::new(
            i32::try_from(self.screen_width).unwrap_or(i32::MAX),
            i32::try_from(self.screen_height).unwrap_or(i32::MAX),
        )
    }

    /// Path of a screen file inside the GUI directory.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.gui_dir.join(filename)
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default input size limit: 100 MiB.
pub const DEFAULT_MAX_SIZE: usize = 100 * 1024 * 1024;

/// File name looked up in the working directory.
const LOCAL_CONFIG_FILE: &str = "base64-rfc.toml";

/// Effective settings for the command-line tool.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// Append a newline after encoded output
    pub newline: bool,
    /// Strip surrounding ASCII whitespace before decoding
    pub trim: bool,
    /// Maximum input size in bytes (0 = unlimited)
    pub max_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            newline: true,
            trim: true,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// One layer of settings as read from TOML. Absent keys keep the value from
/// earlier layers.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsLayer {
    #[serde(default)]
    pub newline: Option<bool>,
    #[serde(default)]
    pub trim: Option<bool>,
    #[serde(default)]
    pub max_size: Option<usize>,
}

/// Contents of a configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub settings: SettingsLayer,
}

#[derive(Serialize)]
struct ConfigView<'a> {
    settings: &'a Settings,
}

impl ConfigFile {
    /// Parses a configuration file from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a configuration file from a path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }
}

impl Settings {
    /// Location of the per-user configuration file, if the platform has a
    /// config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("base64-rfc").join("config.toml"))
    }

    /// Applies a layer on top of these settings.
    pub fn merge(&mut self, file: ConfigFile) {
        let layer = file.settings;
        if let Some(newline) = layer.newline {
            self.newline = newline;
        }
        if let Some(trim) = layer.trim {
            self.trim = trim;
        }
        if let Some(max_size) = layer.max_size {
            self.max_size = max_size;
        }
    }

    /// Loads settings with overrides from standard locations.
    ///
    /// Applied in order, later layers winning:
    /// 1. Built-in defaults
    /// 2. `<config dir>/base64-rfc/config.toml`
    /// 3. `./base64-rfc.toml`
    /// 4. `explicit`, with `~` expanded
    ///
    /// A file at a standard location that fails to parse is skipped with a
    /// warning. An explicit file that is missing or broken is an error.
    pub fn load_with_overrides(explicit: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Settings::default();

        let standard = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)));
        for path in standard {
            if !path.exists() {
                continue;
            }
            match ConfigFile::load_from_file(&path) {
                Ok(file) => {
                    debug!(path = %path.display(), "loaded config");
                    settings.merge(file);
                }
                Err(e) => {
                    warn!(path = %path.display(), "failed to load config: {}", e);
                }
            }
        }

        if let Some(path) = explicit {
            let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
            let file = ConfigFile::load_from_file(&expanded)
                .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
            debug!(path = %expanded.display(), "loaded config");
            settings.merge(file);
        }

        Ok(settings)
    }

    /// Renders the settings as a TOML document with a `[settings]` table.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&ConfigView { settings: self })
    }

    /// Renders the settings as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ConfigView { settings: self })
    }
}

//! Configuration loading for window descriptions
//!
//! Settings files are plain TOML or RON; the format is picked from the file
//! extension. [`WindowBuilder::from_settings`](crate::WindowBuilder::from_settings)
//! turns loaded settings into a builder.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading or saving settings files
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// File extension is neither `.toml` nor `.ron`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// A serializable settings type loadable from TOML or RON files
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load settings from a file, picking the format from the extension
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or has an
    /// unsupported extension.
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());
        if !matches!(extension, Some("toml" | "ron")) {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        if extension == Some("toml") {
            toml::from_str(&contents).map_err(|err| ConfigError::Parse(err.to_string()))
        } else {
            ron::from_str(&contents).map_err(|err| ConfigError::Parse(err.to_string()))
        }
    }

    /// Save settings to a file, picking the format from the extension
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if serialization or the write fails, or the
    /// extension is unsupported.
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|err| ConfigError::Serialize(err.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|err| ConfigError::Serialize(err.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Window description as it appears in settings files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window title
    pub title: String,
    /// Client area width in screen coordinates
    pub width: u32,
    /// Client area height in screen coordinates
    pub height: u32,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Create the window visible
    pub visible: bool,
    /// Create the window with decorations
    pub decorated: bool,
    /// Give the window input focus on creation
    pub focused: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: String::from("window_kit"),
            width: 1280,
            height: 720,
            resizable: false,
            visible: true,
            decorated: true,
            focused: true,
        }
    }
}

impl Config for WindowSettings {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let settings: WindowSettings =
            toml::from_str("title = \"probe\"\nwidth = 640\nheight = 480\n").unwrap();
        assert_eq!(settings.title, "probe");
        assert_eq!((settings.width, settings.height), (640, 480));
        assert!(!settings.resizable);
        assert!(settings.decorated);
    }

    #[test]
    fn toml_round_trip() {
        let settings = WindowSettings {
            title: String::from("round trip"),
            width: 800,
            height: 600,
            resizable: true,
            visible: false,
            decorated: false,
            focused: false,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let loaded: WindowSettings = toml::from_str(&text).unwrap();
        assert_eq!(loaded.title, settings.title);
        assert_eq!(loaded.width, settings.width);
        assert_eq!(loaded.resizable, settings.resizable);
        assert_eq!(loaded.visible, settings.visible);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let result = WindowSettings::load_from_file("window.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}

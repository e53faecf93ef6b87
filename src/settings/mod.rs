use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};
use thiserror::Error;

use cprimaze::maze::DEFAULT_SEED;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

pub const DEFAULT_CELL_SIZE: u32 = 20;
pub const DEFAULT_WALL_GLYPH: &str = "[]";
pub const DEFAULT_PASSAGE_GLYPH: &str = "  ";
pub const DEFAULT_PATH_GLYPH: &str = "🐾";
pub const DEFAULT_PATH_COLOR: Rgb = Rgb(0, 255, 0);

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Failed to parse settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("Cell size must be at least 1 pixel")]
    CellSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_seed: Option<u64>,
    #[serde(default)]
    pub cell_size: Option<u32>,
    #[serde(default)]
    pub wall_glyph: Option<String>,
    #[serde(default)]
    pub passage_glyph: Option<String>,
    #[serde(default)]
    pub path_glyph: Option<String>,
    #[serde(default)]
    pub colored_output: Option<bool>,
    #[serde(default)]
    pub path_color: Option<Rgb>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub fn get_default_seed(&self) -> u64 {
        self.default_seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn set_cell_size(mut self, value: u32) -> Self {
        self.cell_size = Some(value);
        self
    }

    /// Pixel size of a single cell, shared by PNG export and import.
    pub fn get_cell_size(&self) -> u32 {
        self.cell_size.unwrap_or(DEFAULT_CELL_SIZE)
    }

    pub fn get_wall_glyph(&self) -> &str {
        self.wall_glyph.as_deref().unwrap_or(DEFAULT_WALL_GLYPH)
    }

    pub fn get_passage_glyph(&self) -> &str {
        self.passage_glyph.as_deref().unwrap_or(DEFAULT_PASSAGE_GLYPH)
    }

    pub fn get_path_glyph(&self) -> &str {
        self.path_glyph.as_deref().unwrap_or(DEFAULT_PATH_GLYPH)
    }

    pub fn set_colored_output(mut self, value: bool) -> Self {
        self.colored_output = Some(value);
        self
    }

    pub fn get_colored_output(&self) -> bool {
        self.colored_output.unwrap_or(true)
    }

    pub fn get_path_color(&self) -> Rgb {
        self.path_color.unwrap_or(DEFAULT_PATH_COLOR)
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("primaze")
            .join("settings.ron")
    }

    pub fn parse(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(text)
    }

    /// Loads settings from `path`, writing the default settings there first if there's no file.
    pub fn load(path: PathBuf) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Creating default settings at {:?}", path);
                Self::reset_config(path.clone())?;
                DEFAULT_SETTINGS.to_string()
            }
            Err(source) => return Err(SettingsError::Io { path, source }),
        };

        let settings =
            Self::parse(&text).map_err(|source| SettingsError::Parse { path, source })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn reset_config(path: PathBuf) -> Result<(), SettingsError> {
        let write = || -> io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, DEFAULT_SETTINGS)
        };

        write().map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.get_cell_size() == 0 {
            return Err(SettingsError::CellSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = Settings::parse(DEFAULT_SETTINGS).unwrap();

        assert_eq!(settings.get_default_seed(), DEFAULT_SEED);
        assert_eq!(settings.get_cell_size(), DEFAULT_CELL_SIZE);
        assert_eq!(settings.get_wall_glyph(), DEFAULT_WALL_GLYPH);
        assert_eq!(settings.get_path_glyph(), DEFAULT_PATH_GLYPH);
        assert_eq!(settings.get_path_color(), DEFAULT_PATH_COLOR);
        assert_eq!(settings.get_log_level(), LogLevel::Warn);
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::parse("(cell_size: 8, log_level: Debug)").unwrap();

        assert_eq!(settings.get_cell_size(), 8);
        assert_eq!(settings.get_log_level(), LogLevel::Debug);
        assert_eq!(settings.get_default_seed(), DEFAULT_SEED);
        assert_eq!(settings.get_passage_glyph(), DEFAULT_PASSAGE_GLYPH);
        assert!(settings.get_colored_output());
    }

    #[test]
    fn load_creates_file() {
        let path = std::env::temp_dir()
            .join(format!("primaze-settings-{}", std::process::id()))
            .join("settings.ron");
        let _ = fs::remove_file(&path);

        let settings = Settings::load(path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(settings.get_cell_size(), DEFAULT_CELL_SIZE);

        fs::write(&path, "(cell_size: 0)").unwrap();
        assert!(matches!(
            Settings::load(path.clone()),
            Err(SettingsError::CellSize)
        ));

        fs::write(&path, "(cell_size: ").unwrap();
        assert!(matches!(
            Settings::load(path.clone()),
            Err(SettingsError::Parse { .. })
        ));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}

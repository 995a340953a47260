use crate::speech::SkipUnit;
use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_WPM: u64 = 180;

#[derive(Deserialize)]
#[serde(default)]
pub struct Settings {
    pub words_per_minute: u64,
    pub skip_boundary: SkipUnit,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            words_per_minute: DEFAULT_WPM,
            skip_boundary: SkipUnit::Paragraph,
        }
    }
}

impl Settings {
    /// Reads settings from the user's config directory. Missing or
    /// unreadable files fall back to defaults rather than failing startup.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                let file_str = std::fs::read_to_string(path)?;
                Ok(toml::from_str::<Settings>(&file_str)?)
            })
            .unwrap_or_default()
    }

    fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory!"))?;
        Ok(dir.join("oratus").join("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let settings = toml::from_str::<Settings>("").unwrap();
        assert_eq!(settings.words_per_minute, DEFAULT_WPM);
        assert_eq!(settings.skip_boundary, SkipUnit::Paragraph);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let settings = toml::from_str::<Settings>("words_per_minute = 140").unwrap();
        assert_eq!(settings.words_per_minute, 140);
        assert_eq!(settings.skip_boundary, SkipUnit::Paragraph);
    }

    #[test]
    fn parses_skip_boundary() {
        let settings = toml::from_str::<Settings>("skip_boundary = \"sentence\"").unwrap();
        assert_eq!(settings.skip_boundary, SkipUnit::Sentence);
    }
}

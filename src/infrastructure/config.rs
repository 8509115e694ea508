use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::domain::format::DEFAULT_PRECISION;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Decimals shown for conversion results
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// The embedded defaults, without looking at the filesystem.
    pub fn from_defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads user configuration from the config directory on top of the
    /// embedded defaults. A missing user file is not an error.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_data_dir(), &utils::get_config_dir())
    }

    pub fn load_from(data_dir: &std::path::Path, config_dir: &std::path::Path) -> Result<Self, ConfigError> {
        let default_config = Self::from_defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Modifier, Style};

    use super::*;
    use crate::presentation::config::Action;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("unitui-config-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn test_defaults_parse() -> Result<(), ConfigError> {
        let cfg = Config::from_defaults()?;
        assert_eq!(cfg.display.precision, 2);
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Convert)
        );
        assert_eq!(
            cfg.styles.style("focused"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        );
        Ok(())
    }

    #[test]
    fn test_missing_user_config_falls_back_to_defaults() -> Result<(), ConfigError> {
        let dir = scratch_dir("missing");
        let cfg = Config::load_from(&dir, &dir)?;
        assert_eq!(cfg.display, DisplayConfig::default());
        assert_eq!(cfg.config._config_dir, dir);
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        Ok(())
    }

    #[test]
    fn test_user_config_overrides_and_merges() -> Result<(), ConfigError> {
        let dir = scratch_dir("override");
        fs::write(
            dir.join("config.json5"),
            r#"{
                "keybindings": { "<x>": "Quit", "<Enter>": "ClearResult" },
                "styles": { "result": "blue" },
                "display": { "precision": 4 },
            }"#,
        )
        .expect("write config");

        let cfg = Config::load_from(&dir, &dir)?;
        assert_eq!(cfg.display.precision, 4);
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        // user binding wins over the default one
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::ClearResult)
        );
        // defaults fill the gaps
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Action::FocusNext)
        );
        assert_eq!(cfg.styles.style("result"), Style::default().fg(Color::Blue));
        assert_eq!(cfg.styles.style("error"), Style::default().fg(Color::Red));

        let _ = fs::remove_dir_all(&dir);
        Ok(())
    }
}

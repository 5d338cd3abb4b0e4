//! Settings from the TOML file and command line.

use crate::cli::Cli;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use tictactoe_core::{ConfigError, MatchConfig, Seat, StartPolicy};
use tracing::{debug, info, instrument};

/// Largest board that fits a typical terminal.
pub const MAX_BOARD_SIZE: usize = 9;
/// Default frame rate.
pub const DEFAULT_FPS: u32 = 30;
/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

/// Contents of the optional settings file. Missing keys fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    /// Board side length.
    pub board_size: Option<usize>,
    /// Score ceiling.
    pub score_ceiling: Option<u32>,
    /// First player's name.
    pub player_one: Option<String>,
    /// Second player's name.
    pub player_two: Option<String>,
    /// Retry start policy.
    pub start_policy: Option<StartPolicy>,
    /// Frames per second.
    pub fps: Option<u32>,
}

impl FileSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!("Settings loaded");
        Ok(settings)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Getters)]
pub struct Settings {
    /// Match configuration handed to the core.
    match_config: MatchConfig,
    /// Frames per second.
    fps: u32,
    /// Log file path.
    log_file: PathBuf,
}

impl Settings {
    /// Reads the settings file named on the command line, if any, then
    /// applies command-line overrides.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileSettings::from_file(path)?,
            None => FileSettings::default(),
        };
        Self::resolve(cli, file)
    }

    /// Merges file settings with command-line overrides and validates.
    #[instrument(skip(cli, file))]
    pub fn resolve(cli: &Cli, file: FileSettings) -> Result<Self, ConfigError> {
        let mut config = MatchConfig::new();

        let size = cli.size.or(file.board_size).unwrap_or(*config.board_size());
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::new(format!(
                "Board size must be between 1 and {}, got {}",
                MAX_BOARD_SIZE, size
            )));
        }
        config = config.with_board_size(size);

        if let Some(ceiling) = cli.ceiling.or(file.score_ceiling) {
            let ceiling = NonZeroU32::new(ceiling)
                .ok_or_else(|| ConfigError::new("Score ceiling must be at least 1"))?;
            config = config.with_score_ceiling(ceiling);
        }

        if let Some(name) = cli.player_one.clone().or(file.player_one) {
            config = config.with_name(Seat::One, name);
        }
        if let Some(name) = cli.player_two.clone().or(file.player_two) {
            config = config.with_name(Seat::Two, name);
        }
        if let Some(policy) = cli.start_policy.or(file.start_policy) {
            config = config.with_start_policy(policy);
        }
        config.validate()?;

        let fps = cli.fps.or(file.fps).unwrap_or(DEFAULT_FPS);
        if !(1..=MAX_FPS).contains(&fps) {
            return Err(ConfigError::new(format!(
                "Frame rate must be between 1 and {}, got {}",
                MAX_FPS, fps
            )));
        }

        Ok(Self {
            match_config: config,
            fps,
            log_file: cli.log_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli() -> Cli {
        Cli {
            log_file: PathBuf::from("test.log"),
            ..Cli::default()
        }
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load(&cli()).unwrap();
        assert_eq!(*settings.fps(), DEFAULT_FPS);
        assert_eq!(*settings.match_config(), MatchConfig::new());
        assert_eq!(settings.log_file(), &PathBuf::from("test.log"));
    }

    #[test]
    fn test_file_values_applied() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
board_size = 4
score_ceiling = 10
player_one = "Ada"
start_policy = "alternate"
fps = 60
"#
        )
        .unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..cli()
        };
        let settings = Settings::load(&cli).unwrap();
        let config = settings.match_config();

        assert_eq!(*config.board_size(), 4);
        assert_eq!(config.score_ceiling().get(), 10);
        assert_eq!(config.name(Seat::One), "Ada");
        assert_eq!(config.name(Seat::Two), "P2");
        assert_eq!(*config.start_policy(), StartPolicy::Alternate);
        assert_eq!(*settings.fps(), 60);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileSettings {
            board_size: Some(4),
            player_two: Some("Grace".to_string()),
            ..FileSettings::default()
        };
        let cli = Cli {
            size: Some(5),
            player_two: Some("Linus".to_string()),
            start_policy: Some(StartPolicy::SeatOne),
            ..cli()
        };

        let settings = Settings::resolve(&cli, file).unwrap();
        let config = settings.match_config();

        assert_eq!(*config.board_size(), 5);
        assert_eq!(config.name(Seat::Two), "Linus");
        assert_eq!(*config.start_policy(), StartPolicy::SeatOne);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        for cli in [
            Cli { size: Some(0), ..cli() },
            Cli { size: Some(10), ..cli() },
            Cli { ceiling: Some(0), ..cli() },
            Cli { fps: Some(0), ..cli() },
            Cli { player_one: Some(String::new()), ..cli() },
        ] {
            assert!(Settings::resolve(&cli, FileSettings::default()).is_err(), "{cli:?}");
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_sise = 4").unwrap();

        let err = FileSettings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse"));
    }

    #[test]
    fn test_missing_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSettings::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read"));
    }
}

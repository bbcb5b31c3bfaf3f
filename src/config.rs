use crate::consts;
use crate::game::Grid;
use crate::highscores::{BestScore, FileStore, SaveError};
use crate::render::Palette;
use crate::speed::SpeedPolicy;
use ratatui::style::Color;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// How fast the snake moves as the score goes up
    #[serde(default)]
    pub(crate) speed: SpeedPolicy,

    #[serde(default)]
    pub(crate) clock: ClockConfig,

    #[serde(default)]
    pub(crate) input: InputConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    #[serde(default)]
    pub(crate) colors: ColorConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("adaptasnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which the best score should be stored: the file
    /// given in the configuration or, if that is not set, the default path.
    /// Return `None` if no path is present in the configuration and the
    /// default path could not be computed.
    fn best_score_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .best_score_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| FileStore::default_path().map(Cow::from))
    }

    /// Load the best score from the configured file.
    ///
    /// If `self.files.save_best` is `false`, an in-memory best score is
    /// returned without touching the disk.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the best score file's directory cannot be written
    /// to, in which case the caller should fall back to
    /// [`BestScore::in_memory()`].
    pub(crate) fn load_best_score(&self) -> Result<BestScore, SaveError> {
        if !self.files.save_best {
            log::info!("Saving the best score is disabled");
            return Ok(BestScore::in_memory());
        }
        let path = self.best_score_file().ok_or_else(SaveError::no_path)?;
        let store = FileStore::open(path.into_owned())?;
        log::info!("Keeping best score in {}", store.path().display());
        Ok(BestScore::load(Box::new(store)))
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    pub(crate) grid: Grid,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    grid_size: u16,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            grid_size: consts::GRID_SIZE,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GridSizeError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, GridSizeError> {
        Grid::new(value.grid_size)
            .map(|grid| GameConfig { grid })
            .ok_or(GridSizeError(value.grid_size))
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "grid-size must be between {min} and {max}, got {0}",
    min = Grid::MIN_SIZE,
    max = Grid::MAX_SIZE
)]
pub(crate) struct GridSizeError(u16);

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(from = "RawClockConfig")]
pub(crate) struct ClockConfig {
    /// `None` if the backlog of ticks is never capped
    pub(crate) max_catch_up_ticks: Option<u32>,
}

impl Default for ClockConfig {
    fn default() -> ClockConfig {
        ClockConfig::from(RawClockConfig::default())
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawClockConfig {
    max_catch_up_ticks: u32,
}

impl Default for RawClockConfig {
    fn default() -> RawClockConfig {
        RawClockConfig {
            max_catch_up_ticks: consts::MAX_CATCH_UP_TICKS,
        }
    }
}

impl From<RawClockConfig> for ClockConfig {
    fn from(value: RawClockConfig) -> ClockConfig {
        ClockConfig {
            max_catch_up_ticks: Some(value.max_catch_up_ticks).filter(|&n| n > 0),
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct InputConfig {
    /// Minimum length of a swipe, in approximate pixels
    pub(crate) swipe_threshold: u32,
}

impl Default for InputConfig {
    fn default() -> InputConfig {
        InputConfig {
            swipe_threshold: consts::SWIPE_THRESHOLD,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the best score should be stored
    best_score_file: Option<PathBuf>,

    /// Whether to load & save the best score in a file
    save_best: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            best_score_file: None,
            save_best: true,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawColorConfig")]
pub(crate) struct ColorConfig {
    pub(crate) palette: Palette,
}

/// Colors as written in the configuration file: either names like `"green"`
/// or hex codes like `"#6ad972"`
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
struct RawColorConfig {
    snake: Option<String>,
    head: Option<String>,
    apple: Option<String>,
}

impl TryFrom<RawColorConfig> for ColorConfig {
    type Error = ColorError;

    fn try_from(value: RawColorConfig) -> Result<ColorConfig, ColorError> {
        fn parse(
            key: &'static str,
            value: Option<String>,
            default: Color,
        ) -> Result<Color, ColorError> {
            match value {
                Some(s) => Color::from_str(&s).map_err(|_| ColorError { key, value: s }),
                None => Ok(default),
            }
        }

        Ok(ColorConfig {
            palette: Palette {
                snake: parse("snake", value.snake, consts::SNAKE_COLOR)?,
                head: parse("head", value.head, consts::HEAD_COLOR)?,
                apple: parse("apple", value.apple, consts::APPLE_COLOR)?,
            },
        })
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid color for {key}: {value:?}")]
pub(crate) struct ColorError {
    key: &'static str,
    value: String,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

use std::path::Path;

use serde::{Deserialize, Serialize};
use slicecube_core::prelude::*;

/// Built-in settings, layered under the user's settings file.
const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");
const DEFAULT_SETTINGS_FORMAT: config::FileFormat = config::FileFormat::Yaml;

/// Prefix for environment variables that override settings, such as
/// `SLICECUBE_SIZE=4` or `SLICECUBE_SHUFFLE__MOVES=20`.
const ENV_PREFIX: &str = "SLICECUBE";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub size: usize,
    pub coloring: InitialColoring,
    pub palette: PaletteSettings,
    #[serde(default)]
    pub shuffle: ShuffleSettings,
}
impl Default for Settings {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            size: 3,
            coloring: InitialColoring::default(),
            palette: PaletteSettings {
                faces: palette.face_colors(),
                hidden: palette.hidden(),
            },
            shuffle: ShuffleSettings::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct PaletteSettings {
    pub faces: [Color; 6],
    pub hidden: Color,
}

#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ShuffleSettings {
    pub moves: Option<u32>,
}

impl Settings {
    /// Loads settings from the built-in defaults, then `user_file` (if any),
    /// then environment variables. If loading fails, logs a warning and
    /// returns the built-in defaults.
    pub fn load(user_file: Option<&Path>) -> Self {
        Self::load_with_env(user_file, None)
    }

    /// Same as [`Settings::load()`], but reads environment variables from
    /// `env` instead of the process environment if it is `Some`.
    fn load_with_env(user_file: Option<&Path>, env: Option<config::Map<String, String>>) -> Self {
        let default_config_source =
            config::File::from_str(DEFAULT_SETTINGS_STR, DEFAULT_SETTINGS_FORMAT);
        let mut config = config::Config::builder().add_source(default_config_source.clone());

        if let Some(path) = user_file {
            log::debug!("loading settings from {}", path.display());
            config = config.add_source(config::File::from(path));
        }

        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("palette.faces")
                .source(env),
        );

        config
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|e| {
                log::warn!("Error loading settings: {e}");

                config::Config::builder()
                    .add_source(default_config_source)
                    .build()
                    .and_then(|c| c.try_deserialize())
                    .unwrap_or_default()
            })
    }

    /// Constructs a solved puzzle with these settings.
    pub fn new_puzzle(&self) -> Result<Puzzle> {
        let size = GridSize::new(self.size)?;
        let palette = Palette::new(self.palette.faces, self.palette.hidden)?;
        Ok(Puzzle::new(size, palette, self.coloring))
    }

    /// Returns the type of shuffle to use when no move count is given on the
    /// command line.
    pub fn shuffle_type(&self) -> ShuffleType {
        match self.shuffle.moves {
            Some(n) => ShuffleType::Exact(n),
            None => ShuffleType::Random,
        }
    }
}

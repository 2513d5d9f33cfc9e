//! Configuration management
//!
//! Resolves the session configuration from built-in defaults, an optional
//! config file, `TIERED_FM_*` environment variables and command line
//! overrides, in that order of precedence (last wins).

use config::{Config, ConfigError, Environment, File};
use directories::BaseDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::access::Mode;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_NAME: &str = "tiered-fm";
pub const ENV_PREFIX: &str = "TIERED_FM";

const DEFAULT_START_DIR: &str = "Downloads";
const DEFAULT_LOG_DIR: &str = "fm_log";
const DEFAULT_LOG_FILE: &str = "system_log.txt";
const DEFAULT_BACKUP_DIR: &str = "backups";

/// Everything the session needs, resolved once at startup.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Capability gate for the whole session
    pub mode: Mode,

    /// Initial browse location
    pub start_directory: PathBuf,

    /// Root the start directory is checked against
    pub root_directory: PathBuf,

    /// Action log file
    pub log_path: PathBuf,

    /// Where deleted items are copied before removal
    pub backup_path: PathBuf,
}

/// Values supplied on the command line; `None` leaves lower layers in charge.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub mode: Option<Mode>,
    pub start_directory: Option<PathBuf>,
    pub root_directory: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub backup_path: Option<PathBuf>,
}

impl ManagerConfig {
    /// Defaults laid out under `home`.
    pub fn new(mode: Mode, home: &Path) -> Self {
        Self {
            mode,
            start_directory: home.join(DEFAULT_START_DIR),
            root_directory: home.to_path_buf(),
            log_path: home.join(DEFAULT_LOG_DIR).join(DEFAULT_LOG_FILE),
            backup_path: home.join(DEFAULT_BACKUP_DIR),
        }
    }

    pub fn with_start_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.start_directory = path.into();
        self
    }

    pub fn with_root_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_directory = path.into();
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    pub fn with_backup_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup_path = path.into();
        self
    }

    /// Load configuration with the user's home directory as the default base.
    pub fn load(
        config_file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let home = home_directory()?;
        Self::load_with_home(&home, config_file, overrides)
    }

    /// Load configuration with an explicit base for the defaults.
    pub fn load_with_home(
        home: &Path,
        config_file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        // The mode has no default: it must come from a file, env or the CLI.
        let defaults = Self::new(Mode::Basic, home);

        let mut builder = Config::builder()
            .set_default("start_directory", path_value(&defaults.start_directory))?
            .set_default("root_directory", path_value(&defaults.root_directory))?
            .set_default("log_path", path_value(&defaults.log_path))?
            .set_default("backup_path", path_value(&defaults.backup_path))?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("mode", overrides.mode.map(|m| m.as_str()))?
            .set_override_option(
                "start_directory",
                overrides.start_directory.as_deref().map(path_value),
            )?
            .set_override_option(
                "root_directory",
                overrides.root_directory.as_deref().map(path_value),
            )?
            .set_override_option("log_path", overrides.log_path.as_deref().map(path_value))?
            .set_override_option(
                "backup_path",
                overrides.backup_path.as_deref().map(path_value),
            )?
            .build()?;

        let config: ManagerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("start_directory", &self.start_directory),
            ("root_directory", &self.root_directory),
            ("log_path", &self.log_path),
            ("backup_path", &self.backup_path),
        ];

        for (key, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Message(format!("{key} cannot be empty")));
            }
        }

        Ok(())
    }
}

/// The current user's home directory.
pub fn home_directory() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| ConfigError::Message("cannot determine home directory".into()))
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

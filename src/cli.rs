//! Command-line interface definitions

use clap::Parser;
use std::path::PathBuf;

use crate::access::Mode;
use crate::config::ConfigOverrides;

/// Menu-driven file manager with basic, elevated and admin modes
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Mode of operation
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Mode,

    /// Directory to start browsing in (default: ~/Downloads)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Configuration file (default: ./tiered-fm.{toml,json,yaml,...} if present)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root the start directory must stay under (default: home directory)
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Action log file (default: ~/fm_log/system_log.txt)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Backup directory for deleted items (default: ~/backups)
    #[arg(long = "backup-dir", value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,
}

impl Args {
    /// Command line values as the top configuration layer.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mode: Some(self.mode),
            start_directory: self.directory.clone(),
            root_directory: self.root.clone(),
            log_path: self.log_file.clone(),
            backup_path: self.backup_dir.clone(),
        }
    }
}

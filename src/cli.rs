use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Counter, text echo and color toggle in the terminal.
#[derive(Debug, Parser)]
#[command(name = "tally", version)]
pub struct Args {
    /// Config file to use instead of ~/.config/tally/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Replay a JSON-lines action script and print the final state
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Fail on unrecognized action kinds instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Start in light mode
    #[arg(long)]
    pub light: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if self.strict {
            config.replay.strict = true;
        }
        if self.light {
            config.defaults.dark_mode = false;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from(["tally", "--strict", "--light", "--log-file", "/tmp/t.log"])
            .unwrap();
        let mut config = Config::default();
        args.apply_overrides(&mut config);
        assert!(config.replay.strict);
        assert!(!config.defaults.dark_mode);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/t.log")));
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let args = Args::try_parse_from(["tally"]).unwrap();
        let mut config = Config::default();
        args.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }
}

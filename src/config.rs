//! Configuration management for the formula checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML configuration file
//!
//! Command-line flags win over the file, the file wins over defaults.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_EXIT_COMMANDS: [&str; 2] = ["exit", "q"];
const DEFAULT_SKIP_COMMAND: &str = "q";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the formula checker
#[derive(Debug, Parser)]
#[command(name = "wffcheck")]
#[command(about = "Checks whether propositional logic formulas are well-formed")]
#[command(version)]
pub struct Args {
    /// Formula to check once; without it an interactive session starts
    #[arg(allow_hyphen_values = true)]
    pub formula: Option<String>,

    /// Configuration file to use instead of the default location
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Ask for variable assignments after each formula
    #[arg(long, help = "Collect variable truth assignments after each formula")]
    pub assign: bool,

    /// Hide per-phase timings
    #[arg(long, help = "Do not print validation timings")]
    pub no_timings: bool,

    /// Output format
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Log level for the checker
    #[arg(
        long,
        value_parser = parse_log_level,
        help = "Log level (off, error, warn, info, debug, trace) [default: warn]"
    )]
    pub log_level: Option<LevelFilter>,
}

/// Settings read from a configuration file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub exit_commands: Option<Vec<String>>,
    pub skip_command: Option<String>,
    pub show_timings: Option<bool>,
    pub collect_assignments: Option<bool>,
    pub log_level: Option<String>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Formula given on the command line (one-shot mode)
    pub formula: Option<String>,
    /// Inputs that end the interactive session
    pub exit_commands: Vec<String>,
    /// Input that ends assignment collection
    pub skip_command: String,
    pub show_timings: bool,
    pub collect_assignments: bool,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
    /// Configuration file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            formula: None,
            exit_commands: DEFAULT_EXIT_COMMANDS.iter().map(|s| s.to_string()).collect(),
            skip_command: DEFAULT_SKIP_COMMAND.to_string(),
            show_timings: true,
            collect_assignments: false,
            format: OutputFormat::Text,
            log_level: DEFAULT_LOG_LEVEL,
            config_file: None,
        }
    }
}

impl Config {
    /// Create configuration from the process command line
    pub fn from_command_line() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_file = match args.config {
            Some(path) => Some(path),
            None => default_config_path().filter(|path| path.is_file()),
        };

        let file = match &config_file {
            Some(path) => {
                log::debug!("Loading config file {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        let mut config = Self::default().merge_file(file)?;

        if args.formula.is_some() {
            config.formula = args.formula;
        }
        if args.assign {
            config.collect_assignments = true;
        }
        if args.no_timings {
            config.show_timings = false;
        }
        if let Some(format) = args.format {
            config.format = format;
        }
        if let Some(level) = args.log_level {
            config.log_level = level;
        }
        config.config_file = config_file;

        Ok(config)
    }

    /// Overlay the keys present in a configuration file
    pub fn merge_file(mut self, file: FileConfig) -> Result<Self> {
        if let Some(exit_commands) = file.exit_commands {
            self.exit_commands = exit_commands;
        }
        if let Some(skip_command) = file.skip_command {
            self.skip_command = skip_command;
        }
        if let Some(show_timings) = file.show_timings {
            self.show_timings = show_timings;
        }
        if let Some(collect_assignments) = file.collect_assignments {
            self.collect_assignments = collect_assignments;
        }
        if let Some(log_level) = file.log_level {
            self.log_level = parse_log_level(&log_level).map_err(anyhow::Error::msg)?;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        Ok(self)
    }

    /// Whether an input line ends the interactive session
    pub fn is_exit_command(&self, input: &str) -> bool {
        let input = input.trim();
        self.exit_commands.iter().any(|cmd| cmd == input)
    }

    /// Whether an input line ends assignment collection
    pub fn is_skip_command(&self, input: &str) -> bool {
        input.trim() == self.skip_command
    }
}

/// Parse a log level name, rejecting anything `log` does not know
pub fn parse_log_level(name: &str) -> std::result::Result<LevelFilter, String> {
    name.parse::<LevelFilter>().map_err(|_| {
        format!("unknown log level '{name}' (expected off, error, warn, info, debug or trace)")
    })
}

/// Default configuration file location, e.g. `~/.config/wffcheck/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wffcheck").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.is_exit_command("exit"));
        assert!(config.is_exit_command(" q "));
        assert!(!config.is_exit_command("quit"));
        assert!(config.is_skip_command("q"));
        assert!(config.show_timings);
        assert!(!config.collect_assignments);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_merge_file_overrides_present_keys_only() {
        let file: FileConfig = toml::from_str(
            r#"
exit_commands = ["quit"]
show_timings = false
format = "json"
"#,
        )
        .unwrap();

        let config = Config::default().merge_file(file).unwrap();
        assert_eq!(config.exit_commands, vec!["quit".to_string()]);
        assert!(!config.show_timings);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.skip_command, "q");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("colour = true").is_err());
    }

    #[test]
    fn test_log_level_names() {
        assert_eq!(parse_log_level("debug"), Ok(LevelFilter::Debug));
        assert_eq!(parse_log_level("TRACE"), Ok(LevelFilter::Trace));
        assert_eq!(parse_log_level("off"), Ok(LevelFilter::Off));
        assert!(parse_log_level("verbose").unwrap_err().contains("'verbose'"));
    }

    #[test]
    fn test_bad_log_level_is_rejected_on_command_line() {
        assert!(Args::try_parse_from(["wffcheck", "--log-level", "verbose"]).is_err());

        let args = Args::try_parse_from(["wffcheck", "--log-level", "info"]).unwrap();
        assert_eq!(args.log_level, Some(LevelFilter::Info));
    }

    #[test]
    fn test_bad_log_level_in_file_is_rejected() {
        let file: FileConfig = toml::from_str(r#"log_level = "verbose""#).unwrap();
        let err = Config::default().merge_file(file).unwrap_err();
        assert!(err.to_string().contains("unknown log level 'verbose'"));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["wffcheck", "--assign", "--format", "json", "A&B"])
            .unwrap();
        assert_eq!(args.formula.as_deref(), Some("A&B"));
        assert!(args.assign);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(!args.no_timings);
    }
}

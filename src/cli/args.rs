//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::core::Role;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "attendly")]
#[command(about = "School attendance rosters and reports from the sample dataset", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Viewer role: admin, teacher, or student (unknown values fall back to student)
    #[arg(short, long, global = true)]
    pub(crate) role: Option<String>,

    /// Roster day (YYYYMMDD or YYYY-MM-DD, defaults to today)
    #[arg(short, long, global = true)]
    pub(crate) date: Option<String>,

    /// Filter from date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) since: Option<String>,

    /// Filter until date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) until: Option<String>,

    /// Class filter: numeric id or (prefix of a) class name
    #[arg(short, long, global = true)]
    pub(crate) class: Option<String>,

    /// Student id for the student role's own-history view
    #[arg(long, global = true)]
    pub(crate) student: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Output as CSV
    #[arg(long, global = true)]
    pub(crate) csv: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.json && config.json {
            self.json = true;
        }
        if !self.csv && config.csv {
            self.csv = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(ref color) = config.color
            && self.color == ColorMode::Auto
        {
            match color.to_lowercase().as_str() {
                "always" => self.color = ColorMode::Always,
                "never" => self.color = ColorMode::Never,
                _ => {}
            }
        }

        // String options: only apply if CLI didn't set them
        if self.role.is_none() {
            self.role = config.role.clone();
        }
        if self.student.is_none() {
            self.student = config.student.clone();
        }

        self
    }

    /// Resolve the viewer role; unknown or missing degrades to student.
    pub(crate) fn viewer_role(&self) -> Role {
        self.role.as_deref().map(Role::parse).unwrap_or_default()
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Machine-readable output requested; config warnings stay quiet.
    pub(crate) fn machine_output(&self) -> bool {
        self.json || self.csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli::parse_from(["attendly"])
    }

    #[test]
    fn viewer_role_defaults_to_student() {
        assert_eq!(bare_cli().viewer_role(), Role::Student);
    }

    #[test]
    fn viewer_role_parses_with_fallback() {
        let cli = Cli::parse_from(["attendly", "--role", "admin"]);
        assert_eq!(cli.viewer_role(), Role::Admin);
        let cli = Cli::parse_from(["attendly", "--role", "guardian"]);
        assert_eq!(cli.viewer_role(), Role::Student);
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            role: Some("teacher".to_string()),
            json: true,
            ..Config::default()
        };
        let cli = bare_cli().with_config(&config);
        assert_eq!(cli.viewer_role(), Role::Teacher);
        assert!(cli.json);
    }

    #[test]
    fn cli_role_wins_over_config() {
        let config = Config {
            role: Some("teacher".to_string()),
            ..Config::default()
        };
        let cli = Cli::parse_from(["attendly", "--role", "admin"]).with_config(&config);
        assert_eq!(cli.viewer_role(), Role::Admin);
    }

    #[test]
    fn no_color_beats_color_mode() {
        let cli = Cli::parse_from(["attendly", "--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }

    #[test]
    fn machine_output_for_json_or_csv() {
        assert!(Cli::parse_from(["attendly", "--json"]).machine_output());
        assert!(Cli::parse_from(["attendly", "--csv"]).machine_output());
        assert!(!bare_cli().machine_output());
    }
}

//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Show the roster for a single day (default)
    Roster,
    /// Per-student attendance totals over a date range
    Report,
    /// Overall attendance distribution over a date range
    Summary,
    /// Show today's roster
    Today,
}

impl Commands {
    /// Commands that pin the window to today's date
    pub(crate) fn needs_today_filter(self) -> bool {
        matches!(self, Commands::Today)
    }
}

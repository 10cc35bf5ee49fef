//! Configuration of the resolver.

use crate::progress::ProgressBarOpts;

/// Configuration structure for the resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Game version files must match; empty matches any.
    ///
    /// Falls back to the game version of the index when empty.
    pub game_version: String,
    /// Follow optional dependencies as well as required ones.
    pub include_optional: bool,
    /// Skip the confirmation question.
    pub auto_confirm: bool,
    /// Maximum fetches in flight within a stage, `0` for no limit.
    pub concurrent_fetches: usize,
    /// Style of the stage spinners.
    pub stage_style: ProgressBarOpts,
    /// Print the resolution report to stdout.
    pub show_report: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            game_version: String::new(),
            include_optional: false,
            auto_confirm: false,
            concurrent_fetches: 0,
            stage_style: ProgressBarOpts::spinner(),
            show_report: true,
        }
    }
}

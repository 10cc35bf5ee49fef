//! Builder for [`Resolver`] instances.

use super::{config::ResolverConfig, resolver::Resolver};
use crate::client::CatalogClient;
use crate::progress::ProgressBarOpts;

/// A builder used to create a [`Resolver`].
///
/// ```rust
/// use modfetch::resolver::ResolverBuilder;
///
/// let config = ResolverBuilder::new()
///     .game_version("1.20.1")
///     .include_optional(true)
///     .concurrent_fetches(16)
///     .config();
/// assert!(config.include_optional);
/// ```
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    config: ResolverConfig,
}

impl ResolverBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ResolverBuilder::default()
    }

    /// Builder with no spinners and no printed report.
    pub fn hidden() -> Self {
        ResolverBuilder::default()
            .stage_style(ProgressBarOpts::hidden())
            .show_report(false)
    }

    pub fn game_version(mut self, game_version: impl Into<String>) -> Self {
        self.config.game_version = game_version.into();
        self
    }

    pub fn include_optional(mut self, include_optional: bool) -> Self {
        self.config.include_optional = include_optional;
        self
    }

    pub fn auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.config.auto_confirm = auto_confirm;
        self
    }

    pub fn concurrent_fetches(mut self, concurrent_fetches: usize) -> Self {
        self.config.concurrent_fetches = concurrent_fetches;
        self
    }

    pub fn stage_style(mut self, stage_style: ProgressBarOpts) -> Self {
        self.config.stage_style = stage_style;
        self
    }

    pub fn show_report(mut self, show_report: bool) -> Self {
        self.config.show_report = show_report;
        self
    }

    /// The configuration built so far.
    pub fn config(self) -> ResolverConfig {
        self.config
    }

    /// Create the [`Resolver`] over `client`.
    pub fn build<C: CatalogClient>(self, client: C) -> Resolver<C> {
        Resolver::new(client, self.config)
    }
}

//! Progress bar styling and configuration options.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Style options for the main and child progress bars.
///
/// By default, the main progress bar stays on the screen upon completion
/// and the child ones are cleared.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub(crate) main: ProgressBarOpts,
    pub(crate) child: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
            child: ProgressBarOpts::with_pip_style(),
        }
    }
}

impl StyleOptions {
    pub fn new(main: ProgressBarOpts, child: ProgressBarOpts) -> Self {
        Self { main, child }
    }

    /// Both bars hidden.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
    }

    pub fn set_main(&mut self, main: ProgressBarOpts) {
        self.main = main;
    }

    pub fn set_child(&mut self, child: ProgressBarOpts) {
        self.child = child;
    }

    /// Return `false` if neither the main nor the child bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled
    }

    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }
}

/// Options of a single progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    template: Option<String>,
    /// At least 3 characters: "filled", "current" and "to do".
    progress_chars: Option<String>,
    pub(crate) enabled: bool,
    /// Clear the bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// `███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
    /// `━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 211.23 KiB/211.23 KiB 1008.31 KiB/s eta 0s`
    pub const TEMPLATE_PIP: &'static str =
        "{bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} eta {eta:.blue}";
    /// `⠋ Resolving dependencies`
    pub const TEMPLATE_SPINNER: &'static str = "{spinner:.green} {msg}";
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    pub const CHARS_LINE: &'static str = "━╾╴─";

    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] from the options.
    ///
    /// An invalid template falls back to the default bar.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = &self.template {
            match ProgressStyle::default_bar().template(template) {
                Ok(s) => style = s,
                Err(e) => warn!(template = %template, error = %e, "invalid progress template"),
            }
        }
        if let Some(progress_chars) = &self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`], hidden when the options are disabled.
    pub fn to_progress_bar(&self, len: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        ProgressBar::new(len).with_style(self.to_progress_style())
    }

    /// Options which look like Python pip.
    pub fn with_pip_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_PIP.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Options of a spinner kept on screen once its stage is done.
    pub fn spinner() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_SPINNER.into()),
            progress_chars: None,
            enabled: true,
            clear: false,
        }
    }

    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Options hiding the bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bar() {
        assert!(ProgressBarOpts::hidden().to_progress_bar(10).is_hidden());
        assert!(!StyleOptions::hidden().is_enabled());
    }

    #[test]
    fn test_default_style_enabled() {
        let style = StyleOptions::default();
        assert!(style.is_enabled());
        assert!(!style.main().clear);
        assert!(style.child().clear);
    }

    #[test]
    fn test_invalid_template_falls_back() {
        let opts = ProgressBarOpts::new(Some("{bar:40.blue".into()), None, true, true);
        // Must not panic.
        let _ = opts.to_progress_style();
    }
}

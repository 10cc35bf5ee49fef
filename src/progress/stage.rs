//! Spinners marking resolution stages.

use crate::progress::ProgressBarOpts;
use indicatif::ProgressBar;
use std::time::Duration;

/// A spinner shown while a resolution stage runs.
///
/// The running message is replaced by the done message when the stage ends.
pub struct StageSpinner {
    bar: ProgressBar,
    clear: bool,
}

impl StageSpinner {
    /// Start a spinner with `message`; hidden when `opts` is disabled.
    pub fn start(opts: &ProgressBarOpts, message: impl Into<String>) -> Self {
        let bar = if opts.is_enabled() {
            let bar = ProgressBar::new_spinner().with_style(opts.to_progress_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(message.into());
        Self {
            bar,
            clear: opts.clear,
        }
    }

    /// Update the running message.
    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    pub fn finish(self, message: impl Into<String>) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish_with_message(message.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner() {
        let spinner = StageSpinner::start(&ProgressBarOpts::hidden(), "Resolving dependencies");
        assert!(spinner.bar.is_hidden());
        spinner.set_message("still resolving");
        spinner.finish("Resolved dependencies");
    }
}

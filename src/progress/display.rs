//! Progress bars shown while downloading.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Coordinates the main bar (files done) and one child bar per file.
pub struct ProgressDisplay {
    multi: MultiProgress,
    main: ProgressBar,
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create the display for `total_downloads` files.
    pub fn new(style_options: StyleOptions, total_downloads: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };
        let main = multi.add(style_options.main().to_progress_bar(total_downloads as u64));
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Create a child progress bar for one file of `size` bytes.
    pub fn create_child_progress(&self, size: u64) -> ProgressBar {
        self.multi
            .add(self.style_options.child().to_progress_bar(size))
    }

    pub fn main(&self) -> &ProgressBar {
        &self.main
    }

    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish a child progress bar, clearing it if configured.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Finish the main progress bar, clearing it if configured.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }
}

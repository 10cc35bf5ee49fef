//! Progress reporting for resolution stages and downloads.
//!
//! - `style` - progress bar styling options and templates
//! - `display` - the bars shown while downloading a plan
//! - `stage` - spinners shown while a resolution stage is running
//!
//! # Examples
//!
//! ```rust
//! use modfetch::progress::{ProgressBarOpts, StyleOptions};
//!
//! // Nothing is drawn with hidden options.
//! let hidden = StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
//! assert!(!hidden.is_enabled());
//! ```

pub(crate) mod display;
pub(crate) mod stage;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use stage::StageSpinner;
pub use style::{ProgressBarOpts, StyleOptions};

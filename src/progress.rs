//! Progress feedback while suggestions are gathered.
//!
//! Bars are drawn on stderr with `indicatif` and hidden when:
//!
//! - quiet mode is on (`--quiet` or the `COVGAP_QUIET` env var);
//! - stderr is not a TTY, as in CI or piped output.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

pub const TEMPLATE_SUGGESTIONS: &str = "{spinner} {msg} {pos}/{len} bins - {elapsed}";
const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressConfig {
    pub quiet_mode: bool,
}

impl ProgressConfig {
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("COVGAP_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    pub fn should_show_progress(&self) -> bool {
        !self.quiet_mode && std::io::stderr().is_terminal()
    }

    /// Spinner with a bin counter, or a hidden bar when progress is off.
    pub fn suggestion_bar(&self, total: u64) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_spinner().template(TEMPLATE_SUGGESTIONS) {
            pb.set_style(style.tick_chars(TICK_CHARS));
        }
        pb.set_message("Generating suggestions");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

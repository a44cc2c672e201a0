use crate::priority::Priority;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `NO_COLOR`, `CLICOLOR=0` and `CLICOLOR_FORCE=1`, later ones winning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }
        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }
        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Push the color decision into `colored`'s global override.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }

    pub fn formatter(&self) -> Formatter {
        Formatter {
            color: self.color.should_use_color(),
        }
    }
}

/// Optional styling for terminal output.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    color: bool,
}

impl Formatter {
    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    /// Tier label, upper-cased and colored by severity.
    pub fn tier(&self, priority: Priority) -> String {
        let label = priority.label().to_uppercase();
        match priority {
            Priority::High => self.paint(&label, |t| t.red().bold()),
            Priority::Medium => self.paint(&label, |t| t.yellow()),
            Priority::Low => self.paint(&label, |t| t.green()),
            Priority::Pending => self.paint(&label, |t| t.dimmed()),
        }
    }

    /// Coverage percentage, red under 50, yellow under 90.
    pub fn coverage(&self, pct: f64) -> String {
        let text = format!("{:.2}%", pct);
        if pct < 50.0 {
            self.paint(&text, |t| t.red())
        } else if pct < 90.0 {
            self.paint(&text, |t| t.yellow())
        } else {
            self.paint(&text, |t| t.green())
        }
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

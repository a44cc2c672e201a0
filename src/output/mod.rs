pub mod json;
pub mod terminal;

use crate::closure::ClosureEstimate;
use crate::priority::Suggestion;
use crate::report::CoverageReport;
use crate::suggest::SkippedBin;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub use json::render_json;
pub use terminal::render_terminal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

/// Everything one `analyze` run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutput {
    pub report: CoverageReport,
    /// Scored and ranked
    pub suggestions: Vec<Suggestion>,
    pub skipped: Vec<SkippedBin>,
    pub closure: ClosureEstimate,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cancelled: bool,
}

/// Write `content` to `path`, creating parent directories, or to stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_output_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("out.json");

        write_output("{}", Some(&nested)).unwrap();
        assert_eq!(fs::read_to_string(&nested).unwrap(), "{}");
    }
}

// Export modules for library usage
pub mod cli;
pub mod closure;
pub mod config;
pub mod formatting;
pub mod output;
pub mod pipeline;
pub mod priority;
pub mod progress;
pub mod report;
pub mod suggest;

// Re-export commonly used types
pub use crate::closure::{predict_closure, ClosureEstimate};

pub use crate::config::{load_config, CovgapConfig, ProviderKind};

pub use crate::output::{AnalysisOutput, OutputFormat};

pub use crate::pipeline::{analyze_report, assemble};

pub use crate::priority::{calculate_score, prioritize, Difficulty, Priority, Suggestion};

pub use crate::report::{
    parse_report, parse_report_file, Bin, CoverageReport, Covergroup, Coverpoint,
    CrossCoverageGroup, UncoveredBinRef,
};

pub use crate::suggest::{
    build_provider, CancellationSource, CancellationToken, FixtureProvider, GeminiProvider,
    ProviderError, SuggestionDraft, SuggestionProvider, SuggestionRunner,
};

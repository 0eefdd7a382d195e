pub mod codeclimate;
pub mod fingerprint;
pub mod severity;

use crate::error::Result;
use crate::types::issue::Issue;
use crate::types::result::AnalysisResult;
use fingerprint::FingerprintHasher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Compact,
    Pretty,
}

pub fn render(
    results: &[AnalysisResult],
    format: OutputFormat,
    hasher: &dyn FingerprintHasher,
) -> Result<String> {
    match format {
        OutputFormat::Compact => codeclimate::transform_with(results, hasher),
        OutputFormat::Pretty => {
            let issues: Vec<Issue> = codeclimate::build_issues(results, hasher);
            Ok(serde_json::to_string_pretty(&issues)?)
        }
    }
}

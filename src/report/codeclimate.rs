use crate::error::Result;
use crate::report::fingerprint::{self, FingerprintHasher, Sha256Hasher};
use crate::report::severity;
use crate::types::issue::{Issue, IssueKind, LineRange, Location};
use crate::types::result::{AnalysisResult, Message};
use tracing::debug;

/// Serialize `results` as a compact Code Climate issue array.
pub fn transform(results: &[AnalysisResult]) -> Result<String> {
    transform_with(results, &Sha256Hasher)
}

pub fn transform_with(
    results: &[AnalysisResult],
    hasher: &dyn FingerprintHasher,
) -> Result<String> {
    let issues = build_issues(results, hasher);
    Ok(serde_json::to_string(&issues)?)
}

/// One issue per message, results in input order and messages in result order.
pub fn build_issues(results: &[AnalysisResult], hasher: &dyn FingerprintHasher) -> Vec<Issue> {
    let issues: Vec<Issue> = results
        .iter()
        .flat_map(|result| {
            result
                .messages
                .iter()
                .map(move |message| to_issue(&result.file_path, message, hasher))
        })
        .collect();

    debug!(
        results = results.len(),
        issues = issues.len(),
        "built code climate issues"
    );
    issues
}

fn to_issue(path: &str, message: &Message, hasher: &dyn FingerprintHasher) -> Issue {
    Issue {
        kind: IssueKind::Issue,
        check_name: message.rule_id.clone(),
        description: message.message.clone(),
        categories: [message.rule_id.clone()],
        severity: severity::classify(message),
        fingerprint: fingerprint::compute(hasher, path, message),
        location: Location {
            path: path.to_string(),
            lines: LineRange::single(message.line),
        },
    }
}

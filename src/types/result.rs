use serde::{Deserialize, Serialize};

/// All diagnostics reported for one source file, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl AnalysisResult {
    pub fn new(file_path: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            file_path: file_path.into(),
            messages,
        }
    }
}

/// One diagnostic finding.
///
/// Every field is optional so that incomplete diagnostics pass through to
/// the report as `null` instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub line: Option<u64>,
    #[serde(default)]
    pub severity: Option<i64>,
    #[serde(default)]
    pub fatal: Option<bool>,
}

impl Message {
    pub fn new(rule_id: &str, message: &str, line: u64, severity: i64) -> Self {
        Self {
            rule_id: Some(rule_id.to_string()),
            message: Some(message.to_string()),
            line: Some(line),
            severity: Some(severity),
            fatal: None,
        }
    }

    /// A parse-level diagnostic: no rule, flagged fatal.
    pub fn fatal(message: &str, line: u64) -> Self {
        Self {
            rule_id: None,
            message: Some(message.to_string()),
            line: Some(line),
            severity: Some(2),
            fatal: Some(true),
        }
    }
}

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Issue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Critical,
    Minor,
}

impl IssueSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Minor => "minor",
        }
    }
}

/// One Code Climate issue record. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub check_name: Option<String>,
    pub description: Option<String>,
    pub categories: [Option<String>; 1],
    pub severity: IssueSeverity,
    pub fingerprint: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub path: String,
    pub lines: LineRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub begin: Option<u64>,
    pub end: Option<u64>,
}

impl LineRange {
    pub fn single(line: Option<u64>) -> Self {
        Self {
            begin: line,
            end: line,
        }
    }
}

//! Convert per-file lint results into Code Climate issue reports.
//!
//! [`transform`] is the whole core: a pure mapping from
//! [`AnalysisResult`]s to a serialized issue array with severity
//! classification and stable fingerprints.

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod types;

pub use error::{ReportError, Result};
pub use report::codeclimate::{build_issues, transform, transform_with};
pub use report::fingerprint::{FingerprintHasher, Sha256Hasher};
pub use types::issue::{Issue, IssueSeverity};
pub use types::result::{AnalysisResult, Message};

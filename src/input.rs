//! Decoding of lint results produced by `eslint --format json`.

use crate::error::{ReportError, Result};
use crate::types::result::AnalysisResult;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn parse_results(content: &str) -> Result<Vec<AnalysisResult>> {
    serde_json::from_str(content).map_err(|e| ReportError::InputParse(e.to_string()))
}

/// Read results from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_results(path: Option<&Path>) -> Result<Vec<AnalysisResult>> {
    let content = match path.filter(|path| *path != Path::new("-")) {
        Some(path) => {
            if !path.exists() {
                return Err(ReportError::PathNotFound(path.display().to_string()));
            }
            info!(path = %path.display(), "reading lint results");
            std::fs::read_to_string(path)?
        }
        None => {
            info!("reading lint results from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_results(&content)
}

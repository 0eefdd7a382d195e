use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "climate-report.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".climate-report/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/climate-report/config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub exit: ExitConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExitConfig {
    #[serde(default)]
    pub zero: bool,
}

/// Load configuration for `root`. An explicit `config_path` replaces the
/// repository file and must exist.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<ReportConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, config_path, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    config_path: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<ReportConfig> {
    let repo_path = match config_path {
        Some(path) if !path.exists() => {
            return Err(ReportError::PathNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    let mut merged = Value::Table(Map::new());
    let mut loaded = 0;
    if let Some(path) = global_path {
        loaded += merge_file_if_exists(&mut merged, path)?;
    }
    loaded += merge_file_if_exists(&mut merged, &repo_path)?;
    loaded += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    if loaded == 0 {
        debug!(root = %root.display(), "no config files found, using defaults");
    }

    let cfg: ReportConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ReportError::ConfigParse(e.to_string()))?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    debug!(path = %path.display(), "merged config file");
    Ok(1)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ReportError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(!cfg.output.pretty);
        assert!(cfg.output.path.is_none());
        assert!(!cfg.exit.zero);
    }

    #[test]
    fn merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[output]
pretty = true
path = "global.json"

[exit]
zero = true
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[output]
path = "gl-code-quality-report.json"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".climate-report"))
            .expect("local config dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[exit]
zero = false
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed");

        assert!(cfg.output.pretty);
        assert_eq!(
            cfg.output.path.as_deref(),
            Some(Path::new("gl-code-quality-report.json"))
        );
        assert!(!cfg.exit.zero);
    }

    #[test]
    fn explicit_config_path_replaces_repo_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[output]\npretty = false\n",
        )
        .expect("repo config should write");
        let explicit = root.path().join("custom.toml");
        fs::write(&explicit, "[output]\npretty = true\n").expect("custom config should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed");
        assert!(cfg.output.pretty);
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let root = TempDir::new().expect("root temp dir should be created");
        let result =
            load_config_with_global(root.path(), Some(&root.path().join("nope.toml")), None);
        assert!(matches!(result, Err(ReportError::PathNotFound(_))));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[output\n").expect("config should write");
        let result = load_config_with_global(root.path(), None, None);
        assert!(matches!(result, Err(ReportError::ConfigParse(_))));
    }
}

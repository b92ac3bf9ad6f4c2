//! Configuration loading from ptrguard.toml.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Include trivial slot results (annotated, no conflicts).
    pub include_trivial: bool,
    /// Emit one note per retained evidence sample.
    pub show_evidence: bool,
    /// Max diagnostics to report (0 = unlimited).
    pub max_diagnostics: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_trivial: false,
            show_evidence: true,
            max_diagnostics: 100,
        }
    }
}

/// Find and load ptrguard.toml, walking up from `start_dir`.
/// Returns default config if no file found.
pub fn load_config(start_dir: &Path) -> Config {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = std::fs::read_to_string(&path).unwrap_or_default();
            toml::from_str(&content).unwrap_or_default()
        }
        None => Config::default(),
    }
}

/// Walk up directories looking for ptrguard.toml.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join("ptrguard.toml");
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Default TOML content for `ptrguard init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"[report]
include_trivial = false
show_evidence = true
max_diagnostics = 100
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert!(!cfg.report.include_trivial);
        assert!(cfg.report.show_evidence);
        assert_eq!(cfg.report.max_diagnostics, 100);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[report]
include_trivial = true
show_evidence = false
max_diagnostics = 10
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert!(cfg.report.include_trivial);
        assert!(!cfg.report.show_evidence);
        assert_eq!(cfg.report.max_diagnostics, 10);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[report]
include_trivial = true
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert!(cfg.report.include_trivial);
        assert!(cfg.report.show_evidence);
        assert_eq!(cfg.report.max_diagnostics, 100);
    }

    #[test]
    fn test_load_config_no_file() {
        let cfg = load_config(Path::new("/nonexistent/path"));
        assert!(!cfg.report.include_trivial);
        assert!(cfg.report.show_evidence);
    }

    #[test]
    fn test_find_config_file_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ptrguard.toml"), DEFAULT_CONFIG_TOML).unwrap();
        let found = find_config_file(dir.path());
        assert_eq!(found, Some(dir.path().join("ptrguard.toml")));
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ptrguard.toml"), DEFAULT_CONFIG_TOML).unwrap();
        let subdir = dir.path().join("sub");
        std::fs::create_dir(&subdir).unwrap();
        let found = find_config_file(&subdir);
        assert_eq!(found, Some(dir.path().join("ptrguard.toml")));
    }

    #[test]
    fn test_default_config_toml_parses() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert!(!cfg.report.include_trivial);
        assert!(cfg.report.show_evidence);
        assert_eq!(cfg.report.max_diagnostics, 100);
    }
}

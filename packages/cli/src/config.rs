use pagecraft_compiler_html::seo::DEFAULT_BASE_URL;
use pagecraft_editor::StorageConfig;
use pagecraft_model::ExportTarget;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory export writes into
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Formats emitted by `pagecraft export` when no `--target` is given
    #[serde(default = "default_targets")]
    pub targets: Vec<ExportTarget>,

    /// Indent the HTML body
    #[serde(default)]
    pub pretty: bool,

    /// Site URL used for sitemap, robots.txt and schema markup
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_targets() -> Vec<ExportTarget> {
    vec![ExportTarget::Html]
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    /// Store path resolved against `cwd` when relative
    pub fn storage_in(&self, cwd: &Path) -> StorageConfig {
        StorageConfig {
            kind: self.storage.kind,
            path: cwd.join(&self.storage.path),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            targets: default_targets(),
            pretty: false,
            base_url: default_base_url(),
            storage: StorageConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_editor::StorageKind;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "outDir": "public",
            "targets": ["html", "vue"],
            "pretty": true,
            "baseUrl": "https://site.test",
            "storage": { "kind": "memory" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.targets, vec![ExportTarget::Html, ExportTarget::Vue]);
        assert!(config.pretty);
        assert_eq!(config.base_url, "https://site.test");
        assert_eq!(config.storage.kind, StorageKind::Memory);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.targets, vec![ExportTarget::Html]);
        assert!(!config.pretty);
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.storage.path, PathBuf::from(".pagecraft/projects.json"));
    }

    #[test]
    fn test_load_missing_and_present_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "outDir": "build" }"#).unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.get_out_dir(dir.path()), dir.path().join("build"));
        assert_eq!(
            config.storage_in(dir.path()).path,
            dir.path().join(".pagecraft/projects.json")
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "targets": ["svelte"] }"#).unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}

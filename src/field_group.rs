use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const ELASTICSEARCH_LOGS_MODEL: &str = "elasticsearch";

/// The logs section of a registry configuration
///
/// Only the keys this field group owns are read, everything else in the
/// document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldGroupConfig {
    #[serde(rename = "LOGS_MODEL", default = "default_logs_model")]
    pub logs_model: String,
    #[serde(rename = "LOGS_MODEL_CONFIG", default)]
    pub logs_model_config: Option<LogsModelConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsModelConfig {
    #[serde(default)]
    pub elasticsearch_config: Option<ElasticsearchConfig>,
}

/// Connection settings for the Elasticsearch cluster receiving the logs
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ElasticsearchConfig {
    pub host: String,
    pub port: u16,
    pub access_key: String,
    pub secret_key: String,
    pub index_prefix: String,
}

fn default_logs_model() -> String {
    String::from("database")
}

impl Default for FieldGroupConfig {
    fn default() -> Self {
        Self {
            logs_model: default_logs_model(),
            logs_model_config: None,
        }
    }
}

impl FieldGroupConfig {
    /// Top level configuration keys owned by this field group
    pub fn fields() -> Vec<&'static str> {
        vec!["LOGS_MODEL", "LOGS_MODEL_CONFIG"]
    }

    /// Loads the field group from a registry config document
    ///
    /// `.json` files are parsed as JSON, anything else as YAML.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document is a config with nothing set
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse YAML config")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON config")
    }

    pub fn elasticsearch_config(&self) -> Option<&ElasticsearchConfig> {
        self.logs_model_config
            .as_ref()
            .and_then(|c| c.elasticsearch_config.as_ref())
    }
}

impl ElasticsearchConfig {
    /// URL probed by the credential check, covering every index under the prefix
    ///
    /// Built verbatim from the fields, so missing values yield an unusable URL
    /// rather than an error.
    pub fn endpoint_url(&self) -> String {
        format!(
            "https://{}:{}/{}*",
            self.host, self.port, self.index_prefix
        )
    }
}

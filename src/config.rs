use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::graph::Orientation;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub conceptmap: ConceptmapConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Conceptmap-specific configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConceptmapConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Optional path to a domain knowledge base in TOML form.
    /// The built-in pathology table is used when absent.
    #[serde(default)]
    pub kb_path: Option<PathBuf>,
}

/// AI completion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Whether the AI collaborator may be used at all. The offline
    /// matcher is the default pipeline and needs no credentials.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_completion_model")]
    pub model: String,
    #[serde(default = "default_completion_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_completion_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_completion_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_completion_temperature")]
    pub temperature: f32,
    #[serde(default = "default_completion_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_completion_max_retries")]
    pub max_retries: usize,
}

/// Rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_orientation")]
    pub orientation: String,
    #[serde(default = "default_engine")]
    pub engine: String,
}

impl Default for ConceptmapConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            kb_path: None,
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_completion_model(),
            endpoint: default_completion_endpoint(),
            api_key_env: default_completion_api_key_env(),
            timeout_secs: default_completion_timeout_secs(),
            temperature: default_completion_temperature(),
            max_tokens: default_completion_max_tokens(),
            max_retries: default_completion_max_retries(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            orientation: default_orientation(),
            engine: default_engine(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_completion_model() -> String {
    "deepseek-chat".to_string()
}

fn default_completion_endpoint() -> String {
    crate::completion::deepseek::DEFAULT_ENDPOINT.to_string()
}

fn default_completion_api_key_env() -> String {
    "DEEPSEEK_API_KEY".to_string()
}

fn default_completion_timeout_secs() -> u64 {
    45
}

fn default_completion_temperature() -> f32 {
    0.3
}

fn default_completion_max_tokens() -> u32 {
    2000
}

fn default_completion_max_retries() -> usize {
    2
}

fn default_orientation() -> String {
    "retrato".to_string()
}

fn default_engine() -> String {
    "dot".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in CONCEPTMAP_CONFIG environment variable
    /// 2. ./config.toml in current directory
    ///
    /// Falls back to built-in defaults when no config file exists: the
    /// offline pipeline has no mandatory external settings.
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        let config_path = std::env::var("CONCEPTMAP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        let config: Config = if config_path.exists() {
            let config_str = std::fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;
            toml::from_str(&config_str).context("Failed to parse config.toml")?
        } else {
            log::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Config::default()
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if let Some(kb_path) = &self.conceptmap.kb_path {
            if !kb_path.exists() {
                anyhow::bail!(
                    "kb_path does not exist: {}. Point kb_path at a knowledge base TOML file or remove it to use the built-in table.",
                    kb_path.display()
                );
            }
        }

        // The API key is only needed when the AI collaborator is enabled
        if self.completion.enabled {
            std::env::var(&self.completion.api_key_env).with_context(|| {
                format!(
                    "Environment variable {} not set. Set it in your .env file or as an environment variable with your API key, or disable [completion].",
                    self.completion.api_key_env
                )
            })?;

            if self.completion.timeout_secs == 0 {
                anyhow::bail!("completion.timeout_secs must be greater than 0");
            }

            if !(0.0..=2.0).contains(&self.completion.temperature) {
                anyhow::bail!("completion.temperature must be between 0.0 and 2.0");
            }
        }

        self.render
            .orientation
            .parse::<Orientation>()
            .map_err(|e| anyhow::anyhow!("render.orientation: {}", e))?;

        Ok(())
    }

    /// Default orientation parsed from config (validated at load time).
    pub fn orientation(&self) -> Orientation {
        self.render
            .orientation
            .parse()
            .unwrap_or(Orientation::Portrait)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialize config tests that mutate process-wide cwd and env so they don't race.
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    /// Restores cwd when dropped (e.g. on panic).
    struct CwdGuard(std::path::PathBuf);
    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.0);
        }
    }

    fn with_config_env(config_path: &std::path::Path, api_key: Option<&str>, f: impl FnOnce()) {
        let original_config = std::env::var("CONCEPTMAP_CONFIG").ok();
        let original_key = std::env::var("DEEPSEEK_API_KEY").ok();
        std::env::set_var("CONCEPTMAP_CONFIG", config_path.to_str().unwrap());
        match api_key {
            Some(k) => std::env::set_var("DEEPSEEK_API_KEY", k),
            None => std::env::remove_var("DEEPSEEK_API_KEY"),
        }
        f();
        std::env::remove_var("CONCEPTMAP_CONFIG");
        std::env::remove_var("DEEPSEEK_API_KEY");
        if let Some(val) = original_config {
            std::env::set_var("CONCEPTMAP_CONFIG", val);
        }
        if let Some(val) = original_key {
            std::env::set_var("DEEPSEEK_API_KEY", val);
        }
    }

    #[test]
    fn test_config_defaults_when_no_file() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");
        with_config_env(&missing, None, || {
            let config = Config::load().unwrap();
            assert_eq!(config.conceptmap.log_level, "info");
            assert!(!config.completion.enabled);
            assert_eq!(config.render.engine, "dot");
            assert_eq!(config.orientation(), crate::graph::Orientation::Portrait);
        });
    }

    #[test]
    fn test_config_load_success() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[conceptmap]
log_level = "debug"

[completion]
enabled = true
model = "deepseek-chat"
timeout_secs = 30

[render]
orientation = "paisagem"
engine = "neato"
"#,
        )
        .unwrap();
        let original_dir = std::env::current_dir().unwrap();
        let _cwd = CwdGuard(original_dir.clone());
        std::env::set_current_dir(temp_dir.path()).unwrap();
        with_config_env(&config_path, Some("test-key"), || {
            let config = Config::load().unwrap();
            assert_eq!(config.conceptmap.log_level, "debug");
            assert!(config.completion.enabled);
            assert_eq!(config.completion.timeout_secs, 30);
            assert_eq!(config.render.engine, "neato");
            assert_eq!(config.orientation(), crate::graph::Orientation::Landscape);
        });
    }

    #[test]
    fn test_config_completion_requires_api_key() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[completion]\nenabled = true\n").unwrap();
        let original_dir = std::env::current_dir().unwrap();
        let _cwd = CwdGuard(original_dir.clone());
        std::env::set_current_dir(temp_dir.path()).unwrap();
        with_config_env(&config_path, None, || {
            let config = Config::load();
            assert!(config.is_err(), "Expected missing API key error");
            assert!(config
                .unwrap_err()
                .to_string()
                .contains("DEEPSEEK_API_KEY"));
        });
    }

    #[test]
    fn test_config_rejects_bad_orientation() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[render]\norientation = \"diagonal\"\n").unwrap();
        with_config_env(&config_path, None, || {
            let config = Config::load();
            assert!(config.is_err());
            assert!(config.unwrap_err().to_string().contains("orientation"));
        });
    }

    #[test]
    fn test_config_rejects_missing_kb_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[conceptmap]\nkb_path = \"/nonexistent/kb.toml\"\n",
        )
        .unwrap();
        with_config_env(&config_path, None, || {
            let config = Config::load();
            assert!(config.is_err());
            assert!(config.unwrap_err().to_string().contains("kb_path"));
        });
    }
}

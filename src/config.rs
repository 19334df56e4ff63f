use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure for the tutor agent.
///
/// The Gemini API key deliberately does not live here; it is a secret and is
/// read from the environment at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Agent identity
    #[serde(default)]
    pub agent: AgentConfig,

    /// Backend provider configuration
    #[serde(default)]
    pub ai_providers: AIProvidersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Display name used in logs
    #[serde(default = "default_agent_name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIProvidersConfig {
    /// Gemini configuration
    pub gemini: Option<ProviderConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    pub enabled: bool,

    /// Model to use
    pub model: String,

    /// Temperature setting
    pub temperature: Option<f32>,
}

fn default_agent_name() -> String {
    "Tutor Agent".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            name: default_agent_name(),
        }
    }
}

impl Default for AIProvidersConfig {
    fn default() -> Self {
        AIProvidersConfig {
            gemini: Some(ProviderConfig {
                enabled: true,
                model: "gemini-1.5-flash".to_string(),
                temperature: Some(0.7),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            agent: AgentConfig::default(),
            ai_providers: AIProvidersConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Load configuration from a command line argument or default locations
    pub fn load(config_path: &Option<String>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::from_file(path);
        }

        let default_paths = vec![
            "tutor_agent.toml",
            ".tutor_agent.toml",
            "~/.config/tutor_agent/config.toml",
        ];

        for path in default_paths {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                match Self::from_file(expanded_path.as_ref()) {
                    Ok(config) => return Ok(config),
                    Err(e) => eprintln!("Warning: Failed to load config from {}: {}", path, e),
                }
            }
        }

        // Return default config if no file found
        Ok(Self::default())
    }
}

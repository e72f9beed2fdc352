use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.aistrology.beandev.xyz/v1".to_string(),
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub mode: String,
    pub cringe: u8,
    pub deterministic: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mode: "roast".to_string(),
            cringe: 1,
            deterministic: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub defaults: DefaultsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                AppConfig::default()
            }
        } else {
            AppConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = env::var("HOROSCOPE_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.provider.endpoint = endpoint;
            }
        }
        if let Ok(timeout) = env::var("HOROSCOPE_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.provider.timeout_ms = value;
            }
        }
        if let Ok(mode) = env::var("ROASTSCOPE_MODE") {
            if !mode.trim().is_empty() {
                self.defaults.mode = mode;
            }
        }
        if let Ok(cringe) = env::var("ROASTSCOPE_CRINGE") {
            if let Ok(value) = cringe.parse::<u8>() {
                self.defaults.cringe = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ROASTSCOPE_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/roastscope.toml")))
}

use crate::config::Settings;
use crate::domain::ports::LayoutMode;
use crate::utils::error::{Result, WhoArtError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub art: Option<ArtConfig>,
    pub display: Option<DisplayConfig>,
    pub exit: Option<ExitConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub proportional: Option<bool>,
    pub charset: Option<String>,
    pub enhance: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    pub user: Option<String>,
    pub layout: Option<LayoutMode>,
    pub separator: Option<String>,
    pub color: Option<bool>,
    pub system_stats: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExitConfig {
    /// 任一階段失敗時以非零結束
    pub strict: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WhoArtError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GITHUB_TOKEN})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WhoArtError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 檔案中的值覆蓋預設值
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(api) = &self.api {
            if let Some(base_url) = &api.base_url {
                settings.api_base_url = base_url.clone();
            }
            if let Some(user_agent) = &api.user_agent {
                settings.user_agent = user_agent.clone();
            }
            if let Some(token) = &api.token {
                if token.starts_with("${") || token.trim().is_empty() {
                    tracing::warn!("api.token is not set, continuing without authentication");
                } else {
                    settings.api_token = Some(token.clone());
                }
            }
            if api.timeout_seconds.is_some() {
                settings.timeout_seconds = api.timeout_seconds;
            }
        }

        if let Some(art) = &self.art {
            if let Some(width) = art.width {
                settings.art.width = width;
            }
            if let Some(height) = art.height {
                settings.art.height = height;
            }
            if let Some(proportional) = art.proportional {
                settings.art.proportional = proportional;
            }
            if let Some(charset) = &art.charset {
                settings.art.charset = charset.clone();
            }
            if let Some(enhance) = art.enhance {
                settings.art.enhance = enhance;
            }
        }

        if let Some(display) = &self.display {
            if let Some(user) = &display.user {
                settings.user = Some(user.clone());
            }
            if let Some(layout) = display.layout {
                settings.layout = layout;
            }
            if let Some(separator) = &display.separator {
                settings.separator = separator.clone();
            }
            if let Some(color) = display.color {
                settings.color = color;
            }
            if let Some(system_stats) = display.system_stats {
                settings.system_stats = system_stats;
            }
        }

        if let Some(strict) = self.exit.as_ref().and_then(|exit| exit.strict) {
            settings.strict_exit = strict;
        }
    }
}

pub mod toml_config;

use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::core::art::MAX_ART_DIMENSION;
use crate::core::layout::DEFAULT_SEPARATOR;
use crate::domain::ports::{ArtOptions, ConfigProvider, LayoutMode};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_charset, validate_non_empty_string, validate_range, validate_url, Validate,
};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// 合併後的最終設定：預設值 < TOML 檔 < 命令列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub user: Option<String>,
    pub api_base_url: String,
    pub user_agent: String,
    pub api_token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub art: ArtOptions,
    pub layout: LayoutMode,
    pub separator: String,
    pub color: bool,
    pub system_stats: bool,
    pub strict_exit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_token: None,
            timeout_seconds: None,
            art: ArtOptions::default(),
            layout: LayoutMode::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            color: true,
            system_stats: false,
            strict_exit: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        validate_non_empty_string("api.user_agent", &self.user_agent)?;
        validate_range("art.width", self.art.width, 1, MAX_ART_DIMENSION)?;
        validate_range("art.height", self.art.height, 1, MAX_ART_DIMENSION)?;
        validate_charset("art.charset", &self.art.charset)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("api.timeout_seconds", timeout, 1, 3600)?;
        }
        if let Some(user) = &self.user {
            validate_non_empty_string("user", user)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn art_options(&self) -> &ArtOptions {
        &self.art
    }

    fn layout(&self) -> LayoutMode {
        self.layout
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn color(&self) -> bool {
        self.color
    }

    fn show_system_stats(&self) -> bool {
        self.system_stats
    }

    fn strict_exit(&self) -> bool {
        self.strict_exit
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "whoart")]
#[command(about = "Show your GitHub avatar as terminal art next to your profile")]
#[command(version)]
pub struct CliConfig {
    /// GitHub login to look up instead of the Git identity
    #[arg(long)]
    pub user: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "GitHub API base URL [default: https://api.github.com]")]
    pub api_base_url: Option<String>,

    /// Art width in character cells
    #[arg(long)]
    pub width: Option<u32>,

    /// Art height in character cells
    #[arg(long)]
    pub height: Option<u32>,

    /// Derive the height from the avatar's aspect ratio
    #[arg(long)]
    pub proportional: bool,

    /// Keep the raw glyphs instead of the denser substitutes
    #[arg(long)]
    pub no_enhance: bool,

    /// Disable ANSI colors (also honored through NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    #[arg(long, value_enum)]
    pub layout: Option<LayoutMode>,

    /// Append OS, CPU, free memory and uptime to the profile
    #[arg(long)]
    pub system_stats: bool,

    /// Exit non-zero when a stage fails
    #[arg(long)]
    pub strict: bool,

    /// Abort HTTP requests after this many seconds (no timeout by default)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn into_settings(self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        self.apply_to(&mut settings);

        if std::env::var_os("NO_COLOR").is_some() {
            settings.color = false;
        }

        Ok(settings)
    }

    fn apply_to(&self, settings: &mut Settings) {
        if let Some(user) = &self.user {
            settings.user = Some(user.clone());
        }
        if let Some(base_url) = &self.api_base_url {
            settings.api_base_url = base_url.clone();
        }
        if let Some(width) = self.width {
            settings.art.width = width;
        }
        if let Some(height) = self.height {
            settings.art.height = height;
        }
        if let Some(layout) = self.layout {
            settings.layout = layout;
        }
        if self.timeout_seconds.is_some() {
            settings.timeout_seconds = self.timeout_seconds;
        }
        settings.art.proportional |= self.proportional;
        settings.art.enhance &= !self.no_enhance;
        settings.color &= !self.no_color;
        settings.system_stats |= self.system_stats;
        settings.strict_exit |= self.strict;
    }
}

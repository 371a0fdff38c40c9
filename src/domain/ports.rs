use crate::domain::model::{HostStats, Identity, Profile, RenderedProfileText, TextArtBlock};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 取得本機身分的來源，測試時可替換成固定值
pub trait IdentityProvider: Send + Sync {
    fn identity(&self) -> Option<Identity>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    #[default]
    SideBySide,
    Stacked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtOptions {
    pub width: u32,
    pub height: u32,
    pub proportional: bool,
    pub charset: String,
    pub enhance: bool,
}

impl Default for ArtOptions {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            proportional: false,
            charset: " .:-=+*o#%@".to_string(),
            enhance: true,
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn api_token(&self) -> Option<&str>;
    fn request_timeout(&self) -> Option<Duration>;
    fn art_options(&self) -> &ArtOptions;
    fn layout(&self) -> LayoutMode;
    fn separator(&self) -> &str;
    fn color(&self) -> bool;
    fn show_system_stats(&self) -> bool;
    fn strict_exit(&self) -> bool;
}

/// 依序執行的四個階段；每個階段失敗都由 engine 記錄後略過後續
#[async_trait]
pub trait Pipeline: Send + Sync {
    fn resolve_identity(&self) -> Result<Identity>;
    async fn fetch_profile(&self, identity: &Identity) -> Result<Profile>;
    async fn render_art(&self, profile: &Profile) -> Result<TextArtBlock>;
    fn format_profile(&self, profile: &Profile) -> RenderedProfileText;
    fn host_stats(&self) -> Option<HostStats>;
}

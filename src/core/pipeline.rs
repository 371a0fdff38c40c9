use crate::adapters::http::build_client;
use crate::core::art::ArtRenderer;
use crate::core::identity::{candidate_username, IdentityResolver};
use crate::core::layout;
use crate::core::profile::ProfileFetcher;
use crate::domain::model::{HostStats, Identity, Profile, RenderedProfileText, TextArtBlock};
use crate::domain::ports::{ConfigProvider, IdentityProvider, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// GitHub 版本的 pipeline：Git 身分 -> users API -> 頭像字元畫
pub struct GitHubPipeline<I: IdentityProvider, C: ConfigProvider> {
    resolver: IdentityResolver<I>,
    fetcher: ProfileFetcher,
    renderer: ArtRenderer,
    monitor: SystemMonitor,
    config: C,
}

impl<I: IdentityProvider, C: ConfigProvider> GitHubPipeline<I, C> {
    pub fn new(provider: I, config: C) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self {
            resolver: IdentityResolver::new(provider),
            fetcher: ProfileFetcher::new(client.clone(), config.api_base_url()),
            renderer: ArtRenderer::new(client, config.art_options().clone()),
            monitor: SystemMonitor::new(config.show_system_stats()),
            config,
        })
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<I: IdentityProvider, C: ConfigProvider> Pipeline for GitHubPipeline<I, C> {
    fn resolve_identity(&self) -> Result<Identity> {
        self.resolver.resolve()
    }

    async fn fetch_profile(&self, identity: &Identity) -> Result<Profile> {
        let username = candidate_username(identity)?;
        self.fetcher.fetch(&username).await
    }

    async fn render_art(&self, profile: &Profile) -> Result<TextArtBlock> {
        self.renderer.render(profile.avatar_url.as_deref()).await
    }

    fn format_profile(&self, profile: &Profile) -> RenderedProfileText {
        layout::format_profile(profile, self.config.color())
    }

    fn host_stats(&self) -> Option<HostStats> {
        self.monitor.snapshot()
    }
}

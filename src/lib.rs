pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::git::{GitIdentityProvider, StaticIdentityProvider};
pub use config::Settings;
pub use core::{engine::WhoArtEngine, pipeline::GitHubPipeline};
pub use utils::error::{Result, WhoArtError};

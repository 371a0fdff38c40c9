pub mod art;
pub mod engine;
pub mod identity;
pub mod layout;
pub mod pipeline;
pub mod profile;

pub use crate::domain::model::{Identity, IdentityKind, Profile, RenderedProfileText, TextArtBlock};
pub use crate::domain::ports::{ConfigProvider, IdentityProvider, Pipeline};
pub use crate::utils::error::Result;

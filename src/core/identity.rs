use crate::domain::model::{Identity, IdentityKind};
use crate::domain::ports::IdentityProvider;
use crate::utils::error::{Result, WhoArtError};

/// 取 email 中 `@` 之前的部分作為候選 username
pub fn email_to_username(email: &str) -> Option<&str> {
    let (local, _) = email.split_once('@')?;
    let local = local.trim();
    if local.is_empty() {
        None
    } else {
        Some(local)
    }
}

pub struct IdentityResolver<I: IdentityProvider> {
    provider: I,
}

impl<I: IdentityProvider> IdentityResolver<I> {
    pub fn new(provider: I) -> Self {
        Self { provider }
    }

    pub fn resolve(&self) -> Result<Identity> {
        let identity = self
            .provider
            .identity()
            .ok_or(WhoArtError::ConfigurationMissing)?;
        tracing::debug!("Resolved identity {:?}: {}", identity.kind(), identity.value());
        Ok(identity)
    }
}

/// 產生查詢 GitHub 用的 username，保證不為空字串
pub fn candidate_username(identity: &Identity) -> Result<String> {
    match identity.kind() {
        IdentityKind::Username => Ok(identity.value().to_string()),
        IdentityKind::Email => email_to_username(identity.value())
            .map(str::to_string)
            .ok_or_else(|| WhoArtError::MalformedInput {
                value: identity.value().to_string(),
                reason: "email has no local part before '@'".to_string(),
            }),
    }
}

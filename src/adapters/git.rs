use crate::domain::model::Identity;
use crate::domain::ports::IdentityProvider;
use std::process::Command;

/// 從 `git config --global` 讀取 user.name，沒有就改用 user.email
#[derive(Debug, Clone)]
pub struct GitIdentityProvider {
    program: String,
}

impl GitIdentityProvider {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 指令失敗、未設定或空白都當作沒有設定
    fn read_global(&self, key: &str) -> Option<String> {
        let output = Command::new(&self.program)
            .args(["config", "--global", key])
            .output();

        match output {
            Ok(output) if output.status.success() => {
                let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
                (!value.is_empty()).then_some(value)
            }
            Ok(output) => {
                tracing::debug!("git config {} exited with {}", key, output.status);
                None
            }
            Err(e) => {
                tracing::debug!("Failed to run {}: {}", self.program, e);
                None
            }
        }
    }
}

impl Default for GitIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

pub fn pick_identity(username: Option<String>, email: Option<String>) -> Option<Identity> {
    if let Some(identity) = username.and_then(Identity::username) {
        return Some(identity);
    }
    tracing::warn!("GitHub username not found.");

    let identity = email.and_then(Identity::email);
    if identity.is_none() {
        tracing::error!("GitHub email not found. Make sure Git is configured.");
    }
    identity
}

impl IdentityProvider for GitIdentityProvider {
    fn identity(&self) -> Option<Identity> {
        let username = self.read_global("user.name");
        if username.is_some() {
            return pick_identity(username, None);
        }
        pick_identity(None, self.read_global("user.email"))
    }
}

/// 固定身分，用於 `--user` 與測試
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    identity: Option<Identity>,
}

impl StaticIdentityProvider {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}

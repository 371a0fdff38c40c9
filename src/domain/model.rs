use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKind {
    Username,
    Email,
}

/// 本機 Git 設定中找到的身分（user.name 或 user.email）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    value: String,
    kind: IdentityKind,
}

impl Identity {
    /// 空字串不是有效身分
    pub fn new(value: impl Into<String>, kind: IdentityKind) -> Option<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return None;
        }
        Some(Self { value, kind })
    }

    pub fn username(value: impl Into<String>) -> Option<Self> {
        Self::new(value, IdentityKind::Username)
    }

    pub fn email(value: impl Into<String>) -> Option<Self> {
        Self::new(value, IdentityKind::Email)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> IdentityKind {
        self.kind
    }
}

/// GitHub 使用者資料的內部格式，除了 username 之外都可能缺少
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub public_repo_count: u64,
    pub follower_count: u64,
    pub public_gist_count: Option<u64>,
    pub avatar_url: Option<String>,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtCell {
    pub glyph: char,
    pub rgb: (u8, u8, u8),
}

/// 固定大小的字元畫，建立後不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArtBlock {
    width: usize,
    rows: Vec<Vec<ArtCell>>,
}

impl TextArtBlock {
    pub fn new(width: usize, rows: Vec<Vec<ArtCell>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self { width, rows }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<ArtCell>] {
        &self.rows
    }

    /// 未上色的純文字行
    pub fn plain_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.glyph).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedProfileText {
    pub lines: Vec<String>,
}

impl RenderedProfileText {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn extend(&mut self, section: impl IntoIterator<Item = String>) {
        self.lines.extend(section);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostStats {
    pub os: String,
    pub cpu_model: Option<String>,
    pub free_memory_bytes: u64,
    pub uptime_seconds: u64,
}

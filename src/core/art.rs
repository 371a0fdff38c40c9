use crate::domain::model::{ArtCell, TextArtBlock};
use crate::domain::ports::ArtOptions;
use crate::utils::error::{Result, WhoArtError};
use image::imageops::FilterType;
use image::GenericImageView;
use reqwest::Client;
use std::collections::HashMap;

/// 將較淡的字元換成較密的字元，提高對比
pub const ENHANCE_TABLE: &[(char, char)] = &[('@', 'M'), ('#', '%'), ('o', '#')];

/// 單次替換：每個字元只查原始字元，不會連鎖替換
pub fn remap_glyphs(text: &str, table: &[(char, char)]) -> String {
    let lookup: HashMap<char, char> = table.iter().copied().collect();
    text.chars()
        .map(|c| lookup.get(&c).copied().unwrap_or(c))
        .collect()
}

fn remap_block(block: TextArtBlock, table: &[(char, char)]) -> TextArtBlock {
    let lookup: HashMap<char, char> = table.iter().copied().collect();
    let width = block.width();
    let rows = block
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| ArtCell {
                    glyph: lookup.get(&cell.glyph).copied().unwrap_or(cell.glyph),
                    rgb: cell.rgb,
                })
                .collect()
        })
        .collect();
    TextArtBlock::new(width, rows)
}

/// 字元畫寬高上限，與設定驗證共用
pub const MAX_ART_DIMENSION: u32 = 400;

/// 終端機字元約為兩倍高，比例模式下高度減半
pub fn proportional_height(width: u32, image_width: u32, image_height: u32) -> u32 {
    if image_width == 0 {
        return 1;
    }
    let height = (width as f64 * image_height as f64 / image_width as f64 / 2.0).round();
    (height.min(MAX_ART_DIMENSION as f64) as u32).max(1)
}

fn glyph_for(charset: &[char], luminance: f64) -> char {
    let last = charset.len() - 1;
    let index = ((luminance / 255.0) * last as f64).round() as usize;
    charset[index.min(last)]
}

pub fn image_to_art(bytes: &[u8], options: &ArtOptions) -> Result<TextArtBlock> {
    let image = image::load_from_memory(bytes)?;
    let (image_width, image_height) = image.dimensions();

    let width = options.width.max(1);
    let height = if options.proportional {
        proportional_height(width, image_width, image_height)
    } else {
        options.height.max(1)
    };

    let charset: Vec<char> = options.charset.chars().collect();
    if charset.len() < 2 {
        return Err(WhoArtError::InvalidConfigValueError {
            field: "art.charset".to_string(),
            value: options.charset.clone(),
            reason: "Charset needs at least two glyphs".to_string(),
        });
    }

    tracing::debug!(
        "Converting {}x{} image into {}x{} cells",
        image_width,
        image_height,
        width,
        height
    );

    let resized = image
        .resize_exact(width, height, FilterType::Triangle)
        .to_rgba8();

    let rows = resized
        .rows()
        .map(|row| {
            row.map(|pixel| {
                let [r, g, b, a] = pixel.0;
                // 透明像素當作黑底
                let alpha = a as f64 / 255.0;
                let luminance =
                    (0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64) * alpha;
                ArtCell {
                    glyph: glyph_for(&charset, luminance),
                    rgb: (r, g, b),
                }
            })
            .collect()
        })
        .collect();

    let block = TextArtBlock::new(width as usize, rows);
    if options.enhance {
        Ok(remap_block(block, ENHANCE_TABLE))
    } else {
        Ok(block)
    }
}

pub struct ArtRenderer {
    client: Client,
    options: ArtOptions,
}

impl ArtRenderer {
    pub fn new(client: Client, options: ArtOptions) -> Self {
        Self { client, options }
    }

    pub async fn render(&self, avatar_url: Option<&str>) -> Result<TextArtBlock> {
        let avatar_url = avatar_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| WhoArtError::ImageUnavailable {
                reason: "No image URL provided".to_string(),
            })?;

        tracing::debug!("Downloading avatar from: {}", avatar_url);
        let response = self.client.get(avatar_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WhoArtError::ImageUnavailable {
                reason: format!(
                    "avatar request returned {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Downloaded {} avatar bytes", bytes.len());

        let options = self.options.clone();
        tokio::task::spawn_blocking(move || image_to_art(&bytes, &options))
            .await
            .map_err(|e| WhoArtError::ImageUnavailable {
                reason: format!("decoder task failed: {}", e),
            })?
    }
}

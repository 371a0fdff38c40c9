use crate::core::profile::{BIO_PLACEHOLDER, NOT_PROVIDED};
use crate::domain::model::{
    HostStats, Identity, IdentityKind, Profile, RenderedProfileText, TextArtBlock,
};
use crate::domain::ports::LayoutMode;
use crossterm::style::{style, Color, Stylize};
use std::fmt::Display;

pub const DEFAULT_SEPARATOR: &str = "   ";

const LABEL_COLOR: Color = Color::Rgb {
    r: 0xFF,
    g: 0xD7,
    b: 0x00,
};

fn paint(text: impl Display, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

fn field_line(label: &str, value: impl Display, color: bool) -> String {
    format!(
        "{} {}",
        paint(label, LABEL_COLOR, color),
        paint(value, Color::White, color)
    )
}

pub fn header(color: bool) -> Vec<String> {
    let rule = "==========================";
    vec![
        paint(rule, Color::Blue, color),
        paint("        WhoArt", Color::Green, color),
        paint(rule, Color::Blue, color),
    ]
}

pub fn identity_line(identity: &Identity, color: bool) -> String {
    let kind = match identity.kind() {
        IdentityKind::Username => "Username",
        IdentityKind::Email => "Email",
    };
    paint(
        format!("GitHub {}: {}", kind, identity.value()),
        Color::Green,
        color,
    )
}

pub fn format_profile(profile: &Profile, color: bool) -> RenderedProfileText {
    let gists = profile
        .public_gist_count
        .map(|count| count.to_string())
        .unwrap_or_else(|| NOT_PROVIDED.to_string());

    RenderedProfileText::new(vec![
        field_line("GitHub Username:", &profile.username, color),
        field_line(
            "Name:",
            profile.display_name.as_deref().unwrap_or(NOT_PROVIDED),
            color,
        ),
        field_line(
            "Bio:",
            profile.bio.as_deref().unwrap_or(BIO_PLACEHOLDER),
            color,
        ),
        field_line("Public Repos:", profile.public_repo_count, color),
        field_line("Followers:", profile.follower_count, color),
        field_line("Public Gists:", gists, color),
        field_line(
            "Profile URL:",
            profile.profile_url.as_deref().unwrap_or(NOT_PROVIDED),
            color,
        ),
    ])
}

pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// 主機資訊區塊，前面空一行和個人資料分開
pub fn host_stats_lines(stats: &HostStats, color: bool) -> Vec<String> {
    vec![
        String::new(),
        field_line("OS:", &stats.os, color),
        field_line(
            "CPU:",
            stats.cpu_model.as_deref().unwrap_or(NOT_PROVIDED),
            color,
        ),
        field_line(
            "Free Memory:",
            format!("{} MiB", stats.free_memory_bytes / 1024 / 1024),
            color,
        ),
        field_line("Uptime:", format_uptime(stats.uptime_seconds), color),
    ]
}

pub fn art_lines(block: &TextArtBlock, color: bool) -> Vec<String> {
    if !color {
        return block.plain_lines();
    }

    block
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let (r, g, b) = cell.rgb;
                    style(cell.glyph).with(Color::Rgb { r, g, b }).to_string()
                })
                .collect()
        })
        .collect()
}

/// 以字元畫的行數為準，文字不足的行補空字串
pub fn side_by_side(art: &[String], text: &[String], separator: &str) -> Vec<String> {
    art.iter()
        .enumerate()
        .map(|(index, line)| {
            let text_line = text.get(index).map(String::as_str).unwrap_or("");
            format!("{}{}{}", line, separator, text_line)
        })
        .collect()
}

pub fn compose(
    art: Option<&TextArtBlock>,
    text: Option<&RenderedProfileText>,
    mode: LayoutMode,
    separator: &str,
    color: bool,
) -> Vec<String> {
    match (art, text) {
        (Some(art), Some(text)) => {
            let art = art_lines(art, color);
            match mode {
                LayoutMode::SideBySide => side_by_side(&art, &text.lines, separator),
                LayoutMode::Stacked => art.into_iter().chain(text.lines.iter().cloned()).collect(),
            }
        }
        (Some(art), None) => art_lines(art, color),
        (None, Some(text)) => text.lines.clone(),
        (None, None) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ArtCell;

    fn sample_profile() -> Profile {
        Profile {
            username: "octocat".to_string(),
            display_name: None,
            bio: None,
            public_repo_count: 8,
            follower_count: 20,
            public_gist_count: None,
            avatar_url: None,
            profile_url: Some("https://github.com/octocat".to_string()),
        }
    }

    fn block(width: usize, height: usize) -> TextArtBlock {
        let row = vec![
            ArtCell {
                glyph: '#',
                rgb: (1, 2, 3),
            };
            width
        ];
        TextArtBlock::new(width, vec![row; height])
    }

    #[test]
    fn test_format_profile_uses_placeholders() {
        let text = format_profile(&sample_profile(), false);
        assert_eq!(
            text.lines,
            vec![
                "GitHub Username: octocat",
                "Name: Not provided",
                "Bio: No bio available",
                "Public Repos: 8",
                "Followers: 20",
                "Public Gists: Not provided",
                "Profile URL: https://github.com/octocat",
            ]
        );
    }

    #[test]
    fn test_colored_profile_contains_escape_codes() {
        let text = format_profile(&sample_profile(), true);
        assert!(text.lines[0].contains('\u{1b}'));
        assert!(text.lines[0].contains("octocat"));
    }

    #[test]
    fn test_side_by_side_art_governs_length() {
        let art: Vec<String> = (0..20).map(|i| format!("art{:02}", i)).collect();
        let text: Vec<String> = (0..6).map(|i| format!("txt{}", i)).collect();

        let lines = side_by_side(&art, &text, DEFAULT_SEPARATOR);

        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], "art00   txt0");
        assert_eq!(lines[5], "art05   txt5");
        for (index, line) in lines.iter().enumerate().skip(6) {
            assert_eq!(line, &format!("art{:02}   ", index));
        }
    }

    #[test]
    fn test_side_by_side_drops_text_beyond_art() {
        let art = vec!["a".to_string()];
        let text = vec!["one".to_string(), "two".to_string()];
        assert_eq!(side_by_side(&art, &text, " | "), vec!["a | one"]);
    }

    #[test]
    fn test_compose_modes() {
        let art = block(3, 2);
        let text = RenderedProfileText::new(vec!["x".to_string()]);

        let side = compose(Some(&art), Some(&text), LayoutMode::SideBySide, " ", false);
        assert_eq!(side, vec!["### x", "### "]);

        let stacked = compose(Some(&art), Some(&text), LayoutMode::Stacked, " ", false);
        assert_eq!(stacked, vec!["###", "###", "x"]);

        let text_only = compose(None, Some(&text), LayoutMode::SideBySide, " ", false);
        assert_eq!(text_only, vec!["x"]);

        let art_only = compose(Some(&art), None, LayoutMode::SideBySide, " ", false);
        assert_eq!(art_only, vec!["###", "###"]);

        assert!(compose(None, None, LayoutMode::Stacked, " ", false).is_empty());
    }

    #[test]
    fn test_identity_line() {
        let username = Identity::username("octocat").unwrap();
        let email = Identity::email("octo@cat.dev").unwrap();
        assert_eq!(identity_line(&username, false), "GitHub Username: octocat");
        assert_eq!(identity_line(&email, false), "GitHub Email: octo@cat.dev");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(3_660), "1h 1m");
        assert_eq!(format_uptime(90_061), "1d 1h 1m");
    }

    #[test]
    fn test_host_stats_lines() {
        let stats = HostStats {
            os: "Linux 6.1".to_string(),
            cpu_model: None,
            free_memory_bytes: 512 * 1024 * 1024,
            uptime_seconds: 120,
        };
        let lines = host_stats_lines(&stats, false);
        assert_eq!(
            lines,
            vec![
                "",
                "OS: Linux 6.1",
                "CPU: Not provided",
                "Free Memory: 512 MiB",
                "Uptime: 2m",
            ]
        );
    }
}

//! Display helpers for CLI output: path shortening, truncation, color.

/// Collapse `$HOME` to `~`.
///
/// ```text
/// "/Users/me/workspaces/api" -> "~/workspaces/api"
/// ```
pub fn short_path(path: &str) -> String {
    let home = std::env::var("HOME").unwrap_or_default();
    collapse_home(path, &home)
}

fn collapse_home(path: &str, home: &str) -> String {
    let home = home.trim_end_matches('/');
    if home.is_empty() {
        return path.to_string();
    }
    match path.strip_prefix(home) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

/// Right-truncate to `max_len` characters, appending `…` if truncated.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{kept}\u{2026}")
    }
}

/// Resolve --color flag to bool.
pub fn resolve_color(color: &str) -> bool {
    use std::io::IsTerminal;
    match color {
        "always" => true,
        "never" => false,
        _ => std::io::stdout().is_terminal(),
    }
}

/// ANSI color for a status label. The label is free text, so only common
/// words are colored.
pub fn status_color(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "running" | "active" | "ready" => "\x1b[32m",
        "idle" | "stopped" => "\x1b[2m",
        "error" | "failed" | "broken" => "\x1b[31m",
        _ => "\x1b[33m",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_home_prefix() {
        assert_eq!(collapse_home("/home/me/ws/api", "/home/me"), "~/ws/api");
        assert_eq!(collapse_home("/home/me", "/home/me/"), "~");
    }

    #[test]
    fn collapse_home_requires_boundary() {
        assert_eq!(collapse_home("/home/meg/ws", "/home/me"), "/home/meg/ws");
    }

    #[test]
    fn collapse_home_without_home() {
        assert_eq!(collapse_home("/ws/api", ""), "/ws/api");
    }

    #[test]
    fn truncate_short() {
        assert_eq!(truncate("main", 20), "main");
    }

    #[test]
    fn truncate_exact() {
        let branch = "a".repeat(20);
        assert_eq!(truncate(&branch, 20), branch);
    }

    #[test]
    fn truncate_long() {
        let result = truncate("feat/very-long-branch-name", 20);
        assert_eq!(result.chars().count(), 20);
        assert!(result.ends_with('\u{2026}'));
        assert!(result.starts_with("feat/very-long-bran"));
    }

    #[test]
    fn truncate_multibyte_does_not_split_chars() {
        assert_eq!(truncate("ブランチ名前", 4), "ブラン\u{2026}");
    }

    #[test]
    fn resolve_color_explicit() {
        assert!(resolve_color("always"));
        assert!(!resolve_color("never"));
    }

    #[test]
    fn status_colors() {
        assert_eq!(status_color("Running"), "\x1b[32m");
        assert_eq!(status_color("failed"), "\x1b[31m");
        assert_eq!(status_color("warming"), "\x1b[33m");
    }
}

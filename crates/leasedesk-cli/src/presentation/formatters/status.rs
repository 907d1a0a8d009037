use is_terminal::IsTerminal;
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;
use serde::Serialize;

static COLOR_ENABLED: Lazy<bool> = Lazy::new(|| {
    !cfg!(test) && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
});

/// Color family of a status value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Danger,
    Warning,
    Secondary,
    /// Headings and badge labels
    Strong,
    /// Commands the operator can copy
    Accent,
}

/// Map a unit/payment status (or any other word) to its tone.
pub fn status_tone(status: &str) -> Tone {
    match status.to_ascii_lowercase().as_str() {
        "available" | "completed" => Tone::Success,
        "occupied" | "failed" => Tone::Danger,
        "maintenance" | "pending" => Tone::Warning,
        _ => Tone::Secondary,
    }
}

/// Colorize `text` by tone when stdout is a terminal
pub fn paint(text: &str, tone: Tone) -> String {
    if !*COLOR_ENABLED {
        return text.to_string();
    }
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Danger => text.red().to_string(),
        Tone::Warning => text.yellow().to_string(),
        Tone::Secondary => text.dimmed().to_string(),
        Tone::Strong => text.bold().to_string(),
        Tone::Accent => text.cyan().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tone_map() {
        assert_eq!(status_tone("available"), Tone::Success);
        assert_eq!(status_tone("Completed"), Tone::Success);
        assert_eq!(status_tone("occupied"), Tone::Danger);
        assert_eq!(status_tone("failed"), Tone::Danger);
        assert_eq!(status_tone("maintenance"), Tone::Warning);
        assert_eq!(status_tone("pending"), Tone::Warning);
        assert_eq!(status_tone("archived"), Tone::Secondary);
    }

    #[test]
    fn test_paint_is_plain_under_test() {
        assert_eq!(paint("occupied", Tone::Danger), "occupied");
    }
}

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

use super::traits::Renderer;
use crate::presentation::formatters::{Tone, paint};
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    view_mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, view_mode: ViewMode) -> Self {
        Self { format, view_mode }
    }

    /// Text rendition of a result: badge, view, then tips
    pub fn to_text<T>(&self, result: &CommandResultViewModel<T>) -> String
    where
        T: Serialize + CreateView,
    {
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            let _ = writeln!(out, "{} {}", badge.icon(), paint(&badge.label, Tone::Strong));
            out.push('\n');
        }

        let _ = write!(out, "{}", result.content.create_view(self.view_mode));

        if !result.suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", paint("💡 Tips:", Tone::Warning));
            for tip in &result.suggestions {
                let _ = write!(out, "  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    let _ = write!(out, ": {}", paint(cmd, Tone::Accent));
                }
                out.push('\n');
            }
        }

        out
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Text => print!("{}", self.to_text(&result)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, SessionViewModel, StatusBadge};

    #[test]
    fn test_text_layout_with_badge_and_tips() {
        let result = CommandResultViewModel::new(SessionViewModel { username: None })
            .with_badge(StatusBadge::warning("Not logged in"))
            .with_suggestion(
                Guidance::new("Log in with the demo account")
                    .with_command("leasedesk login property_manager"),
            );

        let renderer = ConsoleRenderer::new(OutputFormat::Text, ViewMode::Compact);
        assert_eq!(
            renderer.to_text(&result),
            "⚠️ Not logged in\n\nNot logged in\n\n💡 Tips:\n  • Log in with the demo account: leasedesk login property_manager\n"
        );
    }

    #[test]
    fn test_plain_content_without_decoration() {
        let result = CommandResultViewModel::new(SessionViewModel {
            username: Some("property_manager".to_string()),
        });
        let renderer = ConsoleRenderer::new(OutputFormat::Text, ViewMode::Compact);
        assert_eq!(renderer.to_text(&result), "Logged in as property_manager\n");
    }
}

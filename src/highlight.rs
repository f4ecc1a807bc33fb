//! Syntax highlighting for the code preview using syntect.

use egui::Color32;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use rad_canvas::CodegenFormat;
use rad_canvas::config::Theme;

/// Cached syntax highlighting resources.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: &'static str,
}

impl Highlighter {
    pub fn new(theme: Theme) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: match theme {
                Theme::Dark => "base16-ocean.dark",
                Theme::Light => "InspiredGitHub",
            },
        }
    }

    /// Highlight `code` and return a list of (text, color) spans.
    ///
    /// The default syntax set has no TSX grammar; JavaScript is close enough
    /// for tags and attributes.
    pub fn highlight(&self, code: &str, format: CodegenFormat) -> Vec<(String, Color32)> {
        let ext = match format {
            CodegenFormat::Component | CodegenFormat::MarkupOnly => "js",
            CodegenFormat::Json => "json",
        };
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(ext)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let Some(theme) = self
            .theme_set
            .themes
            .get(self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
        else {
            return vec![(code.to_string(), Color32::LIGHT_GRAY)];
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut result = Vec::new();

        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    for (style, text) in ranges {
                        result.push((text.to_string(), style_to_color32(style)));
                    }
                }
                Err(e) => {
                    tracing::debug!("highlighting fell back to plain text: {e}");
                    result.push((line.to_string(), Color32::LIGHT_GRAY));
                }
            }
        }

        result
    }

    /// Render highlighted code as a LayoutJob for egui.
    pub fn layout_job(&self, code: &str, format: CodegenFormat) -> egui::text::LayoutJob {
        let mut job = egui::text::LayoutJob::default();

        for (text, color) in self.highlight(code, format) {
            job.append(
                &text,
                0.0,
                egui::TextFormat {
                    font_id: egui::FontId::monospace(12.0),
                    color,
                    ..Default::default()
                },
            );
        }

        job
    }
}

/// Convert syntect Style to egui Color32.
fn style_to_color32(style: Style) -> Color32 {
    Color32::from_rgb(style.foreground.r, style.foreground.g, style.foreground.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_markup() {
        let highlighter = Highlighter::new(Theme::Dark);
        let spans = highlighter.highlight("<div className=\"p-4\">\n</div>\n", CodegenFormat::Component);
        assert!(!spans.is_empty());
        let joined: String = spans.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(joined, "<div className=\"p-4\">\n</div>\n");
    }

    #[test]
    fn test_highlight_json() {
        let highlighter = Highlighter::new(Theme::Light);
        let spans = highlighter.highlight("[{\"id\": \"a\"}]", CodegenFormat::Json);
        assert!(!spans.is_empty());
    }

    #[test]
    fn test_layout_job() {
        let highlighter = Highlighter::new(Theme::Dark);
        let job = highlighter.layout_job("export default function X() {}", CodegenFormat::Component);
        assert!(!job.text.is_empty());
    }
}

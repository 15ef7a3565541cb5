use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str =
    " Tab: Focus │ ↑/↓: Count │ Ctrl+T: Dark mode │ Ctrl+B: React blue │ Ctrl+N: Default │ Ctrl+Q/Ctrl+C: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, palette: Palette) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Padding by char count, not byte count (the hints contain box-drawing chars)
        let hints_width = HINTS.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(palette.text).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style.bg(palette.background))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_list_every_quit_key() {
        assert!(HINTS.contains("Ctrl+Q/Ctrl+C: Quit"));
    }
}

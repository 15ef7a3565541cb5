use crate::ui::view::BoardView;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &BoardView) -> Paragraph<'static> {
        let palette = view.palette;
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.hint);
        let mode = if view.dark_mode { "dark" } else { "light" };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "tally",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("mode: {}", mode), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("color: {}", view.color_label), text_style),
        ]);

        Paragraph::new(line).style(Style::default().bg(palette.background)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}

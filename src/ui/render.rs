use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_sections, layout_regions};
use crate::ui::theme::{Palette, COLOR_PRESETS};
use crate::ui::view::BoardView;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view();

    frame.render_widget(Header::new().widget(&view), header);
    frame.render_widget(Clear, body);

    let (input_area, counter_area) = body_sections(body);
    let focus = app.focus();
    frame.render_widget(
        input_section(app, &view, focus == Focus::Input),
        input_area,
    );
    frame.render_widget(
        counter_section(&view, focus == Focus::Counter),
        counter_area,
    );

    if focus == Focus::Input && input_area.width > 2 && input_area.height > 2 {
        let x = input_cursor_x(input_area, &app.board().input);
        frame.set_cursor_position((x, input_area.y + 1));
    }

    frame.render_widget(Footer::new().widget(footer, view.palette), footer);
}

/// Column after the typed text, clamped inside the section border.
///
/// Measured in display cells, so wide glyphs count twice.
fn input_cursor_x(area: Rect, input: &str) -> u16 {
    let typed = u16::try_from(Span::raw(input).width()).unwrap_or(u16::MAX);
    let max_x = area.x + area.width.saturating_sub(2);
    // border + "> " prompt
    area.x.saturating_add(3).saturating_add(typed).min(max_x)
}

fn section_block(title: &'static str, palette: Palette, focused: bool) -> Block<'static> {
    let border = if focused { palette.accent } else { palette.border };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.background).fg(palette.text))
}

fn button(label: &str, palette: Palette, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(palette.background)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.accent)
    };
    Span::styled(format!("[ {} ]", label), style)
}

fn input_section(app: &App, view: &BoardView, focused: bool) -> Paragraph<'static> {
    let palette = view.palette;
    let current_color = app.board().color.as_str();

    let mut buttons = Vec::new();
    for (tag, label) in COLOR_PRESETS {
        if !buttons.is_empty() {
            buttons.push(Span::raw("  "));
        }
        buttons.push(button(label, palette, tag == current_color));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(palette.hint)),
            Span::raw(app.board().input.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            view.echo.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(buttons).alignment(Alignment::Center),
    ];

    Paragraph::new(lines).block(section_block(" Input ", palette, focused))
}

fn counter_section(view: &BoardView, focused: bool) -> Paragraph<'static> {
    let palette = view.palette;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            view.count.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            button("increment", palette, false),
            Span::raw("  "),
            button("decrement", palette, false),
        ]),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(section_block(" Counter ", palette, focused))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::ui::board::{BoardIntent, BoardState};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn draws_echo_placeholder_and_count() {
        let app = App::new(BoardState::default(), ViewConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("output"));
        assert!(text.contains("[ increment ]"));
        assert!(text.contains("mode: dark"));
    }

    #[test]
    fn draws_trimmed_echo_after_input() {
        let mut app = App::new(BoardState::default(), ViewConfig::default());
        app.dispatch(BoardIntent::SetInput {
            text: "  hello  ".to_string(),
        });
        app.dispatch(BoardIntent::SetColor {
            color: "react-blue".to_string(),
        });
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("hello"));
        assert!(text.contains("color: react blue"));
    }

    #[test]
    fn cursor_counts_display_width() {
        let area = Rect::new(0, 3, 80, 9);
        assert_eq!(input_cursor_x(area, ""), 3);
        assert_eq!(input_cursor_x(area, "abc"), 6);
        // two wide glyphs take four cells
        assert_eq!(input_cursor_x(area, "日本"), 7);
    }

    #[test]
    fn cursor_clamps_for_huge_input() {
        let area = Rect::new(0, 3, 80, 9);
        let pasted = "x".repeat(70_000);
        assert_eq!(input_cursor_x(area, &pasted), 78);
    }
}

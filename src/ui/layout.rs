use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Input section on top, counter section below.
pub fn body_sections(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(footer.height, 0);
        assert_eq!(body.height, 0);
    }
}

use ratatui::style::Color;

pub const REACT_BLUE_TAG: &str = "react-blue";

/// Color tags offered as buttons, with their labels.
pub const COLOR_PRESETS: [(&str, &str); 2] = [(REACT_BLUE_TAG, "react blue"), ("", "default")];

pub const DEFAULT_ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const REACT_BLUE: Color = Color::Rgb(0x61, 0xda, 0xfb);

const DARK_BACKGROUND: Color = Color::Rgb(0x1e, 0x1e, 0x1e);
const DARK_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
const DARK_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
const LIGHT_BACKGROUND: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
const LIGHT_TEXT: Color = Color::Rgb(0x26, 0x26, 0x26);
const LIGHT_BORDER: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub accent: Color,
    pub hint: Color,
}

impl Palette {
    pub fn resolve(color: &str, dark_mode: bool) -> Self {
        let (background, text, border) = if dark_mode {
            (DARK_BACKGROUND, DARK_TEXT, DARK_BORDER)
        } else {
            (LIGHT_BACKGROUND, LIGHT_TEXT, LIGHT_BORDER)
        };
        Self {
            background,
            text,
            border,
            accent: accent_for(color),
            hint: HINT_TEXT,
        }
    }
}

/// Unknown tags fall back to the default accent.
pub fn accent_for(color: &str) -> Color {
    match color {
        REACT_BLUE_TAG => REACT_BLUE,
        _ => DEFAULT_ACCENT,
    }
}

/// Button label for a color tag, or the raw tag if it is not a preset.
pub fn color_label(color: &str) -> &str {
    COLOR_PRESETS
        .iter()
        .find(|(tag, _)| *tag == color)
        .map(|(_, label)| *label)
        .unwrap_or(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_uses_default_accent() {
        assert_eq!(accent_for("chartreuse"), DEFAULT_ACCENT);
        assert_eq!(accent_for(REACT_BLUE_TAG), REACT_BLUE);
    }

    #[test]
    fn dark_mode_switches_background() {
        let dark = Palette::resolve("", true);
        let light = Palette::resolve("", false);
        assert_ne!(dark.background, light.background);
        assert_eq!(dark.accent, light.accent);
    }

    #[test]
    fn labels() {
        assert_eq!(color_label(""), "default");
        assert_eq!(color_label("react-blue"), "react blue");
        assert_eq!(color_label("teal"), "teal");
    }
}

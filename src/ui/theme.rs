use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(16, 18, 24);
    pub const BG_SURFACE: Color = Color::Rgb(28, 32, 42);
    pub const BG_ELEVATED: Color = Color::Rgb(38, 44, 58);
    pub const ACCENT_BLUE: Color = Color::Rgb(37, 99, 235);
    pub const ACCENT_YELLOW: Color = Color::Rgb(253, 224, 71);
    pub const ACCENT_AMBER: Color = Color::Rgb(234, 179, 8);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_RED: Color = Color::Rgb(230, 100, 100);
    pub const TEXT_PRIMARY: Color = Color::Rgb(230, 232, 238);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 116, 130);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 92);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    /// Active segment of a segmented control.
    pub fn segment_selected() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn segment() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn tool_name() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn certified() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn badge() -> Style {
        Style::default().fg(Color::White).bg(Self::ACCENT_BLUE)
    }

    pub fn link() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).add_modifier(Modifier::ITALIC)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::TEXT_PRIMARY)
    }

    pub fn input_placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::TEXT_PRIMARY)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn exclusive() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .bg(Color::Rgb(30, 64, 175))
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }
}

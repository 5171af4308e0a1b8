use crate::app::state::AppState;
use crate::app::viewport::LayoutMode;
use crate::ui::text::centered_offset;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

pub const TAGLINE: &str = "Discover the best AI tools for sports innovation";
pub const CURATED_BY: &str = "Curated by Sports Innovation Lab & TwinBrain AI";

/// Navigation links shown in the desktop nav and in the menu.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Sports Innovation Lab", "https://www.sportsilab.com/"),
    ("AI Playbook", "/submit-tool"),
    ("Advertise", "/advertise"),
];

fn title_line() -> Line<'static> {
    let plain = Style::default().fg(Color::White);
    let bold = plain.add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled("Sports ", plain),
        Span::styled("Innovation ", bold),
        Span::styled("Lab ", plain),
        Span::styled("AI", bold.fg(Theme::ACCENT_YELLOW)),
    ])
}

pub fn render(buf: &mut Buffer, area: Rect, state: &AppState) {
    Block::default()
        .style(Style::default().bg(Theme::BG_DARK))
        .render(area, buf);
    if area.height < 5 {
        return;
    }

    let grid = state.layout_mode == LayoutMode::Grid;

    // Logos on the left, navigation on the right.
    let label = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 1);
    buf.set_stringn(
        label.x,
        label.y,
        "POWERED BY:",
        label.width as usize,
        Theme::muted().add_modifier(Modifier::BOLD),
    );
    let top = Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), 1);
    Paragraph::new(Line::from(vec![
        Span::styled("TwinBrain AI", Theme::text()),
        Span::styled(" × ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled("Sports Innovation Lab", Theme::text()),
    ]))
    .render(top, buf);

    let nav = if grid {
        let mut spans: Vec<Span> = Vec::new();
        for (name, _) in NAV_LINKS {
            spans.push(Span::styled(
                format!("  {}", name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled("  [m]", Theme::key_hint()));
        Line::from(spans)
    } else {
        Line::from(Span::styled(if state.menu_open { "✕ " } else { "☰ " }, Theme::key_hint()))
    };
    Paragraph::new(nav).alignment(Alignment::Right).render(top, buf);

    let title = title_line();
    let title_x = centered_offset(title.width(), area.width as usize) as u16;
    let mut y = area.y + 3;
    buf.set_line(area.x + title_x, y, &title, area.width.saturating_sub(title_x));
    y += 1;

    let mut subtitle = |text: &str, style: Style, y: u16| {
        let x = centered_offset(text.width(), area.width as usize) as u16;
        buf.set_stringn(area.x + x, y, text, area.width as usize, style);
    };
    if grid {
        subtitle(TAGLINE, Theme::text(), y);
        y += 1;
    }
    if y < area.bottom() {
        subtitle(CURATED_BY, Theme::secondary(), y);
    }
}

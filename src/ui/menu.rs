use crate::ui::header::NAV_LINKS;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

/// Menu entry that jumps to the signup section.
pub const NEWSLETTER_ENTRY: &str = "Newsletter";

/// Navigation popup listing the header links.
pub fn render(buf: &mut Buffer, page: Rect) {
    let width = NAV_LINKS
        .iter()
        .map(|(name, href)| (name.len() + href.len() + 6) as u16)
        .max()
        .unwrap_or(20)
        .max(24);
    let area = layout::popup_area(page, width, NAV_LINKS.len() as u16 + 5);
    if area.height < 3 {
        return;
    }
    Clear.render(area, buf);

    let block = Block::default()
        .title(" Menu ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));

    let mut lines: Vec<Line> = NAV_LINKS
        .iter()
        .map(|(name, href)| {
            Line::from(vec![
                Span::styled(format!(" {}", name), Theme::text().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", href), Theme::link()),
            ])
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled(format!(" {}", NEWSLETTER_ENTRY), Theme::text().add_modifier(Modifier::BOLD)),
        Span::styled("  e", Theme::key_hint()),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(" Esc/m close", Theme::muted())));

    Paragraph::new(lines).block(block).render(area, buf);
}

use crate::app::state::{AppState, FocusPanel};
use crate::app::viewport::LayoutMode;
use crate::catalog::Tool;
use crate::ui::layout::{self, CARD_HEIGHT};
use crate::ui::text::{centered_offset, truncate, wrap};
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

pub const LOADING_TEXT: &str = "Loading tools…";
pub const EMPTY_TEXT: &str = "No tools found";
const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

pub fn render(buf: &mut Buffer, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }
    let focused = state.focus == FocusPanel::Tools;

    let mut title = vec![Span::styled(format!(" {}", state.sort.label()), Theme::title())];
    if state.loading && !state.tools.is_empty() {
        title.push(Span::styled("  refreshing…", Theme::muted()));
    }
    if focused && state.layout_mode == LayoutMode::Carousel {
        title.push(Span::styled("  ←/→ browse, 1-9 jump", Theme::key_hint()));
    }
    buf.set_line(area.x, area.y, &Line::from(title), area.width);

    let body = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
    if state.tools.is_empty() {
        let text = if state.loading {
            let frame = SPINNER[(state.tick_count / 4) as usize % SPINNER.len()];
            format!("{} {}", frame, LOADING_TEXT)
        } else {
            EMPTY_TEXT.to_string()
        };
        render_placeholder(buf, body, &text);
        return;
    }

    match state.layout_mode {
        LayoutMode::Grid => {
            let cards = state.policy.grid_cards(&state.tools);
            for (tool, cell) in cards.iter().zip(layout::grid_cells(area, cards.len())) {
                render_card(buf, cell, tool, false);
            }
        }
        LayoutMode::Carousel => render_carousel(buf, body, state, focused),
    }
}

fn render_placeholder(buf: &mut Buffer, area: Rect, text: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }
    let x = centered_offset(text.chars().count(), inner.width as usize) as u16;
    let y = inner.y + inner.height / 2;
    buf.set_stringn(inner.x + x, y, text, inner.width as usize, Theme::muted());
}

fn render_carousel(buf: &mut Buffer, area: Rect, state: &AppState, focused: bool) {
    let Some(tool) = state.carousel.current(&state.tools) else {
        return;
    };
    if area.width < 8 || area.height < CARD_HEIGHT {
        return;
    }

    let card = Rect::new(area.x + 3, area.y, area.width - 6, CARD_HEIGHT);
    render_card(buf, card, tool, focused);

    let arrow_style = if state.tools.len() > 1 {
        Theme::key_hint()
    } else {
        Theme::muted()
    };
    let mid = card.y + CARD_HEIGHT / 2;
    buf.set_string(area.x + 1, mid, "‹", arrow_style);
    buf.set_string(area.right() - 2, mid, "›", arrow_style);

    let dots_y = card.bottom();
    if dots_y < area.bottom() {
        let line = dots_line(state.carousel.index(), state.tools.len(), area.width);
        let x = centered_offset(line.width(), area.width as usize) as u16;
        buf.set_line(area.x + x, dots_y, &line, area.width.saturating_sub(x));
    }
}

/// One dot per slot, or a `3 / 20` counter when the dots do not fit.
fn dots_line(index: usize, len: usize, width: u16) -> Line<'static> {
    if len * 2 > usize::from(width) {
        return Line::from(Span::styled(format!("{} / {}", index + 1, len), Theme::secondary()));
    }
    let spans: Vec<Span> = (0..len)
        .map(|i| {
            if i == index {
                Span::styled("● ", Theme::key_hint())
            } else {
                Span::styled("○ ", Theme::muted())
            }
        })
        .collect();
    Line::from(spans)
}

/// A single tool card: name, certified mark and badge, description, links.
pub fn render_card(buf: &mut Buffer, area: Rect, tool: &Tool, focused: bool) {
    let (border_style, border_type) = if tool.certified {
        (Style::default().fg(Theme::ACCENT_YELLOW), Theme::border_type_focused())
    } else if focused {
        (Theme::border_focused(), Theme::border_type())
    } else {
        (Theme::border(), Theme::border_type())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width < 4 || inner.height == 0 {
        return;
    }
    let width = inner.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(truncate(&tool.name, width), Theme::tool_name())));

    let mut tags: Vec<Span> = Vec::new();
    if tool.certified {
        tags.push(Span::styled(" ★ CERTIFIED ", Theme::certified()));
        tags.push(Span::raw(" "));
    }
    if let Some(badge) = tool.badge() {
        let used = if tool.certified { 14 } else { 0 };
        let room = width.saturating_sub(used + 2);
        tags.push(Span::styled(format!(" {} ", truncate(badge, room)), Theme::badge()));
    }
    lines.push(Line::from(tags));

    let description_rows = usize::from(inner.height.saturating_sub(4)).max(1);
    for row in wrap(&tool.short_description, width, description_rows) {
        lines.push(Line::from(Span::styled(row, Theme::secondary())));
    }
    while lines.len() < 2 + description_rows {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        truncate(&format!("img {}", tool.screenshot()), width),
        Theme::muted(),
    )));
    lines.push(Line::from(Span::styled(truncate(&tool.source_url, width), Theme::link())));

    Paragraph::new(lines).render(inner, buf);
}

//! Category and sort-mode controls.

use crate::app::state::{AppState, FocusPanel};
use crate::app::viewport::LayoutMode;
use crate::catalog::category::selected_label;
use crate::catalog::{SortMode, CATEGORIES};
use crate::ui::layout;
use crate::ui::text::centered_offset;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

fn control_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
}

/// Joined segments (`" label "` separated by `│`), centered in `area`.
fn segmented_line<'a>(labels: &[&'a str], selected: usize, width: u16) -> Line<'a> {
    let mut spans: Vec<Span> = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", Theme::border()));
        }
        let style = if i == selected {
            Theme::segment_selected()
        } else {
            Theme::segment()
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }
    let line = Line::from(spans);
    let pad = centered_offset(line.width(), width as usize);
    let mut padded = vec![Span::raw(" ".repeat(pad))];
    padded.extend(line.spans);
    Line::from(padded)
}

pub fn render_categories(buf: &mut Buffer, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Categories;
    let block = control_block(" Category ", focused);
    let inner = block.inner(area);
    block.render(area, buf);

    let line = match state.layout_mode {
        LayoutMode::Grid => segmented_line(
            &layout::category_labels(inner.width),
            state.selected_category_index(),
            inner.width,
        ),
        LayoutMode::Carousel => {
            let label = selected_label(state.category, state.layout_mode.is_compact());
            let arrow = if state.dropdown.open { "▴" } else { "▾" };
            let text = format!(" {} {} ", label, arrow);
            let pad = centered_offset(text.chars().count(), inner.width as usize);
            Line::from(vec![
                Span::raw(" ".repeat(pad)),
                Span::styled(text, Theme::segment_selected()),
            ])
        }
    };
    Paragraph::new(line).render(inner, buf);
}

pub fn render_sort_toggle(buf: &mut Buffer, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::SortToggle;
    let block = control_block(" Show ", focused);
    let inner = block.inner(area);
    block.render(area, buf);

    let labels: Vec<&str> = SortMode::ALL.iter().map(|m| m.label()).collect();
    let selected = SortMode::ALL
        .iter()
        .position(|m| *m == state.sort)
        .unwrap_or(0);
    Paragraph::new(segmented_line(&labels, selected, inner.width)).render(inner, buf);
}

/// Dropdown list overlay, drawn in screen coordinates.
pub fn render_dropdown(buf: &mut Buffer, area: Rect, state: &AppState) {
    if area.height < 3 {
        return;
    }
    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(area);
    block.render(area, buf);

    let selected = state.selected_category_index();
    let lines: Vec<Line> = CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let marker = if i == selected { "✓ " } else { "  " };
            let style = if i == state.dropdown.highlighted {
                Theme::segment_selected()
            } else {
                Theme::text()
            };
            Line::from(Span::styled(format!("{}{}", marker, category.label(false)), style))
        })
        .collect();
    Paragraph::new(lines).render(inner, buf);
}

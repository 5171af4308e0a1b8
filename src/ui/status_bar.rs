use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = match state.focus {
        FocusPanel::Email => " Enter subscribe  Esc leave ",
        _ => " Tab focus  n/t sort  e email  m menu  q quit ",
    };
    parts.push(Span::styled(hints, Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_ELEVATED)));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Categories => "CATEGORY",
        FocusPanel::SortToggle => "SORT",
        FocusPanel::Tools => "TOOLS",
        FocusPanel::Email => "EMAIL",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

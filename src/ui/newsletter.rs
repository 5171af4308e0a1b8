//! The inline newsletter section and the floating banner. Both edit the same
//! draft, so typing in one shows up in the other.

use crate::app::state::{AppState, FocusPanel};
use crate::newsletter::{SubscriptionDraft, SUCCESS_MESSAGE};
use crate::ui::header::CURATED_BY;
use crate::ui::layout;
use crate::ui::text::truncate;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Widget};
use unicode_width::UnicodeWidthChar;

pub const SECTION_HEADING: &str = "Sports Technology Insights! 🏆";
pub const SECTION_PITCH: &str =
    "Join industry leaders receiving weekly updates on the latest sports innovation tools and trends.";
pub const BANNER_HEADING: &str = "Sports Tech Updates! 🏆";
pub const BANNER_PITCH: &str = "Join industry leaders discovering game-changing sports tech tools weekly.";
pub const PLACEHOLDER: &str = "Your email address";
pub const BUTTON: &str = " Subscribe Now ";
pub const FOOTNOTE: &str = "Get insights from both Sports Innovation Lab and TwinBrain AI experts.";

/// Draws the inline section into the page buffer. Returns the cursor
/// position (page coordinates) when the email field has focus.
pub fn render_section(buf: &mut Buffer, area: Rect, state: &AppState) -> Option<(u16, u16)> {
    let focused = state.focus == FocusPanel::Email;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_ELEVATED));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height < 6 || inner.width < 20 {
        return None;
    }
    let inner = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);
    let width = inner.width as usize;

    buf.set_stringn(
        inner.x,
        inner.y,
        SECTION_HEADING,
        width,
        Theme::title().fg(Theme::ACCENT_YELLOW),
    );
    buf.set_stringn(inner.x, inner.y + 1, truncate(SECTION_PITCH, width), width, Theme::text());
    buf.set_line(inner.x, inner.y + 2, &exclusive_line(), inner.width);

    let form = Rect::new(inner.x, inner.y + 3, inner.width, 1);
    let cursor = render_form(buf, form, &state.newsletter, focused);

    let mut y = inner.y + 4;
    if let Some(message) = &state.newsletter.message {
        buf.set_stringn(inner.x, y, truncate(message, width), width, message_style(message));
        y += 1;
    }
    buf.set_stringn(inner.x, y, truncate(FOOTNOTE, width), width, Theme::muted());
    cursor
}

/// Draws the floating banner in screen coordinates. Returns the cursor
/// position when the email field has focus.
pub fn render_banner(buf: &mut Buffer, area: Rect, state: &AppState) -> Option<(u16, u16)> {
    if area.height < 3 || area.width < 20 {
        return None;
    }
    Clear.render(area, buf);
    let block = Block::default()
        .title(format!(" {} ", BANNER_HEADING))
        .title_style(Theme::title().fg(Theme::ACCENT_YELLOW))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Theme::ACCENT_AMBER))
        .style(Style::default().bg(Theme::BG_ELEVATED));
    let inner = block.inner(area);
    block.render(area, buf);

    let close = layout::banner_close_area(area);
    buf.set_stringn(close.x, close.y, "[x]", close.width as usize, Theme::key_hint());

    let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
    let width = inner.width as usize;
    let focused = state.focus == FocusPanel::Email;

    let mut rows = inner.rows();
    if let Some(row) = rows.next() {
        buf.set_stringn(row.x, row.y, truncate(BANNER_PITCH, width), width, Theme::text());
    }
    let cursor = rows
        .next()
        .and_then(|row| render_form(buf, row, &state.newsletter, focused));
    if let Some(row) = rows.next() {
        match &state.newsletter.message {
            Some(message) => {
                buf.set_stringn(row.x, row.y, truncate(message, width), width, message_style(message));
            }
            None => {
                buf.set_stringn(row.x, row.y, truncate(FOOTNOTE, width), width, Theme::muted());
            }
        }
    }
    cursor
}

fn exclusive_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(" ⚡ EXCLUSIVE ", Theme::exclusive()),
        Span::raw(" "),
        Span::styled(CURATED_BY, Style::default().fg(Theme::ACCENT_YELLOW)),
    ])
}

fn message_style(message: &str) -> Style {
    let color = if message == SUCCESS_MESSAGE {
        Theme::ACCENT_GREEN
    } else {
        Theme::ACCENT_RED
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// One row: the email field followed by the submit button.
fn render_form(
    buf: &mut Buffer,
    area: Rect,
    draft: &SubscriptionDraft,
    focused: bool,
) -> Option<(u16, u16)> {
    let button_w = BUTTON.len() as u16;
    let field_w = area.width.saturating_sub(button_w + 1).max(1);
    let field = Rect::new(area.x, area.y, field_w, 1);

    buf.set_style(field, Theme::input_text());
    let text = &draft.email.text;
    let cursor = if text.is_empty() {
        buf.set_stringn(field.x + 1, field.y, PLACEHOLDER, field_w.saturating_sub(2) as usize, Theme::input_placeholder());
        0
    } else {
        let (shown, cursor) = visible_input(
            text,
            draft.email.cursor_column(),
            field_w.saturating_sub(2) as usize,
        );
        buf.set_stringn(field.x + 1, field.y, shown, field_w.saturating_sub(2) as usize, Theme::input_text());
        cursor
    };

    let button_x = field.right() + 1;
    if button_x + button_w <= area.right() {
        let style = if draft.in_flight > 0 {
            Theme::button().add_modifier(Modifier::DIM)
        } else {
            Theme::button()
        };
        buf.set_string(button_x, area.y, BUTTON, style);
    }

    focused.then(|| {
        let x = (field.x + 1 + cursor as u16).min(field.right().saturating_sub(1));
        (x, field.y)
    })
}

/// Window of `text` that keeps the cursor column inside `width` columns.
/// Returns the visible slice and the cursor column within it.
fn visible_input(text: &str, cursor_col: usize, width: usize) -> (String, usize) {
    let skip = (cursor_col + 1).saturating_sub(width);
    let mut skipped = 0;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if skipped < skip {
            skipped += w;
            continue;
        }
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    (out, cursor_col.saturating_sub(skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::viewport::Viewport;
    use crate::config::AppConfig;
    use crate::newsletter::{SubscribeOutcome, FAILURE_MESSAGE};

    fn text(buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Viewport::new(128, 40))
    }

    #[test]
    fn section_shows_placeholder_and_button() {
        let s = state();
        let area = Rect::new(0, 0, 100, layout::NEWSLETTER_HEIGHT);
        let mut buf = Buffer::empty(area);
        let cursor = render_section(&mut buf, area, &s);
        let out = text(&buf);
        assert!(out.contains(PLACEHOLDER));
        assert!(out.contains("Subscribe Now"));
        assert!(out.contains("EXCLUSIVE"));
        assert!(out.contains(FOOTNOTE));
        assert_eq!(cursor, None);
    }

    #[test]
    fn section_shows_outcome_message() {
        let mut s = state();
        s.newsletter.email.insert_char('a');
        s.newsletter.submission();
        s.subscription_finished(&SubscribeOutcome::Failed);
        let area = Rect::new(0, 0, 100, layout::NEWSLETTER_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_section(&mut buf, area, &s);
        assert!(text(&buf).contains(FAILURE_MESSAGE));
    }

    #[test]
    fn focused_banner_reports_cursor() {
        let mut s = state();
        s.focus = FocusPanel::Email;
        for c in "fan@club.io".chars() {
            s.newsletter.email.insert_char(c);
        }
        let area = Rect::new(0, 30, 100, layout::BANNER_HEIGHT);
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 40));
        let cursor = render_banner(&mut buf, area, &s);
        // Pitch row at 31, form row at 32; text starts one column into the field.
        assert_eq!(cursor, Some((1 + 1 + 11, 32)));
        let out = text(&buf);
        assert!(out.contains("fan@club.io"));
        assert!(out.contains("[x]"));
    }

    #[test]
    fn long_input_scrolls_to_cursor() {
        assert_eq!(visible_input("abcdefghij", 10, 5), ("ghij".to_string(), 4));
        assert_eq!(visible_input("abc", 1, 5), ("abc".to_string(), 1));
    }
}

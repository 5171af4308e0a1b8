mod filters;
mod header;
pub mod layout;
mod menu;
mod newsletter;
mod status_bar;
mod text;
mod theme;
mod tools;

use crate::app::state::{AppState, FocusPanel};
use crate::app::viewport::LayoutMode;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let screen = layout::compute_screen(area);
    let page = state.page();

    // The page is drawn whole off-screen, then the visible rows are copied.
    let mut doc = Buffer::empty(Rect::new(0, 0, page.header.width, page.height));
    header::render(&mut doc, page.header, state);
    filters::render_categories(&mut doc, page.categories, state);
    filters::render_sort_toggle(&mut doc, page.sort_toggle, state);
    tools::render(&mut doc, page.tools, state);
    let section_cursor = newsletter::render_section(&mut doc, page.newsletter, state);

    blit(&doc, frame.buffer_mut(), screen.page, state.scroll_offset);

    if page.height > screen.page.height {
        let mut scroll_state =
            ScrollbarState::new(usize::from(page.height - screen.page.height))
                .position(usize::from(state.scroll_offset))
                .viewport_content_length(usize::from(screen.page.height));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            screen.page,
            &mut scroll_state,
        );
    }

    if state.dropdown.open && state.layout_mode == LayoutMode::Carousel {
        filters::render_dropdown(frame.buffer_mut(), state.dropdown_area(), state);
    }

    let banner_cursor = if state.banner.is_visible() {
        newsletter::render_banner(frame.buffer_mut(), state.banner_area(), state)
    } else {
        None
    };

    if state.menu_open {
        menu::render(frame.buffer_mut(), screen.page);
    }

    status_bar::render(frame, screen.status_bar, state);

    if state.focus == FocusPanel::Email && !state.menu_open {
        let inline = section_cursor.and_then(|(x, y)| {
            let y = y.checked_sub(state.scroll_offset)?;
            (y < screen.page.height).then_some((screen.page.x + x, screen.page.y + y))
        });
        // The banner sits on top of the page, so its field wins.
        if let Some(position) = banner_cursor.or(inline) {
            frame.set_cursor_position(position);
        }
    }
}

/// Copy rows `offset..` of the page buffer into `area` of the screen.
fn blit(doc: &Buffer, screen: &mut Buffer, area: Rect, offset: u16) {
    let width = area.width.min(doc.area.width);
    for row in 0..area.height {
        let src_y = offset.saturating_add(row);
        if src_y >= doc.area.bottom() {
            break;
        }
        for col in 0..width {
            let Some(cell) = doc.cell((col, src_y)) else {
                continue;
            };
            if let Some(dst) = screen.cell_mut((area.x + col, area.y + row)) {
                *dst = cell.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::viewport::Viewport;
    use crate::catalog::{SortMode, Tool};
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn sample_tools(n: usize) -> Vec<Tool> {
        (0..n)
            .map(|i| Tool {
                name: format!("Tool {:02}", i),
                short_description: format!("Description of tool {}", i),
                source_url: format!("https://tools.example/{}", i),
                screenshot_url: None,
                category: None,
                certified: false,
            })
            .collect()
    }

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(state.viewport.columns, state.viewport.rows);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buf = terminal.backend().buffer();
        buf.content
            .chunks(buf.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded(columns: u16, rows: u16, sort: SortMode, count: usize) -> AppState {
        let mut state = AppState::new(AppConfig::default(), Viewport::new(columns, rows));
        state.select_sort(sort);
        let request = state.request_tools();
        let crate::app::action::Action::FetchTools { request_id, .. } = request else {
            panic!("expected a fetch");
        };
        state.apply_tools(request_id, sample_tools(count), &mut rand::rng());
        state
    }

    #[test]
    fn narrow_terminal_shows_one_card() {
        let state = loaded(64, 30, SortMode::New, 3);
        let out = draw(&state);
        assert!(out.contains("Tool 00"));
        assert!(!out.contains("Tool 01"));
        assert!(out.contains("3 tools"));
    }

    #[test]
    fn wide_terminal_caps_grid_in_top_mode() {
        let state = loaded(128, 50, SortMode::Top, 20);
        assert_eq!(state.tools.len(), 20);
        let out = draw(&state);
        for i in 0..8 {
            assert!(out.contains(&format!("Tool {:02}", i)), "missing card {}", i);
        }
        assert!(!out.contains("Tool 08"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let state = loaded(128, 50, SortMode::New, 0);
        assert!(draw(&state).contains(tools::EMPTY_TEXT));
    }

    #[test]
    fn open_dropdown_lists_full_names() {
        let mut state = loaded(64, 30, SortMode::New, 3);
        assert!(!draw(&state).contains("Sponsorship & Revenue Growth"));
        state.dropdown.open_at(0);
        assert!(draw(&state).contains("Sponsorship & Revenue Growth"));
    }

    #[test]
    fn menu_overlays_nav_links() {
        let mut state = loaded(64, 30, SortMode::New, 3);
        assert!(!draw(&state).contains("AI Playbook"));
        state.toggle_menu();
        assert!(draw(&state).contains("AI Playbook"));
    }

    #[test]
    fn banner_hides_at_bottom() {
        let mut state = loaded(64, 20, SortMode::New, 3);
        assert!(draw(&state).contains("Sports Tech Updates!"));
        state.scroll_to_bottom();
        assert!(!draw(&state).contains("Sports Tech Updates!"));
    }

    #[test]
    fn blit_copies_from_offset() {
        let mut doc = Buffer::empty(Rect::new(0, 0, 4, 6));
        doc.set_string(0, 3, "abcd", Style::default());
        let mut screen = Buffer::empty(Rect::new(0, 0, 4, 2));
        blit(&doc, &mut screen, Rect::new(0, 0, 4, 2), 3);
        let row: String = screen.content[..4].iter().map(|c| c.symbol()).collect();
        assert_eq!(row, "abcd");
    }
}

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::app::viewport::{is_outside, LayoutMode};
use crate::catalog::SortMode;
use crate::ui::layout::{self, CARD_HEIGHT};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

/// Rows moved per wheel notch.
const WHEEL_STEP: i32 = 3;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::ToolsLoaded { request_id, result } => {
            match result {
                Ok(tools) => {
                    let count = tools.len();
                    if state.apply_tools(request_id, tools, &mut rand::rng()) {
                        tracing::info!(request_id, count, "tool list loaded");
                    }
                }
                Err(e) => {
                    if request_id == state.latest_request {
                        tracing::error!(request_id, error = %e, "failed to fetch tools");
                    }
                    state.tools_failed(request_id);
                }
            }
            vec![]
        }
        AppEvent::SubscribeFinished { outcome } => {
            tracing::info!(?outcome, "newsletter signup finished");
            state.subscription_finished(&outcome);
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    // Animate the loading spinner.
    if state.loading && state.tick_count % 4 == 0 {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(columns, rows) => {
            state.resize(columns, rows);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The menu captures all input while open
    if state.menu_open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => state.toggle_menu(),
            KeyCode::Char('e') | KeyCode::Enter => state.jump_to_newsletter(),
            _ => {}
        }
        return vec![];
    }

    if state.dropdown.open {
        return handle_dropdown_key(state, key);
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        KeyCode::PageUp => {
            state.scroll_by(-page_step(state));
            return vec![];
        }
        KeyCode::PageDown => {
            state.scroll_by(page_step(state));
            return vec![];
        }
        _ => {}
    }

    if state.focus == FocusPanel::Email {
        return handle_email_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('n') => state.select_sort(SortMode::New).into_iter().collect(),
        KeyCode::Char('t') => state.select_sort(SortMode::Top).into_iter().collect(),
        KeyCode::Char('m') => {
            state.toggle_menu();
            vec![]
        }
        KeyCode::Char('x') => {
            state.dismiss_banner();
            vec![]
        }
        KeyCode::Char('e') | KeyCode::Char('/') => {
            state.focus = FocusPanel::Email;
            vec![]
        }
        KeyCode::Char(c @ '1'..='9') => {
            if state.layout_mode == LayoutMode::Carousel {
                state.go_to_tool(c as usize - '1' as usize);
            }
            vec![]
        }
        KeyCode::Home => {
            state.scroll_to_top();
            vec![]
        }
        KeyCode::End => {
            state.scroll_to_bottom();
            vec![]
        }
        KeyCode::Up => {
            state.scroll_by(-1);
            vec![]
        }
        KeyCode::Down => {
            state.scroll_by(1);
            vec![]
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
            handle_panel_key(state, key)
        }
        _ => vec![],
    }
}

fn page_step(state: &AppState) -> i32 {
    i32::from(state.page_rows().saturating_sub(1).max(1))
}

/// Left/Right/Enter act on the focused control.
fn handle_panel_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match state.focus {
        FocusPanel::Categories => {
            let current = state.selected_category_index();
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ')
                    if state.layout_mode == LayoutMode::Carousel =>
                {
                    state.dropdown.open_at(current);
                    vec![]
                }
                KeyCode::Left if current > 0 => {
                    state.select_category(current - 1).into_iter().collect()
                }
                KeyCode::Right => state.select_category(current + 1).into_iter().collect(),
                _ => vec![],
            }
        }
        FocusPanel::SortToggle => match key.code {
            KeyCode::Left => state.select_sort(SortMode::New).into_iter().collect(),
            KeyCode::Right => state.select_sort(SortMode::Top).into_iter().collect(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.select_sort(state.sort.toggled()).into_iter().collect()
            }
            _ => vec![],
        },
        FocusPanel::Tools => {
            match key.code {
                KeyCode::Left => state.previous_tool(),
                KeyCode::Right => state.next_tool(),
                _ => {}
            }
            vec![]
        }
        FocusPanel::Email => vec![],
    }
}

fn handle_dropdown_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.dropdown.move_up();
            vec![]
        }
        KeyCode::Down => {
            state.dropdown.move_down();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let index = state.dropdown.highlighted;
            state.dropdown.close();
            state.select_category(index).into_iter().collect()
        }
        KeyCode::Esc | KeyCode::Tab => {
            state.dropdown.close();
            vec![]
        }
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_email_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => return state.submit_email().into_iter().collect(),
        KeyCode::Esc => {
            state.focus = FocusPanel::Tools;
            return vec![];
        }
        _ => {}
    }

    let input = &mut state.newsletter.email;
    match key.code {
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                input.delete_word_back();
            } else {
                input.delete_back();
            }
        }
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => input.move_home(),
                    'e' => input.move_end(),
                    'w' => input.delete_word_back(),
                    'u' => input.clear(),
                    _ => {}
                }
            } else {
                input.insert_char(c);
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.scroll_by(-WHEEL_STEP);
            vec![]
        }
        MouseEventKind::ScrollDown => {
            state.scroll_by(WHEEL_STEP);
            vec![]
        }
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, mouse.column, mouse.row),
        _ => vec![],
    }
}

fn handle_click(state: &mut AppState, column: u16, row: u16) -> Vec<Action> {
    if state.menu_open {
        state.toggle_menu();
        return vec![];
    }

    if state.dropdown.open {
        let area = state.dropdown_area();
        if is_outside(area, column, row) {
            state.dropdown.close();
            return vec![];
        }
        return match layout::dropdown_row(area, row) {
            Some(index) => {
                state.dropdown.close();
                state.select_category(index).into_iter().collect()
            }
            None => vec![],
        };
    }

    if state.banner.is_visible() {
        let banner = state.banner_area();
        if !is_outside(banner, column, row) {
            if !is_outside(layout::banner_close_area(banner), column, row) {
                state.dismiss_banner();
            } else {
                state.focus = FocusPanel::Email;
            }
            return vec![];
        }
    }

    let Some((x, y)) = page_point(state, column, row) else {
        return vec![];
    };
    let page = state.page();

    if !is_outside(page.categories, x, y) {
        state.focus = FocusPanel::Categories;
        return match state.layout_mode {
            LayoutMode::Carousel => {
                let current = state.selected_category_index();
                state.dropdown.open_at(current);
                vec![]
            }
            LayoutMode::Grid => {
                let inner = control_inner(page.categories);
                let labels = layout::category_labels(inner.width);
                match layout::segment_at(&labels, inner, x) {
                    Some(index) if y == inner.y => {
                        state.select_category(index).into_iter().collect()
                    }
                    _ => vec![],
                }
            }
        };
    }

    if !is_outside(page.sort_toggle, x, y) {
        state.focus = FocusPanel::SortToggle;
        let inner = control_inner(page.sort_toggle);
        let labels: Vec<&str> = SortMode::ALL.iter().map(|m| m.label()).collect();
        return match layout::segment_at(&labels, inner, x) {
            Some(index) if y == inner.y => state.select_sort(SortMode::ALL[index]).into_iter().collect(),
            _ => vec![],
        };
    }

    if !is_outside(page.tools, x, y) {
        state.focus = FocusPanel::Tools;
        if state.layout_mode == LayoutMode::Carousel {
            let card_rows = page.tools.y + 1..page.tools.y + 1 + CARD_HEIGHT;
            if card_rows.contains(&y) {
                if x < page.tools.x + 3 {
                    state.previous_tool();
                } else if x >= page.tools.right().saturating_sub(3) {
                    state.next_tool();
                }
            }
        }
        return vec![];
    }

    if !is_outside(page.newsletter, x, y) {
        state.focus = FocusPanel::Email;
    }
    vec![]
}

/// Translate a screen cell into page coordinates.
fn page_point(state: &AppState, column: u16, row: u16) -> Option<(u16, u16)> {
    let screen = layout::compute_screen(state.viewport.area()).page;
    if is_outside(screen, column, row) {
        return None;
    }
    Some((column - screen.x, row - screen.y + state.scroll_offset))
}

/// Content row of a bordered control.
fn control_inner(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ApiError;
    use crate::app::viewport::Viewport;
    use crate::catalog::Tool;
    use crate::config::AppConfig;
    use crate::newsletter::{SubscribeOutcome, SUCCESS_MESSAGE};

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let event = CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        handle_event(state, AppEvent::Terminal(event))
    }

    fn click(state: &mut AppState, column: u16, row: u16) -> Vec<Action> {
        let event = CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        handle_event(state, AppEvent::Terminal(event))
    }

    fn tools(n: usize) -> Vec<Tool> {
        (0..n)
            .map(|i| Tool {
                name: format!("Tool {}", i),
                short_description: String::new(),
                source_url: String::new(),
                screenshot_url: None,
                category: None,
                certified: false,
            })
            .collect()
    }

    fn loaded(columns: u16, rows: u16, count: usize) -> AppState {
        let mut state = AppState::new(AppConfig::default(), Viewport::new(columns, rows));
        state.request_tools();
        handle_event(
            &mut state,
            AppEvent::ToolsLoaded {
                request_id: 1,
                result: Ok(tools(count)),
            },
        );
        state
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let mut state = loaded(128, 40, 3);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_event(&mut state, AppEvent::Terminal(CEvent::Key(ctrl_c))),
            vec![Action::Quit]
        );
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
    }

    #[test]
    fn sort_keys_fetch_only_on_change() {
        let mut state = loaded(128, 40, 3);
        assert!(press(&mut state, KeyCode::Char('n')).is_empty());
        let actions = press(&mut state, KeyCode::Char('t'));
        assert!(matches!(
            actions.as_slice(),
            [Action::FetchTools { request_id: 2, query }] if query.sort == SortMode::Top
        ));
    }

    #[test]
    fn stale_and_failed_loads_keep_the_list() {
        let mut state = loaded(62, 40, 4);
        press(&mut state, KeyCode::Char('t'));
        press(&mut state, KeyCode::Char('n'));
        handle_event(
            &mut state,
            AppEvent::ToolsLoaded {
                request_id: 2,
                result: Ok(tools(1)),
            },
        );
        assert_eq!(state.tools.len(), 4);
        handle_event(
            &mut state,
            AppEvent::ToolsLoaded {
                request_id: 3,
                result: Err(ApiError::Status {
                    url: "http://localhost:5002/api/tools".into(),
                    status: 500,
                }),
            },
        );
        assert_eq!(state.tools.len(), 4);
        assert!(!state.loading);
    }

    #[test]
    fn carousel_navigation_from_tools_panel() {
        let mut state = loaded(62, 40, 3);
        state.focus = FocusPanel::Tools;
        press(&mut state, KeyCode::Left);
        assert_eq!(state.carousel.index(), 2);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.carousel.index(), 0);
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.carousel.index(), 1);
        press(&mut state, KeyCode::Char('9'));
        assert_eq!(state.carousel.index(), 1);
    }

    #[test]
    fn dropdown_selects_with_keyboard() {
        let mut state = loaded(62, 40, 3);
        press(&mut state, KeyCode::Enter);
        assert!(state.dropdown.open);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        let actions = press(&mut state, KeyCode::Enter);
        assert!(!state.dropdown.open);
        assert_eq!(state.category, "Advertising & Media");
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn click_outside_dropdown_closes_it() {
        let mut state = loaded(62, 40, 3);
        press(&mut state, KeyCode::Enter);
        let area = state.dropdown_area();
        assert!(click(&mut state, 0, 0).is_empty());
        assert!(!state.dropdown.open);
        assert_eq!(state.latest_request, 1);

        press(&mut state, KeyCode::Enter);
        let actions = click(&mut state, area.x + 2, area.y + 2);
        assert!(!state.dropdown.open);
        assert_eq!(state.category, "Fan Intelligence");
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn clicking_a_category_segment_fetches() {
        let mut state = loaded(128, 40, 3);
        // Category control at page rows 8..11; its label row is 9.
        let actions = click(&mut state, 45, 9);
        assert_eq!(state.category, "Fan Intelligence");
        assert_eq!(actions.len(), 1);
        assert!(click(&mut state, 45, 9).is_empty());
    }

    #[test]
    fn banner_close_and_scroll_recompute() {
        let mut state = loaded(62, 20, 3);
        let close = layout::banner_close_area(state.banner_area());
        click(&mut state, close.x + 1, close.y);
        assert!(!state.banner.is_visible());
        handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })),
        );
        assert_eq!(state.scroll_offset, 3);
        assert!(state.banner.is_visible());
    }

    #[test]
    fn email_typing_and_submission() {
        let mut state = loaded(128, 40, 3);
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.focus, FocusPanel::Email);
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        let request = state.latest_request;
        // Shortcut letters go to the field while it has focus.
        for c in " qt.mx@n.io ".chars() {
            assert!(press(&mut state, KeyCode::Char(c)).is_empty());
        }
        assert_eq!(state.latest_request, request);
        assert_eq!(state.sort, SortMode::New);
        assert!(!state.menu_open);
        assert!(state.banner.is_visible());
        assert_eq!(state.newsletter.email.text, " qt.mx@n.io ");
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(
            actions,
            vec![Action::Subscribe {
                email: "qt.mx@n.io".into()
            }]
        );
        handle_event(
            &mut state,
            AppEvent::SubscribeFinished {
                outcome: SubscribeOutcome::Subscribed,
            },
        );
        assert!(state.newsletter.email.text.is_empty());
        assert_eq!(state.newsletter.message.as_deref(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn resize_switches_layout() {
        let mut state = loaded(128, 40, 3);
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(60, 40)));
        assert_eq!(state.layout_mode, LayoutMode::Carousel);
    }

    #[test]
    fn menu_captures_keys_until_closed() {
        let mut state = loaded(128, 40, 3);
        press(&mut state, KeyCode::Char('m'));
        assert!(state.menu_open);
        assert!(press(&mut state, KeyCode::Char('t')).is_empty());
        press(&mut state, KeyCode::Esc);
        assert!(!state.menu_open);
    }

    #[test]
    fn menu_newsletter_entry_focuses_email() {
        let mut state = loaded(128, 12, 3);
        press(&mut state, KeyCode::Char('m'));
        assert!(press(&mut state, KeyCode::Char('e')).is_empty());
        assert!(!state.menu_open);
        assert_eq!(state.focus, FocusPanel::Email);
        assert!(state.scroll_offset > 0);
        press(&mut state, KeyCode::Char('q'));
        assert_eq!(state.newsletter.email.text, "q");
    }
}

use crate::api::client::ToolQuery;
use crate::app::action::Action;
use crate::app::carousel::Carousel;
use crate::app::event::RequestId;
use crate::app::viewport::{LayoutMode, Viewport};
use crate::catalog::{select_for_display, Category, DisplayPolicy, SortMode, Tool, CATEGORIES};
use crate::config::AppConfig;
use crate::newsletter::{Banner, ScrollMetrics, SubscribeOutcome, SubscriptionDraft};
use crate::ui::layout::{self, PageLayout};
use rand::RngExt;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Categories,
    SortToggle,
    Tools,
    Email,
}

/// Category picker used in the carousel layout.
#[derive(Debug, Default)]
pub struct CategoryDropdown {
    pub open: bool,
    pub highlighted: usize,
}

impl CategoryDropdown {
    pub fn open_at(&mut self, selected: usize) {
        self.open = true;
        self.highlighted = selected;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.highlighted + 1 < CATEGORIES.len() {
            self.highlighted += 1;
        }
    }
}

/// All view state. Mutated only through the methods below, which the event
/// handler calls; side effects come back as [`Action`]s.
pub struct AppState {
    pub config: AppConfig,
    pub policy: DisplayPolicy,
    pub category: &'static str,
    pub sort: SortMode,
    pub tools: Vec<Tool>,
    pub carousel: Carousel,
    pub viewport: Viewport,
    pub layout_mode: LayoutMode,
    pub menu_open: bool,
    pub dropdown: CategoryDropdown,
    pub scroll_offset: u16,
    pub banner: Banner,
    pub newsletter: SubscriptionDraft,
    pub focus: FocusPanel,
    pub latest_request: RequestId,
    pub loading: bool,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig, viewport: Viewport) -> Self {
        let policy = DisplayPolicy::new(config.ui.max_visible);
        let layout_mode = LayoutMode::classify(
            viewport.width_px(config.ui.cell_width_px),
            config.ui.breakpoint_px,
        );
        Self {
            config,
            policy,
            category: CATEGORIES[0].id,
            sort: SortMode::New,
            tools: Vec::new(),
            carousel: Carousel::default(),
            viewport,
            layout_mode,
            menu_open: false,
            dropdown: CategoryDropdown::default(),
            scroll_offset: 0,
            banner: Banner::new(),
            newsletter: SubscriptionDraft::default(),
            focus: FocusPanel::Categories,
            latest_request: 0,
            loading: false,
            should_quit: false,
            dirty: true,
            tick_count: 0,
        }
    }

    pub fn query(&self) -> ToolQuery {
        ToolQuery {
            category: self.category.to_string(),
            sort: self.sort,
        }
    }

    /// Start a new tool-list request. Any earlier request becomes stale.
    pub fn request_tools(&mut self) -> Action {
        self.latest_request += 1;
        self.loading = true;
        self.dirty = true;
        Action::FetchTools {
            request_id: self.latest_request,
            query: self.query(),
        }
    }

    /// Select a category by position. Re-selecting the active one is a no-op.
    pub fn select_category(&mut self, index: usize) -> Option<Action> {
        let category = CATEGORIES.get(index)?;
        if category.id == self.category {
            return None;
        }
        self.category = category.id;
        Some(self.request_tools())
    }

    pub fn select_sort(&mut self, sort: SortMode) -> Option<Action> {
        if sort == self.sort {
            return None;
        }
        self.sort = sort;
        Some(self.request_tools())
    }

    pub fn selected_category_index(&self) -> usize {
        Category::position(self.category).unwrap_or(0)
    }

    /// Apply a successful fetch. Returns false for a stale response, which is
    /// dropped without touching the list or the cursor.
    pub fn apply_tools<R: RngExt>(&mut self, request_id: RequestId, tools: Vec<Tool>, rng: &mut R) -> bool {
        if request_id != self.latest_request {
            tracing::debug!(request_id, latest = self.latest_request, "dropping stale tool list");
            return false;
        }
        self.tools = select_for_display(&tools, self.sort, &self.policy, rng);
        self.carousel.reset();
        self.loading = false;
        self.clamp_scroll();
        self.dirty = true;
        true
    }

    /// A fetch failed: keep whatever list is showing.
    pub fn tools_failed(&mut self, request_id: RequestId) {
        if request_id == self.latest_request {
            self.loading = false;
            self.dirty = true;
        }
    }

    /// Tools rendered as cards in the current layout.
    pub fn visible_tools(&self) -> &[Tool] {
        match self.layout_mode {
            LayoutMode::Grid => self.policy.grid_cards(&self.tools),
            LayoutMode::Carousel => &self.tools,
        }
    }

    pub fn next_tool(&mut self) {
        self.carousel.next(self.tools.len());
        self.dirty = true;
    }

    pub fn previous_tool(&mut self) {
        self.carousel.previous(self.tools.len());
        self.dirty = true;
    }

    pub fn go_to_tool(&mut self, slot: usize) {
        if self.carousel.go_to(slot, self.tools.len()) {
            self.dirty = true;
        }
    }

    /// Reclassify the viewport after a resize.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.viewport = Viewport::new(columns, rows);
        let mode = LayoutMode::classify(
            self.viewport.width_px(self.config.ui.cell_width_px),
            self.config.ui.breakpoint_px,
        );
        if mode != self.layout_mode {
            tracing::debug!(?mode, columns, "layout changed");
            self.layout_mode = mode;
            if mode == LayoutMode::Grid {
                self.dropdown.close();
            }
        }
        self.clamp_scroll();
        self.dirty = true;
    }

    pub fn page(&self) -> PageLayout {
        let cards = match self.layout_mode {
            LayoutMode::Grid => self.policy.grid_cards(&self.tools).len(),
            LayoutMode::Carousel => self.tools.len(),
        };
        layout::compute_page(self.viewport.columns, self.layout_mode, cards)
    }

    /// Rows available to the page (the terminal minus the status bar).
    pub fn page_rows(&self) -> u16 {
        layout::compute_screen(self.viewport.area()).page.height
    }

    /// Screen rectangle of the category dropdown.
    pub fn dropdown_area(&self) -> Rect {
        let screen = layout::compute_screen(self.viewport.area());
        layout::dropdown_area(self.page().categories, self.scroll_offset, screen.page)
    }

    /// Screen rectangle of the floating banner.
    pub fn banner_area(&self) -> Rect {
        layout::banner_area(layout::compute_screen(self.viewport.area()).page)
    }

    fn max_scroll(&self) -> u16 {
        self.page().height.saturating_sub(self.page_rows())
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: u32::from(self.scroll_offset),
            viewport: u32::from(self.page_rows()),
            document: u32::from(self.page().height),
        }
    }

    /// Scroll the page and recompute banner visibility, as every scroll event
    /// does even when the offset is already at a limit.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll_offset) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll_offset = u16::try_from(target).unwrap_or(0);
        self.banner.on_scroll(
            self.scroll_metrics(),
            u32::from(self.config.newsletter.banner_threshold_rows),
        );
        self.dirty = true;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_by(-i32::from(self.scroll_offset));
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_by(i32::from(self.max_scroll()));
    }

    pub fn dismiss_banner(&mut self) {
        self.banner.dismiss();
        self.dirty = true;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.dropdown.close();
        self.dirty = true;
    }

    /// Close the menu, scroll the signup section into view and focus the field.
    pub fn jump_to_newsletter(&mut self) {
        self.menu_open = false;
        self.dropdown.close();
        self.focus = FocusPanel::Email;
        let target = self.page().newsletter.y.min(self.max_scroll());
        self.scroll_by(i32::from(target) - i32::from(self.scroll_offset));
    }

    pub fn submit_email(&mut self) -> Option<Action> {
        let email = self.newsletter.submission()?;
        tracing::info!("submitting newsletter signup");
        self.dirty = true;
        Some(Action::Subscribe { email })
    }

    pub fn subscription_finished(&mut self, outcome: &SubscribeOutcome) {
        self.newsletter.apply(outcome);
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Categories => FocusPanel::SortToggle,
            FocusPanel::SortToggle => FocusPanel::Tools,
            FocusPanel::Tools => FocusPanel::Email,
            FocusPanel::Email => FocusPanel::Categories,
        };
        self.dropdown.close();
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Categories => FocusPanel::Email,
            FocusPanel::SortToggle => FocusPanel::Categories,
            FocusPanel::Tools => FocusPanel::SortToggle,
            FocusPanel::Email => FocusPanel::Tools,
        };
        self.dropdown.close();
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let category = crate::catalog::category::selected_label(self.category, false);
        let mut s = format!("{} | {}", category, self.sort.label());
        if self.loading {
            s.push_str(" | loading…");
        } else {
            s.push_str(&format!(" | {} tools", self.tools.len()));
        }
        if self.newsletter.in_flight > 0 {
            s.push_str(" | subscribing…");
        }
        s
    }
}

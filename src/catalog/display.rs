//! Turning an API response into the list shown on screen.
//!
//! A single [`DisplayPolicy`] owns the "most cards at once" limit: it truncates
//! the list itself in `new` mode and caps the grid in every mode, so the two
//! caps can never disagree.

use super::{SortMode, Tool};
use rand::RngExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPolicy {
    pub max_visible: usize,
}

impl DisplayPolicy {
    pub fn new(max_visible: usize) -> Self {
        Self {
            max_visible: max_visible.max(1),
        }
    }

    /// List-level limit for a sort mode; `None` keeps the full response.
    pub fn list_limit(&self, mode: SortMode) -> Option<usize> {
        match mode {
            SortMode::New => Some(self.max_visible),
            SortMode::Top => None,
        }
    }

    /// The prefix of `tools` rendered as grid cards.
    pub fn grid_cards<'a>(&self, tools: &'a [Tool]) -> &'a [Tool] {
        &tools[..tools.len().min(self.max_visible)]
    }
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self::new(8)
    }
}

/// Build the displayed list: truncate per the policy, then certify exactly one
/// entry chosen uniformly at random. The input is left untouched.
pub fn select_for_display<R: RngExt>(
    tools: &[Tool],
    mode: SortMode,
    policy: &DisplayPolicy,
    rng: &mut R,
) -> Vec<Tool> {
    let limit = policy.list_limit(mode).unwrap_or(tools.len());
    let mut shown: Vec<Tool> = tools
        .iter()
        .take(limit)
        .map(|t| Tool {
            certified: false,
            ..t.clone()
        })
        .collect();

    if !shown.is_empty() {
        let idx = rng.random_range(0..shown.len());
        shown[idx].certified = true;
    }
    shown
}

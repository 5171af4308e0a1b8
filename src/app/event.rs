use crate::api::client::ApiError;
use crate::catalog::Tool;
use crate::newsletter::SubscribeOutcome;
use crossterm::event::Event as CrosstermEvent;

/// Monotonic tag attached to each tool-list request.
pub type RequestId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A tool-list request resolved
    ToolsLoaded {
        request_id: RequestId,
        result: Result<Vec<Tool>, ApiError>,
    },

    /// A subscription request resolved
    SubscribeFinished { outcome: SubscribeOutcome },

    /// Tick for UI refresh
    Tick,
}

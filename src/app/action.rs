use crate::api::client::ToolQuery;
use crate::app::event::RequestId;

/// Side effects requested by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchTools { request_id: RequestId, query: ToolQuery },
    Subscribe { email: String },
    Quit,
}

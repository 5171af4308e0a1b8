//! Directory API access: the HTTP client and the task runner that feeds
//! results back into the event loop.

pub mod client;
pub mod manager;

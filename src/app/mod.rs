//! Core application logic: view state, event handling, and action dispatch.

pub mod action;
pub mod carousel;
pub mod event;
pub mod handler;
pub mod state;
pub mod viewport;

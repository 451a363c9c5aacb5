//! Event layer: terminal input to messages
//!
//! `poll_event` waits for the next terminal event; `handle_event` turns a key press
//! into an [`AppMessage`](crate::message::AppMessage):
//! - an open dialog takes every key first
//! - global shortcuts are checked next
//! - the rest goes to the focused panel (page list or current page)

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

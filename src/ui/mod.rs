//! Terminal User Interface module.
//!
//! This module provides the TUI for the forum feed, including:
//! - Main event loop (`run`)
//! - Keyboard input handling
//! - Reaction control binding and server-confirmed count updates
//! - Card materialization and rendering for both feed views
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `binder` - Reaction control bindings and the latest-token guard
//! - `cards` - Full-replace card materialization of the feed views
//! - `tabs` - Category tab state machine
//! - `render` - Frame drawing (tab row, card list, status bar)
//! - `status` - Status bar widget

pub mod binder;
pub mod cards;
mod events;
mod input;
mod loop_runner;
mod render;
mod status;
pub mod tabs;

// Re-export the public API
pub use loop_runner::run;

//! Terminal User Interface module.
//!
//! This module provides the single-screen ticker TUI, including:
//! - Main event loop (`run`)
//! - Keyboard input handling
//! - Background task event processing
//! - Rendering of the header, category chips, ticker card, stats, action button and detail card
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Layout and render dispatch
//! - `header` - Title and read badge
//! - `categories` - Category chip selector
//! - `ticker` - Live ticker card
//! - `stats` - Stat cards row
//! - `action` - Read/fetch button
//! - `detail` - Detail report card
//! - `status` - Status bar widget

mod action;
mod categories;
mod detail;
mod events;
mod header;
mod input;
mod loop_runner;
mod render;
mod stats;
mod status;
mod ticker;

// Re-export the public API
pub use events::handle_app_event;
pub use input::handle_input;
pub use loop_runner::{run, Action};
pub use render::render;

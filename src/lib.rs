//! newsflow: a terminal live news ticker.
//!
//! Six sample headlines cycle through a timed emission loop, filtered by a
//! selectable category. A read action bumps an observable counter and starts
//! a simulated detail fetch.

pub mod app;
pub mod config;
pub mod news;
pub mod theme;
pub mod ui;
pub mod util;

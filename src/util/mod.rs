//! Utility functions for common operations.
//!
//! - **Text processing**: Unicode-aware string width calculation and truncation
//!
//! # Examples
//!
//! ```
//! use newsflow::util::{display_width, truncate_to_width};
//!
//! assert_eq!(display_width("IHSG 📈"), 7);
//! assert_eq!(truncate_to_width("Ekonomi", 4), "Eko…");
//! ```

mod text;

pub use text::{display_width, truncate_to_width};

//! Terminal presentation helpers.
//!
//! - [`Theme`] - Colors and icons for pretty output
//! - [`should_use_colors`] - NO_COLOR and TTY detection

pub mod theme;

pub use theme::{kind_icon, should_use_colors, Theme};

//! Styled building blocks shared by every LearnHub page.
//!
//! Each component links its own co-located stylesheet. Colors come from the
//! CSS custom properties defined in the app's base theme.

pub mod components;

pub use components::*;

//! A themeable button for GPUI.
//!
//! [`components::EasyButton`] resolves its look from a named theme in a
//! [`theme::ThemeContext`] layered with explicit style overrides, tracks
//! hover, debounces click and focus callbacks and can show a loader.

pub mod primitives;

pub mod components;

pub mod theme {
    pub use gpui_easy_button_theme::*;
}

mod utils;
pub use utils::{ElementIdExt, StyledExt};

mod assets;
pub use assets::*;

mod init;
pub use init::*;

//! Button themes: style attributes, the built-in theme table, the theme
//! context and the style resolver used by `gpui_easy_button`.

mod attributes;
pub use attributes::*;

mod deserializers;
pub use deserializers::parse_color;

mod kinds;
pub use kinds::*;

mod table;
pub use table::*;

mod resolver;
pub use resolver::*;

mod context;
pub use context::*;

#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

/// Themes shipped in the built-in table.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn key(&self) -> &'static str)]
pub enum BuiltinTheme {
    /// Neutral white button.
    #[assoc(key = "easy")]
    Easy,
    /// Neutral grey button with light text.
    #[assoc(key = "easy_dark")]
    EasyDark,
    #[assoc(key = "easy_success")]
    EasySuccess,
    #[assoc(key = "easy_info")]
    EasyInfo,
    #[assoc(key = "easy_warn")]
    EasyWarn,
    #[assoc(key = "easy_error")]
    EasyError,
    #[assoc(key = "easy_purple")]
    EasyPurple,
}

impl BuiltinTheme {
    pub const ALL: [BuiltinTheme; 7] = [
        Self::Easy,
        Self::EasyDark,
        Self::EasySuccess,
        Self::EasyInfo,
        Self::EasyWarn,
        Self::EasyError,
        Self::EasyPurple,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.key() == key)
    }
}

/// The theme a button asks for.
///
/// `Custom` bypasses the theme table entirely and renders only the explicit
/// styles given to the button. `Named` refers to an entry a consumer added to
/// the table; if the entry is missing the button renders unstyled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ButtonTheme {
    #[default]
    Custom,
    Builtin(BuiltinTheme),
    Named(SharedString),
}

impl ButtonTheme {
    pub const CUSTOM_KEY: &'static str = "custom";

    /// The table key to look up, or `None` for [`ButtonTheme::Custom`].
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Custom => None,
            Self::Builtin(theme) => Some(theme.key()),
            Self::Named(name) => Some(name.as_ref()),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl From<BuiltinTheme> for ButtonTheme {
    fn from(value: BuiltinTheme) -> Self {
        Self::Builtin(value)
    }
}

impl From<SharedString> for ButtonTheme {
    fn from(value: SharedString) -> Self {
        if value.as_ref() == Self::CUSTOM_KEY {
            return Self::Custom;
        }

        match BuiltinTheme::from_key(value.as_ref()) {
            Some(theme) => Self::Builtin(theme),
            None => Self::Named(value),
        }
    }
}

impl From<&str> for ButtonTheme {
    fn from(value: &str) -> Self {
        SharedString::from(value.to_string()).into()
    }
}

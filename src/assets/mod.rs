mod assets;
pub use assets::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod embedded;
        pub use embedded::*;
    }
);

/// Path of the spinner shown by a loading button.
pub const LOADER_ICON_PATH: &str = "icons/loader.svg";

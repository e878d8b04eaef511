mod element;
pub use element::*;

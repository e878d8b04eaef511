mod debounce;
pub use debounce::*;

mod hover;
pub use hover::*;

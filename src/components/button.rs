mod button;
pub use button::*;

mod content;
pub use content::*;

mod state;
pub use state::*;

// Application layer - the entry form state machine and what the screens read.
// Front-ends (TUI, prompt, headless sum) drive these; none of them own logic.

pub mod error;
pub mod flow;
pub mod summary;

pub use error::*;
pub use flow::*;
pub use summary::*;

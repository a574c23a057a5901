//! Output encoders (terminal).

mod terminal;

pub use terminal::{TerminalEncoder, TerminalMode};

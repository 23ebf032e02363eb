pub mod cli;
pub mod color;
pub mod formats;
pub mod palette;
pub mod pipeline;
pub mod tui;

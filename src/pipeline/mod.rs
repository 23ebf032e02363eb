pub mod distinct;
pub mod sample;
pub mod select;

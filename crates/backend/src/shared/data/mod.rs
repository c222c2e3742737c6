pub mod sample;
pub mod source;

pub mod common;
pub mod encoder;

#![doc = include_str!("../README.md")]

mod components;

pub use components::common::{
    ConvertConfig, ConvertSummary, DEFAULT_INPUT, DEFAULT_OUTPUT_EXTENSION,
    FontB64Error, default_output_path,
};
pub use components::encoder::{encode_bytes, encode_file, encoded_len};

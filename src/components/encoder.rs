use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::debug;

use crate::components::common::{ConvertConfig, ConvertSummary, FontB64Error};

/// Encode a byte slice as standard (RFC 4648) base64 with `=` padding and
/// no line wrapping.
pub fn encode_bytes(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Number of characters `encode_bytes` produces for `input_len` bytes.
pub fn encoded_len(input_len: usize) -> usize {
    input_len.div_ceil(3) * 4
}

/// Read the whole input file, base64 encode it and write the text to the
/// output path.
///
/// The input is read before anything is written, so a missing or
/// unreadable input leaves the output path untouched. The output is opened
/// in place and truncated, so symlinks are followed and an existing file
/// keeps its mode, owner and links. A file this call created is removed
/// again if writing to it fails.
pub fn encode_file(
    config: &ConvertConfig,
) -> Result<ConvertSummary, FontB64Error> {
    let data =
        fs::read(&config.input_path).map_err(|source| FontB64Error::Input {
            path: config.input_path.clone(),
            source,
        })?;
    debug!(
        "read {} bytes from {}",
        data.len(),
        config.input_path.display()
    );

    let encoded = encode_bytes(&data);
    let summary = ConvertSummary {
        input_len: data.len(),
        output_len: encoded.len(),
    };
    drop(data);

    write_output(&config.output_path, encoded.as_bytes(), config.overwrite)?;
    debug!(
        "wrote {} chars to {}",
        summary.output_len,
        config.output_path.display()
    );

    Ok(summary)
}

fn write_output(
    path: &Path,
    contents: &[u8],
    overwrite: bool,
) -> Result<(), FontB64Error> {
    let output_err = |source: io::Error| FontB64Error::Output {
        path: path.to_path_buf(),
        source,
    };

    // `exists` follows symlinks, so a dangling link counts as new.
    let created = !overwrite || !path.exists();

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = match options.open(path) {
        Ok(file) => file,
        Err(e) if !overwrite && e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(FontB64Error::OutputExists(path.to_path_buf()));
        }
        Err(e) => return Err(output_err(e)),
    };

    let written = file.write_all(contents).and_then(|_| file.flush());
    drop(file);

    if let Err(e) = written {
        if created {
            let _ = fs::remove_file(path);
        }
        return Err(output_err(e));
    }
    Ok(())
}

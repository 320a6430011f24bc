use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fontb64::{ConvertConfig, DEFAULT_INPUT, default_output_path, encode_file};
use log::{LevelFilter, info};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Encode a font file as base64 text",
    long_about = None
)]
struct Args {
    /// Font (or any binary) file to encode
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the base64 text [default: INPUT with a .txt extension]
    output: Option<PathBuf>,

    /// Fail instead of replacing an existing output file
    #[arg(long = "no-clobber")]
    no_clobber: bool,

    /// Log level; RUST_LOG is used when absent
    #[arg(long = "log-level", value_enum)]
    log_level: Option<LogLevel>,
}

impl Args {
    fn config(&self) -> ConvertConfig {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input));
        ConvertConfig::new(&self.input, output).overwrite(!self.no_clobber)
    }
}

fn init_logger(level: Option<LogLevel>) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(level) = level {
        builder.filter_level(level.into());
    }
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level);

    let config = args.config();
    let summary = encode_file(&config).with_context(|| {
        format!(
            "encoding {} to {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    info!(
        "{} -> {} ({} bytes -> {} chars)",
        config.input_path.display(),
        config.output_path.display(),
        summary.input_len,
        summary.output_len
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_amiri() {
        let args = Args::try_parse_from(["fontb64"]).unwrap();
        let config = args.config();
        assert_eq!(config.input_path, PathBuf::from("Amiri.ttf"));
        assert_eq!(config.output_path, PathBuf::from("Amiri.txt"));
        assert!(config.overwrite);
    }

    #[test]
    fn test_input_only_derives_output() {
        let args = Args::try_parse_from(["fontb64", "fonts/Noto.otf"]).unwrap();
        assert_eq!(args.config().output_path, PathBuf::from("fonts/Noto.txt"));
    }

    #[test]
    fn test_explicit_paths_and_flags() {
        let args = Args::try_parse_from([
            "fontb64",
            "a.ttf",
            "out/b.b64",
            "--no-clobber",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = args.config();
        assert_eq!(config.input_path, PathBuf::from("a.ttf"));
        assert_eq!(config.output_path, PathBuf::from("out/b.b64"));
        assert!(!config.overwrite);
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let parsed =
            Args::try_parse_from(["fontb64", "--log-level", "bogus"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_too_many_paths_rejected() {
        assert!(Args::try_parse_from(["fontb64", "a", "b", "c"]).is_err());
    }
}

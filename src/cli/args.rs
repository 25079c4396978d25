use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode binary data as Base64 text
    Encode(EncodeArgs),
    /// Decode Base64 text back to binary data
    Decode(DecodeArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Do not append a newline after the encoded text
    #[arg(short = 'n', long)]
    pub no_newline: bool,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Print decoded bytes as lowercase hex instead of raw binary
    #[arg(long)]
    pub hex: bool,

    /// Keep surrounding whitespace; it will be rejected as invalid input
    #[arg(long)]
    pub no_trim: bool,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "path")]
    pub json: bool,

    /// Print the location of the user config file
    #[arg(long)]
    pub path: bool,
}

use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    config::Settings,
    global::GlobalArgs,
    report::{Diagnostic, should_use_color},
};
use base64_rfc::encoded_len;
use tracing::debug;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), settings.max_size, global)?;

    let text = if settings.trim && !args.no_trim {
        input.trim_ascii()
    } else {
        &input[..]
    };

    let color = should_use_color(global.no_color);
    let data = base64_rfc::decode(text).map_err(|e| Diagnostic::new(e, text, color))?;

    // The decoder stops at a NUL or after a padding group; the rest of the
    // input must not be dropped silently.
    let consumed = encoded_len(data.len());
    if consumed != text.len() {
        return Err(Diagnostic::trailing_data(consumed, text, color).into());
    }
    debug!(input = text.len(), output = data.len(), "decoded");

    if args.hex {
        let mut line = hex::encode(&data).into_bytes();
        line.push(b'\n');
        write_output(args.output.as_ref(), &line)
    } else {
        write_output(args.output.as_ref(), &data)
    }
}

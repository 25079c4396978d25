use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    config::Settings,
    global::GlobalArgs,
};
use base64_rfc::{encode_into, encoded_len};
use tracing::debug;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_ref(), settings.max_size, global)?;

    // One spare byte for the terminator, reused for the newline.
    let mut text = vec![0u8; encoded_len(data.len()) + 1];
    let end = encode_into(&mut text, &data);
    debug!(input = data.len(), output = end, "encoded");

    if settings.newline && !args.no_newline {
        text[end] = b'\n';
        text.truncate(end + 1);
    } else {
        text.truncate(end);
    }

    write_output(args.output.as_ref(), &text)
}

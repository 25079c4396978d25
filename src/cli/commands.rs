use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

use super::global::GlobalArgs;

/// Read the whole input from `file`, or stdin when no file is given.
///
/// `max_size` of 0 means unlimited. A file over the limit is an error unless
/// `--force` is set; stdin over the limit is always an error because it has
/// already been consumed.
pub fn read_input(
    file: Option<&PathBuf>,
    max_size: usize,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        if max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > max_size {
                if global.force {
                    warn!(
                        "processing large file ({} bytes, limit: {} bytes)",
                        file_size, max_size
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, max_size
                    )
                    .into());
                }
            }
        }

        let data = fs::read(file_path)?;
        debug!(path = %file_path.display(), bytes = data.len(), "read input file");
        Ok(data)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        debug!(bytes = buffer.len(), "read stdin");

        if max_size > 0 && buffer.len() > max_size {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use a file argument with --force for large inputs.",
                buffer.len(),
                max_size
            )
            .into());
        }

        Ok(buffer)
    }
}

/// Write `data` to `output`, or stdout when no file is given.
pub fn write_output(
    output: Option<&PathBuf>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, data)?;
        debug!(path = %path.display(), bytes = data.len(), "wrote output file");
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()?;
    }
    Ok(())
}

use base64_rfc::DecodeError;
use std::fmt;

/// Bytes of input shown around the error position.
const SNIPPET_WIDTH: usize = 60;

/// Check if colored output should be used
pub fn should_use_color(no_color: bool) -> bool {
    if no_color {
        return false;
    }

    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// `error:` label, red and bold when colored.
pub fn error_label(color: bool) -> &'static str {
    if color {
        "\x1b[1;31merror:\x1b[0m"
    } else {
        "error:"
    }
}

fn hint_label(color: bool) -> &'static str {
    if color {
        "\x1b[1;36mhint:\x1b[0m"
    } else {
        "hint:"
    }
}

/// Hint shown when valid Base64 is followed by more input.
const TRAILING_DATA_HINT: &str = "nothing may follow a padding group or a NUL byte";

/// A problem in the input, rendered with a caret under the offending byte.
#[derive(Debug)]
pub struct Diagnostic {
    message: String,
    hint: &'static str,
    source: Option<DecodeError>,
    snippet: String,
    caret: usize,
    color: bool,
}

impl Diagnostic {
    /// Diagnostic for input the decoder rejected.
    pub fn new(error: DecodeError, input: &[u8], color: bool) -> Self {
        let (snippet, caret) = snippet_around(input, error.position());
        Diagnostic {
            message: error.to_string(),
            hint: error.hint(),
            source: Some(error),
            snippet,
            caret,
            color,
        }
    }

    /// Diagnostic for input that decoded successfully but did not end where
    /// the Base64 text ended.
    pub fn trailing_data(position: usize, input: &[u8], color: bool) -> Self {
        let (snippet, caret) = snippet_around(input, position);
        Diagnostic {
            message: format!("unexpected data after end of Base64 at position {}", position),
            hint: TRAILING_DATA_HINT,
            source: None,
            snippet,
            caret,
            color,
        }
    }
}

/// Escaped window of `input` around `position`, and the caret column in it.
fn snippet_around(input: &[u8], position: usize) -> (String, usize) {
    let position = position.min(input.len());
    let start = position.saturating_sub(SNIPPET_WIDTH / 2);
    let end = (start + SNIPPET_WIDTH).min(input.len());

    let mut snippet = String::new();
    let mut caret = 0;
    if start > 0 {
        snippet.push_str("...");
    }
    for (i, &byte) in input[start..end].iter().enumerate() {
        if start + i == position {
            caret = snippet.len();
        }
        snippet.extend(std::ascii::escape_default(byte).map(char::from));
    }
    if position == end {
        caret = snippet.len();
    }
    if end < input.len() {
        snippet.push_str("...");
    }

    (snippet, caret)
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", error_label(self.color), self.message)?;
        writeln!(f)?;
        writeln!(f, "  {}", self.snippet)?;
        write!(f, "  {}", " ".repeat(self.caret))?;
        if self.color {
            writeln!(f, "\x1b[1;31m^\x1b[0m")?;
        } else {
            writeln!(f, "^")?;
        }
        writeln!(f)?;
        write!(f, "{} {}", hint_label(self.color), self.hint)
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

use crate::core::error::PmresError;
use crate::core::paths::strip_pasted_path;
use std::io::{BufRead, Write};

pub const COLLECTION_PROMPT: &str = "Enter the path to the Postman collection JSON file: ";
pub const ENVIRONMENT_PROMPT: &str = "Enter the path to the Postman environment JSON file: ";

/// Asks for a file path on `output` and reads one line from `input`.
pub fn prompt_for_path<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String, PmresError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| PmresError::Input(format!("could not read path: {e}")))?;
    if read == 0 {
        return Err(PmresError::Input("no path entered".to_string()));
    }

    let path = strip_pasted_path(&line);
    if path.is_empty() {
        return Err(PmresError::Input("path cannot be empty".to_string()));
    }
    Ok(path.to_string())
}

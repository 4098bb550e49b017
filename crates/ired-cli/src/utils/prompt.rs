use crate::error::{CliError, Result};
use std::io::{BufRead, Write};

/// Asks `question` on `output` and returns the trimmed answer read from `input`.
///
/// # Errors
///
/// Returns [`CliError::Argument`] if the answer is empty or input is exhausted.
pub fn ask(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{} ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(CliError::Argument(format!(
            "No answer given to '{}'",
            question.trim_end_matches(':')
        )));
    }
    Ok(answer.to_string())
}

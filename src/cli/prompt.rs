//! Interactive date prompt
//!
//! First-run initialization: asks for the last period start on stdin,
//! echoes the raw answer, and parses it into the same representation the
//! mark command stores.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::cycle::tracker::parse_period_date;

/// Question shown before reading a date.
pub const PROMPT_TEXT: &str = "Enter the start date of your last period (YYYY-MM-DD): ";

/// Prompt for a period start date on `input`, writing the question and the
/// raw-answer echo to `output`.
///
/// The echoed line preserves the answer exactly as typed; parsing happens
/// afterwards, so a bad answer is still echoed before the error comes back.
pub fn prompt_for_date(input: &mut impl BufRead, output: &mut impl Write) -> Result<DateTime<Utc>> {
    write!(output, "{PROMPT_TEXT}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read date from input")?;
    let raw = line.trim_end_matches(['\r', '\n']);

    writeln!(output, "Your period started {raw}").context("Failed to echo answer")?;

    parse_period_date(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::jan_first;
    use std::io::Cursor;

    fn run_prompt(answer: &str) -> (Result<DateTime<Utc>>, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_for_date(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_parses_plain_date() {
        let (result, _) = run_prompt("2024-01-01\n");
        assert_eq!(result.unwrap(), jan_first());
    }

    #[test]
    fn test_prompt_writes_question_first() {
        let (_, output) = run_prompt("2024-01-01\n");
        assert!(
            output.starts_with(PROMPT_TEXT),
            "Expected prompt text first, got: {output}"
        );
    }

    #[test]
    fn test_prompt_echoes_raw_answer() {
        let (_, output) = run_prompt("2024-01-01\n");
        assert!(
            output.contains("Your period started 2024-01-01"),
            "Expected echo line, got: {output}"
        );
    }

    #[test]
    fn test_prompt_echoes_even_unparseable_answers() {
        let (result, output) = run_prompt("whenever\n");
        assert!(result.is_err());
        assert!(
            output.contains("Your period started whenever"),
            "Expected echo line, got: {output}"
        );
    }

    #[test]
    fn test_prompt_strips_crlf_line_ending() {
        let (result, output) = run_prompt("2024-01-01\r\n");
        assert_eq!(result.unwrap(), jan_first());
        assert!(
            output.contains("Your period started 2024-01-01\n"),
            "Expected clean echo, got: {output}"
        );
    }

    #[test]
    fn test_prompt_error_names_expected_format() {
        let (result, _) = run_prompt("next monday\n");
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains("YYYY-MM-DD"),
            "Expected format hint, got: {err}"
        );
    }

    #[test]
    fn test_prompt_empty_input_is_an_error() {
        let (result, _) = run_prompt("");
        assert!(result.is_err());
    }
}

//! Line-based integer prompting that retries until the answer is in range.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use crate::locale::Locale;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Input closed before a valid answer arrived.
    #[error("input ended before a valid number was entered")]
    Eof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Prompts on `output` and reads lines from `input` until one parses as an
/// integer inside `range`. Rejected answers print a localized error and ask
/// again.
///
/// # Errors
/// Returns `PromptError::Eof` when `input` is exhausted and
/// `PromptError::Io` for read or write failures.
pub fn read_int_in_range<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    range: RangeInclusive<i64>,
    locale: Locale,
) -> Result<i64, PromptError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }

        match line.trim().parse::<i64>() {
            Ok(value) if range.contains(&value) => return Ok(value),
            Ok(value) => {
                tracing::debug!(value, ?range, "prompt answer out of range");
                writeln!(output, "{}", locale.out_of_range(*range.start(), *range.end()))?;
            }
            Err(_) => {
                tracing::debug!(answer = line.trim(), "prompt answer is not an integer");
                writeln!(output, "{}", locale.strings().not_a_number)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answers: &str, range: RangeInclusive<i64>) -> (Result<i64, PromptError>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_int_in_range(&mut input, &mut output, "Day (1-31): ", range, Locale::English);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_first_answer_accepted() {
        let (result, out) = ask("17\n", 1..=31);
        assert_eq!(result.unwrap(), 17);
        assert_eq!(out, "Day (1-31): ");
    }

    #[test]
    fn test_retries_until_valid() {
        let (result, out) = ask("abc\n42\n 7 \n", 1..=31);
        assert_eq!(result.unwrap(), 7);
        assert_eq!(
            out,
            "Day (1-31): Error: enter a whole number.\n\
             Day (1-31): Error: enter a number from 1 to 31.\n\
             Day (1-31): "
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(ask("1\n", 1..=12).0.unwrap(), 1);
        assert_eq!(ask("12\n", 1..=12).0.unwrap(), 12);
        assert_eq!(ask("0\n10000\n9999\n", 1..=9999).0.unwrap(), 9999);

        let (result, out) = ask("0\n10000\n1\n", 1..=9999);
        assert_eq!(result.unwrap(), 1);
        assert_eq!(out.matches("Error: enter a number from 1 to 9999.").count(), 2);
    }

    #[test]
    fn test_last_line_without_newline() {
        assert_eq!(ask("2025", 1..=9999).0.unwrap(), 2025);
    }

    #[test]
    fn test_eof_is_an_error() {
        let (result, _) = ask("", 1..=31);
        assert!(matches!(result, Err(PromptError::Eof)));

        let (result, out) = ask("x\n", 1..=31);
        assert!(matches!(result, Err(PromptError::Eof)));
        assert!(out.contains("Error: enter a whole number."));
    }

    #[test]
    fn test_russian_messages() {
        let mut input = Cursor::new("0\n5\n".as_bytes().to_vec());
        let mut output = Vec::new();
        let value =
            read_int_in_range(&mut input, &mut output, "Месяц (1-12): ", 1..=12, Locale::Russian)
                .unwrap();
        assert_eq!(value, 5);
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Ошибка: введите число от 1 до 12."));
    }
}

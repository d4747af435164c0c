//! Line-oriented terminal input
//!
//! Every prompt returns `Ok(None)` once input is exhausted so callers can
//! unwind cleanly instead of spinning on EOF.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use super::errors::CliResult;

/// Reads one line without its line terminator. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Writes `label` and reads the answer.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> CliResult<Option<String>> {
    write!(output, "{}: ", label)?;
    output.flush()?;
    read_line(input)
}

/// Asks for a year until the answer is an integer inside `years`.
pub fn prompt_year<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    years: &RangeInclusive<i32>,
) -> CliResult<Option<i32>> {
    let label = format!("Year ({}-{})", years.start(), years.end());
    loop {
        let Some(answer) = prompt(input, output, &label)? else {
            return Ok(None);
        };
        match answer.trim().parse::<i32>() {
            Ok(year) if years.contains(&year) => return Ok(Some(year)),
            _ => writeln!(
                output,
                "Year must be a whole number between {} and {}.",
                years.start(),
                years.end()
            )?,
        }
    }
}

/// Yes/no question; anything other than `y` or `yes` is no.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> CliResult<Option<bool>> {
    let Some(answer) = prompt(input, output, &format!("{} [y/N]", label))? else {
        return Ok(None);
    };
    let answer = answer.trim().to_ascii_lowercase();
    Ok(Some(answer == "y" || answer == "yes"))
}

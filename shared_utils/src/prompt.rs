//! Interactive console prompts.
//!
//! Blocking stdin readers for the startup flow: a yes/no question with a
//! default, and a free-form line reader.

use std::io::{self, BufRead, Write};

/// Ask a yes/no question and return the answer.
///
/// Accepts `y`, `n`, or an empty line (empty selects `default`). Any other
/// answer prints `"{answer}" is not a valid option` and asks again.
pub fn confirm(message: &str, default: bool) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        input.clear();

        print!("{} (y/n) ", message);
        io::stdout().flush()?;

        stdin.lock().read_line(&mut input)?;

        match input.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            "" => return Ok(default),
            other => println!("\"{}\" is not a valid option", other),
        }
    }
}

/// Print a message and read one trimmed line from stdin.
pub fn read_line(message: &str) -> io::Result<String> {
    print!("{} ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

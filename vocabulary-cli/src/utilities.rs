use std::io::{self, Write};

/// Prompts on stdout and reads one line. Returns `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Splits a command line into the command and the (possibly multi-word) rest.
pub fn split_command(line: &str) -> Option<(&str, String)> {
    let mut parts = line.split_ascii_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect::<Vec<&str>>().join(" ")))
}

//! Console input helpers.

use std::io::{self, BufRead, Write};

/// Print a prompt and read one line, with the trailing newline stripped.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed, if reading fails, or on
/// end of input.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buf = String::new();
    let n = io::stdin().lock().read_line(&mut buf)?;
    if n == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }

    Ok(buf.trim_end_matches(['\r', '\n']).to_owned())
}

/// Read a menu choice, re-prompting until an integer is given.
///
/// Invalid input reports one line and re-prompts; it never changes state.
///
/// # Errors
///
/// Returns an error if reading from the console fails.
pub fn read_choice() -> io::Result<i32> {
    loop {
        let line = read_line("Please make your choice: ")?;
        match line.trim().parse::<i32>() {
            Ok(choice) => return Ok(choice),
            Err(_) => println!("Your input is invalid!"),
        }
    }
}

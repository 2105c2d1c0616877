//! Interactive confirmation

use crate::error::Result;
use std::io::{BufRead, Write};

/// Ask a yes/no question; anything but `y`/`yes` (including EOF) is a no
pub fn confirm<R, W>(question: &str, input: &mut R, output: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

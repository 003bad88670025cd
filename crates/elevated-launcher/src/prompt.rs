use std::io::{self, BufRead, IsTerminal as _, Write};

const PAUSE_MESSAGE: &str = "Press Enter to continue . . .";

/// Blocks until the user presses Enter.
pub fn wait_for_acknowledgement<R, W>(mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{PAUSE_MESSAGE}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Pauses on the real terminal; a no-op when stdin is not one, since nobody
/// could acknowledge the prompt.
pub fn pause() -> io::Result<()> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(());
    }
    wait_for_acknowledgement(stdin.lock(), io::stderr())?;
    writeln!(io::stderr())
}

//! Run command implementation - the line protocol over stdin/stdout.

use super::output::{format_text, JsonError, JsonResponse};
use super::{CliError, OutputFormat};
use fun_finance::{GameConfig, RandomSource, Response, Session};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails. Rejected commands are reported
/// on stdout and do not stop the session.
pub(crate) fn execute(
    config: &GameConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_lines(&mut session, stdin.lock(), &mut out, format, quiet)?;
    Ok(())
}

/// Apply each input line to the session until `quit` or end of input.
///
/// Returns the number of rejected commands.
fn run_lines<R: RandomSource, I: BufRead, W: Write>(
    session: &mut Session<R>,
    input: I,
    out: &mut W,
    format: OutputFormat,
    quiet: bool,
) -> Result<usize, CliError> {
    if !quiet {
        write_response(out, &Response::Status, session, format)?;
    }

    let mut rejected = 0;
    for line in input.lines() {
        let line = line?;
        match session.execute_line(&line) {
            Ok(None) => {}
            Ok(Some(response)) => {
                write_response(out, &response, session, format)?;
                if response == Response::Quit {
                    break;
                }
            }
            Err(e) => {
                rejected += 1;
                match format {
                    OutputFormat::Text => writeln!(out, "error: {e}")?,
                    OutputFormat::Json => {
                        writeln!(out, "{}", serde_json::to_string(&JsonError::new(&e))?)?;
                    }
                }
            }
        }
        out.flush()?;
    }

    debug!(rejected, turn = session.state().turn(), "input finished");
    Ok(rejected)
}

fn write_response<R: RandomSource, W: Write>(
    out: &mut W,
    response: &Response,
    session: &Session<R>,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write!(out, "{}", format_text(response, session.state()))?,
        OutputFormat::Json => {
            let json = JsonResponse::from_response(response, session.state());
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
        }
    }
    Ok(())
}

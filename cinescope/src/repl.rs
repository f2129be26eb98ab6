//! Stdin loop that feeds commands and request completions to the session.

use std::io::Write;

use anyhow::{Context, Result};
use cinescope_core::{Message, SessionRuntime};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, HELP};
use crate::presenter::TerminalPresenter;

/// Run until `quit` or end of input. `initial` is submitted as a search
/// before the first line is read.
pub async fn run<W: Write>(
    runtime: &mut SessionRuntime<TerminalPresenter<W>>,
    initial: Option<String>,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    match initial {
        Some(term) => {
            runtime.dispatch(Message::SearchSubmitted(term));
        }
        None => runtime
            .presenter_mut()
            .notice("Type 'search <term>' to begin, 'help' for commands."),
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                if !handle_line(runtime, &line) {
                    break;
                }
            }
            Some(completion) = runtime.next_completion() => {
                runtime.dispatch(completion);
            }
        }
    }

    // Let an outstanding request land so its outcome is shown.
    runtime.settle().await;
    Ok(())
}

/// Returns `false` once the user asked to quit.
fn handle_line<W: Write>(
    runtime: &mut SessionRuntime<TerminalPresenter<W>>,
    line: &str,
) -> bool {
    match Command::parse(line) {
        Ok(Command::Dispatch(message)) => {
            runtime.dispatch(message);
        }
        Ok(Command::Open(token)) => {
            let id = runtime.presenter().resolve(&token);
            runtime.dispatch(Message::ResultActivated(id));
        }
        Ok(Command::Help) => runtime.presenter_mut().notice(HELP),
        Ok(Command::Quit) => return false,
        Ok(Command::Nothing) => {}
        Err(err) => runtime.presenter_mut().notice(err),
    }
    true
}

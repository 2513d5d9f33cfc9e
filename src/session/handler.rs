//! Menu loop
//!
//! Renders the menu, reads a choice and dispatches it until the user exits
//! or input ends.

use log::{debug, info};
use std::io::{self, BufRead, Write};

use crate::menu::responses::SELECT_PROMPT;
use crate::menu::{CommandStatus, handle_choice, parse_choice, render_menu};
use crate::session::{Console, Session};

/// Runs the menu loop until the user picks exit or input ends.
///
/// - Renders the menu for the session's mode.
/// - Reads one choice and dispatches it with `handle_choice`.
/// - Only console I/O errors end the loop early.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    info!(
        "Session started in {} mode at {}",
        session.mode(),
        session.current_directory().display()
    );

    loop {
        render_menu(session, console)?;

        let Some(line) = console.prompt(SELECT_PROMPT)? else {
            info!("Input closed, leaving menu");
            break;
        };

        let choice = parse_choice(&line);
        debug!("Received choice {:?}", choice);

        if handle_choice(session, console, choice)? == CommandStatus::Exit {
            break;
        }
    }

    info!("Session ended");
    Ok(())
}

/// Runs the menu loop on the process's stdin and stdout.
pub fn run_stdio(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_session(session, &mut console)
}

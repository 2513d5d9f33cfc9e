//! Choice handlers for the menu loop.
//!
//! Each handler prompts for whatever it needs, runs the operation and
//! prints the outcome. Once the existence check passes the action is
//! logged whether or not the operation succeeded. Operation errors never
//! leave this module; only console I/O errors are propagated.

use log::warn;
use std::io::{self, BufRead, Write};

use crate::access::{is_permitted, visible_choices};
use crate::error::handlers::{navigate_failure_message, operation_failure_message};
use crate::menu::commands::MenuChoice;
use crate::menu::responses::*;
use crate::navigate;
use crate::session::{Console, Session};
use crate::storage::{self, Operation, filesystem::create_directory};

/// What the loop should do after a choice was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Continue,
    Exit,
}

/// Prints the menu entries visible in the session's mode.
pub fn render_menu<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("")?;
    console.say(MENU_HEADER)?;
    for choice in visible_choices(session.mode()) {
        if let Some(key) = choice.key() {
            console.say(format_args!("{}. {}", key, choice.label()))?;
        }
    }
    Ok(())
}

/// Dispatches a parsed choice to its handler.
///
/// A choice the mode is not allowed to run is answered exactly like an
/// unknown one.
pub fn handle_choice<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
    choice: MenuChoice,
) -> io::Result<CommandStatus> {
    if !is_permitted(session.mode(), choice) {
        warn!(
            "Choice {:?} refused in {} mode",
            choice,
            session.mode()
        );
        console.say(INVALID_CHOICE)?;
        return Ok(CommandStatus::Continue);
    }

    match choice {
        MenuChoice::Exit => Ok(CommandStatus::Exit),
        MenuChoice::List => handle_list(session, console),
        MenuChoice::Copy => handle_copy(session, console),
        MenuChoice::Move => handle_move(session, console),
        MenuChoice::Delete => handle_delete(session, console),
        MenuChoice::ChangeDirectory => handle_change_directory(session, console),
        MenuChoice::Unknown => {
            console.say(INVALID_CHOICE)?;
            Ok(CommandStatus::Continue)
        }
    }
}

fn handle_list<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<CommandStatus> {
    match storage::list_directory(session.current_directory()) {
        Ok(listing) => {
            for entry in listing {
                match entry {
                    Ok(entry) => console.say(entry)?,
                    Err(e) => {
                        console.say(operation_failure_message(Operation::List, &e))?;
                        break;
                    }
                }
            }
        }
        Err(e) => console.say(operation_failure_message(Operation::List, &e))?,
    }
    Ok(CommandStatus::Continue)
}

fn handle_copy<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<CommandStatus> {
    let Some(source) = console.prompt(SOURCE_PROMPT)? else {
        return Ok(CommandStatus::Exit);
    };
    let Some(destination) = console.prompt(DESTINATION_PROMPT)? else {
        return Ok(CommandStatus::Exit);
    };

    let source = session.resolve(&source);
    let destination = session.resolve(&destination);

    if !source.exists() {
        console.say(SOURCE_MISSING)?;
        return Ok(CommandStatus::Continue);
    }

    match storage::copy_item(&source, &destination) {
        Ok(report) => console.say(&report)?,
        Err(e) => console.say(operation_failure_message(Operation::Copy, &e))?,
    }
    let action = format!("Copied {} to {}", source.display(), destination.display());
    record_action(session, console, &action)?;
    Ok(CommandStatus::Continue)
}

fn handle_move<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<CommandStatus> {
    let Some(source) = console.prompt(SOURCE_PROMPT)? else {
        return Ok(CommandStatus::Exit);
    };
    let Some(destination) = console.prompt(DESTINATION_PROMPT)? else {
        return Ok(CommandStatus::Exit);
    };

    let source = session.resolve(&source);
    let destination = session.resolve(&destination);

    if !source.exists() {
        console.say(SOURCE_MISSING)?;
        return Ok(CommandStatus::Continue);
    }

    match storage::move_item(&source, &destination) {
        Ok(report) => console.say(&report)?,
        Err(e) => console.say(operation_failure_message(Operation::Move, &e))?,
    }
    let action = format!("Moved {} to {}", source.display(), destination.display());
    record_action(session, console, &action)?;
    Ok(CommandStatus::Continue)
}

fn handle_delete<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<CommandStatus> {
    let Some(item) = console.prompt(DELETE_PROMPT)? else {
        return Ok(CommandStatus::Exit);
    };
    let item = session.resolve(&item);

    // The backup directory is prepared before the item is even looked at.
    if let Err(e) = create_directory(session.backup_directory()) {
        console.say(operation_failure_message(Operation::Delete, &e))?;
        return Ok(CommandStatus::Continue);
    }

    if !item.exists() {
        console.say(ITEM_MISSING)?;
        return Ok(CommandStatus::Continue);
    }

    match storage::delete_item(&item, session.backup_directory()) {
        Ok(report) => console.say(&report)?,
        Err(e) => console.say(operation_failure_message(Operation::Delete, &e))?,
    }
    record_action(session, console, &format!("Deleted {}", item.display()))?;
    Ok(CommandStatus::Continue)
}

fn handle_change_directory<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> io::Result<CommandStatus> {
    let Some(target) = console.prompt(CHANGE_DIRECTORY_PROMPT)? else {
        return Ok(CommandStatus::Exit);
    };

    match navigate::change_directory(session.current_directory(), &target) {
        Ok(new_directory) => {
            console.say(format_args!("Current directory: {}", new_directory.display()))?;
            session.set_current_directory(new_directory);
        }
        Err(e) => console.say(navigate_failure_message(&e))?,
    }
    Ok(CommandStatus::Continue)
}

/// Appends to the action log; a write failure is reported but not fatal.
fn record_action<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
    action: &str,
) -> io::Result<()> {
    if let Err(e) = session.action_log().record(action) {
        warn!("Action log write failed: {}", e);
        console.say(format_args!("Warning: could not write action log: {e}"))?;
    }
    Ok(())
}

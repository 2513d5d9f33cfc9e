//! Module `commands`
//!
//! Defines the menu choices a user can type and how raw input maps to them.

use crate::access::Mode;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    List,
    Copy,
    Move,
    Delete,
    ChangeDirectory,
    Unknown,
}

impl MenuChoice {
    /// Order in which choices are printed.
    pub const MENU_ORDER: [MenuChoice; 6] = [
        MenuChoice::List,
        MenuChoice::Copy,
        MenuChoice::Move,
        MenuChoice::Delete,
        MenuChoice::ChangeDirectory,
        MenuChoice::Exit,
    ];

    /// Lowest mode allowed to run this choice, `None` when every mode may.
    pub fn required_mode(&self) -> Option<Mode> {
        match self {
            MenuChoice::Copy => Some(Mode::Elevated),
            MenuChoice::Move | MenuChoice::Delete => Some(Mode::Admin),
            MenuChoice::Exit
            | MenuChoice::List
            | MenuChoice::ChangeDirectory
            | MenuChoice::Unknown => None,
        }
    }

    /// Key the user types, `None` for `Unknown`.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            MenuChoice::Exit => Some("0"),
            MenuChoice::List => Some("1"),
            MenuChoice::Copy => Some("2"),
            MenuChoice::Move => Some("3"),
            MenuChoice::Delete => Some("4"),
            MenuChoice::ChangeDirectory => Some("5"),
            MenuChoice::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::List => "List directory",
            MenuChoice::Copy => "Copy item",
            MenuChoice::Move => "Move item",
            MenuChoice::Delete => "Delete item",
            MenuChoice::ChangeDirectory => "Change directory",
            MenuChoice::Unknown => "Unknown",
        }
    }
}

/// Maps a raw input line to a choice. Only the line ending is stripped;
/// anything other than an exact key is `Unknown`.
pub fn parse_choice(raw: &str) -> MenuChoice {
    match raw.trim_end_matches(['\r', '\n']) {
        "0" => MenuChoice::Exit,
        "1" => MenuChoice::List,
        "2" => MenuChoice::Copy,
        "3" => MenuChoice::Move,
        "4" => MenuChoice::Delete,
        "5" => MenuChoice::ChangeDirectory,
        _ => MenuChoice::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_the_parser() {
        for choice in MenuChoice::MENU_ORDER {
            assert_eq!(parse_choice(choice.key().unwrap()), choice);
        }
    }

    #[test]
    fn line_endings_are_ignored_but_spaces_are_not() {
        assert_eq!(parse_choice("1\n"), MenuChoice::List);
        assert_eq!(parse_choice("1\r\n"), MenuChoice::List);
        assert_eq!(parse_choice(" 1"), MenuChoice::Unknown);
        assert_eq!(parse_choice("6"), MenuChoice::Unknown);
        assert_eq!(parse_choice(""), MenuChoice::Unknown);
    }
}

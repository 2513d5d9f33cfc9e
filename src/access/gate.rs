//! Mode gate
//!
//! Decides which menu choices a mode may see and run.

use crate::access::mode::Mode;
use crate::menu::MenuChoice;

/// Whether `mode` may run `choice`. Unknown input is always admitted so it
/// can be answered with "Invalid choice.".
pub fn is_permitted(mode: Mode, choice: MenuChoice) -> bool {
    match choice.required_mode() {
        Some(required) => mode.satisfies(required),
        None => true,
    }
}

/// Menu entries shown to `mode`, in display order.
pub fn visible_choices(mode: Mode) -> Vec<MenuChoice> {
    MenuChoice::MENU_ORDER
        .iter()
        .copied()
        .filter(|choice| is_permitted(mode, *choice))
        .collect()
}

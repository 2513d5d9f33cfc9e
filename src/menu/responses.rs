//! Fixed messages and prompts printed by the menu loop.

pub const MENU_HEADER: &str = "Menu:";
pub const SELECT_PROMPT: &str = "Select an option: ";
pub const SOURCE_PROMPT: &str = "Enter source path: ";
pub const DESTINATION_PROMPT: &str = "Enter destination path: ";
pub const DELETE_PROMPT: &str = "Enter path of item to delete: ";
pub const CHANGE_DIRECTORY_PROMPT: &str = "Enter the new directory path: ";

pub const INVALID_CHOICE: &str = "Invalid choice.";
pub const SOURCE_MISSING: &str = "Source does not exist.";
pub const ITEM_MISSING: &str = "Item does not exist.";

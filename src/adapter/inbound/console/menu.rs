//! The numbered menu shown by the console session.

use crate::adapter::inbound::cli::output;

pub const MENU_TITLE: &str = "--- Student Database Menu ---";

/// One menu entry, selected by its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Number the operator types to pick this entry.
    #[must_use]
    pub const fn key(self) -> i32 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::View => 2,
            MenuChoice::Edit => 3,
            MenuChoice::Delete => 4,
            MenuChoice::Exit => 5,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Record",
            MenuChoice::View => "View Records",
            MenuChoice::Edit => "Edit Record",
            MenuChoice::Delete => "Delete Record",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Look up the entry for a typed number.
    #[must_use]
    pub fn from_key(key: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }
}

/// Print the title and every entry.
pub fn print() {
    output::section(MENU_TITLE);
    for choice in MenuChoice::ALL {
        output::menu_item(choice.key(), choice.label());
    }
}

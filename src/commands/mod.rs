/// Command parsing and dispatch
mod birthday;
mod contact;

use thiserror::Error;
use tracing::debug;

use crate::{
    address_book::AddressBook,
    utils::{messages, validation::ValidationError},
};

pub use birthday::{add_birthday, birthdays, show_birthday};
pub use contact::{
    add_contact, change_contact, delete_contact, remove_phone, rename_contact, show_all,
    show_phones,
};

/// Everything a command can fail with, one variant per user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Contact {name} not found. Please enter a valid name.")]
    ContactNotFound { name: String },
    #[error("Contact {name} already exists. Please try a different name.")]
    ContactExists { name: String },
    #[error("Contact {name} has no phone number {phone}.")]
    PhoneNotFound { name: String, phone: String },
    #[error("Contact {name} has no phone numbers yet. Use 'add' first.")]
    NoPhones { name: String },
    #[error("No birthday set for {name}. Use 'add-birthday' first.")]
    BirthdayNotSet { name: String },
    #[error("Missing arguments. Usage: {usage}")]
    MissingArgument { usage: &'static str },
}

/// What the session should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Reply(String),
    Exit,
    Nothing,
}

/// Split a line into a lower-cased command and its arguments
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

/// Handle one line of user input against the book
pub fn dispatch(line: &str, book: &mut AddressBook, window_days: i64) -> Action {
    let Some((command, args)) = parse_input(line) else {
        return Action::Nothing;
    };

    let result = match command.as_str() {
        "close" | "exit" => return Action::Exit,
        "hello" => Ok(messages::GREETING.to_string()),
        "help" => Ok(messages::build_help()),
        "add" => add_contact(&args, book),
        "change" => change_contact(&args, book),
        "phone" => show_phones(&args, book),
        "remove-phone" => remove_phone(&args, book),
        "all" => Ok(show_all(book)),
        "delete" => delete_contact(&args, book),
        "rename" => rename_contact(&args, book),
        "add-birthday" => add_birthday(&args, book),
        "show-birthday" => show_birthday(&args, book),
        "birthdays" => Ok(birthdays(book, window_days)),
        _ => Ok(messages::INVALID_COMMAND.to_string()),
    };

    match result {
        Ok(reply) => Action::Reply(reply),
        Err(e) => {
            if let CommandError::Validation(invalid) = &e {
                debug!(
                    command = %command,
                    field = invalid.field(),
                    value = invalid.value(),
                    "Rejected input"
                );
            } else {
                debug!(command = %command, error = ?e, "Command failed");
            }
            Action::Reply(e.to_string())
        }
    }
}

/// Take exactly `N` leading arguments, ignoring any extras
pub(crate) fn require_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> Result<[&'a str; N], CommandError> {
    args.get(..N)
        .and_then(|slice| <[&str; N]>::try_from(slice).ok())
        .ok_or(CommandError::MissingArgument { usage })
}

/// Pure functions building the replies printed to the console
use crate::services::birthday_service::UpcomingBirthday;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const EMPTY_BOOK: &str = "Address book is empty.";

pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CONTACT_DELETED: &str = "Contact deleted.";
pub const CONTACT_RENAMED: &str = "Contact renamed.";
pub const PHONE_CHANGED: &str = "Contact phone number updated successfully.";
pub const PHONE_REMOVED: &str = "Phone number removed.";
pub const BIRTHDAY_ADDED: &str = "Birthday was added.";

/// Reply for `delete` when there was nothing to delete
pub fn build_nothing_deleted(name: &str) -> String {
    format!("No contact named {} to delete.", name)
}

/// Build the list of upcoming birthdays, one per line
pub fn build_upcoming_birthdays(upcoming: &[UpcomingBirthday], window_days: i64) -> String {
    if upcoming.is_empty() {
        return build_no_upcoming_birthdays(window_days);
    }

    upcoming
        .iter()
        .map(|entry| format!("{}'s birthday on {}", entry.name, entry.formatted_date()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_no_upcoming_birthdays(window_days: i64) -> String {
    match window_days {
        7 => "No upcoming birthdays in the next week.".to_string(),
        1 => "No upcoming birthdays in the next day.".to_string(),
        n => format!("No upcoming birthdays in the next {} days.", n),
    }
}

/// Build the help text listing every command
pub fn build_help() -> String {
    [
        "Available commands:",
        "  hello                          greet the assistant",
        "  add <name> <phone>             add a contact or a phone to it",
        "  change <name> [<old>] <new>    replace a phone number",
        "  phone <name>                   show a contact's phones",
        "  remove-phone <name> <phone>    remove a phone number",
        "  all                            list every contact",
        "  delete <name>                  delete a contact",
        "  rename <old> <new>             rename a contact",
        "  add-birthday <name> <date>     set a birthday (DD.MM.YYYY)",
        "  show-birthday <name>           show a contact's birthday",
        "  birthdays                      list upcoming birthdays",
        "  close | exit                   save and quit",
    ]
    .join("\n")
}

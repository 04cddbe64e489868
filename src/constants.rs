/// Default location of the address book snapshot
pub const DEFAULT_SNAPSHOT_PATH: &str = "addressbook.json";

/// Default number of days to look ahead for upcoming birthdays
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 7;

/// Text format used for birthdays, both on input and on display
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Number of digits a phone number must have
pub const PHONE_DIGITS: usize = 10;

/// Environment variable overriding the snapshot path
pub const SNAPSHOT_PATH_VAR: &str = "ADDRESS_BOOK_PATH";

/// Environment variable overriding the upcoming birthday window
pub const WINDOW_DAYS_VAR: &str = "BIRTHDAY_WINDOW_DAYS";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "address_book=warn";

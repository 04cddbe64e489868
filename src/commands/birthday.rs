use tracing::info;

use super::{
    CommandError,
    contact::{find_record, not_found},
    require_args,
};
use crate::{address_book::AddressBook, utils::messages};

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name, date] = require_args::<2>(args, "add-birthday <name> <DD.MM.YYYY>")?;
    let record = find_record(book, name)?;

    record.set_birthday(date)?;
    info!(name, "Birthday set");
    Ok(messages::BIRTHDAY_ADDED.to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> Result<String, CommandError> {
    let [name] = require_args::<1>(args, "show-birthday <name>")?;
    let record = book.find(name).ok_or_else(|| not_found(name))?;

    record
        .birthday
        .map(|birthday| birthday.to_string())
        .ok_or_else(|| CommandError::BirthdayNotSet {
            name: name.to_string(),
        })
}

/// `birthdays`: who to congratulate within the configured window
pub fn birthdays(book: &AddressBook, window_days: i64) -> String {
    let upcoming = book.get_upcoming_birthdays(window_days);
    messages::build_upcoming_birthdays(&upcoming, window_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Record, utils::datetime::today};
    use chrono::Days;

    #[test]
    fn test_add_birthday_unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_birthday(&["Ghost", "01.01.2000"], &mut book),
            Err(CommandError::ContactNotFound {
                name: "Ghost".to_string()
            })
        );
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("John"));

        add_birthday(&["John", "01.01.2000"], &mut book).unwrap();
        add_birthday(&["John", "02.02.2002"], &mut book).unwrap();
        assert_eq!(show_birthday(&["John"], &book).unwrap(), "02.02.2002");
    }

    #[test]
    fn test_birthdays_lists_contact_born_today() {
        let mut book = AddressBook::new();
        let mut record = Record::new("John");
        // 2000 is a leap year, so any day of the year is valid
        record
            .set_birthday(&today().format("%d.%m.2000").to_string())
            .unwrap();
        book.add_record(record);

        let reply = birthdays(&book, 7);
        assert!(reply.starts_with("John's birthday on "), "{}", reply);
    }

    #[test]
    fn test_birthdays_none_upcoming() {
        let mut book = AddressBook::new();
        let mut record = Record::new("John");
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        record
            .set_birthday(&yesterday.format("%d.%m.2000").to_string())
            .unwrap();
        book.add_record(record);

        assert_eq!(birthdays(&book, 0), "No upcoming birthdays in the next 0 days.");
    }
}

use tracing::{debug, info};

use super::{CommandError, require_args};
use crate::{
    address_book::{AddressBook, RenameError},
    models::{Phone, Record},
    utils::messages,
};

/// `add <name> <phone>`: create the contact if needed, then append the phone
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name, phone] = require_args::<2>(args, "add <name> <phone>")?;
    // Validate before touching the book so a bad number never creates a record
    let phone = Phone::new(phone)?;

    match book.find_mut(name) {
        Some(record) => {
            record.push_phone(phone);
            debug!(name, "Added phone to existing contact");
            Ok(messages::CONTACT_UPDATED.to_string())
        }
        None => {
            let mut record = Record::new(name);
            record.push_phone(phone);
            book.add_record(record);
            info!(name, "Contact created");
            Ok(messages::CONTACT_ADDED.to_string())
        }
    }
}

/// `change <name> <new>` replaces the first phone;
/// `change <name> <old> <new>` replaces the given one
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name, phone] = require_args::<2>(args, "change <name> [<old phone>] <new phone>")?;
    let record = find_record(book, name)?;

    match args.get(2) {
        Some(new) => {
            if !record.edit_phone(phone, new)? {
                return Err(CommandError::PhoneNotFound {
                    name: name.to_string(),
                    phone: phone.to_string(),
                });
            }
        }
        None => {
            if !record.edit_first_phone(phone)? {
                return Err(CommandError::NoPhones {
                    name: name.to_string(),
                });
            }
        }
    }

    Ok(messages::PHONE_CHANGED.to_string())
}

/// `phone <name>`
pub fn show_phones(args: &[&str], book: &AddressBook) -> Result<String, CommandError> {
    let [name] = require_args::<1>(args, "phone <name>")?;
    let record = book.find(name).ok_or_else(|| not_found(name))?;

    if record.phones.is_empty() {
        return Err(CommandError::NoPhones {
            name: name.to_string(),
        });
    }
    Ok(record.phones_display())
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name, phone] = require_args::<2>(args, "remove-phone <name> <phone>")?;
    let record = find_record(book, name)?;

    if record.find_phone(phone).is_none() {
        return Err(CommandError::PhoneNotFound {
            name: name.to_string(),
            phone: phone.to_string(),
        });
    }
    record.remove_phone(phone);
    Ok(messages::PHONE_REMOVED.to_string())
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        messages::EMPTY_BOOK.to_string()
    } else {
        book.to_string()
    }
}

/// `delete <name>`: deleting an unknown contact is not an error
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [name] = require_args::<1>(args, "delete <name>")?;

    match book.delete(name) {
        Some(_) => {
            info!(name, "Contact deleted");
            Ok(messages::CONTACT_DELETED.to_string())
        }
        None => Ok(messages::build_nothing_deleted(name)),
    }
}

/// `rename <old> <new>`
pub fn rename_contact(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let [old, new] = require_args::<2>(args, "rename <old name> <new name>")?;

    book.rename(old, new).map_err(|e| match e {
        RenameError::NotFound => CommandError::ContactNotFound {
            name: old.to_string(),
        },
        RenameError::NameTaken => CommandError::ContactExists {
            name: new.to_string(),
        },
    })?;

    info!(old, new, "Contact renamed");
    Ok(messages::CONTACT_RENAMED.to_string())
}

pub(super) fn find_record<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> Result<&'a mut Record, CommandError> {
    book.find_mut(name).ok_or_else(|| not_found(name))
}

pub(super) fn not_found(name: &str) -> CommandError {
    CommandError::ContactNotFound {
        name: name.to_string(),
    }
}

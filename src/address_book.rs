use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::{
    models::Record,
    services::birthday_service::{UpcomingBirthday, upcoming_birthdays},
    utils::datetime::today,
};

/// Contacts keyed by name, kept in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

/// A stored list naming the same contact twice
#[derive(Debug, Error)]
#[error("contact {0} appears more than once")]
pub struct DuplicateContact(String);

impl TryFrom<Vec<Record>> for AddressBook {
    type Error = DuplicateContact;

    fn try_from(records: Vec<Record>) -> Result<Self, Self::Error> {
        let mut book = Self::new();
        for record in records {
            if book.position(record.name()).is_some() {
                return Err(DuplicateContact(record.name().to_string()));
            }
            book.records.push(record);
        }
        Ok(book)
    }
}

impl Serialize for AddressBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

/// Failure to rename a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    NotFound,
    NameTaken,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any record with the same name in place
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove a record by name; absent names are ignored
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        Some(self.records.remove(index))
    }

    /// Give an existing record a new, unused name
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), RenameError> {
        if old != new && self.find(new).is_some() {
            return Err(RenameError::NameTaken);
        }
        let index = self.position(old).ok_or(RenameError::NotFound)?;
        let record = self.records.remove(index);
        self.records.insert(index, record.renamed(new));
        Ok(())
    }

    /// Birthdays within `days` of today
    pub fn get_upcoming_birthdays(&self, days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(today(), days)
    }

    /// Birthdays within `days` of the given date
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(&self.records, today, days)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::{
    datetime::format_date,
    validation::{ValidationError, parse_birthday, validate_phone},
};

/// A phone number of exactly ten digits
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        validate_phone(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_phone(&value)?;
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday parsed from DD.MM.YYYY text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        parse_birthday(value).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(self.0))
    }
}

/// A single contact: a name, its phone numbers and an optional birthday
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The same record under another name
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.push_phone(Phone::new(phone)?);
        Ok(())
    }

    /// Append an already validated phone number
    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove every entry equal to `phone`, returning whether any was removed
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        self.phones.len() != before
    }

    /// Replace the first entry equal to `old` with `new`.
    ///
    /// The new number is validated before anything changes. Returns
    /// `Ok(false)` if `old` is not stored on this record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let new = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the first stored phone with `new`.
    ///
    /// Returns `Ok(false)` if the record has no phones.
    pub fn edit_first_phone(&mut self, new: &str) -> Result<bool, ValidationError> {
        let new = Phone::new(new)?;
        match self.phones.first_mut() {
            Some(slot) => {
                *slot = new;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Phones joined with "; "
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}

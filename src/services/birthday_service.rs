/// Birthday service - computes which contacts to congratulate soon
use chrono::NaiveDate;

use crate::{
    models::Record,
    utils::datetime::{format_date, next_anniversary, shift_off_weekend},
};

/// A contact to congratulate and the day to do it on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as DD.MM.YYYY
    pub fn formatted_date(&self) -> String {
        format_date(self.congratulation_date)
    }
}

/// Collect the birthdays falling within `window_days` of `today`, inclusive.
///
/// Weekend birthdays are moved to the following Monday. The shifted date is
/// not checked against the window again, so it may land past it.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday?;
            let occurrence = next_anniversary(birthday.date(), today)?;
            let delta = (occurrence - today).num_days();

            (0..=window_days).contains(&delta).then(|| UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: shift_off_weekend(occurrence),
            })
        })
        .collect()
}

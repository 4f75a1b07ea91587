use crate::LocaleError;
use crate::consts::{
    DAYS_IN_WEEK, LOCALE_ALT_SEPARATOR, LOCALE_SUBTAG_SEPARATOR, MONTHS_IN_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Identifier selecting a locale name table, e.g. `fi` or `en-GB`.
///
/// Fixed when a service is constructed and never read from the environment.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    Deref,
    From,
    Into,
    FromStr,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as given at construction
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form with `_` separators rewritten to `-`
    pub fn normalized(&self) -> String {
        self.0
            .trim()
            .to_lowercase()
            .replace(LOCALE_ALT_SEPARATOR, &LOCALE_SUBTAG_SEPARATOR.to_string())
    }

    /// Language subtag of the normalized identifier (`fi` for `fi_FI`)
    pub fn language(&self) -> String {
        let normalized = self.normalized();
        match normalized.split_once(LOCALE_SUBTAG_SEPARATOR) {
            Some((language, _)) => language.to_owned(),
            None => normalized,
        }
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Which of the four name tables a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NameKind {
    #[display(fmt = "full weekday")]
    WeekdayFull = 0,
    #[display(fmt = "short weekday")]
    WeekdayShort = 1,
    #[display(fmt = "full month")]
    MonthFull = 2,
    #[display(fmt = "short month")]
    MonthShort = 3,
}

impl NameKind {
    pub const COUNT: usize = 4;

    /// All kinds, in the order names are resolved while formatting
    pub const ALL: [Self; Self::COUNT] = [
        Self::WeekdayFull,
        Self::WeekdayShort,
        Self::MonthFull,
        Self::MonthShort,
    ];

    pub const fn is_weekday(self) -> bool {
        matches!(self, Self::WeekdayFull | Self::WeekdayShort)
    }

    /// Number of entries in the table for this kind
    pub const fn table_len(self) -> usize {
        if self.is_weekday() {
            DAYS_IN_WEEK
        } else {
            MONTHS_IN_YEAR
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

/// Weekday and month names of one locale.
///
/// Weekdays start at Sunday, months at January. Tables have a fixed length,
/// so a deserialized value is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleNames {
    weekdays: [String; DAYS_IN_WEEK],
    short_weekdays: [String; DAYS_IN_WEEK],
    months: [String; MONTHS_IN_YEAR],
    short_months: [String; MONTHS_IN_YEAR],
}

impl LocaleNames {
    pub fn new(
        weekdays: [&str; DAYS_IN_WEEK],
        short_weekdays: [&str; DAYS_IN_WEEK],
        months: [&str; MONTHS_IN_YEAR],
        short_months: [&str; MONTHS_IN_YEAR],
    ) -> Self {
        Self {
            weekdays: weekdays.map(str::to_owned),
            short_weekdays: short_weekdays.map(str::to_owned),
            months: months.map(str::to_owned),
            short_months: short_months.map(str::to_owned),
        }
    }

    /// Returns the whole table for `kind`
    pub fn table(&self, kind: NameKind) -> &[String] {
        match kind {
            NameKind::WeekdayFull => &self.weekdays,
            NameKind::WeekdayShort => &self.short_weekdays,
            NameKind::MonthFull => &self.months,
            NameKind::MonthShort => &self.short_months,
        }
    }

    /// Returns a single name by zero-based index
    ///
    /// # Errors
    /// Returns `LocaleError::IndexOutOfRange` if `index` is past the end of the table.
    pub fn get(&self, kind: NameKind, index: usize) -> Result<&str, LocaleError> {
        let table = self.table(kind);
        table
            .get(index)
            .map(String::as_str)
            .ok_or(LocaleError::IndexOutOfRange {
                kind,
                index,
                len: table.len(),
            })
    }
}

//! Date formatting with weekday and month names taken from a fixed locale.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use localized_datefmt::DateTimeService;
//!
//! let service = DateTimeService::new("fi");
//! let date = Utc.with_ymd_and_hms(2015, 1, 5, 12, 0, 0).unwrap();
//! assert_eq!(service.format(&date, "EEEE d.M."), "maanantai 5.1.");
//! ```

mod consts;
mod locale;
mod pattern;
mod prelude;
mod render;
mod types;

pub use consts::*;
pub use locale::{LocaleError, LocaleProvider, LocaleRegistry};
pub use pattern::{NameSet, ResolvedNames, name_kind, required_names, splice_names};
pub use render::{PatternRenderer, TokenFormatter};
pub use types::{LocaleId, LocaleNames, NameKind};

use chrono::{DateTime, Datelike, FixedOffset, Offset, TimeZone, Utc};

/// Formats dates with names from one locale, independent of the environment.
///
/// Weekday (`EEE`, `EEEE`) and month (`MMM`, `MMMM`) names are resolved through
/// the provider and spliced into the pattern as quoted literals. Everything
/// else is left to the renderer. Without an explicit zone, fields are computed
/// in UTC.
#[derive(Debug, Clone)]
pub struct DateTimeService<P = LocaleRegistry, R = TokenFormatter> {
    locale: LocaleId,
    reference_zone: FixedOffset,
    provider: P,
    renderer: R,
}

impl DateTimeService {
    /// Creates a service using the built-in locale tables
    pub fn new(locale: impl Into<LocaleId>) -> Self {
        Self::with_parts(locale, LocaleRegistry::builtin(), TokenFormatter)
    }
}

impl<P, R> DateTimeService<P, R>
where
    P: LocaleProvider,
    R: PatternRenderer,
{
    /// Creates a service with a custom name provider and renderer
    pub fn with_parts(locale: impl Into<LocaleId>, provider: P, renderer: R) -> Self {
        Self {
            locale: locale.into(),
            reference_zone: Utc.fix(),
            provider,
            renderer,
        }
    }

    pub const fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Zone used by [`format`](Self::format)
    pub const fn reference_zone(&self) -> FixedOffset {
        self.reference_zone
    }

    /// Formats `date` in the reference zone.
    pub fn format<Tz: TimeZone>(&self, date: &DateTime<Tz>, pattern: &str) -> String {
        self.format_in(date, pattern, &self.reference_zone)
    }

    /// Formats `date` in `zone`.
    ///
    /// Names and numeric fields are both taken from the date as seen in
    /// `zone`. A name that cannot be resolved is logged and its token is left
    /// in the pattern.
    pub fn format_in<Tz: TimeZone, Z: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        pattern: &str,
        zone: &Z,
    ) -> String {
        let local = date.with_timezone(zone).fixed_offset();
        let pattern = self.localize_pattern(&local, pattern);
        self.renderer.render(&pattern, &local)
    }

    /// Rewrites the name tokens of `pattern` for `date`, read in its own zone.
    ///
    /// Only names that occur in the pattern are looked up, weekdays first.
    pub fn localize_pattern<Tz: TimeZone>(&self, date: &DateTime<Tz>, pattern: &str) -> String {
        let wanted = required_names(pattern);
        if wanted.is_empty() {
            return pattern.to_owned();
        }

        let weekday = date.weekday().num_days_from_sunday() as usize;
        let month = date.month0() as usize;
        let mut names = ResolvedNames::default();
        for kind in NameKind::ALL {
            if wanted.contains(kind) {
                let index = if kind.is_weekday() { weekday } else { month };
                names.set(kind, self.name(kind, index));
            }
        }

        splice_names(pattern, &names)
    }

    /// Looks up one name, logging and returning `None` on failure
    pub fn name(&self, kind: NameKind, index: usize) -> Option<&str> {
        match self.provider.lookup(&self.locale, kind, index) {
            Ok(name) => Some(name),
            Err(err) => {
                tracing::error!(
                    locale = %self.locale,
                    kind = %kind,
                    index,
                    error = %err,
                    "Failed to resolve localized name"
                );
                None
            }
        }
    }

    /// Full weekday name, index 0 is Sunday
    pub fn weekday_name(&self, index: usize) -> Option<&str> {
        self.name(NameKind::WeekdayFull, index)
    }

    /// Abbreviated weekday name, index 0 is Sunday
    pub fn short_weekday_name(&self, index: usize) -> Option<&str> {
        self.name(NameKind::WeekdayShort, index)
    }

    /// Full month name, index 0 is January
    pub fn month_name(&self, index: usize) -> Option<&str> {
        self.name(NameKind::MonthFull, index)
    }

    /// Abbreviated month name, index 0 is January
    pub fn short_month_name(&self, index: usize) -> Option<&str> {
        self.name(NameKind::MonthShort, index)
    }
}

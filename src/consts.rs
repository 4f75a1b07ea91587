/// Pattern character for weekday names
pub const WEEKDAY_TOKEN: char = 'E';
/// Pattern character for month fields
pub const MONTH_TOKEN: char = 'M';

/// Shortest run of a token character that stands for a full name (`EEEE`, `MMMM`)
pub const FULL_NAME_MIN_RUN: usize = 4;
/// Exact run length that stands for an abbreviated name (`EEE`, `MMM`)
pub const SHORT_NAME_RUN: usize = 3;

/// Delimits literal text in a pattern
pub const QUOTE: char = '\'';
/// A literal apostrophe, inside or outside a quoted segment
pub const ESCAPED_QUOTE: &str = "''";

/// Entries in a weekday name table (index 0 is Sunday)
pub const DAYS_IN_WEEK: usize = 7;
/// Entries in a month name table (index 0 is January)
pub const MONTHS_IN_YEAR: usize = 12;

/// Separator between the language subtag and the rest of a locale identifier
pub(crate) const LOCALE_SUBTAG_SEPARATOR: char = '-';
/// Alternative subtag separator (`fi_FI`), normalized to `LOCALE_SUBTAG_SEPARATOR`
pub(crate) const LOCALE_ALT_SEPARATOR: char = '_';

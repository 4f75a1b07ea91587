use std::collections::HashMap;

use crate::{LocaleId, LocaleNames, NameKind};

/// Error type for locale name lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// No name table is loaded for the locale.
    #[error("Locale data not loaded for '{0}'")]
    Unavailable(LocaleId),

    /// Index past the end of a name table.
    #[error("Index {index} out of range for {kind} names (table has {len})")]
    IndexOutOfRange {
        kind: NameKind,
        index: usize,
        len: usize,
    },
}

/// Source of localized weekday and month names.
pub trait LocaleProvider {
    /// Returns the name tables for `locale`
    ///
    /// # Errors
    /// Returns `LocaleError::Unavailable` if no data is loaded for `locale`.
    fn names(&self, locale: &LocaleId) -> Result<&LocaleNames, LocaleError>;

    /// Returns one name by zero-based index
    ///
    /// # Errors
    /// Returns `LocaleError::Unavailable` if no data is loaded for `locale`,
    /// or `LocaleError::IndexOutOfRange` if `index` is past the table end.
    fn lookup(&self, locale: &LocaleId, kind: NameKind, index: usize) -> Result<&str, LocaleError> {
        self.names(locale)?.get(kind, index)
    }
}

/// In-memory locale tables keyed by normalized identifier.
///
/// A region-qualified identifier that is not registered falls back to its
/// language subtag, so `fi-FI` resolves to the `fi` table.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    tables: HashMap<String, LocaleNames>,
}

impl LocaleRegistry {
    /// Creates a registry with no tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with `en`, `fi`, `sv` and `de`
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("en", english());
        registry.register("fi", finnish());
        registry.register("sv", swedish());
        registry.register("de", german());
        registry
    }

    /// Adds or replaces the table for `locale`, returning the previous one
    pub fn register(&mut self, locale: impl Into<LocaleId>, names: LocaleNames) -> Option<LocaleNames> {
        self.tables.insert(locale.into().normalized(), names)
    }

    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.names(locale).is_ok()
    }

    /// Normalized identifiers of all registered tables, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl LocaleProvider for LocaleRegistry {
    fn names(&self, locale: &LocaleId) -> Result<&LocaleNames, LocaleError> {
        self.tables
            .get(&locale.normalized())
            .or_else(|| self.tables.get(&locale.language()))
            .ok_or_else(|| LocaleError::Unavailable(locale.clone()))
    }
}

// Standalone (nominative) forms, as used in calendar headers.

fn english() -> LocaleNames {
    LocaleNames::new(
        ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
    )
}

fn finnish() -> LocaleNames {
    LocaleNames::new(
        [
            "sunnuntai",
            "maanantai",
            "tiistai",
            "keskiviikko",
            "torstai",
            "perjantai",
            "lauantai",
        ],
        ["su", "ma", "ti", "ke", "to", "pe", "la"],
        [
            "tammikuu",
            "helmikuu",
            "maaliskuu",
            "huhtikuu",
            "toukokuu",
            "kesäkuu",
            "heinäkuu",
            "elokuu",
            "syyskuu",
            "lokakuu",
            "marraskuu",
            "joulukuu",
        ],
        [
            "tammi", "helmi", "maalis", "huhti", "touko", "kesä", "heinä", "elo", "syys", "loka",
            "marras", "joulu",
        ],
    )
}

fn swedish() -> LocaleNames {
    LocaleNames::new(
        ["söndag", "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag"],
        ["sön", "mån", "tis", "ons", "tors", "fre", "lör"],
        [
            "januari",
            "februari",
            "mars",
            "april",
            "maj",
            "juni",
            "juli",
            "augusti",
            "september",
            "oktober",
            "november",
            "december",
        ],
        [
            "jan.", "feb.", "mars", "apr.", "maj", "juni", "juli", "aug.", "sep.", "okt.", "nov.",
            "dec.",
        ],
    )
}

fn german() -> LocaleNames {
    LocaleNames::new(
        ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
        ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
        [
            "Januar",
            "Februar",
            "März",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ],
        [
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.",
            "Dez.",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_locales() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.locales(), vec!["de", "en", "fi", "sv"]);
        let fi = LocaleId::new("fi");
        assert_eq!(registry.lookup(&fi, NameKind::WeekdayFull, 1).unwrap(), "maanantai");
        assert_eq!(registry.lookup(&fi, NameKind::MonthShort, 0).unwrap(), "tammi");
    }

    #[test]
    fn test_region_falls_back_to_language() {
        let registry = LocaleRegistry::builtin();
        let id = LocaleId::new("sv_SE");
        assert!(registry.contains(&id));
        assert_eq!(registry.lookup(&id, NameKind::MonthFull, 2).unwrap(), "mars");
        assert_eq!(
            registry.lookup(&LocaleId::new("DE-at"), NameKind::WeekdayShort, 6).unwrap(),
            "Sa."
        );
    }

    #[test]
    fn test_region_table_preferred_over_language() {
        let mut registry = LocaleRegistry::builtin();
        let names = LocaleNames::new(
            ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ],
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec"],
        );
        assert!(registry.register("en-GB", names).is_none());

        let gb = LocaleId::new("en-GB");
        assert_eq!(registry.lookup(&gb, NameKind::MonthShort, 8).unwrap(), "Sept");
        let us = LocaleId::new("en-US");
        assert_eq!(registry.lookup(&us, NameKind::MonthShort, 8).unwrap(), "Sep");
    }

    #[test]
    fn test_register_replaces_table() {
        let mut registry = LocaleRegistry::new();
        assert!(registry.register("fi", english()).is_none());
        let previous = registry.register("FI", finnish());
        assert_eq!(previous, Some(english()));
        assert_eq!(registry.locales(), vec!["fi"]);
    }

    #[test]
    fn test_unavailable_locale() {
        let registry = LocaleRegistry::builtin();
        let id = LocaleId::new("ja");
        assert!(!registry.contains(&id));
        assert_eq!(
            registry.lookup(&id, NameKind::WeekdayFull, 0),
            Err(LocaleError::Unavailable(id.clone()))
        );
        assert_eq!(
            LocaleError::Unavailable(id).to_string(),
            "Locale data not loaded for 'ja'"
        );
    }

    #[test]
    fn test_lookup_out_of_range() {
        let registry = LocaleRegistry::builtin();
        let err = registry
            .lookup(&LocaleId::new("en"), NameKind::MonthFull, 12)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Index 12 out of range for full month names (table has 12)"
        );
    }
}

//! Rewrites weekday and month name tokens into quoted literals.
//!
//! A pattern marks literal text with single quotes and writes an apostrophe
//! as `''`. Name runs are replaced by the resolved name in a form that the
//! rendering engine reads back as literal text, merging with any quoted
//! segment the run touches instead of emitting `''` at the seam (which the
//! engine would read as an apostrophe).

use crate::NameKind;
use crate::consts::{
    ESCAPED_QUOTE, FULL_NAME_MIN_RUN, MONTH_TOKEN, QUOTE, SHORT_NAME_RUN, WEEKDAY_TOKEN,
};

/// Set of name kinds that occur in a pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameSet([bool; NameKind::COUNT]);

impl NameSet {
    pub const fn contains(&self, kind: NameKind) -> bool {
        self.0[kind.slot()]
    }

    pub fn is_empty(&self) -> bool {
        !self.0.contains(&true)
    }

    fn insert(&mut self, kind: NameKind) {
        self.0[kind.slot()] = true;
    }
}

/// Names resolved for one date. A missing entry leaves its runs untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvedNames<'a>([Option<&'a str>; NameKind::COUNT]);

impl<'a> ResolvedNames<'a> {
    pub const fn get(&self, kind: NameKind) -> Option<&'a str> {
        self.0[kind.slot()]
    }

    pub fn set(&mut self, kind: NameKind, name: Option<&'a str>) {
        self.0[kind.slot()] = name;
    }
}

/// Classifies a run of `token` characters of length `run`.
pub fn name_kind(token: char, run: usize) -> Option<NameKind> {
    match token {
        WEEKDAY_TOKEN if run >= FULL_NAME_MIN_RUN => Some(NameKind::WeekdayFull),
        WEEKDAY_TOKEN if run == SHORT_NAME_RUN => Some(NameKind::WeekdayShort),
        MONTH_TOKEN if run >= FULL_NAME_MIN_RUN => Some(NameKind::MonthFull),
        MONTH_TOKEN if run == SHORT_NAME_RUN => Some(NameKind::MonthShort),
        _ => None,
    }
}

/// Finds which names `pattern` asks for.
///
/// Runs inside quoted segments count as well.
pub fn required_names(pattern: &str) -> NameSet {
    let chars: Vec<char> = pattern.chars().collect();
    let mut wanted = NameSet::default();
    let mut i = 0;
    while i < chars.len() {
        let run = run_length(&chars[i..]);
        if let Some(kind) = name_kind(chars[i], run) {
            wanted.insert(kind);
        }
        i += run;
    }
    wanted
}

/// Replaces every name run that has a resolved name.
///
/// Each maximal run is classified once, so a full-width run is never seen
/// again as an abbreviated one.
pub fn splice_names(pattern: &str, names: &ResolvedNames<'_>) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut quoted = false;
    // The last character pushed to `out` closed a quoted segment.
    let mut after_close = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch == QUOTE {
            if chars.get(i + 1) == Some(&QUOTE) {
                out.push_str(ESCAPED_QUOTE);
                after_close = false;
                i += 2;
            } else {
                quoted = !quoted;
                out.push(QUOTE);
                after_close = !quoted;
                i += 1;
            }
            continue;
        }

        let run = run_length(&chars[i..]);
        let name = name_kind(ch, run).and_then(|kind| names.get(kind));
        let Some(name) = name else {
            out.extend(&chars[i..i + run]);
            after_close = false;
            i += run;
            continue;
        };
        i += run;

        if quoted {
            push_literal(&mut out, name);
            after_close = false;
            continue;
        }

        let opens_next = chars.get(i) == Some(&QUOTE) && chars.get(i + 1) != Some(&QUOTE);
        match (after_close, opens_next) {
            // 'x'EEEE'y' -> 'xNAMEy'
            (true, true) => {
                out.pop();
                push_literal(&mut out, name);
                quoted = true;
                after_close = false;
                i += 1;
            }
            // EEEE'y' -> 'NAMEy'
            (false, true) => {
                out.push(QUOTE);
                push_literal(&mut out, name);
                quoted = true;
                after_close = false;
                i += 1;
            }
            // 'x'EEEE -> 'xNAME'
            (true, false) => {
                out.pop();
                push_literal(&mut out, name);
                out.push(QUOTE);
                after_close = true;
            }
            (false, false) => {
                out.push(QUOTE);
                push_literal(&mut out, name);
                out.push(QUOTE);
                after_close = true;
            }
        }
    }

    out
}

/// Length of the run of identical characters at the start of `chars`.
fn run_length(chars: &[char]) -> usize {
    match chars.first() {
        Some(first) => chars.iter().take_while(|&c| c == first).count(),
        None => 0,
    }
}

/// Appends `text` for use inside a quoted segment.
fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == QUOTE {
            out.push_str(ESCAPED_QUOTE);
        } else {
            out.push(c);
        }
    }
}

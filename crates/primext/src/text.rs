//! String helpers.
//!
//! Blank checks, decimal digit extraction and the Cyrillic/Latin look-alike
//! tables used to compare text typed in either keyboard layout.
//!
//! Every helper is available as a free function and through the [`StrExt`]
//! extension trait on `str`. Helpers that may hand their input back unchanged
//! return a [`Cow`], so the common "nothing to do" path does not allocate.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use unicode_normalization::UnicodeNormalization;

/// Cyrillic letters paired with the Latin letters they render like.
pub const LOOK_ALIKE_PAIRS: [(char, char); 20] = [
    ('а', 'a'),
    ('А', 'A'),
    ('В', 'B'),
    ('с', 'c'),
    ('С', 'C'),
    ('е', 'e'),
    ('Е', 'E'),
    ('Н', 'H'),
    ('к', 'k'),
    ('К', 'K'),
    ('М', 'M'),
    ('о', 'o'),
    ('О', 'O'),
    ('р', 'p'),
    ('Р', 'P'),
    ('Т', 'T'),
    ('х', 'x'),
    ('Х', 'X'),
    ('у', 'y'),
    ('У', 'Y'),
];

static RU_TO_LATIN: Lazy<FxHashMap<char, char>> =
    Lazy::new(|| LOOK_ALIKE_PAIRS.iter().copied().collect());

static LATIN_TO_RU: Lazy<FxHashMap<char, char>> =
    Lazy::new(|| LOOK_ALIKE_PAIRS.iter().map(|&(ru, en)| (en, ru)).collect());

// Unicode-aware: matches every `Nd` code point, not just ASCII.
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Returns true if the value is absent, empty or whitespace only.
#[must_use]
pub fn is_blank<S: AsRef<str>>(value: Option<S>) -> bool {
    value.map_or(true, |s| blank(s.as_ref()))
}

fn blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Unicode case-insensitive equality.
///
/// Characters are compared after upper-casing, so `"НЕТ"` equals `"нет"`.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}

/// Lower-cases the string and capitalizes its first letter.
///
/// Surrounding whitespace is kept. Blank input is returned as is.
pub fn to_lower_with_title_case(s: &str) -> Cow<'_, str> {
    if blank(s) {
        return Cow::Borrowed(s);
    }
    let lower = s.trim().to_lowercase();
    let mut chars = lower.chars();
    let titled: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => return Cow::Borrowed(s),
    };
    Cow::Owned(s.to_lowercase().replacen(&lower, &titled, 1))
}

/// Drops every decimal digit, keeping the other characters in order.
pub fn remove_digits(s: &str) -> Cow<'_, str> {
    if blank(s) {
        return Cow::Borrowed(s);
    }
    DIGIT_RUN.replace_all(s, "")
}

/// Concatenates every decimal digit of `s`, inserting `separator` between
/// consecutive digits.
///
/// Signs are not interpreted: `"а28о-с53р"` yields `"2853"`.
pub fn to_positive_digits<'a>(s: &'a str, separator: &str) -> Cow<'a, str> {
    if blank(s) {
        return Cow::Borrowed(s);
    }
    let mut out = String::new();
    let digits = DIGIT_RUN
        .find_iter(s)
        .flat_map(|run| run.as_str().chars());
    for (idx, digit) in digits.enumerate() {
        if idx > 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    Cow::Owned(out)
}

/// Returns the maximal runs of decimal digits in `s`, left to right.
#[must_use]
pub fn positive_digit_runs(s: &str) -> DigitRuns<'_> {
    DigitRuns {
        haystack: s,
        pos: 0,
    }
}

/// Lazy iterator over the digit runs of a string.
///
/// Clone it before consuming to walk the runs again.
#[derive(Debug, Clone)]
pub struct DigitRuns<'a> {
    haystack: &'a str,
    pos: usize,
}

impl<'a> Iterator for DigitRuns<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.haystack.len() {
            return None;
        }
        let Some(run) = DIGIT_RUN.find_at(self.haystack, self.pos) else {
            self.pos = self.haystack.len();
            return None;
        };
        self.pos = run.end();
        Some(run.as_str())
    }
}

impl std::iter::FusedIterator for DigitRuns<'_> {}

/// Returns true if any character lies outside 7-bit ASCII.
#[must_use]
pub fn has_non_latin_chars(s: &str) -> bool {
    s.chars().any(|ch| u32::from(ch) > 127)
}

/// Replaces Cyrillic look-alikes with the matching Latin letters.
pub fn to_similar_latin_letters(s: &str) -> Cow<'_, str> {
    substitute(s, &RU_TO_LATIN)
}

/// Replaces Latin look-alikes with the matching Cyrillic letters.
pub fn to_similar_ru_letters(s: &str) -> Cow<'_, str> {
    substitute(s, &LATIN_TO_RU)
}

fn substitute<'a>(s: &'a str, table: &FxHashMap<char, char>) -> Cow<'a, str> {
    if !s.chars().any(|ch| table.contains_key(&ch)) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|ch| table.get(&ch).copied().unwrap_or(ch))
            .collect(),
    )
}

/// Returns true if `s` starts with `prefix`, treating Cyrillic and Latin
/// look-alikes as the same letter.
///
/// Both strings are compared in NFC form. Empty input never matches.
#[must_use]
pub fn starts_with_ru_en(s: &str, prefix: &str, ignore_case: bool) -> bool {
    if s.is_empty() || prefix.is_empty() || s.chars().count() < prefix.chars().count() {
        return false;
    }
    let mut chars = s.nfc();
    prefix
        .nfc()
        .all(|p| chars.next().is_some_and(|c| look_alike_eq(p, c, ignore_case)))
}

fn look_alike_eq(p: char, c: char, ignore_case: bool) -> bool {
    if chars_eq(p, c, ignore_case) {
        return true;
    }
    if let Some(&latin) = RU_TO_LATIN.get(&p) {
        chars_eq(latin, c, ignore_case)
    } else if let Some(&ru) = LATIN_TO_RU.get(&p) {
        chars_eq(ru, c, ignore_case)
    } else {
        false
    }
}

fn chars_eq(a: char, b: char, ignore_case: bool) -> bool {
    if ignore_case {
        a.to_uppercase().eq(b.to_uppercase())
    } else {
        a == b
    }
}

/// Extension methods for string slices.
pub trait StrExt {
    /// Returns true if the string is empty or whitespace only.
    fn is_blank(&self) -> bool;

    /// See [`to_lower_with_title_case`].
    fn to_lower_with_title_case(&self) -> Cow<'_, str>;

    /// See [`remove_digits`].
    fn remove_digits(&self) -> Cow<'_, str>;

    /// See [`to_positive_digits`].
    fn to_positive_digits(&self, separator: &str) -> Cow<'_, str>;

    /// See [`positive_digit_runs`].
    fn positive_digit_runs(&self) -> DigitRuns<'_>;

    /// See [`has_non_latin_chars`].
    fn has_non_latin_chars(&self) -> bool;

    /// See [`to_similar_latin_letters`].
    fn to_similar_latin_letters(&self) -> Cow<'_, str>;

    /// See [`to_similar_ru_letters`].
    fn to_similar_ru_letters(&self) -> Cow<'_, str>;

    /// See [`starts_with_ru_en`].
    fn starts_with_ru_en(&self, prefix: &str, ignore_case: bool) -> bool;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        blank(self)
    }

    fn to_lower_with_title_case(&self) -> Cow<'_, str> {
        to_lower_with_title_case(self)
    }

    fn remove_digits(&self) -> Cow<'_, str> {
        remove_digits(self)
    }

    fn to_positive_digits(&self, separator: &str) -> Cow<'_, str> {
        to_positive_digits(self, separator)
    }

    fn positive_digit_runs(&self) -> DigitRuns<'_> {
        positive_digit_runs(self)
    }

    fn has_non_latin_chars(&self) -> bool {
        has_non_latin_chars(self)
    }

    fn to_similar_latin_letters(&self) -> Cow<'_, str> {
        to_similar_latin_letters(self)
    }

    fn to_similar_ru_letters(&self) -> Cow<'_, str> {
        to_similar_ru_letters(self)
    }

    fn starts_with_ru_en(&self, prefix: &str, ignore_case: bool) -> bool {
        starts_with_ru_en(self, prefix, ignore_case)
    }
}

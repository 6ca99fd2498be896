//! Letter-run tokenization.
//!
//! A token is a maximal run of characters whose Unicode general category is
//! a letter (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`). Everything else (whitespace,
//! punctuation, digits, letter numbers, combining marks, control characters)
//! separates tokens and is discarded.

use std::iter::FusedIterator;

use unicode_general_category::{get_general_category, GeneralCategory};

/// True when `c` belongs to one of the `L*` general categories.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Split `text` into letter runs, left to right.
///
/// The returned iterator is lazy and borrows `text`; clone it to walk the
/// same sequence again.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Iterator over the letter runs of a string slice.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let Some(start) = self.rest.find(is_letter) else {
            self.rest = "";
            return None;
        };

        let run = &self.rest[start..];
        let end = run.find(|c: char| !is_letter(c)).unwrap_or(run.len());
        let (token, rest) = run.split_at(end);
        self.rest = rest;

        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Each token needs at least one letter and, except the last, one separator.
        let upper = (self.rest.len() + 1) / 2;
        (0, Some(upper))
    }
}

impl FusedIterator for Tokens<'_> {}

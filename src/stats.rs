//! Stat Parsing
//!
//! Turns OMDb's formatted strings into comparable integers.
//! Every parser returns `None` for values it cannot read ("N/A", blanks,
//! garbage) instead of guessing.

use crate::models::{MovieDetail, NOT_AVAILABLE};

/// The compared statistics, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Awards,
    BoxOffice,
    Metascore,
    ImdbRating,
    ImdbVotes,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Awards,
        StatKind::BoxOffice,
        StatKind::Metascore,
        StatKind::ImdbRating,
        StatKind::ImdbVotes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Awards => "Awards",
            StatKind::BoxOffice => "Box Office",
            StatKind::Metascore => "Metascore",
            StatKind::ImdbRating => "IMDB Rating",
            StatKind::ImdbVotes => "IMDB Votes",
        }
    }

    /// The raw, formatted field this stat is read from
    pub fn raw(self, detail: &MovieDetail) -> &str {
        match self {
            StatKind::Awards => &detail.awards,
            StatKind::BoxOffice => &detail.box_office,
            StatKind::Metascore => &detail.metascore,
            StatKind::ImdbRating => &detail.imdb_rating,
            StatKind::ImdbVotes => &detail.imdb_votes,
        }
    }

    pub fn parse(self, raw: &str) -> Option<u64> {
        match self {
            StatKind::Awards => parse_awards(raw),
            StatKind::BoxOffice => parse_box_office(raw),
            StatKind::Metascore => parse_metascore(raw),
            StatKind::ImdbRating => parse_imdb_rating(raw),
            StatKind::ImdbVotes => parse_imdb_votes(raw),
        }
    }
}

/// Parsed stats of one movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovieStats {
    pub awards: Option<u64>,
    pub box_office: Option<u64>,
    pub metascore: Option<u64>,
    pub imdb_rating: Option<u64>,
    pub imdb_votes: Option<u64>,
}

impl MovieStats {
    pub fn from_detail(detail: &MovieDetail) -> Self {
        let read = |kind: StatKind| kind.parse(kind.raw(detail));
        Self {
            awards: read(StatKind::Awards),
            box_office: read(StatKind::BoxOffice),
            metascore: read(StatKind::Metascore),
            imdb_rating: read(StatKind::ImdbRating),
            imdb_votes: read(StatKind::ImdbVotes),
        }
    }

    pub fn get(&self, kind: StatKind) -> Option<u64> {
        match kind {
            StatKind::Awards => self.awards,
            StatKind::BoxOffice => self.box_office,
            StatKind::Metascore => self.metascore,
            StatKind::ImdbRating => self.imdb_rating,
            StatKind::ImdbVotes => self.imdb_votes,
        }
    }
}

fn is_missing(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw.eq_ignore_ascii_case(NOT_AVAILABLE)
}

/// Digits only, ignoring grouping commas
fn parse_grouped(raw: &str) -> Option<u64> {
    let digits: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// "$1,234,567" -> 1234567
pub fn parse_box_office(raw: &str) -> Option<u64> {
    if is_missing(raw) {
        return None;
    }
    let raw = raw.trim();
    parse_grouped(raw.strip_prefix('$').unwrap_or(raw))
}

/// "74" -> 74
pub fn parse_metascore(raw: &str) -> Option<u64> {
    if is_missing(raw) {
        return None;
    }
    raw.trim().parse().ok()
}

/// "8.2" -> 82, "9" -> 90 (tenths of a point)
pub fn parse_imdb_rating(raw: &str) -> Option<u64> {
    if is_missing(raw) {
        return None;
    }
    let (whole, fraction) = match raw.trim().split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (raw.trim(), "0"),
    };
    if fraction.len() != 1 {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;
    let tenth: u64 = fraction.parse().ok()?;
    whole.checked_mul(10)?.checked_add(tenth)
}

/// "1,234,567" -> 1234567
pub fn parse_imdb_votes(raw: &str) -> Option<u64> {
    if is_missing(raw) {
        return None;
    }
    parse_grouped(raw)
}

/// Sum of every number in the awards text
///
/// Each word contributes the run of digits it starts with, so "Won 2
/// Oscars. 10 wins & 5 nominations." sums to 17. A number or total that
/// does not fit in a `u64` makes the whole value unreadable.
pub fn parse_awards(raw: &str) -> Option<u64> {
    if is_missing(raw) {
        return None;
    }
    raw.split_whitespace()
        .filter_map(|word| {
            let digits: String = word.chars().take_while(|c| c.is_ascii_digit()).collect();
            (!digits.is_empty()).then_some(digits)
        })
        .try_fold(0u64, |total, digits| total.checked_add(digits.parse().ok()?))
}

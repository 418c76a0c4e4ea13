//! Calendar-day tokens and day sets.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

/// A calendar day, identified by its schedule-string token.
///
/// `T` (Tuesday) and `Th` (Thursday) are distinct tokens despite sharing
/// a textual prefix; the same holds for `S` (Saturday) and `Su` (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in fixed Monday-first order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// The schedule-string token for this day.
    pub fn token(self) -> &'static str {
        match self {
            Day::Mon => "M",
            Day::Tue => "T",
            Day::Wed => "W",
            Day::Thu => "Th",
            Day::Fri => "F",
            Day::Sat => "S",
            Day::Sun => "Su",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A small copyable set of [`Day`]s.
///
/// Iteration order is fixed (Monday first) regardless of insertion order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    /// The empty set.
    pub const EMPTY: DaySet = DaySet(0);

    /// Adds a day to the set.
    pub fn insert(&mut self, day: Day) {
        self.0 |= day.bit();
    }

    /// Whether the set contains `day`.
    pub fn contains(self, day: Day) -> bool {
        self.0 & day.bit() != 0
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of days in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the two sets share at least one day.
    pub fn intersects(self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterates the days in fixed Monday-first order.
    pub fn iter(self) -> impl Iterator<Item = Day> {
        Day::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Day> for DaySet {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        let mut set = DaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DaySet(")?;
        for day in self.iter() {
            f.write_str(day.token())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            f.write_str(day.token())?;
        }
        Ok(())
    }
}

impl Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for day in self.iter() {
            seq.serialize_element(day.token())?;
        }
        seq.end()
    }
}

/// Scans a day-token run (e.g. `"MWF"`, `"TTh"`).
///
/// Tokens are consumed greedily left to right: a `T` immediately followed
/// by `h` forms `Th`, and an `S` immediately followed by `u` forms `Su`.
/// Returns `None` on any unknown character or an empty run.
pub(crate) fn scan_day_run(text: &str) -> Option<DaySet> {
    let chars: Vec<char> = text.chars().collect();
    let mut days = DaySet::EMPTY;
    let mut i = 0;
    while i < chars.len() {
        let day = match chars[i] {
            'M' => Day::Mon,
            'T' if chars.get(i + 1) == Some(&'h') => {
                i += 1;
                Day::Thu
            }
            'T' => Day::Tue,
            'W' => Day::Wed,
            'F' => Day::Fri,
            'S' if chars.get(i + 1) == Some(&'u') => {
                i += 1;
                Day::Sun
            }
            'S' => Day::Sat,
            _ => return None,
        };
        days.insert(day);
        i += 1;
    }
    if days.is_empty() {
        None
    } else {
        Some(days)
    }
}

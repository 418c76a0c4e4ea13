//! Scalar eligibility of a single section.

use crate::model::{Constraints, Section};

/// Whether a section satisfies the scalar constraints on its own.
///
/// Rejects sections whose schedule text did not parse, sections outside
/// the `[earliest_start, latest_end]` window, full sections when
/// `allow_full` is off, and at-risk sections when `allow_at_risk` is off.
/// Pure predicate with no side effects.
pub fn is_viable(section: &Section, constraints: &Constraints) -> bool {
    let Some(slot) = section.slot else {
        return false;
    };

    if slot.start_minute < constraints.earliest_start.minutes()
        || slot.end_minute > constraints.latest_end.minutes()
    {
        return false;
    }

    if !constraints.allow_full && section.is_full() {
        return false;
    }

    if !constraints.allow_at_risk && section.is_at_risk() {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_section(schedule: &str) -> Section {
        Section::new(1, schedule, "15/30", "open")
    }

    #[test]
    fn test_unparseable_is_never_viable() {
        let s = Section::new(1, "TBA", "15/30", "open");
        assert!(!is_viable(&s, &Constraints::default()));
    }

    #[test]
    fn test_time_window() {
        let c = Constraints::default(); // 08:00 - 18:00

        assert!(is_viable(&open_section("MW 08:00 AM - 09:00 AM"), &c));
        assert!(is_viable(&open_section("MW 05:00 PM - 06:00 PM"), &c));
        // Starts before the window opens.
        assert!(!is_viable(&open_section("MW 07:30 AM - 09:00 AM"), &c));
        // Ends after the window closes.
        assert!(!is_viable(&open_section("MW 05:30 PM - 06:30 PM"), &c));
    }

    #[test]
    fn test_full_policy() {
        let full = Section::new(1, "MW 10:00 AM - 11:30 AM", "30/30", "full");

        assert!(!is_viable(&full, &Constraints::default()));
        assert!(is_viable(&full, &Constraints::default().with_allow_full(true)));
    }

    #[test]
    fn test_at_risk_policy() {
        let at_risk = Section::new(1, "MW 10:00 AM - 11:30 AM", "0/30", "at-risk");

        assert!(is_viable(&at_risk, &Constraints::default()));
        assert!(!is_viable(
            &at_risk,
            &Constraints::default().with_allow_at_risk(false)
        ));
    }
}

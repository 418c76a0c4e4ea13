//! Pairwise day/time conflict detection.

use crate::model::Section;

/// Whether two sections overlap in time on at least one shared day.
///
/// `false` when either slot is missing — unparseable sections are inert,
/// never conflicting (they are also excluded by viability before the
/// search ever compares them). Overlap is half-open: a section ending at
/// the exact minute another starts does not conflict with it.
pub fn has_conflict(a: &Section, b: &Section) -> bool {
    let (Some(sa), Some(sb)) = (a.slot, b.slot) else {
        return false;
    };

    if !sa.days.intersects(sb.days) {
        return false;
    }

    sa.start_minute < sb.end_minute && sb.start_minute < sa.end_minute
}

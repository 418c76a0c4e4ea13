//! Random instance generator.

use crate::model::Section;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A generated instance: named courses, each with its candidate sections,
/// in generation order.
pub type ProblemInstance = Vec<(String, Vec<Section>)>;

const DAY_PATTERNS: [&str; 5] = ["MW", "TTh", "MWF", "T", "Th"];
const SEATS: u32 = 30;

/// Number of courses in a generated instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemSize {
    /// 5 courses.
    Small,
    /// 20 courses.
    Medium,
    /// 50 courses.
    Large,
}

impl ProblemSize {
    /// Course count for this size.
    pub fn course_count(self) -> usize {
        match self {
            ProblemSize::Small => 5,
            ProblemSize::Medium => 20,
            ProblemSize::Large => 50,
        }
    }

    fn key(self) -> &'static str {
        match self {
            ProblemSize::Small => "small",
            ProblemSize::Medium => "medium",
            ProblemSize::Large => "large",
        }
    }
}

/// How many section options each course offers.
///
/// Fewer options means a more constrained, harder-to-satisfy instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tightness {
    /// 3 to 5 sections per course.
    Loose,
    /// Exactly 2 sections per course.
    Tight,
    /// 2 to 4 sections per course.
    Mixed,
}

impl Tightness {
    fn section_count<R: Rng>(self, rng: &mut R) -> usize {
        match self {
            Tightness::Loose => rng.random_range(3..=5),
            Tightness::Tight => 2,
            Tightness::Mixed => rng.random_range(2..=4),
        }
    }

    fn key(self) -> &'static str {
        match self {
            Tightness::Loose => "loose",
            Tightness::Tight => "tight",
            Tightness::Mixed => "mixed",
        }
    }
}

/// Generates one synthetic instance.
///
/// Courses are named `COURSE_001..`; each section meets for one hour
/// starting on the hour between 08:00 and 15:00 on a random day pattern,
/// with random enrollment out of 30 seats.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use timetabler::datagen::{generate_problem, ProblemSize, Tightness};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let problem = generate_problem(ProblemSize::Small, Tightness::Loose, &mut rng);
/// assert_eq!(problem.len(), 5);
/// ```
pub fn generate_problem<R: Rng>(
    size: ProblemSize,
    tightness: Tightness,
    rng: &mut R,
) -> ProblemInstance {
    let mut problem = Vec::with_capacity(size.course_count());

    for course in 1..=size.course_count() {
        let name = format!("COURSE_{course:03}");
        let count = tightness.section_count(rng);
        let mut sections = Vec::with_capacity(count);

        for group in 1..=count {
            let pattern = DAY_PATTERNS[rng.random_range(0..DAY_PATTERNS.len())];
            let start_hour: u16 = rng.random_range(8..=15);
            let schedule = format!(
                "{pattern} {} - {}",
                twelve_hour(start_hour * 60),
                twelve_hour((start_hour + 1) * 60)
            );

            let current = rng.random_range(0..=SEATS);
            let status = if current == SEATS { "full" } else { "open" };

            sections.push(Section::new(
                group as u32,
                schedule,
                format!("{current}/{SEATS}"),
                status,
            ));
        }

        problem.push((name, sections));
    }

    problem
}

/// Generates one instance per `(size, tightness)` config, keyed
/// `size_tightness`, with per-instance seeds derived from `seed`.
pub fn generate_batch(
    configs: &[(ProblemSize, Tightness)],
    seed: u64,
) -> Vec<(String, ProblemInstance)> {
    configs
        .iter()
        .enumerate()
        .map(|(i, &(size, tightness))| {
            let mut rng = StdRng::seed_from_u64(seed + i as u64);
            let key = format!("{}_{}", size.key(), tightness.key());
            (key, generate_problem(size, tightness, &mut rng))
        })
        .collect()
}

/// Strips course names, leaving the per-course candidate lists the search
/// engine consumes.
pub fn course_lists(problem: &ProblemInstance) -> Vec<Vec<Section>> {
    problem.iter().map(|(_, sections)| sections.clone()).collect()
}

/// Renders minutes-from-midnight as 12-hour clock text, e.g. `"01:00 PM"`.
fn twelve_hour(minute: u16) -> String {
    let (h, m) = (minute / 60, minute % 60);
    let (display, meridiem) = match h {
        0 => (12, "AM"),
        12 => (12, "PM"),
        h if h < 12 => (h, "AM"),
        h => (h - 12, "PM"),
    };
    format!("{display:02}:{m:02} {meridiem}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_time_slot;

    #[test]
    fn test_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            generate_problem(ProblemSize::Small, Tightness::Loose, &mut rng).len(),
            5
        );
        assert_eq!(
            generate_problem(ProblemSize::Medium, Tightness::Tight, &mut rng).len(),
            20
        );
        assert_eq!(
            generate_problem(ProblemSize::Large, Tightness::Mixed, &mut rng).len(),
            50
        );
    }

    #[test]
    fn test_tightness_section_counts() {
        let mut rng = StdRng::seed_from_u64(11);
        let tight = generate_problem(ProblemSize::Medium, Tightness::Tight, &mut rng);
        assert!(tight.iter().all(|(_, s)| s.len() == 2));

        let loose = generate_problem(ProblemSize::Medium, Tightness::Loose, &mut rng);
        assert!(loose.iter().all(|(_, s)| (3..=5).contains(&s.len())));
    }

    #[test]
    fn test_every_generated_schedule_parses() {
        let mut rng = StdRng::seed_from_u64(13);
        let problem = generate_problem(ProblemSize::Large, Tightness::Loose, &mut rng);
        for (_, sections) in &problem {
            for section in sections {
                assert!(
                    parse_time_slot(&section.schedule).is_some(),
                    "unparseable: {}",
                    section.schedule
                );
                assert_eq!(section.slot.unwrap().end_minute - section.slot.unwrap().start_minute, 60);
            }
        }
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = generate_problem(ProblemSize::Small, Tightness::Mixed, &mut rng_a);
        let b = generate_problem(ProblemSize::Small, Tightness::Mixed, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_batch_keys_and_determinism() {
        let configs = [
            (ProblemSize::Small, Tightness::Loose),
            (ProblemSize::Medium, Tightness::Tight),
        ];
        let batch = generate_batch(&configs, 99);
        assert_eq!(batch[0].0, "small_loose");
        assert_eq!(batch[1].0, "medium_tight");

        let again = generate_batch(&configs, 99);
        assert_eq!(batch, again);
    }

    #[test]
    fn test_twelve_hour_rendering() {
        assert_eq!(twelve_hour(8 * 60), "08:00 AM");
        assert_eq!(twelve_hour(12 * 60), "12:00 PM");
        assert_eq!(twelve_hour(13 * 60), "01:00 PM");
        assert_eq!(twelve_hour(16 * 60), "04:00 PM");
    }
}

//! Depth-first backtracking over courses.

use super::stats::SearchStats;
use super::trace::{PruneReason, TraceEvent, TraceLog};
use crate::model::{Constraints, Section, Timetable};
use crate::rules::{has_conflict, is_viable};
use std::time::Instant;
use tracing::debug;

/// Everything one search invocation produces: the accepted timetables and
/// the statistics describing how the search got there.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Accepted combinations, in discovery order, at most
    /// `max_schedules` of them.
    pub timetables: Vec<Timetable>,
    /// Counters and timing for this run.
    pub stats: SearchStats,
}

/// Executes the backtracking search.
///
/// One invocation runs to completion (or to the `max_schedules` cap) on
/// the calling thread. Each invocation owns its selection stack, result
/// list, and counters exclusively; the read-only inputs are the only
/// thing shared with the caller, so independent invocations may run in
/// parallel without synchronization. There is no internal timeout or
/// cancellation — bounding run time is the caller's responsibility via
/// `max_schedules` and problem sizing.
///
/// # Examples
///
/// ```
/// use timetabler::model::{Constraints, Section};
/// use timetabler::search::SearchRunner;
///
/// let math = vec![Section::new(101, "MW 09:00 AM - 10:30 AM", "15/30", "open")];
/// let cs = vec![Section::new(201, "TTh 09:00 AM - 10:30 AM", "15/30", "open")];
///
/// let outcome = SearchRunner::run(&[math, cs], &Constraints::default());
/// assert_eq!(outcome.timetables.len(), 1);
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search without tracing.
    pub fn run(course_sections: &[Vec<Section>], constraints: &Constraints) -> SearchOutcome {
        let mut trace = TraceLog::disabled();
        Self::run_traced(course_sections, constraints, &mut trace)
    }

    /// Runs the search, recording decision events into `trace`.
    ///
    /// The trace observes the run without altering outcomes: results and
    /// statistics are identical whether or not the log is enabled.
    pub fn run_traced(
        course_sections: &[Vec<Section>],
        constraints: &Constraints,
        trace: &mut TraceLog,
    ) -> SearchOutcome {
        let started = Instant::now();
        let mut stats = SearchStats::default();

        debug!(courses = course_sections.len(), "starting backtracking search");

        // Pre-filter pass: one course with zero viable options makes
        // exhaustive search pointless.
        let mut viable_lists: Vec<Vec<Section>> = Vec::with_capacity(course_sections.len());
        for (course, sections) in course_sections.iter().enumerate() {
            let mut viable = Vec::with_capacity(sections.len());
            for section in sections {
                if is_viable(section, constraints) {
                    viable.push(section.clone());
                } else {
                    stats.pruned_by_viability += 1;
                    let group = section.group;
                    trace.record(|| TraceEvent::Prune {
                        reason: PruneReason::Viability,
                        detail: format!("course {course}: group {group}"),
                    });
                }
            }
            if viable.is_empty() {
                debug!(course, "course has no viable sections, problem infeasible");
                stats.elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                return SearchOutcome {
                    timetables: Vec::new(),
                    stats,
                };
            }
            viable_lists.push(viable);
        }

        let mut search = Search {
            viable: &viable_lists,
            constraints,
            stats,
            trace,
            timetables: Vec::new(),
            selection: Vec::new(),
        };
        search.descend(0);

        let Search {
            mut stats,
            timetables,
            ..
        } = search;
        stats.elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        debug!(
            valid = stats.valid_schedules,
            nodes = stats.nodes_explored,
            pruned = stats.total_pruned(),
            "search complete"
        );

        SearchOutcome { timetables, stats }
    }
}

/// Per-invocation search state: the current partial selection plus the
/// accumulating results and counters. Nothing here outlives the run.
struct Search<'a> {
    viable: &'a [Vec<Section>],
    constraints: &'a Constraints,
    stats: SearchStats,
    trace: &'a mut TraceLog,
    timetables: Vec<Timetable>,
    selection: Vec<Section>,
}

impl<'a> Search<'a> {
    /// One recursion frame: assigns course `depth` and descends.
    ///
    /// Candidates are attempted in input order exactly once per frame.
    /// The full-section cap is checked only at completed leaves, never
    /// mid-search; an early prune would change observable node counts.
    fn descend(&mut self, depth: usize) {
        self.stats.nodes_explored += 1;

        // Global early termination: the cap bounds the output, not the
        // correctness of what was already collected.
        if self.timetables.len() >= self.constraints.max_schedules {
            return;
        }

        if depth == self.viable.len() {
            let full_count = self.selection.iter().filter(|s| s.is_full()).count();
            if full_count <= self.constraints.max_full_per_schedule {
                self.timetables
                    .push(Timetable::assemble(self.selection.clone(), self.constraints));
                self.stats.valid_schedules += 1;
                let index = self.timetables.len();
                self.trace.record(|| TraceEvent::Valid { index });
            } else {
                self.stats.pruned_by_full_limit += 1;
                let cap = self.constraints.max_full_per_schedule;
                self.trace.record(|| TraceEvent::Prune {
                    reason: PruneReason::FullLimit,
                    detail: format!("{full_count} full sections exceed cap {cap}"),
                });
            }
            return;
        }

        let viable: &'a [Vec<Section>] = self.viable;
        for candidate in &viable[depth] {
            self.trace.record(|| TraceEvent::Try {
                course: depth,
                group: candidate.group,
                schedule: candidate.schedule.clone(),
            });

            let conflict = self
                .selection
                .iter()
                .any(|chosen| has_conflict(candidate, chosen));

            if conflict {
                self.stats.pruned_by_conflict += 1;
                self.trace.record(|| TraceEvent::Prune {
                    reason: PruneReason::Conflict,
                    detail: format!("course {depth}: group {}", candidate.group),
                });
            } else {
                self.selection.push(candidate.clone());
                self.descend(depth + 1);
                self.selection.pop();
            }
        }

        self.trace.record(|| TraceEvent::Backtrack { depth });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{has_conflict, is_viable};

    fn open(group: u32, schedule: &str) -> Section {
        Section::new(group, schedule, "15/30", "open")
    }

    fn permissive() -> Constraints {
        Constraints::default().with_allow_full(true).with_max_full_per_schedule(10)
    }

    #[test]
    fn test_conflicting_singletons_yield_nothing() {
        let math = vec![open(1, "MW 09:00 AM - 10:30 AM")];
        let phys = vec![open(2, "MW 10:00 AM - 11:30 AM")];

        let outcome = SearchRunner::run(&[math, phys], &permissive());

        assert!(outcome.timetables.is_empty());
        assert!(outcome.stats.pruned_by_conflict >= 1);
        assert_eq!(outcome.stats.valid_schedules, 0);
    }

    #[test]
    fn test_compatible_singletons_yield_one() {
        let math = vec![open(1, "MW 09:00 AM - 10:30 AM")];
        let cs = vec![open(3, "TTh 09:00 AM - 10:30 AM")];

        let outcome = SearchRunner::run(&[math, cs], &permissive());

        assert_eq!(outcome.timetables.len(), 1);
        assert_eq!(outcome.stats.valid_schedules, 1);
        assert_eq!(outcome.stats.pruned_by_conflict, 0);
        let t = &outcome.timetables[0];
        assert_eq!(t.selections[0].group, 1);
        assert_eq!(t.selections[1].group, 3);
    }

    #[test]
    fn test_course_with_no_viable_sections_short_circuits() {
        let math = vec![open(1, "MW 09:00 AM - 10:30 AM")];
        let unparseable = vec![Section::new(2, "TBA", "15/30", "open")];

        let outcome = SearchRunner::run(&[math, unparseable], &permissive());

        assert!(outcome.timetables.is_empty());
        assert_eq!(outcome.stats.pruned_by_viability, 1);
        // Infeasibility is detected before any combination is explored.
        assert_eq!(outcome.stats.nodes_explored, 0);
    }

    #[test]
    fn test_max_schedules_cap_is_exact() {
        // Three disjoint hour slots per course: all 9 combinations are valid.
        let a = vec![
            open(1, "M 08:00 AM - 09:00 AM"),
            open(2, "M 09:00 AM - 10:00 AM"),
            open(3, "M 10:00 AM - 11:00 AM"),
        ];
        let b = vec![
            open(4, "T 08:00 AM - 09:00 AM"),
            open(5, "T 09:00 AM - 10:00 AM"),
            open(6, "T 10:00 AM - 11:00 AM"),
        ];

        let uncapped = SearchRunner::run(
            &[a.clone(), b.clone()],
            &permissive().with_max_schedules(50),
        );
        assert_eq!(uncapped.timetables.len(), 9);

        let capped = SearchRunner::run(&[a, b], &permissive().with_max_schedules(4));
        assert_eq!(capped.timetables.len(), 4);
        // Early termination explores strictly fewer nodes than exhaustion.
        assert!(capped.stats.nodes_explored < uncapped.stats.nodes_explored);
    }

    #[test]
    fn test_zero_max_schedules_records_nothing() {
        let math = vec![open(1, "MW 09:00 AM - 10:30 AM")];

        let outcome = SearchRunner::run(&[math], &permissive().with_max_schedules(0));

        assert!(outcome.timetables.is_empty());
        assert_eq!(outcome.stats.valid_schedules, 0);
    }

    #[test]
    fn test_full_limit_checked_at_leaves_only() {
        let full = vec![Section::new(1, "M 09:00 AM - 10:00 AM", "30/30", "full")];
        let also_full = vec![Section::new(2, "T 09:00 AM - 10:00 AM", "30/30", "full")];

        let constraints = Constraints::default()
            .with_allow_full(true)
            .with_max_full_per_schedule(1);
        let outcome = SearchRunner::run(&[full, also_full], &constraints);

        assert!(outcome.timetables.is_empty());
        assert_eq!(outcome.stats.pruned_by_full_limit, 1);
        // The partial selection already exceeded the cap at depth 1, but
        // the check happens at the leaf: the full tree is still walked.
        assert_eq!(outcome.stats.nodes_explored, 3);
    }

    #[test]
    fn test_empty_course_list_yields_empty_timetable() {
        let outcome = SearchRunner::run(&[], &permissive());
        assert_eq!(outcome.timetables.len(), 1);
        assert!(outcome.timetables[0].selections.is_empty());
    }

    #[test]
    fn test_idempotence() {
        let a = vec![
            open(1, "MW 08:00 AM - 09:30 AM"),
            open(2, "MW 10:00 AM - 11:30 AM"),
        ];
        let b = vec![
            open(3, "MW 09:00 AM - 10:30 AM"),
            open(4, "TTh 09:00 AM - 10:30 AM"),
        ];
        let c = permissive();

        let first = SearchRunner::run(&[a.clone(), b.clone()], &c);
        let second = SearchRunner::run(&[a, b], &c);

        assert_eq!(first.timetables, second.timetables);
        assert!(first.stats.counters_eq(&second.stats));
    }

    #[test]
    fn test_accepted_combinations_satisfy_invariants() {
        let courses = vec![
            vec![
                open(1, "MW 08:00 AM - 09:30 AM"),
                open(2, "TTh 08:00 AM - 09:30 AM"),
            ],
            vec![
                open(3, "MW 09:30 AM - 11:00 AM"),
                open(4, "F 01:00 PM - 02:30 PM"),
            ],
            vec![
                open(5, "MW 03:00 PM - 04:30 PM"),
                open(6, "TTh 03:00 PM - 04:30 PM"),
            ],
        ];
        let constraints = permissive();

        let outcome = SearchRunner::run(&courses, &constraints);
        assert!(!outcome.timetables.is_empty());

        for timetable in &outcome.timetables {
            assert_eq!(timetable.selections.len(), courses.len());
            for selection in &timetable.selections {
                assert!(is_viable(selection, &constraints));
            }
            for (i, a) in timetable.selections.iter().enumerate() {
                for b in &timetable.selections[i + 1..] {
                    assert!(!has_conflict(a, b));
                }
            }
        }
    }

    #[test]
    fn test_trace_does_not_alter_outcome() {
        let a = vec![open(1, "MW 09:00 AM - 10:30 AM")];
        let b = vec![
            open(2, "MW 10:00 AM - 11:30 AM"),
            open(3, "TTh 09:00 AM - 10:30 AM"),
        ];
        let c = permissive();

        let silent = SearchRunner::run(&[a.clone(), b.clone()], &c);

        let mut trace = TraceLog::enabled();
        let traced = SearchRunner::run_traced(&[a, b], &c, &mut trace);

        assert_eq!(silent.timetables, traced.timetables);
        assert!(silent.stats.counters_eq(&traced.stats));
        assert!(!trace.events().is_empty());
        assert!(trace.render().contains("[PRUNE] CONFLICT"));
        assert!(trace.render().contains("[VALID] schedule 1 found"));
    }
}

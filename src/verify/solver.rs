//! Built-in first-fit feasibility solver.

use crate::model::Section;
use crate::rules::has_conflict;
use crate::search::SearchOutcome;
use std::time::Instant;
use tracing::debug;

/// Status of a feasibility solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// Feasible (but not necessarily optimal) solution found.
    Feasible,
    /// No feasible assignment exists.
    Infeasible,
    /// No verdict (budget exhausted or solver gave up).
    Unknown,
}

/// Resource limits for a verification run.
#[derive(Debug, Clone)]
pub struct SolverLimits {
    /// Time budget in milliseconds. A zero budget times out immediately.
    pub time_limit_ms: u64,
}

impl Default for SolverLimits {
    fn default() -> Self {
        SolverLimits {
            time_limit_ms: 10_000,
        }
    }
}

/// Result of one verification run.
#[derive(Debug, Clone)]
pub struct Verification {
    /// Whether a feasible assignment was found.
    pub feasible: bool,
    /// The assignment, one `(course, section)` pair per course in input
    /// order; empty when infeasible or unknown.
    pub selection: Vec<(String, Section)>,
    /// Solver verdict.
    pub status: SolverStatus,
    /// Wall-clock duration in milliseconds.
    pub runtime_ms: f64,
    /// Whether the solution is proven optimal.
    pub optimal: bool,
}

/// Interface for feasibility solver implementations.
///
/// Implementors may wrap external exact solvers; results are comparable
/// against the backtracking engine purely through the shared conflict
/// semantics of [`has_conflict`].
pub trait FeasibilitySolver {
    /// Finds one conflict-free assignment of a section to every course,
    /// or proves that none exists.
    fn solve(&self, problem: &[(String, Vec<Section>)], limits: &SolverLimits) -> Verification;
}

/// First-feasible depth-first solver.
///
/// Picks sections course by course, backtracking on conflict, and stops
/// at the first complete assignment. An instance containing any
/// unparseable section is reported infeasible outright. No scalar
/// constraints are applied — this checks conflict feasibility only.
pub struct FirstFitSolver;

enum Dfs {
    Found,
    Exhausted,
    TimedOut,
}

impl FeasibilitySolver for FirstFitSolver {
    fn solve(&self, problem: &[(String, Vec<Section>)], limits: &SolverLimits) -> Verification {
        let started = Instant::now();

        let any_unparseable = problem
            .iter()
            .any(|(_, sections)| sections.iter().any(|s| s.slot.is_none()));
        if any_unparseable {
            debug!("instance contains unparseable sections, reporting infeasible");
            return Verification {
                feasible: false,
                selection: Vec::new(),
                status: SolverStatus::Infeasible,
                runtime_ms: started.elapsed().as_secs_f64() * 1000.0,
                optimal: false,
            };
        }

        let mut chosen: Vec<&Section> = Vec::with_capacity(problem.len());
        let outcome = Self::dfs(problem, 0, &mut chosen, started, limits);
        let runtime_ms = started.elapsed().as_secs_f64() * 1000.0;

        match outcome {
            Dfs::Found => Verification {
                feasible: true,
                selection: problem
                    .iter()
                    .zip(chosen.iter().copied())
                    .map(|((name, _), section)| (name.clone(), section.clone()))
                    .collect(),
                status: SolverStatus::Feasible,
                runtime_ms,
                optimal: false,
            },
            Dfs::Exhausted => Verification {
                feasible: false,
                selection: Vec::new(),
                status: SolverStatus::Infeasible,
                runtime_ms,
                optimal: false,
            },
            Dfs::TimedOut => Verification {
                feasible: false,
                selection: Vec::new(),
                status: SolverStatus::Unknown,
                runtime_ms,
                optimal: false,
            },
        }
    }
}

impl FirstFitSolver {
    fn dfs<'p>(
        problem: &'p [(String, Vec<Section>)],
        depth: usize,
        chosen: &mut Vec<&'p Section>,
        started: Instant,
        limits: &SolverLimits,
    ) -> Dfs {
        if started.elapsed().as_millis() as u64 >= limits.time_limit_ms {
            return Dfs::TimedOut;
        }
        if depth == problem.len() {
            return Dfs::Found;
        }

        for candidate in &problem[depth].1 {
            if chosen.iter().any(|&c| has_conflict(candidate, c)) {
                continue;
            }
            chosen.push(candidate);
            match Self::dfs(problem, depth + 1, chosen, started, limits) {
                Dfs::Found => return Dfs::Found,
                Dfs::TimedOut => return Dfs::TimedOut,
                Dfs::Exhausted => {
                    chosen.pop();
                }
            }
        }

        Dfs::Exhausted
    }
}

/// Whether a search outcome and a verification agree on feasibility.
///
/// An `Unknown` verdict never disagrees. Meaningful only when the search
/// ran under constraints that filter nothing (the verifier applies no
/// scalar constraints) and with a non-zero result cap.
pub fn agrees_with(outcome: &SearchOutcome, verification: &Verification) -> bool {
    match verification.status {
        SolverStatus::Unknown => true,
        _ => verification.feasible == !outcome.timetables.is_empty(),
    }
}

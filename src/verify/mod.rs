//! Exact-solver comparison seam.
//!
//! The backtracking engine can be cross-validated against an independent
//! feasibility solver consuming the same problem shape and the same
//! conflict semantics. [`FeasibilitySolver`] is the plug-in point —
//! implementations may wrap external constraint solvers — and
//! [`FirstFitSolver`] is the built-in reference: a first-feasible
//! depth-first check over `rules::has_conflict`.
//!
//! Verification is conflict-only (one section per course, no overlaps);
//! scalar viability constraints are deliberately outside its scope, so
//! cross-checks against the engine are meaningful under permissive
//! constraints.

mod solver;

pub use solver::{
    agrees_with, FeasibilitySolver, FirstFitSolver, SolverLimits, SolverStatus, Verification,
};

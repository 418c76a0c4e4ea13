//! Synthetic problem instance generation.
//!
//! Produces random timetabling instances at varying sizes and constraint
//! tightness for scalability testing and benchmarking of the backtracking
//! engine against exact solvers. The pseudo-random generator is an
//! explicit parameter threaded through every call — there is no ambient
//! process-wide seed, so reproducibility is entirely in the caller's
//! hands.

mod synthetic;

pub use synthetic::{
    course_lists, generate_batch, generate_problem, ProblemInstance, ProblemSize, Tightness,
};

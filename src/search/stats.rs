//! Execution statistics for one search run.

use serde::Serialize;

/// Monotonically incremented counters owned exclusively by one search run.
///
/// The pruning counters are disjoint by cause, which lets a caller
/// distinguish "no viable sections for some course" from "sections exist
/// but all combinations conflict" from "too many full sections in every
/// valid combination".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// Recursive calls entered during backtracking.
    pub nodes_explored: u64,
    /// Complete combinations accepted.
    pub valid_schedules: u64,
    /// Candidates skipped because they overlap an earlier selection.
    pub pruned_by_conflict: u64,
    /// Sections rejected by the pre-filter pass.
    pub pruned_by_viability: u64,
    /// Complete combinations discarded for exceeding the full-section cap.
    pub pruned_by_full_limit: u64,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: f64,
}

impl SearchStats {
    /// Total prune events across all causes.
    pub fn total_pruned(&self) -> u64 {
        self.pruned_by_conflict + self.pruned_by_viability + self.pruned_by_full_limit
    }

    /// Whether the counter fields (everything except wall-clock time)
    /// match another run's.
    pub fn counters_eq(&self, other: &SearchStats) -> bool {
        self.nodes_explored == other.nodes_explored
            && self.valid_schedules == other.valid_schedules
            && self.pruned_by_conflict == other.pruned_by_conflict
            && self.pruned_by_viability == other.pruned_by_viability
            && self.pruned_by_full_limit == other.pruned_by_full_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pruned() {
        let stats = SearchStats {
            pruned_by_conflict: 3,
            pruned_by_viability: 2,
            pruned_by_full_limit: 1,
            ..SearchStats::default()
        };
        assert_eq!(stats.total_pruned(), 6);
    }

    #[test]
    fn test_counters_eq_ignores_elapsed() {
        let a = SearchStats {
            nodes_explored: 10,
            elapsed_ms: 1.5,
            ..SearchStats::default()
        };
        let b = SearchStats {
            nodes_explored: 10,
            elapsed_ms: 9.0,
            ..SearchStats::default()
        };
        assert!(a.counters_eq(&b));
    }
}

//! The analysis engine: pure, synchronous transformations from raw match
//! telemetry to tier-relative scores and identity tags. No I/O, no shared
//! state; callers may fan invocations out across threads freely.

pub mod benchmarks;
pub mod lens;
pub mod metrics;
pub mod tags;
pub mod zscore;

use crate::api::models::MatchDto;
use self::benchmarks::{BenchmarkSet, Tier};
use self::lens::LensReport;
use self::metrics::AggregatedStats;
use self::tags::Tag;

/// Classify a player's recent games into ranked strength/weakness tags.
/// Returns an empty list when no valid games are found.
pub fn compute_tags_for_player(
    matches: &[MatchDto],
    puuid: &str,
    benchmarks: &BenchmarkSet,
) -> Vec<Tag> {
    let stats = AggregatedStats::from_matches(matches, puuid);
    tags::generate_tags(&stats, benchmarks)
}

/// Build the full lens report for a player against a target tier baseline.
/// Always returns a well-formed report; with no valid games it is the
/// zeroed "Unranked" report.
pub fn compute_lens_report(matches: &[MatchDto], puuid: &str, tier: Tier) -> LensReport {
    let stats = AggregatedStats::from_matches(matches, puuid);
    lens::build_report(&stats, tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_match_list_yields_defined_defaults() {
        let tags = compute_tags_for_player(&[], "any-puuid", &benchmarks::DEFAULT_BENCHMARKS);
        assert!(tags.is_empty());

        let report = compute_lens_report(&[], "any-puuid", Tier::Diamond);
        assert_eq!(report.global_score, 0);
        assert_eq!(report.grade, "Unranked");
        assert!(report.metrics.is_empty());
    }
}

//! Category scorer and report builder.
//!
//! Maps aggregated stats to six bounded 0-100 category scores against a
//! tier baseline, derives a composite score and letter grade, and packages
//! the detailed stat groups for presentation.

use super::benchmarks::Tier;
use super::metrics::AggregatedStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Farming,
    Fighting,
    Vision,
    Aggression,
    Survivability,
    Objectives,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Farming => "Farming",
            Category::Fighting => "Fighting",
            Category::Vision => "Vision",
            Category::Aggression => "Aggression",
            Category::Survivability => "Survivability",
            Category::Objectives => "Objectives",
        }
    }
}

/// One radar axis: the score plus the raw value and baseline behind it.
#[derive(Debug, Clone)]
pub struct CategoryMetric {
    pub category: Category,
    pub score: u32,
    pub value: f64,
    pub baseline: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FightingStats {
    pub kill_participation: f64,
    pub damage_per_minute: f64,
    pub damage_share: f64,
    pub solo_kills_per_game: f64,
    pub multikills_per_game: f64,
    pub first_blood_rate: f64,
    pub kills_per_game: f64,
    pub assists_per_game: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LaningStats {
    pub cs_per_min: f64,
    pub gold_per_min: f64,
    pub plates_per_game: f64,
    pub xp_per_min: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VisionStats {
    pub vision_per_min: f64,
    pub wards_placed_per_game: f64,
    pub wards_destroyed_per_game: f64,
    pub control_wards_per_game: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SurvivabilityStats {
    pub deaths_per_game: f64,
    /// Fraction of games with 3 or fewer deaths.
    pub low_death_rate: f64,
    pub death_share: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectivesStats {
    pub dragon_takedowns_per_game: f64,
    pub objective_damage_per_min: f64,
    pub turret_damage_per_game: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TeamImpactStats {
    pub kill_participation: f64,
    pub cc_seconds_per_game: f64,
    pub damage_share: f64,
    pub assist_ratio: f64,
}

/// Full analysis for one player against one comparison tier.
#[derive(Debug, Clone)]
pub struct LensReport {
    pub global_score: u32,
    /// "S+" down to "D"; "Unranked" when there were no valid games.
    pub grade: &'static str,
    pub metrics: Vec<CategoryMetric>,
    pub fighting: FightingStats,
    pub laning: LaningStats,
    pub vision: VisionStats,
    pub survivability: SurvivabilityStats,
    pub objectives: ObjectivesStats,
    pub team: TeamImpactStats,
}

impl LensReport {
    pub fn empty() -> LensReport {
        LensReport {
            global_score: 0,
            grade: "Unranked",
            metrics: Vec::new(),
            fighting: FightingStats::default(),
            laning: LaningStats::default(),
            vision: VisionStats::default(),
            survivability: SurvivabilityStats::default(),
            objectives: ObjectivesStats::default(),
            team: TeamImpactStats::default(),
        }
    }
}

/// Percentage of baseline, capped at 100.
fn ratio_score(value: f64, baseline: f64) -> f64 {
    (value / baseline * 100.0).min(100.0)
}

fn letter_grade(score: u32) -> &'static str {
    if score >= 90 {
        "S+"
    } else if score >= 80 {
        "S"
    } else if score >= 70 {
        "A"
    } else if score >= 60 {
        "B"
    } else if score >= 50 {
        "C"
    } else {
        "D"
    }
}

/// Build the full report from already-aggregated stats. Pure composition:
/// nothing here re-reads matches or recomputes averages.
pub fn build_report(stats: &AggregatedStats, tier: Tier) -> LensReport {
    if stats.games == 0 {
        return LensReport::empty();
    }

    let baseline = tier.baseline();

    let farming = ratio_score(stats.cs_per_min, baseline.cs);
    let fighting = ratio_score(stats.damage_per_min, baseline.dpm);
    let vision = ratio_score(stats.vision_per_min, baseline.vis);
    let aggression = ratio_score(stats.solo_kills_per_game, baseline.solo);
    // Floor at 0; the formula's own bound keeps it at or below 100.
    let survivability = (100.0 - stats.deaths_per_game * (100.0 / baseline.deaths)).max(0.0);
    let team_impact = ratio_score(stats.kill_participation, baseline.kp);

    let metrics = vec![
        CategoryMetric {
            category: Category::Farming,
            score: farming.round() as u32,
            value: stats.cs_per_min,
            baseline: baseline.cs,
            label: "CS/min",
        },
        CategoryMetric {
            category: Category::Fighting,
            score: fighting.round() as u32,
            value: stats.damage_per_min,
            baseline: baseline.dpm,
            label: "DPM",
        },
        CategoryMetric {
            category: Category::Vision,
            score: vision.round() as u32,
            value: stats.vision_per_min,
            baseline: baseline.vis,
            label: "Vis/min",
        },
        CategoryMetric {
            category: Category::Aggression,
            score: aggression.round() as u32,
            value: stats.solo_kills_per_game,
            baseline: baseline.solo,
            label: "Solo kills",
        },
        CategoryMetric {
            category: Category::Survivability,
            score: survivability.round() as u32,
            value: stats.deaths_per_game,
            baseline: baseline.deaths,
            label: "Deaths/game",
        },
        CategoryMetric {
            category: Category::Objectives,
            score: team_impact.round() as u32,
            value: stats.kill_participation * 100.0,
            baseline: baseline.kp * 100.0,
            label: "KP%",
        },
    ];

    let global_score =
        (metrics.iter().map(|m| m.score).sum::<u32>() as f64 / metrics.len() as f64).round() as u32;

    LensReport {
        global_score,
        grade: letter_grade(global_score),
        metrics,
        fighting: FightingStats {
            kill_participation: stats.kill_participation,
            damage_per_minute: stats.damage_per_min,
            damage_share: stats.damage_share,
            solo_kills_per_game: stats.solo_kills_per_game,
            multikills_per_game: stats.multikills_per_game,
            first_blood_rate: stats.first_blood_rate,
            kills_per_game: stats.kills_per_game,
            assists_per_game: stats.assists_per_game,
        },
        laning: LaningStats {
            cs_per_min: stats.cs_per_min,
            gold_per_min: stats.gold_per_min,
            plates_per_game: stats.plates_per_game,
            xp_per_min: stats.xp_per_min,
        },
        vision: VisionStats {
            vision_per_min: stats.vision_per_min,
            wards_placed_per_game: stats.wards_placed_per_game,
            wards_destroyed_per_game: stats.wards_destroyed_per_game,
            control_wards_per_game: stats.control_wards_per_game,
        },
        survivability: SurvivabilityStats {
            deaths_per_game: stats.deaths_per_game,
            low_death_rate: stats.low_death_rate,
            death_share: stats.death_share,
        },
        objectives: ObjectivesStats {
            dragon_takedowns_per_game: stats.dragon_takedowns_per_game,
            objective_damage_per_min: stats.objective_damage_per_min,
            turret_damage_per_game: stats.turret_damage_per_game,
        },
        team: TeamImpactStats {
            kill_participation: stats.kill_participation,
            cc_seconds_per_game: stats.cc_seconds_per_game,
            damage_share: stats.damage_share,
            assist_ratio: stats.assist_ratio,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_at_emerald_baseline() -> AggregatedStats {
        let b = Tier::Emerald.baseline();
        AggregatedStats {
            games: 5,
            cs_per_min: b.cs,
            damage_per_min: b.dpm,
            vision_per_min: b.vis,
            solo_kills_per_game: b.solo,
            deaths_per_game: 0.0,
            kill_participation: b.kp,
            ..Default::default()
        }
    }

    #[test]
    fn baseline_performance_scores_100_per_category() {
        let report = build_report(&stats_at_emerald_baseline(), Tier::Emerald);
        for metric in &report.metrics {
            assert_eq!(metric.score, 100, "{:?}", metric.category);
        }
        assert_eq!(report.global_score, 100);
        assert_eq!(report.grade, "S+");
    }

    #[test]
    fn single_match_example() {
        // 30 min game, 210 CS, precomputed DPM 1000, vision 1.0/min, KP 0.5,
        // 1 solo kill, 2 deaths -- the worked example from the module docs.
        let stats = AggregatedStats {
            games: 1,
            cs_per_min: 7.0,
            damage_per_min: 1000.0,
            vision_per_min: 1.0,
            kill_participation: 0.5,
            solo_kills_per_game: 1.0,
            deaths_per_game: 2.0,
            ..Default::default()
        };

        let report = build_report(&stats, Tier::Emerald);

        let farming = &report.metrics[0];
        assert_eq!(farming.category, Category::Farming);
        assert_eq!(farming.value, 7.0);
        assert_eq!(farming.score, 100); // exactly at the EMERALD 7.0 baseline

        let fighting = &report.metrics[1];
        assert_eq!(fighting.value, 1000.0);
        assert_eq!(fighting.score, 100); // capped

        let vision = &report.metrics[2];
        assert_eq!(vision.score, 71); // 1.0 / 1.4

        let aggression = &report.metrics[3];
        assert_eq!(aggression.score, 56); // 1.0 / 1.8

        let survivability = &report.metrics[4];
        assert_eq!(survivability.score, 60); // 100 - 2 * 20

        let objectives = &report.metrics[5];
        assert_eq!(objectives.score, 100); // 0.5 / 0.5
        assert_eq!(objectives.value, 50.0);

        // round((100 + 100 + 71 + 56 + 60 + 100) / 6) = 81
        assert_eq!(report.global_score, 81);
        assert_eq!(report.grade, "S");
    }

    #[test]
    fn empty_input_yields_unranked_report() {
        let report = build_report(&AggregatedStats::default(), Tier::Gold);
        assert_eq!(report.global_score, 0);
        assert_eq!(report.grade, "Unranked");
        assert!(report.metrics.is_empty());
        assert_eq!(report.fighting.damage_per_minute, 0.0);
        assert_eq!(report.laning.cs_per_min, 0.0);
        assert_eq!(report.team.assist_ratio, 0.0);
    }

    #[test]
    fn survivability_floors_at_zero() {
        let mut stats = stats_at_emerald_baseline();
        stats.deaths_per_game = 12.0; // far beyond the 5.0 baseline

        let report = build_report(&stats, Tier::Emerald);
        let survivability = &report.metrics[4];
        assert_eq!(survivability.score, 0);
    }

    #[test]
    fn category_scores_cap_at_100() {
        let mut stats = stats_at_emerald_baseline();
        stats.cs_per_min = 20.0;
        stats.damage_per_min = 5000.0;
        stats.kill_participation = 1.0;

        let report = build_report(&stats, Tier::Emerald);
        for metric in &report.metrics {
            assert!(metric.score <= 100);
        }
    }

    #[test]
    fn grade_boundaries_are_inclusive() {
        assert_eq!(letter_grade(90), "S+");
        assert_eq!(letter_grade(89), "S");
        assert_eq!(letter_grade(80), "S");
        assert_eq!(letter_grade(79), "A");
        assert_eq!(letter_grade(70), "A");
        assert_eq!(letter_grade(60), "B");
        assert_eq!(letter_grade(50), "C");
        assert_eq!(letter_grade(49), "D");
        assert_eq!(letter_grade(0), "D");
    }

    #[test]
    fn report_reuses_aggregates_verbatim() {
        let stats = AggregatedStats {
            games: 3,
            damage_share: 0.27,
            multikills_per_game: 0.9,
            gold_per_min: 415.0,
            xp_per_min: 520.0,
            wards_placed_per_game: 11.0,
            death_share: 0.22,
            dragon_takedowns_per_game: 1.2,
            cc_seconds_per_game: 28.0,
            assist_ratio: 0.61,
            ..stats_at_emerald_baseline()
        };

        let report = build_report(&stats, Tier::Emerald);
        assert_eq!(report.fighting.damage_share, 0.27);
        assert_eq!(report.fighting.multikills_per_game, 0.9);
        assert_eq!(report.laning.gold_per_min, 415.0);
        assert_eq!(report.laning.xp_per_min, 520.0);
        assert_eq!(report.vision.wards_placed_per_game, 11.0);
        assert_eq!(report.survivability.death_share, 0.22);
        assert_eq!(report.objectives.dragon_takedowns_per_game, 1.2);
        assert_eq!(report.team.cc_seconds_per_game, 28.0);
        assert_eq!(report.team.assist_ratio, 0.61);
    }
}

//! Identity tag classifier.
//!
//! A fixed rule table maps each tracked metric to a strength label and a
//! weakness label. Two passes over the table: a strict pass, then a relaxed
//! pass that only runs when the strict pass surfaced too few signals, so
//! even a statistically unremarkable player gets a readable profile.

use std::cmp::Ordering;

use super::benchmarks::BenchmarkSet;
use super::metrics::AggregatedStats;
use super::zscore::{z_score, Benchmark};

pub const MAX_TAGS: usize = 8;
const STRICT_THRESHOLD: f64 = 1.2;
const RELAXED_THRESHOLD: f64 = 0.6;
const HIGH_THRESHOLD: f64 = 1.7;
const EXTREME_THRESHOLD: f64 = 2.2;
/// Relaxed pass runs only when the strict pass produced fewer tags than this.
const MIN_TAGS_BEFORE_RELAXING: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Strength,
    Weakness,
}

impl TagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::Strength => "STRENGTH",
            TagKind::Weakness => "WEAKNESS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    High,
    Extreme,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Normal => "NORMAL",
            Severity::High => "HIGH",
            Severity::Extreme => "EXTREME",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagLabel {
    DamageDemon,
    Passive,
    VisionGod,
    VisionBlind,
    FarmMachine,
    FarmDry,
    TeamPlayer,
    SoloCarry,
    Duelist,
    LowImpact,
    StructureDestroyer,
    ObjectiveBlind,
    SafePlayer,
    RiskyPlayer,
}

impl TagLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            TagLabel::DamageDemon => "DAMAGE_DEMON",
            TagLabel::Passive => "PASSIVE",
            TagLabel::VisionGod => "VISION_GOD",
            TagLabel::VisionBlind => "VISION_BLIND",
            TagLabel::FarmMachine => "FARM_MACHINE",
            TagLabel::FarmDry => "FARM_DRY",
            TagLabel::TeamPlayer => "TEAM_PLAYER",
            TagLabel::SoloCarry => "SOLO_CARRY",
            TagLabel::Duelist => "DUELIST",
            TagLabel::LowImpact => "LOW_IMPACT",
            TagLabel::StructureDestroyer => "STRUCTURE_DESTROYER",
            TagLabel::ObjectiveBlind => "OBJECTIVE_BLIND",
            TagLabel::SafePlayer => "SAFE_PLAYER",
            TagLabel::RiskyPlayer => "RISKY_PLAYER",
        }
    }
}

/// One classified strength or weakness.
#[derive(Debug, Clone)]
pub struct Tag {
    pub label: TagLabel,
    pub kind: TagKind,
    pub severity: Severity,
    /// Raw signed z-score of the underlying metric. For inverted metrics
    /// this deliberately keeps the original sign (a SAFE_PLAYER tag carries
    /// a negative score) while thresholding used the inverted value.
    pub score: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagMetric {
    DamagePerMinute,
    VisionPerMinute,
    CsPerMinute,
    KillParticipation,
    SoloKills,
    TurretDamage,
    Deaths,
}

impl TagMetric {
    fn value(self, stats: &AggregatedStats) -> f64 {
        match self {
            TagMetric::DamagePerMinute => stats.damage_per_min,
            TagMetric::VisionPerMinute => stats.vision_per_min,
            TagMetric::CsPerMinute => stats.cs_per_min,
            TagMetric::KillParticipation => stats.kill_participation,
            TagMetric::SoloKills => stats.solo_kills_per_game,
            TagMetric::TurretDamage => stats.turret_damage_per_game,
            TagMetric::Deaths => stats.deaths_per_game,
        }
    }

    fn benchmark(self, set: &BenchmarkSet) -> Benchmark {
        match self {
            TagMetric::DamagePerMinute => set.dpm,
            TagMetric::VisionPerMinute => set.vision_per_min,
            TagMetric::CsPerMinute => set.cs_per_min,
            TagMetric::KillParticipation => set.kill_participation,
            TagMetric::SoloKills => set.solo_kills,
            TagMetric::TurretDamage => set.turret_damage,
            TagMetric::Deaths => set.deaths,
        }
    }
}

struct TagRule {
    metric: TagMetric,
    strength: TagLabel,
    weakness: TagLabel,
    strength_desc: &'static str,
    weakness_desc: &'static str,
    /// Lower is better for this metric; negate the z-score before
    /// thresholding.
    invert: bool,
}

const TAG_RULES: [TagRule; 7] = [
    TagRule {
        metric: TagMetric::DamagePerMinute,
        strength: TagLabel::DamageDemon,
        weakness: TagLabel::Passive,
        strength_desc: "Massive sustained damage output.",
        weakness_desc: "Low impact in fights.",
        invert: false,
    },
    TagRule {
        metric: TagMetric::VisionPerMinute,
        strength: TagLabel::VisionGod,
        weakness: TagLabel::VisionBlind,
        strength_desc: "Total map control.",
        weakness_desc: "Plays with no map vision.",
        invert: false,
    },
    TagRule {
        metric: TagMetric::CsPerMinute,
        strength: TagLabel::FarmMachine,
        weakness: TagLabel::FarmDry,
        strength_desc: "Flawless farming.",
        weakness_desc: "Starved economy.",
        invert: false,
    },
    TagRule {
        metric: TagMetric::KillParticipation,
        strength: TagLabel::TeamPlayer,
        weakness: TagLabel::SoloCarry,
        strength_desc: "Excellent teamfight presence.",
        weakness_desc: "Plays too far from the team.",
        invert: false,
    },
    TagRule {
        metric: TagMetric::SoloKills,
        strength: TagLabel::Duelist,
        weakness: TagLabel::LowImpact,
        strength_desc: "Dominant in 1v1 duels.",
        weakness_desc: "Little individual pressure.",
        invert: false,
    },
    TagRule {
        metric: TagMetric::TurretDamage,
        strength: TagLabel::StructureDestroyer,
        weakness: TagLabel::ObjectiveBlind,
        strength_desc: "Relentless tower demolisher.",
        weakness_desc: "Ignores objectives.",
        invert: false,
    },
    TagRule {
        metric: TagMetric::Deaths,
        strength: TagLabel::SafePlayer,
        weakness: TagLabel::RiskyPlayer,
        strength_desc: "Impeccable positioning.",
        weakness_desc: "Takes too many needless risks.",
        invert: true,
    },
];

fn severity_for(v: f64) -> Severity {
    if v.abs() > EXTREME_THRESHOLD {
        Severity::Extreme
    } else if v.abs() > HIGH_THRESHOLD {
        Severity::High
    } else {
        Severity::Normal
    }
}

/// Classify aggregated stats into at most [`MAX_TAGS`] tags, strongest
/// signal first. A player with zero valid games gets no tags.
pub fn generate_tags(stats: &AggregatedStats, benchmarks: &BenchmarkSet) -> Vec<Tag> {
    if stats.games == 0 {
        return Vec::new();
    }

    let mut tags: Vec<Tag> = Vec::new();

    // First pass: strict thresholds with a severity ladder.
    for rule in &TAG_RULES {
        let z = z_score(rule.metric.value(stats), rule.metric.benchmark(benchmarks));
        let v = if rule.invert { -z } else { z };

        if v > STRICT_THRESHOLD {
            tags.push(Tag {
                label: rule.strength,
                kind: TagKind::Strength,
                severity: severity_for(v),
                score: z,
                description: rule.strength_desc,
            });
        } else if v < -STRICT_THRESHOLD {
            tags.push(Tag {
                label: rule.weakness,
                kind: TagKind::Weakness,
                severity: severity_for(v),
                score: z,
                description: rule.weakness_desc,
            });
        }
    }

    // Second pass: relax the threshold for metrics not yet represented.
    if tags.len() < MIN_TAGS_BEFORE_RELAXING {
        for rule in &TAG_RULES {
            if tags
                .iter()
                .any(|t| t.label == rule.strength || t.label == rule.weakness)
            {
                continue;
            }
            let z = z_score(rule.metric.value(stats), rule.metric.benchmark(benchmarks));
            let v = if rule.invert { -z } else { z };

            if v > RELAXED_THRESHOLD {
                tags.push(Tag {
                    label: rule.strength,
                    kind: TagKind::Strength,
                    severity: Severity::Normal,
                    score: z,
                    description: rule.strength_desc,
                });
            } else if v < -RELAXED_THRESHOLD {
                tags.push(Tag {
                    label: rule.weakness,
                    kind: TagKind::Weakness,
                    severity: Severity::Normal,
                    score: z,
                    description: rule.weakness_desc,
                });
            }
        }
    }

    tags.sort_by(|a, b| {
        b.score
            .abs()
            .partial_cmp(&a.score.abs())
            .unwrap_or(Ordering::Equal)
    });
    tags.truncate(MAX_TAGS);
    tags
}

//! Per-game metric extraction and multi-game aggregation.

use crate::api::models::{ChallengesDto, MatchDto, ParticipantDto};

/// Games shorter than this are remakes and excluded from every aggregate.
pub const MIN_GAME_MINUTES: f64 = 5.0;

/// One player's normalized stat line for a single game.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerGameMetrics {
    pub cs_per_min: f64,
    pub damage_per_min: f64,
    pub vision_per_min: f64,
    pub kill_participation: f64,
    pub damage_share: f64,
    pub death_share: f64,
    pub gold_per_min: f64,
    pub xp_per_min: f64,
    pub solo_kills: f64,
    pub multikills: f64,
    pub plates: f64,
    pub wards_placed: f64,
    pub wards_destroyed: f64,
    pub control_wards: f64,
    pub dragon_takedowns: f64,
    pub objective_damage_per_min: f64,
    pub turret_damage: f64,
    pub cc_seconds: f64,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub first_blood: bool,
}

fn challenge(p: &ParticipantDto, pick: impl Fn(&ChallengesDto) -> Option<f64>) -> Option<f64> {
    p.challenges.as_ref().and_then(pick)
}

impl PerGameMetrics {
    /// Extract one player's stat line from a match. Returns `None` when the
    /// player did not take part in the game (or the record is degenerate
    /// enough to carry no duration); absence is not an error, the caller
    /// simply skips the match.
    ///
    /// Riot's precomputed challenge fields win over raw-field derivations;
    /// team-relative shares divide by `max(1, team total)` so a team with
    /// zero of a stat never divides by zero.
    pub fn extract(record: &MatchDto, puuid: &str) -> Option<PerGameMetrics> {
        let me = record.info.participants.iter().find(|p| p.puuid == puuid)?;

        let minutes = record.info.duration_minutes();
        if minutes <= 0.0 {
            return None;
        }

        let team_kills: f64 = team_total(record, me.team_id, |p| p.kills as f64);
        let team_deaths: f64 = team_total(record, me.team_id, |p| p.deaths as f64);
        let team_damage: f64 = team_total(record, me.team_id, |p| p.total_damage_dealt_to_champions);

        let cs = (me.total_minions_killed + me.neutral_minions_killed) as f64;
        let multikills = challenge(me, |c| c.multikills).unwrap_or_else(|| {
            (me.double_kills + me.triple_kills + me.quadra_kills + me.penta_kills) as f64
        });
        let control_wards = if me.detector_wards_placed > 0 {
            me.detector_wards_placed as f64
        } else {
            me.vision_wards_bought_in_game as f64
        };
        let cc_seconds = if me.total_time_cc_dealt > 0.0 {
            me.total_time_cc_dealt
        } else {
            me.time_ccing_others
        };

        Some(PerGameMetrics {
            cs_per_min: cs / minutes,
            damage_per_min: challenge(me, |c| c.damage_per_minute)
                .unwrap_or(me.total_damage_dealt_to_champions / minutes),
            vision_per_min: challenge(me, |c| c.vision_score_per_minute)
                .unwrap_or(me.vision_score / minutes),
            kill_participation: challenge(me, |c| c.kill_participation)
                .unwrap_or((me.kills + me.assists) as f64 / team_kills),
            damage_share: challenge(me, |c| c.team_damage_percentage)
                .unwrap_or(me.total_damage_dealt_to_champions / team_damage),
            death_share: me.deaths as f64 / team_deaths,
            gold_per_min: challenge(me, |c| c.gold_per_minute)
                .unwrap_or(me.gold_earned / minutes),
            xp_per_min: me.champ_experience / minutes,
            solo_kills: challenge(me, |c| c.solo_kills).unwrap_or(0.0),
            multikills,
            plates: challenge(me, |c| c.turret_plates_taken).unwrap_or(0.0),
            wards_placed: me.wards_placed as f64,
            wards_destroyed: me.wards_killed as f64,
            control_wards,
            dragon_takedowns: challenge(me, |c| c.dragon_takedowns).unwrap_or(0.0),
            objective_damage_per_min: me.damage_dealt_to_objectives / minutes,
            turret_damage: me.damage_dealt_to_turrets,
            cc_seconds,
            kills: me.kills as f64,
            deaths: me.deaths as f64,
            assists: me.assists as f64,
            first_blood: me.first_blood_kill,
        })
    }
}

fn team_total(record: &MatchDto, team_id: i32, field: impl Fn(&ParticipantDto) -> f64) -> f64 {
    record
        .info
        .participants
        .iter()
        .filter(|p| p.team_id == team_id)
        .map(field)
        .sum::<f64>()
        .max(1.0)
}

/// Arithmetic means of [`PerGameMetrics`] over a player's valid games,
/// plus season-level counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregatedStats {
    /// Number of valid games behind every average. Zero means every other
    /// field is zero as well.
    pub games: u32,
    pub cs_per_min: f64,
    pub damage_per_min: f64,
    pub vision_per_min: f64,
    pub kill_participation: f64,
    pub damage_share: f64,
    pub death_share: f64,
    pub gold_per_min: f64,
    pub xp_per_min: f64,
    pub solo_kills_per_game: f64,
    pub multikills_per_game: f64,
    pub first_blood_rate: f64,
    pub plates_per_game: f64,
    pub wards_placed_per_game: f64,
    pub wards_destroyed_per_game: f64,
    pub control_wards_per_game: f64,
    pub dragon_takedowns_per_game: f64,
    pub objective_damage_per_min: f64,
    pub turret_damage_per_game: f64,
    pub cc_seconds_per_game: f64,
    pub kills_per_game: f64,
    pub deaths_per_game: f64,
    pub assists_per_game: f64,
    /// Fraction of games with 3 or fewer deaths.
    pub low_death_rate: f64,
    /// assists / (kills + assists), from season totals.
    pub assist_ratio: f64,
}

impl AggregatedStats {
    /// Fold a list of matches into per-game averages for one player.
    ///
    /// Matches where the player is absent and matches shorter than
    /// [`MIN_GAME_MINUTES`] are skipped. With no valid games the result is
    /// all zeros; the mean is order-invariant, so the input order does not
    /// matter.
    pub fn from_matches(matches: &[MatchDto], puuid: &str) -> AggregatedStats {
        let mut acc = AggregatedStats::default();
        let mut total_kills = 0.0_f64;
        let mut total_assists = 0.0_f64;
        let mut low_death_games = 0_u32;
        let mut first_bloods = 0_u32;

        for record in matches {
            if record.info.duration_minutes() < MIN_GAME_MINUTES {
                continue; // remake
            }
            let game = match PerGameMetrics::extract(record, puuid) {
                Some(g) => g,
                None => continue,
            };

            acc.cs_per_min += game.cs_per_min;
            acc.damage_per_min += game.damage_per_min;
            acc.vision_per_min += game.vision_per_min;
            acc.kill_participation += game.kill_participation;
            acc.damage_share += game.damage_share;
            acc.death_share += game.death_share;
            acc.gold_per_min += game.gold_per_min;
            acc.xp_per_min += game.xp_per_min;
            acc.solo_kills_per_game += game.solo_kills;
            acc.multikills_per_game += game.multikills;
            acc.plates_per_game += game.plates;
            acc.wards_placed_per_game += game.wards_placed;
            acc.wards_destroyed_per_game += game.wards_destroyed;
            acc.control_wards_per_game += game.control_wards;
            acc.dragon_takedowns_per_game += game.dragon_takedowns;
            acc.objective_damage_per_min += game.objective_damage_per_min;
            acc.turret_damage_per_game += game.turret_damage;
            acc.cc_seconds_per_game += game.cc_seconds;
            acc.kills_per_game += game.kills;
            acc.deaths_per_game += game.deaths;
            acc.assists_per_game += game.assists;

            total_kills += game.kills;
            total_assists += game.assists;
            if game.deaths <= 3.0 {
                low_death_games += 1;
            }
            if game.first_blood {
                first_bloods += 1;
            }
            acc.games += 1;
        }

        if acc.games == 0 {
            return AggregatedStats::default();
        }

        let n = acc.games as f64;
        acc.cs_per_min /= n;
        acc.damage_per_min /= n;
        acc.vision_per_min /= n;
        acc.kill_participation /= n;
        acc.damage_share /= n;
        acc.death_share /= n;
        acc.gold_per_min /= n;
        acc.xp_per_min /= n;
        acc.solo_kills_per_game /= n;
        acc.multikills_per_game /= n;
        acc.plates_per_game /= n;
        acc.wards_placed_per_game /= n;
        acc.wards_destroyed_per_game /= n;
        acc.control_wards_per_game /= n;
        acc.dragon_takedowns_per_game /= n;
        acc.objective_damage_per_min /= n;
        acc.turret_damage_per_game /= n;
        acc.cc_seconds_per_game /= n;
        acc.kills_per_game /= n;
        acc.deaths_per_game /= n;
        acc.assists_per_game /= n;
        acc.first_blood_rate = first_bloods as f64 / n;
        acc.low_death_rate = low_death_games as f64 / n;
        acc.assist_ratio = total_assists / (total_kills + total_assists).max(1.0);

        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ME: &str = "player-puuid";

    fn match_from(value: serde_json::Value) -> MatchDto {
        serde_json::from_value(value).unwrap()
    }

    /// 30 minute game: 210 CS, 30000 damage, 5/2/10, precomputed challenges.
    fn full_match() -> MatchDto {
        match_from(json!({
            "info": {
                "gameDuration": 1800,
                "participants": [
                    {
                        "puuid": ME,
                        "teamId": 100,
                        "totalMinionsKilled": 200,
                        "neutralMinionsKilled": 10,
                        "totalDamageDealtToChampions": 30000.0,
                        "visionScore": 30.0,
                        "kills": 5,
                        "deaths": 2,
                        "assists": 10,
                        "goldEarned": 12000.0,
                        "challenges": {
                            "damagePerMinute": 1000.0,
                            "visionScorePerMinute": 1.0,
                            "killParticipation": 0.5,
                            "soloKills": 1.0
                        }
                    },
                    { "teamId": 100, "kills": 5, "deaths": 5, "totalDamageDealtToChampions": 20000.0 },
                    { "teamId": 200 }
                ]
            }
        }))
    }

    /// Same game without the precomputed challenge block.
    fn raw_match() -> MatchDto {
        match_from(json!({
            "info": {
                "gameDuration": 1800,
                "participants": [
                    {
                        "puuid": ME,
                        "teamId": 100,
                        "totalMinionsKilled": 200,
                        "neutralMinionsKilled": 10,
                        "totalDamageDealtToChampions": 30000.0,
                        "visionScore": 30.0,
                        "kills": 5,
                        "deaths": 2,
                        "assists": 10,
                        "goldEarned": 12000.0
                    },
                    { "teamId": 100, "kills": 5, "deaths": 5, "totalDamageDealtToChampions": 20000.0 },
                    { "teamId": 200 }
                ]
            }
        }))
    }

    #[test]
    fn precomputed_fields_used_verbatim() {
        let game = PerGameMetrics::extract(&full_match(), ME).unwrap();
        assert_eq!(game.cs_per_min, 7.0);
        assert_eq!(game.damage_per_min, 1000.0);
        assert_eq!(game.vision_per_min, 1.0);
        assert_eq!(game.kill_participation, 0.5);
        assert_eq!(game.solo_kills, 1.0);
    }

    #[test]
    fn fallback_derivations_when_challenges_missing() {
        let game = PerGameMetrics::extract(&raw_match(), ME).unwrap();
        // 30000 damage / 30 min
        assert_eq!(game.damage_per_min, 1000.0);
        // vision 30 / 30 min
        assert_eq!(game.vision_per_min, 1.0);
        // (5 + 10) / team kills 10
        assert_eq!(game.kill_participation, 1.5);
        // 30000 / (30000 + 20000)
        assert_eq!(game.damage_share, 0.6);
        // 2 / (2 + 5)
        assert!((game.death_share - 2.0 / 7.0).abs() < 1e-12);
        // 12000 gold / 30 min
        assert_eq!(game.gold_per_min, 400.0);
        assert_eq!(game.solo_kills, 0.0);
    }

    #[test]
    fn zeroed_team_totals_do_not_divide_by_zero() {
        let record = match_from(json!({
            "info": {
                "gameDuration": 1800,
                "participants": [
                    { "puuid": ME, "teamId": 100, "assists": 3 },
                    { "teamId": 100 }
                ]
            }
        }));
        let game = PerGameMetrics::extract(&record, ME).unwrap();
        // team recorded zero kills; denominator clamps to 1
        assert_eq!(game.kill_participation, 3.0);
        assert_eq!(game.death_share, 0.0);
        assert!(game.damage_share.is_finite());
    }

    #[test]
    fn absent_player_yields_none() {
        assert!(PerGameMetrics::extract(&full_match(), "someone-else").is_none());
    }

    #[test]
    fn zero_duration_yields_none() {
        let record = match_from(json!({
            "info": { "gameDuration": 0, "participants": [{ "puuid": ME, "teamId": 100 }] }
        }));
        assert!(PerGameMetrics::extract(&record, ME).is_none());
    }

    #[test]
    fn malformed_record_treated_as_absent() {
        // Participants without a puuid deserialize to defaults and never
        // match the target.
        let record = match_from(json!({
            "info": { "gameDuration": 1800, "participants": [{ "teamId": 100 }] }
        }));
        assert!(PerGameMetrics::extract(&record, ME).is_none());
    }

    #[test]
    fn remakes_are_excluded() {
        let mut remake = full_match();
        remake.info.game_duration = 200; // under 5 minutes

        let stats = AggregatedStats::from_matches(&[remake, full_match()], ME);
        assert_eq!(stats.games, 1);
        assert_eq!(stats.cs_per_min, 7.0);
    }

    #[test]
    fn no_valid_games_yields_all_zeros() {
        let stats = AggregatedStats::from_matches(&[full_match()], "someone-else");
        assert_eq!(stats.games, 0);
        assert_eq!(stats.cs_per_min, 0.0);
        assert_eq!(stats.deaths_per_game, 0.0);
        assert_eq!(stats.assist_ratio, 0.0);

        let empty = AggregatedStats::from_matches(&[], ME);
        assert_eq!(empty.games, 0);
    }

    #[test]
    fn aggregation_is_order_invariant() {
        let a = full_match();
        let mut b = raw_match();
        b.info.participants[0].kills = 12;
        b.info.participants[0].deaths = 8;

        let forward = AggregatedStats::from_matches(&[a.clone(), b.clone()], ME);
        let reverse = AggregatedStats::from_matches(&[b, a], ME);

        assert_eq!(forward.games, reverse.games);
        assert_eq!(forward.cs_per_min, reverse.cs_per_min);
        assert_eq!(forward.kills_per_game, reverse.kills_per_game);
        assert_eq!(forward.damage_per_min, reverse.damage_per_min);
        assert_eq!(forward.assist_ratio, reverse.assist_ratio);
    }

    #[test]
    fn counters_and_ratios() {
        let mut a = full_match(); // 2 deaths -> low-death game
        a.info.participants[0].first_blood_kill = true;
        let mut b = raw_match();
        b.info.participants[0].deaths = 9;

        let stats = AggregatedStats::from_matches(&[a, b], ME);
        assert_eq!(stats.games, 2);
        assert_eq!(stats.low_death_rate, 0.5);
        assert_eq!(stats.first_blood_rate, 0.5);
        assert_eq!(stats.deaths_per_game, 5.5);
        // 20 assists over (10 kills + 20 assists)
        assert!((stats.assist_ratio - 20.0 / 30.0).abs() < 1e-12);
    }
}

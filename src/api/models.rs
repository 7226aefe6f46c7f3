use serde::{Deserialize, Serialize};

// Account V1 response
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct SummonerDto {
    pub puuid: String,
    #[serde(default)]
    pub summoner_level: i32,
    #[serde(default)]
    pub profile_icon_id: i32,
}

// League V4 response (entries by PUUID)
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

// Match V5 response. Every field defaults so an incomplete payload
// deserializes to zeros instead of failing; the analysis layer treats such
// records as "target absent" and skips them.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
#[allow(dead_code)]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchInfo {
    /// Game length in seconds.
    pub game_duration: i64,
    pub game_start_timestamp: i64,
    pub participants: Vec<ParticipantDto>,
}

impl MatchInfo {
    pub fn duration_minutes(&self) -> f64 {
        self.game_duration as f64 / 60.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_name: String,
    pub team_id: i32,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub total_damage_dealt_to_champions: f64,
    pub vision_score: f64,
    pub gold_earned: f64,
    pub champ_experience: f64,
    pub wards_placed: u32,
    pub wards_killed: u32,
    pub detector_wards_placed: u32,
    pub vision_wards_bought_in_game: u32,
    pub damage_dealt_to_objectives: f64,
    pub damage_dealt_to_turrets: f64,
    pub total_time_cc_dealt: f64,
    pub time_ccing_others: f64,
    pub first_blood_kill: bool,
    pub double_kills: u32,
    pub triple_kills: u32,
    pub quadra_kills: u32,
    pub penta_kills: u32,
    pub challenges: Option<ChallengesDto>,
}

/// Precomputed per-game stats Riot attaches to modern match payloads.
/// Older matches omit some or all of these; every consumer falls back to a
/// raw-field derivation.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengesDto {
    pub damage_per_minute: Option<f64>,
    pub vision_score_per_minute: Option<f64>,
    pub kill_participation: Option<f64>,
    pub team_damage_percentage: Option<f64>,
    pub gold_per_minute: Option<f64>,
    pub solo_kills: Option<f64>,
    pub multikills: Option<f64>,
    pub turret_plates_taken: Option<f64>,
    pub dragon_takedowns: Option<f64>,
}

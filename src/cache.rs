use crate::api::models::MatchDto;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// One raw match body as fetched from the provider, kept verbatim so the
/// analysis engine can be re-run offline.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedMatch {
    pub id: String,
    pub fetched_at: DateTime<Utc>,
    pub data: MatchDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchCache {
    pub player: String,
    pub region: String,
    pub last_updated: DateTime<Utc>,
    pub matches: Vec<CachedMatch>,
}

impl MatchCache {
    pub fn new(player: &str, region: &str) -> Self {
        MatchCache {
            player: player.to_string(),
            region: region.to_string(),
            last_updated: Utc::now(),
            matches: Vec::new(),
        }
    }

    pub fn cache_path(player: &str) -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".league_lens");

        let _ = fs::create_dir_all(&cache_dir);

        cache_dir.join(format!("{}.json", player.replace('#', "_")))
    }

    pub fn load(player: &str, region: &str) -> Result<Self, AppError> {
        let path = Self::cache_path(player);

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| AppError::JsonError(format!("Failed to parse cache: {}", e))),
            // No cache yet, start empty
            Err(_) => Ok(MatchCache::new(player, region)),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::cache_path(&self.player);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize cache: {}", e)))?;

        fs::write(&path, json)
            .map_err(|e| AppError::JsonError(format!("Failed to write cache: {}", e)))?;

        Ok(())
    }

    /// Ids from `wanted` that are not cached yet, in their original order.
    pub fn missing_ids(&self, wanted: &[String]) -> Vec<String> {
        let cached: HashSet<&str> = self.matches.iter().map(|m| m.id.as_str()).collect();
        wanted
            .iter()
            .filter(|id| !cached.contains(id.as_str()))
            .cloned()
            .collect()
    }

    pub fn add_matches(&mut self, new_matches: Vec<CachedMatch>) {
        let existing: HashSet<String> = self.matches.iter().map(|m| m.id.clone()).collect();

        for new_match in new_matches {
            if !existing.contains(&new_match.id) {
                self.matches.push(new_match);
            }
        }

        // Most recent games first
        self.matches
            .sort_by(|a, b| b.data.info.game_start_timestamp.cmp(&a.data.info.game_start_timestamp));

        self.last_updated = Utc::now();
    }

    /// Cached bodies for `ids`, preserving the requested order. Ids that
    /// never made it into the cache (failed fetches) are skipped.
    pub fn get_matches(&self, ids: &[String]) -> Vec<MatchDto> {
        ids.iter()
            .filter_map(|id| self.matches.iter().find(|m| &m.id == id))
            .map(|m| m.data.clone())
            .collect()
    }
}

mod analysis;
mod api;
mod cache;
mod config;
mod display;
mod error;
mod rate_limit;

use analysis::benchmarks::{Tier, DEFAULT_BENCHMARKS};
use api::client::RiotApiClient;
use cache::{CachedMatch, MatchCache};
use clap::Parser;
use config::Config;
use display::output::{
    display_error, display_info, display_lens_report, display_match_summary, display_success,
    display_tags,
};
use error::AppError;
use indicatif::ProgressBar;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "League Lens")]
#[command(about = "Analyze recent ranked games into tier-relative scores and identity tags", long_about = None)]
struct Args {
    /// Riot Game Name
    game_name: String,

    /// Riot Tag (tag line)
    tag_line: String,

    /// Region (default: na1)
    #[arg(short, long)]
    region: Option<String>,

    /// Comparison tier, IRON..CHALLENGER (default: the player's own ranked
    /// tier, EMERALD when unranked)
    #[arg(short, long)]
    tier: Option<String>,

    /// Number of matches to analyze (default: 15, max: 100)
    #[arg(short, long, default_value = "15")]
    matches: usize,

    /// Force refetch from the Riot API (ignore cached matches)
    #[arg(long)]
    refresh: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let player_key = format!("{}#{}", args.game_name, args.tag_line);

    // Load request budget tracker
    let mut rate_limiter = rate_limit::RequestLog::load(&player_key)?;
    if !rate_limiter.can_make_request() {
        rate_limiter.display_status();
        return Err(AppError::ApiError(
            "API request budget exhausted for this player. Try again in about an hour.".to_string(),
        )
        .into());
    }

    // An invalid tier name is a usage error; reject it before spending any
    // API requests.
    let tier_override = match args.tier.or_else(|| config.default_tier.clone()) {
        Some(name) => Some(Tier::from_str(&name)?),
        None => None,
    };

    display_info(&format!(
        "Fetching data for {} in region {}",
        player_key, config.region
    ));

    let client = RiotApiClient::new(config.clone());

    // Step 1: Get account info (PUUID)
    display_info("Step 1: Getting account info...");
    let account = client.get_account(&args.game_name, &args.tag_line)?;
    rate_limiter.record_request();
    display_success(&format!("Found PUUID: {}", &account.puuid[0..8]));

    // Step 2: Get summoner info
    display_info("Step 2: Getting summoner info...");
    let summoner = client.get_summoner(&account.puuid)?;
    rate_limiter.record_request();
    display_success(&format!("Summoner Level: {}", summoner.summoner_level));

    // Step 3: Get rank info (also drives the default comparison tier)
    display_info("Step 3: Getting rank info...");
    let leagues = client.get_league_entries(&account.puuid).unwrap_or_default();
    rate_limiter.record_request();
    rate_limiter.save().ok();

    let ranked = leagues
        .iter()
        .find(|l| l.queue_type == "RANKED_SOLO_5x5")
        .or_else(|| leagues.iter().find(|l| l.queue_type == "RANKED_FLEX_SR"))
        .or_else(|| leagues.first());

    match ranked {
        Some(entry) => display_success(&format!(
            "Rank: {} {} ({} LP, {}W/{}L)",
            entry.tier, entry.rank, entry.league_points, entry.wins, entry.losses
        )),
        None => display_success("No ranked entries found"),
    }

    let tier = match tier_override {
        Some(t) => t,
        None => ranked
            .and_then(|entry| Tier::from_str(&entry.tier).ok())
            .unwrap_or(Tier::Emerald),
    };

    // Step 4: Get match IDs
    display_info("Step 4: Fetching match IDs...");
    let count = std::cmp::min(args.matches, 100);
    let match_ids = client.get_match_ids(&account.puuid, count)?;
    rate_limiter.record_request();
    rate_limiter.save().ok();

    if match_ids.is_empty() {
        return Err(AppError::NoRecentMatches.into());
    }
    display_success(&format!("Found {} matches to analyze", match_ids.len()));

    // Step 5: Fetch match details, reusing cached bodies where possible
    let mut match_cache = MatchCache::load(&player_key, &config.region)?;
    if args.refresh {
        match_cache.matches.clear();
    }

    let missing = match_cache.missing_ids(&match_ids);
    if missing.is_empty() {
        display_success("⚡ Cache is up-to-date (no new matches)");
    } else {
        display_info(&format!(
            "Step 5: Fetching {} new matches ({} cached)...",
            missing.len(),
            match_ids.len() - missing.len()
        ));

        let pb = ProgressBar::new(missing.len() as u64);
        pb.set_message("Fetching match details");

        let mut fetched = Vec::new();
        for match_id in &missing {
            let data = client.get_match(match_id)?;
            rate_limiter.record_request();
            pb.inc(1);

            fetched.push(CachedMatch {
                id: match_id.clone(),
                fetched_at: chrono::Utc::now(),
                data,
            });
        }
        pb.finish_with_message("✓ Match data fetched");

        match_cache.region = config.region.clone();
        match_cache.add_matches(fetched);
        let _ = match_cache.save(); // Save to disk silently
        rate_limiter.save().ok();
    }

    let matches = match_cache.get_matches(&match_ids);

    // Step 6: Run the analysis engine
    let report = analysis::compute_lens_report(&matches, &account.puuid, tier);
    let tags = analysis::compute_tags_for_player(&matches, &account.puuid, &DEFAULT_BENCHMARKS);

    // Display results
    display_match_summary(&matches, &account.puuid);
    display_lens_report(&report, tier);
    display_tags(&tags, &player_key);

    rate_limiter.display_status();

    Ok(())
}

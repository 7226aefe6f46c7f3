// URL builders for the Riot endpoints the client uses.

pub fn account_by_riot_id(game_name: &str, tag_line: &str, api_key: &str) -> String {
    format!(
        "https://americas.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}?api_key={}",
        game_name, tag_line, api_key
    )
}

pub fn summoner_by_puuid(region: &str, puuid: &str, api_key: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/{}?api_key={}",
        region, puuid, api_key
    )
}

pub fn league_entries_by_puuid(region: &str, puuid: &str, api_key: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/league/v4/entries/by-puuid/{}?api_key={}",
        region, puuid, api_key
    )
}

pub fn match_ids_by_puuid(routing: &str, puuid: &str, count: usize, api_key: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?type=ranked&count={}&api_key={}",
        routing, puuid, count, api_key
    )
}

pub fn match_by_id(routing: &str, match_id: &str, api_key: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}?api_key={}",
        routing, match_id, api_key
    )
}

//! Ladder API client — fetches the top-N ladder window for a league.

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, info};

use ladder_core::{LadderEntry, LadderError, Result};

const USER_AGENT: &str = "ladder-tracker/0.3";

pub struct LadderClient {
    client: Client,
    base_url: String,
    league: String,
    limit: u32,
}

impl LadderClient {
    pub fn new(base_url: &str, league: &str, limit: u32, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            league: league.to_string(),
            limit,
        })
    }

    /// Fetch the current ladder window. One request, no retry — a failed
    /// cycle is simply skipped and the next cadence tick runs fresh.
    pub async fn fetch_ladder(&self) -> Result<Vec<LadderEntry>> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LadderError::ConfigError(format!("bad base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| LadderError::ConfigError("base URL cannot be a base".to_string()))?
            // League names contain spaces; the segment push encodes them.
            .push(&self.league);

        debug!("Fetching ladder: {url}");
        let resp = self
            .client
            .get(url)
            .query(&[("limit", self.limit)])
            .send()
            .await?
            .error_for_status()?;

        let ladder: ApiLadder = resp.json().await?;
        let entries = ladder.into_entries();
        info!("Fetched {} ladder entries for {}", entries.len(), self.league);
        Ok(entries)
    }
}

// ── Upstream payload shape ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ApiLadder {
    #[serde(default)]
    entries: Vec<ApiEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiEntry {
    rank: u32,
    #[serde(default)]
    dead: bool,
    character: ApiCharacter,
    account: Option<ApiAccount>,
}

#[derive(Debug, Deserialize)]
struct ApiCharacter {
    name: String,
    #[serde(default)]
    level: u32,
    #[serde(default)]
    class: String,
    #[serde(default)]
    experience: u64,
    depth: Option<ApiDepth>,
}

#[derive(Debug, Deserialize)]
struct ApiDepth {
    #[serde(rename = "default")]
    main: Option<u32>,
    solo: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiAccount {
    #[serde(default)]
    name: String,
    twitch: Option<ApiTwitch>,
    challenges: Option<ApiChallenges>,
}

#[derive(Debug, Deserialize)]
struct ApiTwitch {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiChallenges {
    #[serde(default)]
    completed: u32,
    #[serde(default)]
    max: u32,
}

impl ApiLadder {
    fn into_entries(self) -> Vec<LadderEntry> {
        self.entries
            .into_iter()
            .map(|e| {
                let account = e.account.unwrap_or(ApiAccount {
                    name: String::new(),
                    twitch: None,
                    challenges: None,
                });
                let (challenges, challenges_max) = account
                    .challenges
                    .map(|c| (c.completed, c.max))
                    .unwrap_or((0, 0));
                let (depth, depth_solo) = e
                    .character
                    .depth
                    .map(|d| (d.main, d.solo))
                    .unwrap_or((None, None));
                LadderEntry {
                    rank: e.rank,
                    name: e.character.name,
                    level: e.character.level,
                    class: e.character.class,
                    experience: e.character.experience,
                    dead: e.dead,
                    account: account.name,
                    twitch: account.twitch.and_then(|t| t.name),
                    challenges,
                    challenges_max,
                    depth,
                    depth_solo,
                }
            })
            .collect()
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "total": 2,
        "entries": [
            {
                "rank": 1,
                "dead": false,
                "character": {
                    "name": "CHUCHU_STAINING",
                    "level": 100,
                    "class": "Ascendant",
                    "experience": 4250334444,
                    "depth": {"default": 120, "solo": 85}
                },
                "account": {
                    "name": "cutiechuchu#6132",
                    "twitch": {"name": "chuchu"},
                    "challenges": {"completed": 24, "max": 40}
                }
            },
            {
                "rank": 2,
                "dead": true,
                "character": {
                    "name": "BleedOut_HC",
                    "level": 96,
                    "class": "Gladiator",
                    "experience": 3300000000
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_upstream_payload() {
        let ladder: ApiLadder = serde_json::from_str(FIXTURE).unwrap();
        let entries = ladder.into_entries();
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.rank, 1);
        assert_eq!(first.name, "CHUCHU_STAINING");
        assert_eq!(first.experience, 4_250_334_444);
        assert_eq!(first.depth, Some(120));
        assert_eq!(first.depth_solo, Some(85));
        assert_eq!(first.twitch.as_deref(), Some("chuchu"));
        assert_eq!((first.challenges, first.challenges_max), (24, 40));

        // Missing account block degrades to defaults, not an error.
        let second = &entries[1];
        assert!(second.dead);
        assert_eq!(second.account, "");
        assert_eq!(second.twitch, None);
        assert_eq!(second.depth, None);
    }

    #[test]
    fn test_empty_payload() {
        let ladder: ApiLadder = serde_json::from_str("{}").unwrap();
        assert!(ladder.into_entries().is_empty());
    }
}

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const CONFIG_ENV: &str = "MATCH_REPORT_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub team_scan_lines: usize,          // header lines searched for team names
    pub score_scan_lines: usize,         // header lines searched for standalone scores
    pub date_scan_lines: usize,          // lines searched for D.M.Y dates
    pub next_line_time_max_chars: usize, // a time on the next line only counts if that line is short
    pub stadium_max_chars: usize,
    pub utc_offset_minutes: i32,         // local offset of dates in the paste (Istanbul = +180)
    pub placeholder_ids: Vec<String>,    // substrings marking an id as not final
    pub default_id_prefix: String,
    pub id_prefixes: BTreeMap<String, String>, // competition -> id prefix
    pub teams_file: Option<PathBuf>,
    pub rayon_threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            team_scan_lines: 20,
            score_scan_lines: 15,
            date_scan_lines: 30,
            next_line_time_max_chars: 20,
            stadium_max_chars: 100,
            utc_offset_minutes: 180,
            placeholder_ids: vec!["takim-takim".to_string()],
            default_id_prefix: "w".to_string(),
            id_prefixes: BTreeMap::new(),
            teams_file: None,
            rayon_threads: None,
        }
    }
}

impl Config {
    /// Explicit path > $MATCH_REPORT_CONFIG > ./config.toml > defaults.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        match std::fs::read_to_string(&path) {
            Ok(s) => Self::from_toml_str(&s).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "config: unreadable, using defaults");
                Self::default()
            }),
            Err(_) => {
                tracing::debug!(path = %path.display(), "config: not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Id prefix for a competition, e.g. "w" for league weeks.
    pub fn id_prefix(&self, competition: Option<&str>) -> &str {
        competition
            .and_then(|c| self.id_prefixes.get(c))
            .map(String::as_str)
            .unwrap_or(&self.default_id_prefix)
    }
}

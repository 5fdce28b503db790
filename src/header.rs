// src/header.rs
// Teams, score, kick-off and venue from the top of a pasted report.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Config;
use crate::markers::STADIUM;
use crate::model::TeamId;
use crate::teams::TeamResolver;

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[./-](\d{1,2})[./-](\d{4})").expect("date regex"));
static TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("time regex"));
static STANDALONE_SCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}$").expect("score regex"));
/// `GALATASARAY A.Ş. 2-1 FENERBAHÇE A.Ş.`
static INLINE_SCORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+(\d{1,2})\s*[-–]\s*(\d{1,2})\s+(.+)$").expect("inline score regex")
});

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Header {
    pub teams: Option<(TeamId, TeamId)>,
    pub score: Option<(u8, u8)>,
    pub date: Option<DateTime<FixedOffset>>,
    pub stadium: Option<String>,
}

pub fn extract(lines: &[&str], resolver: &dyn TeamResolver, cfg: &Config) -> Header {
    Header {
        teams: find_teams(lines, resolver, cfg.team_scan_lines),
        score: find_score(lines, cfg.score_scan_lines),
        date: find_date(lines, cfg),
        stadium: find_stadium(lines, cfg.stadium_max_chars),
    }
}

struct InlineScore<'a> {
    home: &'a str,
    home_goals: u8,
    away_goals: u8,
    away: &'a str,
}

fn split_inline_score(line: &str) -> Option<InlineScore<'_>> {
    let c = INLINE_SCORE.captures(line)?;
    Some(InlineScore {
        home: c.get(1)?.as_str().trim(),
        home_goals: c.get(2)?.as_str().parse().ok()?,
        away_goals: c.get(3)?.as_str().parse().ok()?,
        away: c.get(4)?.as_str().trim(),
    })
}

/// First two distinct resolvable team ids, in order of appearance.
pub fn find_teams(lines: &[&str], resolver: &dyn TeamResolver, window: usize) -> Option<(TeamId, TeamId)> {
    let mut found: Vec<TeamId> = Vec::with_capacity(2);
    for line in lines.iter().take(window) {
        if line.chars().all(|c| c.is_ascii_digit()) || line.chars().count() < 3 {
            continue;
        }
        let fragments = match split_inline_score(line) {
            Some(s) => vec![s.home, s.away],
            None => vec![*line],
        };
        for frag in fragments {
            if let Some(id) = resolver.resolve(frag) {
                if !found.contains(&id) {
                    tracing::debug!(line = %line, team = %id, "header: team");
                    found.push(id);
                }
            }
            if found.len() == 2 {
                break;
            }
        }
        if found.len() == 2 {
            break;
        }
    }

    let mut it = found.into_iter();
    match (it.next(), it.next()) {
        (Some(home), Some(away)) => Some((home, away)),
        _ => None,
    }
}

/// First two standalone 1-2 digit lines; else the first inline `n-n` pair.
pub fn find_score(lines: &[&str], window: usize) -> Option<(u8, u8)> {
    let head = &lines[..lines.len().min(window)];
    let standalone: Vec<u8> = head
        .iter()
        .filter(|l| STANDALONE_SCORE.is_match(l))
        .filter_map(|l| l.parse().ok())
        .take(2)
        .collect();
    if let [home, away] = standalone[..] {
        return Some((home, away));
    }
    head.iter()
        .find_map(|l| split_inline_score(l))
        .map(|s| (s.home_goals, s.away_goals))
}

/// Last valid `D.M.Y [H:MM]` within the window, as a local instant.
pub fn find_date(lines: &[&str], cfg: &Config) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(cfg.utc_offset_minutes.saturating_mul(60))?;
    let mut out = None;

    for (i, line) in lines.iter().enumerate().take(cfg.date_scan_lines) {
        let Some(d) = DATE.captures(line) else { continue };
        let day = d[1].parse::<u32>().ok();
        let month = d[2].parse::<u32>().ok();
        let year = d[3].parse::<i32>().ok();

        let time = TIME
            .captures(line)
            .or_else(|| {
                lines
                    .get(i + 1)
                    .filter(|next| next.chars().count() < cfg.next_line_time_max_chars)
                    .and_then(|next| TIME.captures(next))
            })
            .and_then(|t| NaiveTime::from_hms_opt(t[1].parse().ok()?, t[2].parse().ok()?, 0))
            .unwrap_or_default();

        let date = match (year, month, day) {
            (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y, m, d),
            _ => None,
        };
        let Some(date) = date else {
            tracing::debug!(line = %line, "header: skipping invalid date");
            continue;
        };
        if let Some(dt) = offset.from_local_datetime(&date.and_time(time)).single() {
            out = Some(dt);
        }
    }
    out
}

/// First short line naming a stadium, cut before a trailing " - " part.
pub fn find_stadium(lines: &[&str], max_chars: usize) -> Option<String> {
    lines
        .iter()
        .find(|l| STADIUM.is_match(l) && l.chars().count() < max_chars)
        .map(|l| match l.find(" - ") {
            Some(cut) => l[..cut].trim().to_string(),
            None => l.to_string(),
        })
}

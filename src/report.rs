// src/report.rs
// Runs every extraction pass over one paste and merges the results into a
// copy of the caller's record.

use crate::config::Config;
use crate::events::{self, Timeline};
use crate::header::{self, Header};
use crate::lineup;
use crate::lines::tokenize;
use crate::model::MatchRecord;
use crate::officials;
use crate::teams::TeamResolver;

pub struct MatchReportParser<'r> {
    resolver: &'r dyn TeamResolver,
    cfg: Config,
}

impl<'r> MatchReportParser<'r> {
    pub fn new(resolver: &'r dyn TeamResolver, cfg: Config) -> Self {
        Self { resolver, cfg }
    }

    /// Parse `raw` on top of `existing`. Never fails; blank text returns
    /// `existing` unchanged.
    pub fn parse(&self, raw: &str, existing: &MatchRecord) -> MatchRecord {
        let lines = tokenize(raw);
        if lines.is_empty() {
            return existing.clone();
        }
        tracing::debug!(lines = lines.len(), "report: parsing");

        let mut rec = existing.clone();
        apply_header(&mut rec, header::extract(&lines, self.resolver, &self.cfg), self.resolver);
        rec.officials = officials::extract(&lines, &existing.officials);
        // a new paste supersedes manual lineup edits
        rec.lineups = lineup::extract(&lines);
        apply_timeline(&mut rec, events::extract(&lines));
        refresh_id(&mut rec, &self.cfg);
        rec
    }
}

/// Parse with the default configuration.
pub fn parse_match_report(raw: &str, existing: &MatchRecord, resolver: &dyn TeamResolver) -> MatchRecord {
    MatchReportParser::new(resolver, Config::default()).parse(raw, existing)
}

fn apply_header(rec: &mut MatchRecord, head: Header, resolver: &dyn TeamResolver) {
    // fewer than two teams leaves the caller's assignment alone
    if let Some((home, away)) = head.teams {
        rec.home_team_name = Some(resolver.display_name(&home));
        rec.away_team_name = Some(resolver.display_name(&away));
        rec.home_team_id = Some(home);
        rec.away_team_id = Some(away);
    }
    if let Some((h, a)) = head.score {
        rec.home_score = Some(h);
        rec.away_score = Some(a);
        rec.score = Some(format!("{}-{}", h, a));
    }
    if head.date.is_some() {
        rec.date = head.date;
    }
    if head.stadium.is_some() {
        rec.stadium = head.stadium;
    }
}

fn apply_timeline(rec: &mut MatchRecord, timeline: Timeline) {
    // stats count every card keyword; events need a minute, so the two can differ
    rec.events = timeline.events;
    rec.stats = timeline.stats;
}

/// True when `id` is empty or still carries a placeholder pattern.
pub fn is_placeholder_id(id: &str, cfg: &Config) -> bool {
    id.trim().is_empty() || cfg.placeholder_ids.iter().any(|p| !p.is_empty() && id.contains(p.as_str()))
}

/// `{prefix}{week}[-{group}]-{home}-{away}-{yyyy-mm-dd}`, once teams and date are known.
pub fn derive_id(rec: &MatchRecord, cfg: &Config) -> Option<String> {
    let home = rec.home_team_id.as_deref()?;
    let away = rec.away_team_id.as_deref()?;
    let date = rec.date?;

    let mut parts: Vec<String> = Vec::with_capacity(5);
    if let Some(week) = rec.week {
        parts.push(format!("{}{}", cfg.id_prefix(rec.competition.as_deref()), week));
    }
    if let Some(group) = rec.group.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
        parts.push(group.to_string());
    }
    parts.push(home.to_string());
    parts.push(away.to_string());
    parts.push(date.date_naive().format("%Y-%m-%d").to_string());
    Some(parts.join("-"))
}

/// Regenerate the id unless an operator already finalized it.
pub fn refresh_id(rec: &mut MatchRecord, cfg: &Config) {
    if !is_placeholder_id(&rec.id, cfg) {
        return;
    }
    if let Some(id) = derive_id(rec, cfg) {
        tracing::debug!(old = %rec.id, new = %id, "report: id regenerated");
        rec.id = id;
    }
}

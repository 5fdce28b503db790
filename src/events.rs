// src/events.rs
// Minute-stamped timeline (goals, cards, substitutions) and card tallies.
//
// Home/away attribution is positional: every line before the second
// starting-eleven marker belongs to the home side, the rest to away.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::markers::{minute_of, section_of, Section, RED_CARD, SECOND_YELLOW, YELLOW_CARD};
use crate::model::{EventKind, MatchEvent, Side, Stats};

static TRAILING_NOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(([^()]*)\)\s*$").expect("note regex"));
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+").expect("number regex"));

/// Which event list the current lines belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventContext {
    None,
    Goals,
    SubsOut,
    SubsIn,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    pub events: Vec<MatchEvent>,
    pub stats: Stats, // counts every card keyword, with or without a minute
}

/// Index of the second starting-eleven marker, or `usize::MAX`.
pub fn boundary_index(lines: &[&str]) -> usize {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| section_of(l) == Some(Section::StartingEleven))
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(usize::MAX)
}

pub fn side_at(index: usize, boundary: usize) -> Side {
    if index < boundary { Side::Home } else { Side::Away }
}

/// Context after reading `line`. Roster markers reset it; they are reused
/// between the roster and event parts of a report.
pub fn next_context(ctx: EventContext, line: &str) -> EventContext {
    match section_of(line) {
        Some(Section::Goals) => EventContext::Goals,
        Some(Section::SubbedOut) => EventContext::SubsOut,
        Some(Section::SubbedIn) => EventContext::SubsIn,
        Some(Section::StartingEleven | Section::Substitutes | Section::Coach | Section::Cards) => {
            EventContext::None
        }
        None => ctx,
    }
}

/// Tally card keywords and emit card events for the minute-stamped ones.
pub fn scan_cards(line: &str, side: Side, timeline: &mut Timeline) {
    let minute = minute_of(line);

    if YELLOW_CARD.is_match(line) {
        timeline.stats.add_yellow(side);
        if let Some((minute, range)) = &minute {
            let rest = remove_range(line, range.clone());
            let player = tidy(&YELLOW_CARD.replace_all(&rest, " "));
            timeline.events.push(MatchEvent {
                kind: EventKind::YellowCard,
                minute: minute.clone(),
                player,
                team_id: side,
                detail: None,
            });
        }
    }

    if RED_CARD.is_match(line) {
        timeline.stats.add_red(side);
        if let Some((minute, range)) = &minute {
            let rest = remove_range(line, range.clone());
            let detail = SECOND_YELLOW
                .find(&rest)
                .map(|m| m.as_str().trim_matches(|c: char| c == '(' || c == ')').trim().to_string());
            let rest = SECOND_YELLOW.replace_all(&rest, " ");
            let player = tidy(&RED_CARD.replace_all(&rest, " "));
            timeline.events.push(MatchEvent {
                kind: EventKind::RedCard,
                minute: minute.clone(),
                player,
                team_id: side,
                detail,
            });
        }
    }
}

/// Emit a goal/substitution event for a minute-stamped line inside a section.
pub fn scan_scoped(line: &str, ctx: EventContext, side: Side, timeline: &mut Timeline) {
    let kind = match ctx {
        EventContext::None => return,
        EventContext::Goals => EventKind::Goal,
        EventContext::SubsOut => EventKind::SubstitutionOut,
        EventContext::SubsIn => EventKind::SubstitutionIn,
    };
    let Some((minute, range)) = minute_of(line) else { return };

    let rest = remove_range(line, range);
    let (rest, detail) = match TRAILING_NOTE.captures(&rest) {
        Some(c) => {
            let note = c.get(1).map(|m| m.as_str().trim().to_string()).filter(|n| !n.is_empty());
            let cut = c.get(0).map(|m| m.start()).unwrap_or(rest.len());
            (rest[..cut].to_string(), note)
        }
        None => (rest.clone(), None),
    };
    let player = tidy(&LEADING_NUMBER.replace(rest.trim(), ""));

    timeline.events.push(MatchEvent { kind, minute, player, team_id: side, detail });
}

/// One pass over the lines; card and section scans run side by side so the
/// timeline keeps line order.
pub fn extract(lines: &[&str]) -> Timeline {
    let boundary = boundary_index(lines);
    let mut timeline = Timeline::default();
    let mut ctx = EventContext::None;

    for (i, line) in lines.iter().enumerate() {
        let side = side_at(i, boundary);
        scan_cards(line, side, &mut timeline);
        ctx = next_context(ctx, line);
        scan_scoped(line, ctx, side, &mut timeline);
    }

    tracing::debug!(
        events = timeline.events.len(),
        boundary = if boundary == usize::MAX { -1 } else { boundary as i64 },
        "events: extracted"
    );
    timeline
}

fn remove_range(line: &str, range: std::ops::Range<usize>) -> String {
    let mut out = String::with_capacity(line.len());
    out.push_str(&line[..range.start]);
    out.push(' ');
    out.push_str(&line[range.end..]);
    out
}

/// Collapse whitespace and drop leftover separators around a name.
fn tidy(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c == '-' || c == ',' || c == ':' || c == '|' || c.is_whitespace())
        .to_string()
}

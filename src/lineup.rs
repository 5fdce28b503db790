// src/lineup.rs
// Roster state machine: `{team} x {section}` driven by marker lines.
//
//   first  "İLK 11"          -> (home, xi)
//   later  "İLK 11"          -> (away, xi)
//   "YEDEKLER"               -> (team, subs)
//   "TEKNİK DİREKTÖR"        -> (team, coach)
//   "KARTLAR"/"GOLLER"/...   -> (team, none)

use crate::markers::{find_section, Section, NUMBERED_PLAYER};
use crate::model::{Lineups, Player, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterSection {
    None,
    Xi,
    Subs,
    Coach,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RosterState {
    pub team: Side,
    pub section: RosterSection,
    xi_seen: bool,
    coach_taken: bool, // only the first name after a coach marker counts
}

impl Default for RosterState {
    fn default() -> Self {
        Self { team: Side::Home, section: RosterSection::None, xi_seen: false, coach_taken: false }
    }
}

impl RosterState {
    /// Transition on a section marker.
    pub fn on_marker(self, marker: Section) -> Self {
        match marker {
            Section::StartingEleven => Self {
                team: if self.xi_seen { Side::Away } else { Side::Home },
                section: RosterSection::Xi,
                xi_seen: true,
                ..self
            },
            Section::Substitutes => Self { section: RosterSection::Subs, ..self },
            Section::Coach => Self { section: RosterSection::Coach, coach_taken: false, ..self },
            Section::Cards | Section::Goals | Section::SubbedOut | Section::SubbedIn => {
                Self { section: RosterSection::None, ..self }
            }
        }
    }

    /// Consume one line, appending whatever it contributes to `acc`.
    pub fn feed(self, line: &str, acc: &mut Lineups) -> Self {
        if let Some((marker, range)) = find_section(line) {
            let next = self.on_marker(marker);
            tracing::debug!(line = %line, team = ?next.team, section = ?next.section, "lineup: marker");
            if next.section == RosterSection::Coach {
                // "TEKNİK DİREKTÖR: OKAN BURUK"
                let rest = line[range.end..].trim_matches(|c: char| c.is_whitespace() || c == ':' || c == '-');
                if rest.chars().count() >= 3 {
                    *acc.coach_mut(next.team) = rest.to_string();
                    return Self { coach_taken: true, ..next };
                }
            }
            return next;
        }

        match self.section {
            RosterSection::None => self,
            RosterSection::Xi | RosterSection::Subs => {
                if let Some(player) = parse_player(line) {
                    let list = if self.section == RosterSection::Xi {
                        acc.starters_mut(self.team)
                    } else {
                        acc.subs_mut(self.team)
                    };
                    list.push(player);
                }
                self
            }
            RosterSection::Coach => {
                if self.coach_taken || parse_player(line).is_some() || line.chars().count() < 3 {
                    return self;
                }
                *acc.coach_mut(self.team) = line.to_string();
                Self { coach_taken: true, ..self }
            }
        }
    }
}

/// `"7. KEREM AKTÜRKOĞLU"` -> `{ number: "7", name: "KEREM AKTÜRKOĞLU" }`.
pub fn parse_player(line: &str) -> Option<Player> {
    let c = NUMBERED_PLAYER.captures(line)?;
    Some(Player::new(c.get(1)?.as_str(), c.get(2)?.as_str().trim()))
}

/// Run the state machine over every line. The result replaces any earlier lineups.
pub fn extract(lines: &[&str]) -> Lineups {
    let (_, lineups) = lines.iter().fold(
        (RosterState::default(), Lineups::default()),
        |(state, mut acc), line| {
            let state = state.feed(line, &mut acc);
            (state, acc)
        },
    );
    lineups
}

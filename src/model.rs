use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub type TeamId = String;

/// Which side of the fixture a player, event or card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub number: String,
    pub name: String,
}

impl Player {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self { number: number.into(), name: name.into() }
    }
}

/// Fixed positions inside `Officials::referees`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefereeSlot {
    Main = 0,
    FirstAssistant = 1,
    SecondAssistant = 2,
    Fourth = 3,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Officials {
    pub referees: Vec<String>, // [main, asst1, asst2, fourth]
    pub var_referees: Vec<String>, // [var, avar...]
    pub observers: Vec<String>,
    pub representatives: Vec<String>,
}

impl Default for Officials {
    fn default() -> Self {
        Self {
            referees: vec![String::new(); 4],
            var_referees: Vec::new(),
            observers: Vec::new(),
            representatives: Vec::new(),
        }
    }
}

impl Officials {
    pub fn set_referee(&mut self, slot: RefereeSlot, name: &str) {
        let idx = slot as usize;
        if self.referees.len() <= idx {
            self.referees.resize(idx + 1, String::new());
        }
        self.referees[idx] = name.to_string();
    }

    pub fn referee(&self, slot: RefereeSlot) -> &str {
        self.referees.get(slot as usize).map(String::as_str).unwrap_or("")
    }

    /// Appends to `var_referees` unless the exact name is already listed.
    pub fn add_var(&mut self, name: &str) {
        if !self.var_referees.iter().any(|n| n == name) {
            self.var_referees.push(name.to_string());
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lineups {
    pub home: Vec<Player>,
    pub away: Vec<Player>,
    pub home_subs: Vec<Player>,
    pub away_subs: Vec<Player>,
    pub home_coach: String,
    pub away_coach: String,
}

impl Lineups {
    pub fn starters_mut(&mut self, side: Side) -> &mut Vec<Player> {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    pub fn subs_mut(&mut self, side: Side) -> &mut Vec<Player> {
        match side {
            Side::Home => &mut self.home_subs,
            Side::Away => &mut self.away_subs,
        }
    }

    pub fn coach_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::Home => &mut self.home_coach,
            Side::Away => &mut self.away_coach,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    YellowCard,
    RedCard,
    SubstitutionIn,
    SubstitutionOut,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub minute: String, // "45" or "90+3"
    pub player: String,
    pub team_id: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>, // "P", "K.K.", "İkinci Sarıdan"
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub home_yellow_cards: u32,
    pub away_yellow_cards: u32,
    pub home_red_cards: u32,
    pub away_red_cards: u32,
}

impl Stats {
    pub fn add_yellow(&mut self, side: Side) {
        match side {
            Side::Home => self.home_yellow_cards += 1,
            Side::Away => self.away_yellow_cards += 1,
        }
    }

    pub fn add_red(&mut self, side: Side) {
        match side {
            Side::Home => self.home_red_cards += 1,
            Side::Away => self.away_red_cards += 1,
        }
    }
}

/// A match as held by the caller; every field may still be unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub home_team_id: Option<TeamId>,
    pub away_team_id: Option<TeamId>,
    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    pub stadium: Option<String>,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub score: Option<String>, // "H-A"
    pub officials: Officials,
    pub lineups: Lineups,
    pub events: Vec<MatchEvent>,
    pub stats: Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let mut rec = MatchRecord::default();
        rec.home_team_id = Some("galatasaray".into());
        rec.events.push(MatchEvent {
            kind: EventKind::YellowCard,
            minute: "45+1".into(),
            player: "MUSLERA".into(),
            team_id: Side::Home,
            detail: None,
        });
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["homeTeamId"], "galatasaray");
        assert_eq!(json["events"][0]["type"], "yellow_card");
        assert_eq!(json["events"][0]["teamId"], "home");
        assert!(json["events"][0].get("detail").is_none());
        assert_eq!(json["officials"]["referees"].as_array().unwrap().len(), 4);
        assert!(json["stats"].get("homeYellowCards").is_some());
    }

    #[test]
    fn partial_record_deserializes_with_defaults() {
        let rec: MatchRecord =
            serde_json::from_str(r#"{"id":"w1-takim-takim","week":1}"#).unwrap();
        assert_eq!(rec.id, "w1-takim-takim");
        assert_eq!(rec.week, Some(1));
        assert!(rec.home_team_id.is_none());
        assert!(rec.lineups.home.is_empty());
    }

    #[test]
    fn set_referee_grows_short_arrays() {
        let mut o = Officials { referees: Vec::new(), ..Officials::default() };
        o.set_referee(RefereeSlot::Fourth, "ALİ");
        assert_eq!(o.referees.len(), 4);
        assert_eq!(o.referee(RefereeSlot::Fourth), "ALİ");
        assert_eq!(o.referee(RefereeSlot::Main), "");
    }

    #[test]
    fn var_names_are_deduplicated() {
        let mut o = Officials::default();
        o.add_var("X");
        o.add_var("X");
        o.add_var("Y");
        assert_eq!(o.var_referees, vec!["X", "Y"]);
    }
}

// src/teams.rs
// Team identity lookup. The parser only sees the `TeamResolver` trait;
// `TeamDirectory` is the dictionary-backed implementation used by the binary.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::TeamDirectoryError;
use crate::model::TeamId;

const EMBEDDED_TEAMS: &str = include_str!("../data/teams.toml");

/// Read-only lookup from free text to canonical team ids. Must be pure.
pub trait TeamResolver: Send + Sync {
    fn resolve(&self, text: &str) -> Option<TeamId>;

    /// Display name for `id`, or the id itself when unknown.
    fn display_name(&self, id: &str) -> String;
}

#[derive(Clone, Debug, Deserialize)]
pub struct TeamEntry {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub short_code: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Deserialize)]
struct DirectoryFile {
    #[serde(rename = "team", default)]
    teams: Vec<TeamEntry>,
}

struct Indexed {
    entry: TeamEntry,
    norm_name: String,
    lower_aliases: Vec<String>,
    norm_aliases: Vec<String>,
}

pub struct TeamDirectory {
    teams: Vec<Indexed>, // file order; fuzzy matching walks it front to back
    by_id: HashMap<TeamId, usize>,
}

impl TeamDirectory {
    pub fn new(entries: Vec<TeamEntry>) -> Result<Self, TeamDirectoryError> {
        let mut teams = Vec::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());
        for entry in entries {
            if entry.id.trim().is_empty() {
                return Err(TeamDirectoryError::EmptyId);
            }
            if by_id.insert(entry.id.clone(), teams.len()).is_some() {
                return Err(TeamDirectoryError::DuplicateId(entry.id));
            }
            teams.push(Indexed {
                norm_name: normalize(&entry.name),
                lower_aliases: entry.aliases.iter().map(|a| a.trim().to_lowercase()).collect(),
                norm_aliases: entry.aliases.iter().map(|a| normalize(a)).collect(),
                entry,
            });
        }
        Ok(Self { teams, by_id })
    }

    /// Parse a `[[team]]` TOML document.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, TeamDirectoryError> {
        let file: DirectoryFile = toml::from_str(text).map_err(|source| {
            TeamDirectoryError::ParseFailed { path: origin.to_string(), source }
        })?;
        Self::new(file.teams)
    }

    pub fn load(path: &Path) -> Result<Self, TeamDirectoryError> {
        let text = fs::read_to_string(path).map_err(|source| TeamDirectoryError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Dictionary compiled into the binary.
    pub fn embedded() -> Result<Self, TeamDirectoryError> {
        Self::from_toml_str(EMBEDDED_TEAMS, "<embedded teams.toml>")
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl TeamResolver for TeamDirectory {
    fn resolve(&self, text: &str) -> Option<TeamId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(t) = self.teams.iter().find(|t| !t.entry.short_code.is_empty() && t.entry.short_code == text) {
            return Some(t.entry.id.clone());
        }

        let lower = text.to_lowercase();
        let norm = normalize(text);
        if let Some(t) = self.teams.iter().find(|t| {
            t.lower_aliases.iter().any(|a| *a == lower)
                || (!norm.is_empty() && t.norm_aliases.iter().any(|a| *a == norm))
        }) {
            return Some(t.entry.id.clone());
        }

        if let Some(&idx) = self.by_id.get(text) {
            return Some(self.teams[idx].entry.id.clone());
        }

        if norm.is_empty() {
            return None;
        }
        self.teams
            .iter()
            .find(|t| !t.norm_name.is_empty() && (t.norm_name.contains(&norm) || norm.contains(&t.norm_name)))
            .map(|t| t.entry.id.clone())
    }

    fn display_name(&self, id: &str) -> String {
        self.by_id
            .get(id)
            .map(|&idx| self.teams[idx].entry.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

/// Lowercase ASCII alphanumerics only, diacritics and Turkish letters folded.
/// `"Fenerbahçe A.Ş."` -> `"fenerbahceas"`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        // ı, İ and friends do not all decompose to an ASCII base
        let mapped = match ch {
            'ı' | 'İ' => 'i',
            'ğ' | 'Ğ' => 'g',
            'ş' | 'Ş' => 's',
            c => c,
        };
        if mapped.is_ascii_alphanumeric() {
            out.push(mapped.to_ascii_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir() -> TeamDirectory {
        TeamDirectory::from_toml_str(
            r#"
            [[team]]
            id = "galatasaray"
            name = "Galatasaray"
            short_code = "GS"
            aliases = ["Cimbom"]

            [[team]]
            id = "fenerbahce"
            name = "Fenerbahçe"
            short_code = "FB"

            [[team]]
            id = "basaksehir"
            name = "Başakşehir"
            aliases = ["RAMS Başakşehir"]
            "#,
            "test",
        )
        .unwrap()
    }

    #[test]
    fn normalize_folds_turkish_letters() {
        assert_eq!(normalize("Fenerbahçe A.Ş."), "fenerbahceas");
        assert_eq!(normalize("İSTANBUL BAŞAKŞEHİR"), "istanbulbasaksehir");
        assert_eq!(normalize("Kasımpaşa"), "kasimpasa");
        assert_eq!(normalize("  --  "), "");
    }

    #[test]
    fn resolves_by_short_code_alias_and_id() {
        let d = dir();
        assert_eq!(d.resolve("GS").as_deref(), Some("galatasaray"));
        assert_eq!(d.resolve("cimbom").as_deref(), Some("galatasaray"));
        assert_eq!(d.resolve("RAMS BASAKSEHIR").as_deref(), Some("basaksehir"));
        assert_eq!(d.resolve("fenerbahce").as_deref(), Some("fenerbahce"));
    }

    #[test]
    fn resolves_fuzzy_both_directions() {
        let d = dir();
        assert_eq!(d.resolve("GALATASARAY A.Ş.").as_deref(), Some("galatasaray"));
        assert_eq!(d.resolve("FENERBAHÇE A.Ş.").as_deref(), Some("fenerbahce"));
        assert_eq!(d.resolve("Fenerb").as_deref(), Some("fenerbahce"));
    }

    #[test]
    fn unknown_text_is_none() {
        let d = dir();
        assert!(d.resolve("Real Madrid").is_none());
        assert!(d.resolve("").is_none());
        assert!(d.resolve("...").is_none());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let d = dir();
        assert_eq!(d.display_name("fenerbahce"), "Fenerbahçe");
        assert_eq!(d.display_name("unknown-fc"), "unknown-fc");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = TeamDirectory::from_toml_str(
            "[[team]]\nid = \"a\"\nname = \"A\"\n[[team]]\nid = \"a\"\nname = \"B\"\n",
            "dup",
        );
        assert!(matches!(err, Err(TeamDirectoryError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn embedded_dictionary_loads() {
        let d = TeamDirectory::embedded().unwrap();
        assert!(d.len() > 10);
        assert_eq!(d.resolve("BEŞİKTAŞ JK").as_deref(), Some("besiktas"));
    }
}

// src/markers.rs
// Literal triggers found in pasted Turkish federation reports.
// Matching is case-insensitive and tolerant of the dotted/dotless i pairs
// (İ/I/i/ı) and of plain-ASCII spellings of ç, ğ, ö, ş, ü.

use once_cell::sync::Lazy;
use regex::Regex;

/// Section headers that drive the lineup and event scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    StartingEleven,
    Substitutes,
    Coach,
    Cards,
    Goals,
    SubbedOut,
    SubbedIn,
}

/// Officials role tags, in matching order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Referee,
    FirstAssistant,
    SecondAssistant,
    FourthOfficial,
    Var,
    Avar,
    Observer,
    Representative,
}

pub struct Marker<T> {
    pub kind: T,
    pub re: Regex,
}

const SECTION_LITERALS: &[(Section, &[&str])] = &[
    (Section::StartingEleven, &["ilk 11", "ilk onbir", "ilk on bir"]),
    (Section::Substitutes, &["yedekler"]),
    (Section::Coach, &["teknik direktör", "teknik sorumlu"]),
    (Section::Cards, &["kartlar"]),
    (Section::Goals, &["goller"]),
    (Section::SubbedOut, &["oyundan çıkanlar"]),
    (Section::SubbedIn, &["oyuna girenler"]),
];

const ROLE_LITERALS: &[(Role, &str)] = &[
    (Role::Referee, "(hakem)"),
    (Role::FirstAssistant, "(1. yardımcı hakem)"),
    (Role::SecondAssistant, "(2. yardımcı hakem)"),
    (Role::FourthOfficial, "(dördüncü hakem)"),
    (Role::Var, "(var)"),
    (Role::Avar, "(avar)"),
    (Role::Observer, "(gözlemci)"),
    (Role::Representative, "(temsilci)"),
];

const YELLOW_LITERALS: &[&str] = &["sarı kart"];
const RED_LITERALS: &[&str] = &["kırmızı kart"];
const SECOND_YELLOW_LITERALS: &[&str] = &["(ikinci sarıdan)", "ikinci sarıdan", "2. sarıdan"];
const STADIUM_LITERALS: &[&str] = &["stadyum", "stadı", "stadium", "arena", "park"];

/// Build a regex source for a lowercase literal.
fn literal_pattern(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len() * 4);
    for ch in literal.chars() {
        match ch {
            'i' | 'ı' => out.push_str("[iıİI]"),
            'ç' => out.push_str("[çc]"),
            'ğ' => out.push_str("[ğg]"),
            'ö' => out.push_str("[öo]"),
            'ş' => out.push_str("[şs]"),
            'ü' => out.push_str("[üu]"),
            ' ' => out.push_str(r"\s+"),
            c => out.push_str(&regex::escape(&c.to_string())),
        }
    }
    out
}

fn alternation(literals: &[&str]) -> Regex {
    let body = literals.iter().map(|l| literal_pattern(l)).collect::<Vec<_>>().join("|");
    // Patterns are built from the constant tables above.
    Regex::new(&format!("(?i)(?:{})", body)).expect("marker table compiles")
}

pub static SECTIONS: Lazy<Vec<Marker<Section>>> = Lazy::new(|| {
    SECTION_LITERALS
        .iter()
        .map(|(kind, lits)| Marker { kind: *kind, re: alternation(lits) })
        .collect()
});

pub static ROLES: Lazy<Vec<Marker<Role>>> = Lazy::new(|| {
    ROLE_LITERALS
        .iter()
        .map(|(kind, lit)| Marker { kind: *kind, re: alternation(&[*lit]) })
        .collect()
});

pub static YELLOW_CARD: Lazy<Regex> = Lazy::new(|| alternation(YELLOW_LITERALS));
pub static RED_CARD: Lazy<Regex> = Lazy::new(|| alternation(RED_LITERALS));
pub static SECOND_YELLOW: Lazy<Regex> = Lazy::new(|| alternation(SECOND_YELLOW_LITERALS));
pub static STADIUM: Lazy<Regex> = Lazy::new(|| alternation(STADIUM_LITERALS));

/// `45.dk`, `90+3.dk`, `90+3. DK`; group 1 is the minute.
pub static MINUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,3}(?:\s*\+\s*\d{1,2})?)\s*\.\s*dk\b").expect("minute regex"));

/// `7. MUSLERA`; groups are number and name.
pub static NUMBERED_PLAYER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").expect("player regex"));

/// First section marker contained in `line`, in table order.
pub fn section_of(line: &str) -> Option<Section> {
    find_section(line).map(|(kind, _)| kind)
}

/// Like `section_of`, also returning the byte range of the marker text.
pub fn find_section(line: &str) -> Option<(Section, std::ops::Range<usize>)> {
    SECTIONS
        .iter()
        .find_map(|m| m.re.find(line).map(|hit| (m.kind, hit.range())))
}

/// First role tag contained in `line`, with the line minus the tag.
pub fn role_of(line: &str) -> Option<(Role, String)> {
    ROLES.iter().find_map(|m| {
        m.re.find(line).map(|hit| {
            let mut rest = String::with_capacity(line.len());
            rest.push_str(&line[..hit.start()]);
            rest.push_str(&line[hit.end()..]);
            (m.kind, rest.trim().to_string())
        })
    })
}

/// Minute text with inner whitespace removed (`90 + 3` -> `90+3`).
pub fn minute_of(line: &str) -> Option<(String, std::ops::Range<usize>)> {
    MINUTE.captures(line).and_then(|c| {
        let whole = c.get(0)?;
        let minute: String = c.get(1)?.as_str().chars().filter(|ch| !ch.is_whitespace()).collect();
        Some((minute, whole.range()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coach_marker_matches_every_casing() {
        for s in ["TEKNİK DİREKTÖR", "teknik direktör", "Teknik Direktör", "TEKNIK DIREKTOR", "TEKNİK SORUMLU"] {
            assert_eq!(section_of(s), Some(Section::Coach), "{s}");
        }
    }

    #[test]
    fn starting_eleven_marker() {
        assert_eq!(section_of("İLK 11"), Some(Section::StartingEleven));
        assert_eq!(section_of("Galatasaray ilk 11"), Some(Section::StartingEleven));
        assert_eq!(section_of("11. ICARDI"), None);
    }

    #[test]
    fn event_section_markers() {
        assert_eq!(section_of("GOLLER"), Some(Section::Goals));
        assert_eq!(section_of("OYUNDAN ÇIKANLAR"), Some(Section::SubbedOut));
        assert_eq!(section_of("Oyuna Girenler"), Some(Section::SubbedIn));
        assert_eq!(section_of("KARTLAR"), Some(Section::Cards));
        assert_eq!(section_of("YEDEKLER"), Some(Section::Substitutes));
    }

    #[test]
    fn role_tag_is_stripped_from_name() {
        let (role, name) = role_of("HALİL UMUT MELER (HAKEM)").unwrap();
        assert_eq!(role, Role::Referee);
        assert_eq!(name, "HALİL UMUT MELER");

        let (role, name) = role_of("Cem Satman (1. Yardımcı Hakem)").unwrap();
        assert_eq!(role, Role::FirstAssistant);
        assert_eq!(name, "Cem Satman");

        let (role, _) = role_of("ABC (2. YARDIMCI HAKEM)").unwrap();
        assert_eq!(role, Role::SecondAssistant);
        assert_eq!(role_of("XY (AVAR)").unwrap().0, Role::Avar);
        assert_eq!(role_of("XY (var)").unwrap().0, Role::Var);
        assert!(role_of("no tag here").is_none());
    }

    #[test]
    fn minute_extraction() {
        let (m, r) = minute_of("ICARDI 45+2.dk").unwrap();
        assert_eq!(m, "45+2");
        assert_eq!(&"ICARDI 45+2.dk"[r], "45+2.dk");
        assert_eq!(minute_of("MERTENS 67. DK").unwrap().0, "67");
        assert!(minute_of("19.05.2024").is_none());
    }

    #[test]
    fn card_keywords() {
        assert!(YELLOW_CARD.is_match("Sarı Kart"));
        assert!(YELLOW_CARD.is_match("SARI KART"));
        assert!(RED_CARD.is_match("KIRMIZI KART"));
        assert!(!YELLOW_CARD.is_match("İkinci Sarıdan Kırmızı Kart"));
        assert!(SECOND_YELLOW.is_match("İKİNCİ SARIDAN"));
    }
}

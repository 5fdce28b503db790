use crate::markers::{role_of, Role};
use crate::model::{Officials, RefereeSlot};

/// Bucket every `NAME (ROLE)` line on top of `existing`. Tagged referee
/// slots are overwritten; the other lists only grow.
pub fn extract(lines: &[&str], existing: &Officials) -> Officials {
    let mut out = existing.clone();
    let mut tags = 0usize;

    for line in lines {
        let Some((role, name)) = role_of(line) else { continue };
        tags += 1;
        match role {
            Role::Referee => out.set_referee(RefereeSlot::Main, &name),
            Role::FirstAssistant => out.set_referee(RefereeSlot::FirstAssistant, &name),
            Role::SecondAssistant => out.set_referee(RefereeSlot::SecondAssistant, &name),
            Role::FourthOfficial => out.set_referee(RefereeSlot::Fourth, &name),
            // the (VAR) tag is often repeated for one person across sections
            Role::Var | Role::Avar => out.add_var(&name),
            Role::Observer => out.observers.push(name),
            Role::Representative => out.representatives.push(name),
        }
    }

    tracing::debug!(
        tags,
        referee = %out.referee(RefereeSlot::Main),
        var = out.var_referees.len(),
        "officials: extracted"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_every_role() {
        let lines = [
            "HALİL UMUT MELER (Hakem)",
            "KEREM ERSOY (1. Yardımcı Hakem)",
            "SUAT GÜZ (2. Yardımcı Hakem)",
            "ALİ ŞANSALAN (Dördüncü Hakem)",
            "ATİLLA KARAOĞLAN (VAR)",
            "ONUR ÖZTÜRK (AVAR)",
            "ATİLLA KARAOĞLAN (VAR)",
            "AHMET ÇAKAR (Gözlemci)",
            "MEHMET YILMAZ (Temsilci)",
            "VELİ KAYA (Temsilci)",
        ];
        let o = extract(&lines, &Officials::default());
        assert_eq!(o.referees, vec!["HALİL UMUT MELER", "KEREM ERSOY", "SUAT GÜZ", "ALİ ŞANSALAN"]);
        assert_eq!(o.var_referees, vec!["ATİLLA KARAOĞLAN", "ONUR ÖZTÜRK"]);
        assert_eq!(o.observers, vec!["AHMET ÇAKAR"]);
        assert_eq!(o.representatives, vec!["MEHMET YILMAZ", "VELİ KAYA"]);
    }

    #[test]
    fn observers_are_not_deduplicated() {
        let o = extract(&["A (GÖZLEMCİ)", "A (gozlemci)"], &Officials::default());
        assert_eq!(o.observers, vec!["A", "A"]);
    }

    #[test]
    fn untagged_text_keeps_existing() {
        let mut existing = Officials::default();
        existing.set_referee(RefereeSlot::Main, "MANUAL REF");
        existing.observers.push("OBS".into());
        assert_eq!(extract(&["GALATASARAY", "1. MUSLERA"], &existing), existing);
    }

    #[test]
    fn tags_merge_into_existing() {
        let mut existing = Officials::default();
        existing.set_referee(RefereeSlot::Main, "MANUAL REF");
        existing.set_referee(RefereeSlot::Fourth, "MANUAL FOURTH");
        existing.observers.push("OBS".into());
        existing.add_var("ATİLLA KARAOĞLAN");

        let o = extract(&["NEW REF (Hakem)", "ATİLLA KARAOĞLAN (VAR)", "X (Temsilci)"], &existing);
        assert_eq!(o.referee(RefereeSlot::Main), "NEW REF");
        assert_eq!(o.referee(RefereeSlot::Fourth), "MANUAL FOURTH");
        assert_eq!(o.observers, vec!["OBS"]);
        assert_eq!(o.var_referees, vec!["ATİLLA KARAOĞLAN"]);
        assert_eq!(o.representatives, vec!["X"]);
    }
}

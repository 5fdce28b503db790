/// Split pasted text into trimmed, non-empty lines (the unit of every scan).
/// Handles `\n`, `\r\n` and bare `\r` endings.
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let raw = "  GALATASARAY \r\n\r\n\t\n 2 \rFENERBAHÇE\n";
        assert_eq!(tokenize(raw), vec!["GALATASARAY", "2", "FENERBAHÇE"]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t \r\n").is_empty());
    }
}

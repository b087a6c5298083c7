//! Canonicalizes raw curriculum text before pattern matching.
//!
//! Source documents inconsistently use en dashes and em dashes for grade
//! ranges ("1–3" vs "1-3") and may carry Windows line endings. Downstream
//! heading patterns match on plain hyphens and `\n` only.

/// Strip carriage returns and rewrite dash variants to a plain hyphen.
/// Pure and idempotent.
pub fn normalize_text(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c != '\r')
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_carriage_returns() {
        assert_eq!(normalize_text("a\r\nb\r\n"), "a\nb\n");
    }

    #[test]
    fn rewrites_en_and_em_dashes() {
        assert_eq!(normalize_text("I årskurs 1–3"), "I årskurs 1-3");
        assert_eq!(normalize_text("I årskurs 4—6"), "I årskurs 4-6");
    }

    #[test]
    fn idempotent_on_normalized_input() {
        let once = normalize_text("Betygskriterier – årskurs 6\r\n");
        let twice = normalize_text(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn plain_text_unchanged() {
        let text = "Centralt innehåll\nUndervisningen i ämnet.";
        assert_eq!(normalize_text(text), text);
    }
}

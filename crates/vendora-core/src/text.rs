//! Text folding shared by the matcher and every catalog backend.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_/]+").expect("valid separator regex"));
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]+").expect("valid punctuation regex"));

/// Lowercase, turn `-`/`_`/`/` into spaces, drop other punctuation, and
/// collapse whitespace.
///
/// `migrations/0002_normalize_text.sql` defines the same folding as
/// `vendora_normalize_text` for the Postgres catalog.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let spaced = SEPARATORS.replace_all(&lowered, " ");
    let stripped = PUNCTUATION.replace_all(&spaced, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_strips_and_collapses() {
        assert_eq!(normalize_text("  Make-Up   ARTIST!! "), "make up artist");
        assert_eq!(normalize_text("D.J."), "dj");
        assert_eq!(normalize_text("wedding_photography"), "wedding photography");
        assert_eq!(normalize_text("?!"), "");
    }

    #[test]
    fn punctuated_descriptions_fold_to_plain_words() {
        assert_eq!(
            normalize_text("Balloon-artist, party decor"),
            "balloon artist party decor"
        );
        assert_eq!(normalize_text("Mehndi & Henna/Art"), "mehndi henna art");
    }

    #[test]
    fn non_ascii_letters_survive() {
        assert_eq!(normalize_text("Café Décor"), "café décor");
    }
}

//! Text normalization shared by entity extraction and intent classification.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Lower-case `s` and strip combining diacritics, so `León` and `leon`
/// compare equal.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split an utterance on whitespace into folded tokens.
///
/// No punctuation stripping: `managua?` is a different token from `managua`.
pub fn tokenize(utterance: &str) -> Vec<String> {
    utterance.split_whitespace().map(fold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_accents_and_case() {
        assert_eq!(fold("León"), "leon");
        assert_eq!(fold("ESTELÍ"), "esteli");
        assert_eq!(fold("Matagalpa"), "matagalpa");
    }

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        assert_eq!(
            tokenize("  Ruta\tManagua \n Granada "),
            vec!["ruta", "managua", "granada"]
        );
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation() {
        assert_eq!(tokenize("managua?"), vec!["managua?"]);
    }
}

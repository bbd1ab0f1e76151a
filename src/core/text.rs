use crate::domain::ports::TextNormalizer;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// 非字母 (\p{L}) 且非數字 (\p{N}) 的字元；組合記號 (Mn/Mc) 也會被移除
fn non_letters_or_digits() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").ok())
        .as_ref()
}

/// Unicode 小寫化，只保留字母與數字
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizer;

impl TextNormalizer for UnicodeNormalizer {
    fn normalize(&self, text: &str) -> Vec<char> {
        let lower = text.to_lowercase();
        match non_letters_or_digits() {
            Some(re) => re.replace_all(&lower, "").chars().collect(),
            // Unicode 類別不可用時退回 ASCII 路徑
            None => AsciiNormalizer.normalize(&lower),
        }
    }
}

/// ASCII 後備路徑：只保留 a-z0-9
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiNormalizer;

impl TextNormalizer for AsciiNormalizer {
    fn normalize(&self, text: &str) -> Vec<char> {
        text.chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    #[default]
    Unicode,
    Ascii,
}

impl Normalization {
    pub fn normalizer(self) -> &'static dyn TextNormalizer {
        match self {
            Normalization::Unicode => &UnicodeNormalizer,
            Normalization::Ascii => &AsciiNormalizer,
        }
    }
}

pub fn is_palindrome(text: &str) -> bool {
    is_palindrome_with(text, &UnicodeNormalizer)
}

/// 以指定的正規化方式判斷回文；正規化後為空字串視為回文
pub fn is_palindrome_with(text: &str, normalizer: &dyn TextNormalizer) -> bool {
    let chars = normalizer.normalize(text);
    chars.iter().eq(chars.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_examples() {
        assert!(is_palindrome("reconocer"));
        assert!(is_palindrome("Anita lava la tina"));
        assert!(!is_palindrome("No es palindromo"));
    }

    #[test]
    fn test_empty_after_normalization_is_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("  ¡¿?! ...  "));
    }

    #[test]
    fn test_unicode_letters_survive_normalization() {
        let normalized: String = UnicodeNormalizer.normalize("¡Él sé, LÉ!").into_iter().collect();
        assert_eq!(normalized, "élsélé");
        assert!(is_palindrome("Ésé"));
        assert!(!is_palindrome("Ése"));
    }

    #[test]
    fn test_combining_marks_are_not_letters() {
        // U+093E 天城文母音符號、U+05B0 希伯來文點符都屬於 Mn/Mc
        let normalized: String = UnicodeNormalizer
            .normalize("a\u{093E} \u{05D0}\u{05B0}b")
            .into_iter()
            .collect();
        assert_eq!(normalized, "a\u{05D0}b");
        assert!(is_palindrome("a\u{093E}"));
        assert!(is_palindrome("\u{05D0}\u{05B0}\u{05D1}\u{05D0}"));
    }

    #[test]
    fn test_reversal_keeps_multibyte_chars_intact() {
        assert!(is_palindrome("añaña"));
        assert!(is_palindrome("日本日"));
        assert!(!is_palindrome("日本"));
    }

    #[test]
    fn test_ascii_fallback_drops_non_ascii() {
        let normalized: String = AsciiNormalizer.normalize("Ñu, 42 A!").into_iter().collect();
        assert_eq!(normalized, "u42a");
        assert!(is_palindrome_with("A man, a plan, a canal: Panama", &AsciiNormalizer));
        // ASCII 模式下 ñ 會被丟棄
        assert!(is_palindrome_with("aña", &AsciiNormalizer));
    }

    #[test]
    fn test_normalization_selects_normalizer() {
        let text = "Oñ a o";
        assert!(!is_palindrome_with(text, Normalization::Unicode.normalizer()));
        assert!(is_palindrome_with(text, Normalization::Ascii.normalizer()));
    }
}

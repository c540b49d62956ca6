//! Structural statistics for plain note text.
//!
//! # Responsibility
//! - Count characters, words, lines and paragraphs in one left-to-right scan.
//! - Segment CJK ideographs one character per word, unlike space-delimited
//!   scripts.
//!
//! # Invariants
//! - Blank input (empty or whitespace-only) yields the all-zero value.
//! - Non-blank input has `line_count >= 1` and `paragraph_count >= 1`.
//! - Every newline directly after another newline adds one paragraph, so
//!   `N` consecutive newlines add `N - 1` paragraphs.
//! - `char_count` is measured in UTF-16 code units.

use serde::{Deserialize, Serialize};

/// Characters counted as punctuation tokens (Latin and CJK).
const PUNCTUATION: &str = "，。、：；？！\"'（）《》「」【】!§$%&/()=?`*_:;><|,.#+~\\{[]}";

/// Derived counters for one note text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Input length in UTF-16 code units.
    pub char_count: usize,
    /// Word-like tokens plus punctuation tokens.
    pub word_count_with_punctuation: usize,
    /// Word-like tokens only.
    pub word_count_without_punctuation: usize,
    pub line_count: usize,
    pub paragraph_count: usize,
}

impl TextStatistics {
    /// Computes statistics for `text`.
    ///
    /// Never fails. Blank input short-circuits to [`TextStatistics::default`].
    pub fn compute(text: &str) -> Self {
        if is_blank(text) {
            return Self::default();
        }

        let mut scan = Scanner::new(text.encode_utf16().count());
        for ch in text.chars() {
            scan.feed(ch);
        }
        scan.stats
    }

    /// Returns whether this is the all-zero value produced for blank input.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Character class used by the scanner, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Newline,
    Whitespace,
    Cjk,
    Punctuation,
    Word,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch == '\n' {
            Self::Newline
        } else if ch.is_whitespace() {
            Self::Whitespace
        } else if is_cjk(ch) {
            Self::Cjk
        } else if is_punctuation(ch) {
            Self::Punctuation
        } else {
            Self::Word
        }
    }
}

struct Scanner {
    stats: TextStatistics,
    in_word: bool,
    just_saw_newline: bool,
}

impl Scanner {
    fn new(char_count: usize) -> Self {
        Self {
            stats: TextStatistics {
                char_count,
                word_count_with_punctuation: 0,
                word_count_without_punctuation: 0,
                line_count: 1,
                paragraph_count: 1,
            },
            in_word: false,
            just_saw_newline: false,
        }
    }

    fn feed(&mut self, ch: char) {
        match CharClass::of(ch) {
            CharClass::Newline => {
                self.in_word = false;
                self.stats.line_count += 1;
                if self.just_saw_newline {
                    self.stats.paragraph_count += 1;
                }
                self.just_saw_newline = true;
            }
            CharClass::Whitespace => {
                // Spaces on an otherwise empty line keep it blank.
                self.in_word = false;
            }
            CharClass::Cjk => {
                self.stats.word_count_with_punctuation += 1;
                self.stats.word_count_without_punctuation += 1;
                self.in_word = false;
            }
            CharClass::Punctuation => {
                self.stats.word_count_with_punctuation += 1;
                self.in_word = false;
            }
            CharClass::Word => {
                if !self.in_word {
                    self.stats.word_count_with_punctuation += 1;
                    self.stats.word_count_without_punctuation += 1;
                    self.in_word = true;
                }
                self.just_saw_newline = false;
            }
        }
    }
}

/// Returns whether `ch` is a CJK ideograph segmented one-per-word.
pub fn is_cjk(ch: char) -> bool {
    matches!(ch,
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}' |   // Extension A
        '\u{20000}'..='\u{2A6DF}' | // Extension B
        '\u{F900}'..='\u{FAFF}' |   // Compatibility Ideographs
        '\u{2F800}'..='\u{2FA1F}'   // Compatibility Ideographs Supplement
    )
}

/// Returns whether `ch` belongs to the fixed punctuation set.
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::{is_cjk, is_punctuation, CharClass, TextStatistics};

    #[test]
    fn newline_wins_over_whitespace_classification() {
        assert_eq!(CharClass::of('\n'), CharClass::Newline);
        assert_eq!(CharClass::of('\r'), CharClass::Whitespace);
        assert_eq!(CharClass::of('\u{3000}'), CharClass::Whitespace);
    }

    #[test]
    fn cjk_ranges_include_supplementary_planes() {
        assert!(is_cjk('中'));
        assert!(is_cjk('\u{3400}'));
        assert!(is_cjk('\u{20000}'));
        assert!(is_cjk('\u{2FA1F}'));
        assert!(!is_cjk('あ'));
        assert!(!is_cjk('a'));
    }

    #[test]
    fn punctuation_set_covers_latin_and_cjk_marks() {
        for ch in ['，', '。', '【', '!', '§', '`', '\\', '{', '}', '~'] {
            assert!(is_punctuation(ch), "{ch} should be punctuation");
        }
        for ch in ['-', '@', '^', 'a', '1'] {
            assert!(!is_punctuation(ch), "{ch} should not be punctuation");
        }
    }

    #[test]
    fn char_count_uses_utf16_code_units() {
        let stats = TextStatistics::compute("a\u{20000}");
        assert_eq!(stats.char_count, 3);
        assert_eq!(stats.word_count_without_punctuation, 2);
    }

    #[test]
    fn default_is_empty() {
        assert!(TextStatistics::default().is_empty());
        assert!(!TextStatistics::compute("x").is_empty());
    }
}

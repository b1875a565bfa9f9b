// Whitespace and punctuation segmentation over UTF-8 bytes
//
// A token is a maximal run of non-whitespace code points containing no
// punctuation. Each punctuation code point becomes a token of its own.
// Decoding is best effort: malformed bytes never fail, they are consumed
// one at a time.

use std::ops::Range;

use lamon_core::TokenInfo;
use lamon_core::character::{decode_char, is_punctuation, is_whitespace};

/// Iterator over token byte ranges, in input order.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    bytes: &'a [u8],
    /// End of the previous token.
    end: usize,
    /// Byte width of the punctuation code point at `end`, 0 if none.
    punct_width: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            end: 0,
            punct_width: 0,
        }
    }

    fn punct_width_at(&self, pos: usize) -> usize {
        match decode_char(self.bytes, pos) {
            (cp, width) if width > 0 && is_punctuation(cp) => width,
            _ => 0,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let len = self.bytes.len();
        loop {
            let start;
            if self.punct_width > 0 {
                start = self.end;
                self.end = (start + self.punct_width).min(len);
                self.punct_width = self.punct_width_at(self.end);
            } else {
                let mut pos = self.end;
                while pos < len {
                    let (cp, width) = decode_char(self.bytes, pos);
                    if !is_whitespace(cp) {
                        break;
                    }
                    pos += width;
                }
                if pos >= len {
                    self.end = len;
                    return None;
                }
                start = pos;

                let mut end = start;
                while end < len {
                    let (cp, width) = decode_char(self.bytes, end);
                    if is_whitespace(cp) {
                        break;
                    }
                    end += width;
                }

                let mut p = start;
                while p < end {
                    let width = self.punct_width_at(p);
                    if width > 0 {
                        self.punct_width = width;
                        end = p;
                        break;
                    }
                    p += decode_char(self.bytes, p).1;
                }
                self.end = end.min(len);
            }

            if start < self.end {
                return Some(start..self.end);
            }
        }
    }
}

/// Token ranges of `text`.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens::new(text.as_bytes())
}

/// Token spans of `text` with empty candidate lists.
pub fn tokenize(text: &str) -> Vec<TokenInfo> {
    tokens(text)
        .map(|r| TokenInfo::new(r.start, r.end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        tokens(text).map(|r| &text[r]).collect()
    }

    #[test]
    fn split_on_whitespace() {
        assert_eq!(words("rosa  amat\tpuellam\n"), vec!["rosa", "amat", "puellam"]);
    }

    #[test]
    fn punctuation_is_its_own_token() {
        assert_eq!(words("rosae amat."), vec!["rosae", "amat", "."]);
        assert_eq!(words("\"Gallia\""), vec!["\"", "Gallia", "\""]);
    }

    #[test]
    fn consecutive_punctuation() {
        assert_eq!(words("quid?!"), vec!["quid", "?", "!"]);
        assert_eq!(words("...et"), vec![".", ".", ".", "et"]);
    }

    #[test]
    fn punctuation_inside_a_word() {
        assert_eq!(words("a,b c"), vec!["a", ",", "b", "c"]);
    }

    #[test]
    fn unicode_punctuation_and_spaces() {
        assert_eq!(
            words("«rosa»\u{3000}amat\u{00A0}—"),
            vec!["«", "rosa", "»", "amat", "—"]
        );
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(words("").is_empty());
        assert!(words(" \t\n").is_empty());
    }

    #[test]
    fn multibyte_letters_stay_in_word() {
        assert_eq!(words("Cæsar ōrātiōnem"), vec!["Cæsar", "ōrātiōnem"]);
    }

    #[test]
    fn malformed_bytes_do_not_fail() {
        let bytes = b"ab\xFF\xFEcd ef";
        let spans: Vec<_> = Tokens::new(bytes).collect();
        assert_eq!(spans, vec![0..6, 7..9]);
    }

    #[test]
    fn spans_are_increasing_and_cover_non_whitespace() {
        let text = " Arma, uirumque canō; Troiae qui prīmus ab ōrīs…  ";
        let spans: Vec<_> = tokens(text).collect();
        assert!(spans.iter().all(|r| !r.is_empty()));
        assert!(spans.windows(2).all(|w| w[0].end <= w[1].start));

        let covered: String = spans.iter().map(|r| &text[r.clone()]).collect();
        let expected: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn tokenize_builds_token_infos() {
        let toks = tokenize("rosae amat.");
        assert_eq!(toks.len(), 3);
        assert_eq!((toks[2].start, toks[2].end), (10, 11));
        assert!(toks.iter().all(TokenInfo::is_unknown));
    }
}

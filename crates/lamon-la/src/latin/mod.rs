//! Latin-specific rules shared by the dictionary and the tagger.

pub mod constants;

use lamon_core::Feature;

use constants::{GUESS_CASES, GUESS_COUNT, GUESS_NUMBERS};

/// Nominal analyses tried for an alphabetic token the dictionary does not
/// know: every gender, number and case, with case varying fastest.
pub fn unknown_guesses() -> impl ExactSizeIterator<Item = Feature> {
    (0..GUESS_COUNT as u8).map(|i| {
        let mut f = Feature::EMPTY;
        f.set_gender(i / (GUESS_NUMBERS * GUESS_CASES) + 1);
        f.set_number((i / GUESS_CASES) % GUESS_NUMBERS + 1);
        f.set_case(i % GUESS_CASES + 1);
        f
    })
}

/// True when every byte of `token` is an ASCII letter.
///
/// Only such tokens get the full set of [`unknown_guesses`]; anything
/// else unknown is scored as a bare unknown token.
pub fn is_alphabetic(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_cover_every_combination_once() {
        let all: Vec<Feature> = unknown_guesses().collect();
        assert_eq!(all.len(), 36);
        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 36);
        for f in &all {
            assert!((1..=3).contains(&f.gender()));
            assert!((1..=2).contains(&f.number()));
            assert!((1..=6).contains(&f.case()));
            assert_eq!(f.mood(), 0);
        }
    }

    #[test]
    fn guess_order() {
        let all: Vec<Feature> = unknown_guesses().collect();
        assert_eq!(all[0], Feature::parse("mso").unwrap());
        assert_eq!(all[1], Feature::parse("msg").unwrap());
        assert_eq!(all[6], Feature::parse("mpo").unwrap());
        assert_eq!(all[12], Feature::parse("fso").unwrap());
        assert_eq!(all[35], Feature::parse("npv").unwrap());
    }

    #[test]
    fn alphabetic_tokens() {
        assert!(is_alphabetic("Marcus"));
        assert!(!is_alphabetic("Mārcus"));
        assert!(!is_alphabetic("x1"));
        assert!(!is_alphabetic("."));
        assert!(is_alphabetic(""));
    }
}

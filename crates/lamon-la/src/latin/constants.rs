// Fixed vocabulary of the Latin module

/// Enclitic suffixes, tried in this order; only the first match is stripped.
pub const ENCLITICS: [&str; 3] = ["que", "ne", "ue"];

/// Forms of this many bytes or fewer never have an enclitic stripped.
pub const ENCLITIC_MIN_LEN: usize = 3;

/// Lemma that stands for every numeral.
pub const NUMERAL_LEMMA: &str = "[NUM]";

/// Genders, numbers and cases enumerated for an unknown alphabetic token.
pub const GUESS_GENDERS: u8 = 3;
pub const GUESS_NUMBERS: u8 = 2;
pub const GUESS_CASES: u8 = 6;

/// Number of nominal guesses for an unknown alphabetic token.
pub const GUESS_COUNT: usize = (GUESS_GENDERS * GUESS_NUMBERS * GUESS_CASES) as usize;

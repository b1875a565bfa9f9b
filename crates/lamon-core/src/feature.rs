// Packed morphological feature bundle and its textual encodings.
//
// A `Feature` holds eight small enumerations (mood, tense, voice, person,
// gender, number, case, degree), one byte each. Zero always means "unset".
// Two textual dialects are supported:
//
// - the compact dialect (`parse` / `render`), one character per contribution,
//   e.g. `"IRMA3s"`
// - the positional dialect (`render_perseus`), nine fixed columns with `-`
//   for unset fields, e.g. `"v3sima---"` for the same verb form

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Number of sub-fields in a [`Feature`].
pub const FEATURE_SLOTS: usize = 8;

pub const MOOD: usize = 0;
pub const TENSE: usize = 1;
pub const VOICE: usize = 2;
pub const PERSON: usize = 3;
pub const GENDER: usize = 4;
pub const NUMBER: usize = 5;
pub const CASE: usize = 6;
pub const DEGREE: usize = 7;

/// Field names in slot order.
pub const SLOT_NAMES: [&str; FEATURE_SLOTS] = [
    "mood", "tense", "voice", "person", "gender", "number", "case", "degree",
];

/// Error raised while parsing a compact tag string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    #[error("unrecognized tag character '{0}'")]
    UnrecognizedTagChar(char),
}

/// Eight one-byte morphological fields packed into a 64-bit value.
///
/// Byte `i` of the little-endian `u64` is slot `i`, so ordering follows
/// the packed integer with `mood` as the least significant byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Feature {
    slots: [u8; FEATURE_SLOTS],
}

macro_rules! slot_accessors {
    ($($get:ident, $set:ident, $ctor:ident => $slot:expr;)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> u8 {
                self.slots[$slot]
            }

            #[inline]
            pub fn $set(&mut self, value: u8) {
                self.slots[$slot] = value;
            }

            /// A feature with only this field set.
            #[inline]
            pub const fn $ctor(value: u8) -> Self {
                let mut slots = [0u8; FEATURE_SLOTS];
                slots[$slot] = value;
                Self { slots }
            }
        )*
    };
}

impl Feature {
    /// The all-zero (unmarked) feature.
    pub const EMPTY: Feature = Feature {
        slots: [0; FEATURE_SLOTS],
    };

    pub const fn from_slots(slots: [u8; FEATURE_SLOTS]) -> Self {
        Self { slots }
    }

    pub const fn from_u64(value: u64) -> Self {
        Self {
            slots: value.to_le_bytes(),
        }
    }

    pub const fn as_u64(&self) -> u64 {
        u64::from_le_bytes(self.slots)
    }

    pub fn slots(&self) -> &[u8; FEATURE_SLOTS] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.as_u64() == 0
    }

    slot_accessors! {
        mood, set_mood, moods => MOOD;
        tense, set_tense, tenses => TENSE;
        voice, set_voice, voices => VOICE;
        person, set_person, persons => PERSON;
        gender, set_gender, genders => GENDER;
        number, set_number, numbers => NUMBER;
        case, set_case, cases => CASE;
        degree, set_degree, degrees => DEGREE;
    }

    /// `(name, value)` pairs in slot order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        SLOT_NAMES.iter().copied().zip(self.slots.iter().copied())
    }

    /// Parses a compact tag string, accumulating each character's contribution.
    ///
    /// `T` (the mood marker) also contributes `tense = 1`.
    pub fn parse(tag: &str) -> Result<Self, FeatureError> {
        let mut feature = Feature::EMPTY;
        for c in tag.chars() {
            let contribution = tag_char_contribution(c).ok_or(FeatureError::UnrecognizedTagChar(c))?;
            feature += contribution;
            if c == 'T' {
                feature += Feature::tenses(1);
            }
        }
        Ok(feature)
    }

    /// Renders the compact dialect.
    ///
    /// Fields are emitted in slot order, at most one character each (two for
    /// tense), then `M`/`E` are dropped when `L` is present, or `0` when `T`
    /// is present.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(c) = pick(b"DSITLN", self.mood(), 1) {
            out.push(c);
        }
        let tense = self.tense();
        if tense > 0 {
            if let Some(c) = pick(b"0RF", (tense - 1) / 2, 0) {
                out.push(c);
            }
            if let Some(c) = pick(b"ME", (tense - 1) % 2, 0) {
                out.push(c);
            }
        }
        if let Some(c) = pick(b"AP", self.voice(), 1) {
            out.push(c);
        }
        if let Some(c) = pick(b"123", self.person(), 1) {
            out.push(c);
        }
        if let Some(c) = pick(b"mfn", self.gender(), 1) {
            out.push(c);
        }
        if let Some(c) = pick(b"sp", self.number(), 1) {
            out.push(c);
        }
        if let Some(c) = pick(b"ogdabvx", self.case(), 1) {
            out.push(c);
        }
        if self.degree() > 1 {
            if let Some(c) = pick(b"cu", self.degree(), 2) {
                out.push(c);
            }
        }

        if out.contains('L') {
            remove_first(&mut out, 'M');
            remove_first(&mut out, 'E');
        } else if out.contains('T') {
            remove_first(&mut out, '0');
        }
        out
    }

    /// Renders the nine-column positional dialect:
    /// part of speech, person, number, tense, mood, voice, gender, case, degree.
    ///
    /// Gerundives (`mood = 6`, `tense = 5`, `voice = 2`) render their
    /// tense/mood/voice columns as `-g-`.
    pub fn render_perseus(&self, pos: Option<char>) -> String {
        let mut out = String::with_capacity(9);
        out.push(pos.and_then(perseus_pos).unwrap_or('-'));
        out.push(column(b"-123", self.person()));
        out.push(column(b"-sp", self.number()));
        if self.mood() == 6 && self.tense() == 5 && self.voice() == 2 {
            out.push_str("-g-");
        } else {
            out.push(column(b"-prilft", self.tense()));
            out.push(column(b"-ismnp-", self.mood()));
            out.push(column(b"-ap", self.voice()));
        }
        out.push(column(b"-mfn", self.gender()));
        out.push(column(b"-ngdabv-", self.case()));
        let degree = if pos == Some('a') && self.degree() == 0 {
            1
        } else {
            self.degree()
        };
        out.push(column(b"-pcs", degree));
        out
    }

    /// Packs the eight fields into four bytes, two nibbles per byte with the
    /// even slot in the low nibble. Field values above 15 are truncated.
    pub fn to_packed(&self) -> [u8; 4] {
        let mut buf = [0u8; 4];
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = (self.slots[i * 2] & 0x0F) | (self.slots[i * 2 + 1] << 4);
        }
        buf
    }

    /// Inverse of [`Feature::to_packed`].
    pub fn from_packed(buf: [u8; 4]) -> Self {
        let mut slots = [0u8; FEATURE_SLOTS];
        for (i, byte) in buf.iter().enumerate() {
            slots[i * 2] = byte & 0x0F;
            slots[i * 2 + 1] = byte >> 4;
        }
        Self { slots }
    }
}

/// Contribution of one compact-dialect character.
const fn tag_char_contribution(c: char) -> Option<Feature> {
    let f = match c {
        's' => Feature::numbers(1),
        'p' => Feature::numbers(2),

        'm' => Feature::genders(1),
        'f' => Feature::genders(2),
        'n' => Feature::genders(3),

        'o' => Feature::cases(1),
        'g' => Feature::cases(2),
        'd' => Feature::cases(3),
        'a' => Feature::cases(4),
        'b' => Feature::cases(5),
        'v' => Feature::cases(6),
        'x' => Feature::cases(7),

        'r' | 'i' | 'j' | 'M' => Feature::EMPTY,

        'c' => Feature::degrees(2),
        'u' => Feature::degrees(3),

        '1' => Feature::persons(1),
        '2' => Feature::persons(2),
        '3' => Feature::persons(3),

        'A' => Feature::voices(1),
        'P' => Feature::voices(2),

        '0' | 'E' => Feature::tenses(1),
        'R' => Feature::tenses(3),
        'F' => Feature::tenses(5),

        'D' => Feature::moods(1),
        'S' => Feature::moods(2),
        'I' => Feature::moods(3),
        'T' => Feature::moods(4),
        'L' => Feature::moods(5),
        'N' => Feature::moods(6),
        _ => return None,
    };
    Some(f)
}

fn perseus_pos(pos: char) -> Option<char> {
    match pos {
        'n' => Some('n'),
        'v' => Some('v'),
        'a' => Some('a'),
        'e' => Some('d'),
        'c' => Some('c'),
        'p' => Some('r'),
        'r' => Some('p'),
        'u' => Some('m'),
        'i' => Some('i'),
        _ => None,
    }
}

/// `alphabet[value - base]` for non-zero values, `None` when unset or out of range.
fn pick(alphabet: &[u8], value: u8, base: u8) -> Option<char> {
    if base > 0 && value == 0 {
        return None;
    }
    let idx = value.checked_sub(base)? as usize;
    alphabet.get(idx).map(|&b| b as char)
}

fn column(alphabet: &[u8], value: u8) -> char {
    alphabet.get(value as usize).map_or('-', |&b| b as char)
}

fn remove_first(s: &mut String, c: char) {
    if let Some(p) = s.find(c) {
        s.remove(p);
    }
}

impl PartialOrd for Feature {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Feature {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_u64().cmp(&other.as_u64())
    }
}

/// Field-wise addition. At most one side sets any given field in practice.
impl Add for Feature {
    type Output = Feature;

    fn add(mut self, rhs: Feature) -> Feature {
        self += rhs;
        self
    }
}

impl AddAssign for Feature {
    fn add_assign(&mut self, rhs: Feature) {
        for (a, b) in self.slots.iter_mut().zip(rhs.slots) {
            *a = a.wrapping_add(b);
        }
    }
}

impl Index<usize> for Feature {
    type Output = u8;

    fn index(&self, slot: usize) -> &u8 {
        &self.slots[slot]
    }
}

impl IndexMut<usize> for Feature {
    fn index_mut(&mut self, slot: usize) -> &mut u8 {
        &mut self.slots[slot]
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Feature", FEATURE_SLOTS)?;
        for (name, value) in self.fields() {
            state.serialize_field(name, &value)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(tag: &str) -> Feature {
        Feature::parse(tag).unwrap()
    }

    #[test]
    fn parse_noun_tag() {
        let f = p("sg");
        assert_eq!(f.number(), 1);
        assert_eq!(f.case(), 2);
        assert_eq!(f.gender(), 0);
    }

    #[test]
    fn parse_empty_is_empty() {
        assert!(p("").is_empty());
    }

    #[test]
    fn parse_rejects_unknown_character() {
        assert_eq!(
            Feature::parse("sgZ"),
            Err(FeatureError::UnrecognizedTagChar('Z'))
        );
    }

    #[test]
    fn parse_t_also_sets_tense() {
        let f = p("T");
        assert_eq!(f.mood(), 4);
        assert_eq!(f.tense(), 1);
    }

    #[test]
    fn parse_accumulates_tense_markers() {
        // R (3) + E (1)
        assert_eq!(p("RE").tense(), 4);
        // F (5) + M (0)
        assert_eq!(p("FM").tense(), 5);
    }

    #[test]
    fn render_verb_tag() {
        let f = p("IRMA3s");
        assert_eq!(f.render(), "IRMA3s");
    }

    #[test]
    fn render_drops_tense_submarkers_after_l() {
        let f = p("L0MA");
        assert_eq!(f.render(), "L0A");
    }

    #[test]
    fn render_drops_zero_after_t() {
        // T contributes tense 1, which renders as "0M"; the 0 is dropped.
        let f = p("TA");
        assert_eq!(f.render(), "TMA");
        assert_eq!(p(&f.render()), f);
    }

    #[test]
    fn render_skips_positive_degree() {
        assert_eq!(Feature::degrees(1).render(), "");
        assert_eq!(Feature::degrees(2).render(), "c");
        assert_eq!(Feature::degrees(3).render(), "u");
    }

    #[test]
    fn render_then_parse_is_stable() {
        for tag in [
            "sg", "pa", "mso", "IRMA3s", "SFEP2p", "N0MPmsa", "TA", "L0MA", "LRMP", "DFMA",
            "fpb", "nsxc", "u", "I0EA1p",
        ] {
            let f = p(tag);
            assert_eq!(p(&f.render()), f, "tag {tag}");
        }
    }

    #[test]
    fn perseus_noun() {
        let f = p("fsg");
        assert_eq!(f.render_perseus(Some('n')), "n-s---fg-");
    }

    #[test]
    fn perseus_adjective_defaults_to_positive() {
        let f = p("msa");
        assert_eq!(f.render_perseus(Some('a')), "a-s---map");
    }

    #[test]
    fn perseus_gerundive() {
        let f = Feature::from_slots([6, 5, 2, 0, 1, 1, 1, 0]);
        assert_eq!(f.render_perseus(Some('v')), "v-s-g-mn-");
    }

    #[test]
    fn perseus_unknown_pos() {
        assert_eq!(Feature::EMPTY.render_perseus(None), "---------");
        assert_eq!(Feature::EMPTY.render_perseus(Some('z')), "---------");
    }

    #[test]
    fn perseus_verb() {
        let f = p("IRMA3s");
        assert_eq!(f.render_perseus(Some('v')), "v3sima---");
    }

    #[test]
    fn packed_round_trip() {
        for f in [
            Feature::EMPTY,
            p("IRMA3s"),
            Feature::from_slots([6, 5, 2, 3, 3, 2, 7, 3]),
            Feature::from_slots([15, 0, 15, 1, 0, 15, 2, 15]),
        ] {
            assert_eq!(Feature::from_packed(f.to_packed()), f);
        }
    }

    #[test]
    fn packed_layout_is_low_nibble_first() {
        let f = Feature::from_slots([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(f.to_packed(), [0x21, 0x43, 0x65, 0x87]);
    }

    #[test]
    fn ordering_follows_packed_value() {
        // degree is the most significant byte
        assert!(Feature::degrees(1) > Feature::moods(6));
        assert!(Feature::moods(2) > Feature::moods(1));
        assert_eq!(Feature::from_u64(p("sg").as_u64()), p("sg"));
    }

    #[test]
    fn addition_is_fieldwise() {
        let f = Feature::numbers(1) + Feature::cases(2);
        assert_eq!(f, p("sg"));
        assert_eq!(f[NUMBER], 1);
        assert_eq!(f[CASE], 2);
    }

    #[test]
    fn serializes_named_fields() {
        let json = serde_json::to_value(p("sg")).unwrap();
        assert_eq!(json["number"], 1);
        assert_eq!(json["case"], 2);
        assert_eq!(json["mood"], 0);
    }
}

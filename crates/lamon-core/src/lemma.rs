// Lemma candidates, token spans and tagged output tokens

use serde::Serialize;

use crate::feature::Feature;

/// One candidate analysis of a surface form: a lemma id plus its features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LemmaInfo {
    pub lemma_id: u32,
    pub feature: Feature,
}

impl LemmaInfo {
    pub fn new(lemma_id: u32, feature: Feature) -> Self {
        Self { lemma_id, feature }
    }
}

/// A token span `[start, end)` in bytes of the source text, with the
/// candidates the dictionary attached to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenInfo {
    pub start: usize,
    pub end: usize,
    pub candidates: Vec<LemmaInfo>,
}

impl TokenInfo {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            candidates: Vec::new(),
        }
    }

    /// Byte length of the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when no dictionary candidate was found.
    pub fn is_unknown(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The source text covered by this span.
    ///
    /// Returns `None` if the span does not fall on character boundaries.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// A rendered tag: the raw feature fields, or a tag string in one of the
/// textual dialects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tag {
    Raw(Feature),
    Text(String),
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Raw(feature) => {
                let mut first = true;
                for (name, value) in feature.fields().filter(|(_, v)| *v != 0) {
                    if !first {
                        f.write_str(",")?;
                    }
                    write!(f, "{name}={value}")?;
                    first = false;
                }
                Ok(())
            }
            Tag::Text(s) => f.write_str(s),
        }
    }
}

/// One token of a tagging result. Offsets count code points in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    pub start: usize,
    pub end: usize,
    pub lemma: String,
    pub tag: Tag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_span_text() {
        let src = "rosae amat.";
        let tok = TokenInfo::new(6, 10);
        assert_eq!(tok.text(src), Some("amat"));
        assert_eq!(tok.len(), 4);
        assert!(tok.is_unknown());
        assert!(!tok.is_empty());
    }

    #[test]
    fn span_off_char_boundary() {
        let tok = TokenInfo::new(0, 1);
        assert_eq!(tok.text("æ"), None);
    }

    #[test]
    fn raw_tag_display_lists_set_fields() {
        let tag = Tag::Raw(Feature::parse("fsg").unwrap());
        assert_eq!(tag.to_string(), "gender=2,number=1,case=2");
        assert_eq!(Tag::Raw(Feature::EMPTY).to_string(), "");
    }

    #[test]
    fn tagged_token_json_shape() {
        let tok = TaggedToken {
            start: 0,
            end: 5,
            lemma: "rosa".into(),
            tag: Tag::Text("n-s---fg-".into()),
        };
        let json = serde_json::to_value(&tok).unwrap();
        assert_eq!(json["lemma"], "rosa");
        assert_eq!(json["tag"], "n-s---fg-");
        assert_eq!(json["end"], 5);

        let raw = TaggedToken {
            tag: Tag::Raw(Feature::parse("sg").unwrap()),
            ..tok
        };
        let json = serde_json::to_value(&raw).unwrap();
        assert_eq!(json["tag"]["case"], 2);
    }
}

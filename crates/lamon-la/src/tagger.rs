// Tagger: dictionary candidates ranked by the recurrent model
//
// The dictionary supplies the candidate (lemma, feature) pairs per token;
// the model's beam search picks one per token for the whole sentence.
// Lemma ids double as the model's token ids.

use lamon_core::character::char_count;
use lamon_core::{Feature, Tag, TagStyle, TaggedToken, TokenInfo};
use lamon_nn::{Candidate, CellOutput, DecOutput, ModelOptions, NnError, TaggerModel, TensorStore};
use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, DictionaryError};
use crate::latin;

/// Error type for tagger construction and tagging.
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error(transparent)]
    Nn(#[from] NnError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("dictionary does not match model: {0}")]
    ModelMismatch(String),
    #[error("invalid tagging options: {0}")]
    InvalidOptions(String),
}

/// Options for a single tagging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagOptions {
    pub style: TagStyle,
    /// Paths kept per step; at least 1.
    pub beam_size: usize,
    /// Rescore the surviving paths with the backward cell.
    pub bidirectional: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            style: TagStyle::default(),
            beam_size: 1,
            bidirectional: true,
        }
    }
}

/// Options for [`Tagger::tag_batch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Worker threads; 0 uses one per available core.
    pub num_workers: usize,
}

/// One ranked tagging of a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedSequence {
    pub score: f32,
    pub tokens: Vec<TaggedToken>,
}

/// A dictionary analysis rendered for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LemmaCandidate {
    pub lemma: String,
    pub tag: Tag,
}

/// A token with every analysis the dictionary offers for it.
/// Offsets count code points in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCandidates {
    pub start: usize,
    pub end: usize,
    pub candidates: Vec<LemmaCandidate>,
}

/// Maps byte offsets of increasing spans to code point offsets.
struct CharOffsets<'a> {
    bytes: &'a [u8],
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            byte: 0,
            chars: 0,
        }
    }

    fn to_char(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        let byte = byte.min(self.bytes.len());
        self.chars += char_count(&self.bytes[self.byte..byte]);
        self.byte = byte;
        self.chars
    }
}

/// Code point spans of `tokens`, in order.
fn char_spans(text: &str, tokens: &[TokenInfo]) -> Vec<(usize, usize)> {
    let mut offsets = CharOffsets::new(text);
    tokens
        .iter()
        .map(|t| (offsets.to_char(t.start), offsets.to_char(t.end)))
        .collect()
}

/// Lists every token of `text` with its dictionary analyses, without
/// consulting a model.
pub fn list_candidates(dictionary: &Dictionary, text: &str, style: TagStyle) -> Vec<TokenCandidates> {
    let tokens = dictionary.analyze(text);
    char_spans(text, &tokens)
        .into_iter()
        .zip(tokens)
        .map(|((start, end), token)| TokenCandidates {
            start,
            end,
            candidates: token
                .candidates
                .iter()
                .map(|c| LemmaCandidate {
                    lemma: dictionary.lemma(c.lemma_id).unwrap_or_default().to_string(),
                    tag: style.render(c.feature, dictionary.pos(c.lemma_id)),
                })
                .collect(),
        })
        .collect()
}

/// Orders candidates best first, breaking score ties by the larger token
/// id and then the larger feature, and keeps at most `beam_size`.
fn rank_candidates(candidates: &mut Vec<Candidate>, beam_size: usize) {
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.output.token.cmp(&a.output.token))
            .then_with(|| b.output.feature.cmp(&a.output.feature))
    });
    candidates.truncate(beam_size);
}

fn scored(out: &mut CellOutput<'_>, output: DecOutput) -> Candidate {
    Candidate::new(out.score(&output), output)
}

/// Dictionary plus model, ready to tag text.
#[derive(Debug)]
pub struct Tagger<'m> {
    dictionary: Dictionary,
    model: TaggerModel<'m>,
}

impl<'m> Tagger<'m> {
    /// Loads the model from `store` and pairs it with `dictionary`.
    ///
    /// The dictionary's lemma table is the model's token vocabulary, so it
    /// must cover every token id the model can emit.
    pub fn new(dictionary: Dictionary, store: &'m TensorStore, options: ModelOptions) -> Result<Self, TaggerError> {
        let model = TaggerModel::load(store, options)?;
        Self::from_parts(dictionary, model)
    }

    pub fn from_parts(dictionary: Dictionary, model: TaggerModel<'m>) -> Result<Self, TaggerError> {
        if dictionary.len() < model.vocab_size() {
            return Err(TaggerError::ModelMismatch(format!(
                "{} lemmas for a vocabulary of {} tokens",
                dictionary.len(),
                model.vocab_size()
            )));
        }
        if dictionary.len() > model.vocab_size() {
            tracing::debug!(
                lemmas = dictionary.len(),
                vocab = model.vocab_size(),
                "lemmas outside the model vocabulary are scored as unknown"
            );
        }
        Ok(Self { dictionary, model })
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn model(&self) -> &TaggerModel<'m> {
        &self.model
    }

    /// See [`list_candidates`].
    pub fn list_candidates(&self, text: &str, style: TagStyle) -> Vec<TokenCandidates> {
        list_candidates(&self.dictionary, text, style)
    }

    /// Tags `text`, returning up to `beam_size` sequences best first.
    ///
    /// A token without dictionary candidates is scored as the unknown
    /// token: with every nominal guess when it is purely alphabetic,
    /// otherwise with an empty feature.
    pub fn tag(&self, text: &str, opts: &TagOptions) -> Result<Vec<TaggedSequence>, TaggerError> {
        if opts.beam_size == 0 {
            return Err(TaggerError::InvalidOptions("beam size must be at least 1".into()));
        }
        let tokens = self.dictionary.analyze(text);
        let unk = self.model.unk_token();

        let results = self.model.decode(
            tokens.len(),
            opts.beam_size,
            |t, out| {
                let token = &tokens[t];
                let mut candidates: Vec<Candidate> = if token.is_unknown() {
                    let raw = token.text(text).unwrap_or_default();
                    if latin::is_alphabetic(raw) {
                        latin::unknown_guesses()
                            .map(|f| scored(out, DecOutput::new(unk, f)))
                            .collect()
                    } else {
                        vec![scored(out, DecOutput::new(unk, Feature::EMPTY))]
                    }
                } else {
                    token
                        .candidates
                        .iter()
                        .map(|c| scored(out, DecOutput::new(c.lemma_id as usize, c.feature)))
                        .collect()
                };
                rank_candidates(&mut candidates, opts.beam_size);
                candidates
            },
            opts.bidirectional,
        );

        let spans = char_spans(text, &tokens);
        Ok(results
            .into_iter()
            .map(|seq| TaggedSequence {
                score: seq.score,
                tokens: seq
                    .decoded
                    .iter()
                    .zip(&spans)
                    .map(|(out, &(start, end))| self.tagged_token(out, start, end, opts.style))
                    .collect(),
            })
            .collect())
    }

    fn tagged_token(&self, out: &DecOutput, start: usize, end: usize, style: TagStyle) -> TaggedToken {
        let id = u32::try_from(out.token).ok();
        let lemma = id.and_then(|id| self.dictionary.lemma(id)).unwrap_or_default();
        let pos = id.and_then(|id| self.dictionary.pos(id));
        TaggedToken {
            start,
            end,
            lemma: lemma.to_string(),
            tag: style.render(out.feature, pos),
        }
    }

    /// Tags many texts on a worker pool. Results keep the input order and
    /// fail independently.
    #[cfg(feature = "parallel")]
    pub fn tag_batch<S>(
        &self,
        texts: &[S],
        opts: &TagOptions,
        batch: &BatchOptions,
    ) -> Vec<Result<Vec<TaggedSequence>, TaggerError>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let run = || {
            texts
                .par_iter()
                .enumerate()
                .map(|(i, text)| self.tag_item(i, text.as_ref(), opts))
                .collect()
        };
        match rayon::ThreadPoolBuilder::new()
            .num_threads(batch.num_workers)
            .build()
        {
            Ok(pool) => {
                tracing::debug!(workers = pool.current_num_threads(), texts = texts.len(), "tagging batch");
                pool.install(run)
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not build worker pool, using the global pool");
                run()
            }
        }
    }

    /// Tags many texts one after another. Results keep the input order and
    /// fail independently.
    #[cfg(not(feature = "parallel"))]
    pub fn tag_batch<S>(
        &self,
        texts: &[S],
        opts: &TagOptions,
        _batch: &BatchOptions,
    ) -> Vec<Result<Vec<TaggedSequence>, TaggerError>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| self.tag_item(i, text.as_ref(), opts))
            .collect()
    }

    fn tag_item(&self, index: usize, text: &str, opts: &TagOptions) -> Result<Vec<TaggedSequence>, TaggerError> {
        let result = self.tag(text, opts);
        if let Err(e) = &result {
            tracing::warn!(index, error = %e, "tagging failed");
        }
        result
    }
}

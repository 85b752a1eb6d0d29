//! Linguistic annotation: tokens with a part-of-speech tag and a lemma

use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::lexicon::Lexicon;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Universal part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Sym,
    Intj,
    X,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Propn => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Aux => "AUX",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Adp => "ADP",
            PosTag::Det => "DET",
            PosTag::Pron => "PRON",
            PosTag::Cconj => "CCONJ",
            PosTag::Sconj => "SCONJ",
            PosTag::Part => "PART",
            PosTag::Num => "NUM",
            PosTag::Punct => "PUNCT",
            PosTag::Sym => "SYM",
            PosTag::Intj => "INTJ",
            PosTag::X => "X",
        }
    }

    /// Common nouns, proper nouns and verbs: the classes that yield keywords
    pub fn is_keyword_class(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn | PosTag::Verb)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    pub lemma: String,
    pub pos: PosTag,
}

impl AnnotatedToken {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
        }
    }
}

/// A language model that tags and lemmatizes text.
///
/// Loaded once and shared read-only between analyses.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken>;
}

/// English annotator built from word lists and suffix rules
pub struct RuleBasedAnnotator {
    lexicon: Lexicon,
    lemmatizer: Lemmatizer,
}

impl Default for RuleBasedAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedAnnotator {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::english(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Split text into word and punctuation tokens.
    ///
    /// Word boundaries follow UAX #29, then `c++`, `c#` and hyphenated
    /// compounds are glued back together and `'s` / `n't` are split off.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let segments: Vec<&str> = text.split_word_bounds().collect();
        let mut tokens: Vec<String> = Vec::new();
        let mut glued = false;
        let mut join_next = false;

        for (i, &segment) in segments.iter().enumerate() {
            if segment.chars().all(char::is_whitespace) {
                glued = false;
                join_next = false;
                continue;
            }

            if join_next {
                if let Some(last) = tokens.last_mut() {
                    last.push_str(segment);
                }
                join_next = false;
                continue;
            }

            if glued {
                let next = segments.get(i + 1).copied().unwrap_or("");
                if let Some(last) = tokens.last_mut() {
                    let last_char = last.chars().last();

                    let attaches_symbol = matches!(segment, "+" | "#")
                        && last_char.map_or(false, |c| c.is_alphanumeric() || c == '+')
                        && !next.starts_with(char::is_alphanumeric);
                    if attaches_symbol {
                        last.push_str(segment);
                        continue;
                    }

                    let hyphenated = segment == "-"
                        && last_char.map_or(false, char::is_alphanumeric)
                        && next.starts_with(char::is_alphabetic);
                    if hyphenated {
                        last.push_str(segment);
                        join_next = true;
                        continue;
                    }
                }
            }

            tokens.push(segment.to_string());
            glued = true;
        }

        tokens.into_iter().flat_map(split_clitic).collect()
    }

    fn tag_all(&self, tokens: &[String]) -> Vec<PosTag> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let prev = i
                .checked_sub(1)
                .map(|p| (lowered[p].as_str(), tags[p]));
            let next = lowered.get(i + 1).map(String::as_str);
            let tag = self.tag_token(token, &lowered[i], prev, next);
            tags.push(tag);
        }

        tags
    }

    fn tag_token(
        &self,
        original: &str,
        word: &str,
        prev: Option<(&str, PosTag)>,
        next: Option<&str>,
    ) -> PosTag {
        if !word.chars().any(char::is_alphanumeric) {
            return self
                .lexicon
                .closed_class(word)
                .unwrap_or_else(|| symbol_or_punct(word));
        }

        if let Some(tag) = self.lexicon.closed_class(word) {
            return tag;
        }

        if is_numeric(word) || self.lexicon.is_number_word(word) {
            return PosTag::Num;
        }

        if self.lemmatizer.is_irregular_verb_form(word) {
            return PosTag::Verb;
        }

        let next_is_word = next.map_or(false, |w| w.chars().any(char::is_alphanumeric));
        if self.lexicon.is_participle_adjective(word) {
            return if next_is_word { PosTag::Adj } else { PosTag::Verb };
        }

        if self.lexicon.is_adjective(word) {
            return PosTag::Adj;
        }

        if self.lexicon.is_adverb(word) {
            return PosTag::Adv;
        }

        if word.len() > 3 && word.ends_with("ly") {
            return self.lexicon.ly_word(word);
        }

        if word.len() > 4 && word.ends_with("ing") {
            return if self.lexicon.is_ing_noun(word) {
                PosTag::Noun
            } else {
                PosTag::Verb
            };
        }

        if word.len() > 4 && word.ends_with("ed") && !word.ends_with("eed") {
            return PosTag::Verb;
        }

        if self.lexicon.is_common_verb(word) {
            let after_modifier = prev.map_or(false, |(prev_word, tag)| {
                matches!(tag, PosTag::Det | PosTag::Adj | PosTag::Num | PosTag::Adp)
                    || self.lexicon.is_possessive(prev_word)
            });
            return if after_modifier {
                PosTag::Noun
            } else {
                PosTag::Verb
            };
        }

        if word.len() > 3 && word.ends_with('s') {
            let base = self.lemmatizer.lemmatize(word, PosTag::Verb);
            if base != word && self.lexicon.is_common_verb(&base) {
                let after_subject = prev.map_or(false, |(prev_word, tag)| {
                    tag == PosTag::Propn || self.lexicon.is_subject_pronoun(prev_word)
                });
                return if after_subject {
                    PosTag::Verb
                } else {
                    PosTag::Noun
                };
            }
        }

        if self.lexicon.has_adjective_suffix(word) {
            return PosTag::Adj;
        }

        let sentence_start = prev.map_or(true, |(_, tag)| tag == PosTag::Punct);
        if looks_proper(original, sentence_start) {
            return PosTag::Propn;
        }

        PosTag::Noun
    }

    fn lemma_for(&self, token: &str, pos: PosTag) -> String {
        let inflectable = token
            .chars()
            .all(|c| c.is_alphabetic() || c == '-');

        if inflectable {
            self.lemmatizer.lemmatize(token, pos)
        } else {
            token.to_lowercase()
        }
    }
}

impl Annotator for RuleBasedAnnotator {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        let tokens = self.tokenize(text);
        let tags = self.tag_all(&tokens);

        debug!("Annotated {} tokens", tokens.len());

        tokens
            .into_iter()
            .zip(tags)
            .map(|(text, pos)| {
                let lemma = self.lemma_for(&text, pos);
                AnnotatedToken { text, lemma, pos }
            })
            .collect()
    }
}

/// Split `developer's` into `developer` + `'s` and `can't` into `ca` + `n't`
fn split_clitic(token: String) -> Vec<String> {
    for clitic in ["n't", "n’t", "'s", "’s"] {
        if token.len() <= clitic.len() {
            continue;
        }
        let cut = token.len() - clitic.len();
        if token.is_char_boundary(cut) && token[cut..].eq_ignore_ascii_case(clitic) {
            return vec![token[..cut].to_string(), token[cut..].to_string()];
        }
    }
    vec![token]
}

fn symbol_or_punct(token: &str) -> PosTag {
    const SYMBOLS: &str = "$€£¥%+=<>~^©®™°@#*&|§";

    if token.chars().any(|c| SYMBOLS.contains(c)) {
        PosTag::Sym
    } else if token
        .chars()
        .all(|c| c.is_ascii_punctuation() || "•·–—‘’“”…«»".contains(c))
    {
        PosTag::Punct
    } else {
        PosTag::X
    }
}

fn is_numeric(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | '+' | '/' | ':'))
}

fn looks_proper(original: &str, sentence_start: bool) -> bool {
    let has_symbol = original.chars().any(|c| matches!(c, '.' | '+' | '#'));
    let mixed_digits = original.chars().any(|c| c.is_ascii_digit())
        && original.chars().any(char::is_alphabetic);
    let acronym = original.chars().count() > 1
        && original
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit());
    let capitalized = !sentence_start && original.starts_with(char::is_uppercase);

    has_symbol || mixed_digits || acronym || capitalized
}

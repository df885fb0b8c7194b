// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The prediction seam and a simple word-list speller.

use alloc::{string::String, vec::Vec};

use crate::text::trailing_token;

/// What a candidate does when selected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// Appended to the typed text.
    Letter,
    /// Replaces the word being typed.
    Word,
}

/// One entry offered by a [`PredictionProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// How the candidate edits the typed text.
    pub kind: CandidateKind,
    /// Text shown, announced, and inserted.
    pub text: String,
}

impl Candidate {
    /// A letter candidate.
    pub fn letter(text: impl Into<String>) -> Self {
        Self {
            kind: CandidateKind::Letter,
            text: text.into(),
        }
    }

    /// A word candidate.
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            kind: CandidateKind::Word,
            text: text.into(),
        }
    }
}

/// Supplies the ranked letters and words for a spelling list.
///
/// Implementations must be a pure function of the typed text; they never see the navigator.
pub trait PredictionProvider {
    /// Candidates for `entered_text`, best first.
    fn predict(&self, entered_text: &str) -> Vec<Candidate>;
}

/// Ranked word list followed by an alphabet.
///
/// Words are offered in list order when they start with the word being typed (case-insensitive)
/// and are not already equal to it. With nothing typed, the head of the list is offered.
/// Letters always follow the words.
///
/// ```rust
/// use switchscan_nav::{Candidate, PredictionProvider, WordListSpeller};
///
/// let speller = WordListSpeller::new(["hello", "help", "world"]).with_alphabet(["h", "e"]);
/// assert_eq!(
///     speller.predict("he"),
///     vec![
///         Candidate::word("hello"),
///         Candidate::word("help"),
///         Candidate::letter("h"),
///         Candidate::letter("e"),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct WordListSpeller {
    words: Vec<String>,
    alphabet: Vec<String>,
}

impl Default for WordListSpeller {
    fn default() -> Self {
        Self::new(core::iter::empty::<String>())
    }
}

impl WordListSpeller {
    /// Speller over `words` (most likely first) with the letters `a` to `z`.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            alphabet: ('a'..='z').map(String::from).collect(),
        }
    }

    /// Replace the alphabet.
    pub fn with_alphabet<I, S>(mut self, alphabet: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alphabet = alphabet.into_iter().map(Into::into).collect();
        self
    }
}

impl PredictionProvider for WordListSpeller {
    fn predict(&self, entered_text: &str) -> Vec<Candidate> {
        let token = trailing_token(entered_text).to_lowercase();
        let words = self.words.iter().filter(|w| {
            let w = w.to_lowercase();
            w.starts_with(&token) && w != token
        });
        words
            .map(|w| Candidate::word(w.clone()))
            .chain(self.alphabet.iter().map(|l| Candidate::letter(l.clone())))
            .collect()
    }
}

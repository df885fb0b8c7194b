// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the vocabulary tree: node identifiers, kinds, and texts.

use alloc::string::String;

/// Identifier for a node in the tree (generational).
///
/// Identity is handle identity: two nodes carrying the same text are distinct,
/// and an identifier for a removed node never becomes live again, even if its
/// slot is reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What a node does when it is selected.
///
/// The kind drives dispatch; it is not a type hierarchy. Authored kinds are
/// persisted by the host; synthesized kinds (see [`NodeKind::is_synthesized`])
/// are rebuilt every time a spelling list is entered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The vocabulary root. Never focused directly.
    Root,
    /// A vocabulary root whose children are a spelling list.
    RootAndSpelling,
    /// A category that contains further nodes.
    Branch,
    /// A leaf that speaks its text.
    Phrase,
    /// A node whose children are regenerated from the typed text.
    Spelling,
    /// A single letter appended to the typed text.
    Letter,
    /// A predicted word that replaces the word being typed.
    PredictedWord,
    /// The word currently being typed.
    CurrentWord,
    /// Everything typed so far.
    CurrentSentence,
    /// Leaves the spelling list.
    Back,
    /// Removes the last typed character.
    Backspace,
    /// Clears the typed text.
    Clear,
}

impl NodeKind {
    /// Whether nodes of this kind are synthesized on demand by spelling regeneration.
    pub const fn is_synthesized(self) -> bool {
        matches!(
            self,
            Self::Letter
                | Self::PredictedWord
                | Self::CurrentWord
                | Self::CurrentSentence
                | Self::Back
                | Self::Backspace
                | Self::Clear
        )
    }

    /// Whether children of this kind are regenerated rather than authored.
    pub const fn is_spelling(self) -> bool {
        matches!(self, Self::Spelling | Self::RootAndSpelling)
    }

    /// Whether this kind may only appear as the top of a vocabulary.
    pub const fn is_root(self) -> bool {
        matches!(self, Self::Root | Self::RootAndSpelling)
    }
}

/// The three strings a node carries.
///
/// They often start out equal but are stored separately so an editor can
/// change, say, the spoken text without touching what is displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeText {
    /// Text shown to the user.
    pub display: String,
    /// Text announced while the node is focused.
    pub cue: String,
    /// Text spoken when the node is selected.
    pub speak: String,
}

impl NodeText {
    /// Use the same string for display, cue, and speech.
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            display: text.clone(),
            cue: text.clone(),
            speak: text,
        }
    }
}

impl From<&str> for NodeText {
    fn from(text: &str) -> Self {
        Self::uniform(text)
    }
}

impl From<String> for NodeText {
    fn from(text: String) -> Self {
        Self::uniform(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_kinds_are_not_authored() {
        assert!(NodeKind::Letter.is_synthesized());
        assert!(NodeKind::Back.is_synthesized());
        assert!(!NodeKind::Branch.is_synthesized());
        assert!(!NodeKind::Spelling.is_synthesized());
        assert!(!NodeKind::Root.is_synthesized());
    }

    #[test]
    fn uniform_text_fills_every_field() {
        let text = NodeText::uniform("yes");
        assert_eq!(text.display, "yes");
        assert_eq!(text.cue, "yes");
        assert_eq!(text.speak, "yes");
    }
}

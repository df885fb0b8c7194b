// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of a regenerated spelling list.

use alloc::vec::Vec;

use smallvec::{SmallVec, smallvec};
use switchscan_tree::{NodeKind, NodeText};

use crate::predict::{Candidate, CandidateKind};
use crate::settings::{ListPosition, Settings};
use crate::text::trailing_token;

/// Label of the synthesized back entry.
pub const BACK_LABEL: &str = "back";
/// Label of the synthesized backspace entry.
pub const BACKSPACE_LABEL: &str = "backspace";
/// Label of the synthesized clear entry.
pub const CLEAR_LABEL: &str = "clear";

/// Ordered entries for one visit to a spelling node, plus which one receives focus.
#[derive(Clone, Debug)]
pub(crate) struct SpellingPlan {
    pub(crate) entries: Vec<(NodeKind, NodeText)>,
    pub(crate) entry: usize,
}

impl SpellingPlan {
    /// Lay out the entries for `entered` around the provider's `candidates`.
    ///
    /// Order: current sentence, current word, candidates; then the back entry and the
    /// backspace/clear pair are placed at the top or bottom according to `settings`, with
    /// backspace/clear outermost when both go to the same end. Focus goes to the current sentence,
    /// else the current word, else the first candidate, else the first entry.
    pub(crate) fn assemble(
        entered: &str,
        candidates: Vec<Candidate>,
        in_root: bool,
        settings: &Settings,
    ) -> Self {
        let mut body: Vec<(NodeKind, NodeText)> = Vec::with_capacity(candidates.len() + 5);

        if !entered.is_empty() {
            body.push((NodeKind::CurrentSentence, NodeText::uniform(entered)));
        }
        let word = trailing_token(entered);
        if !word.is_empty() {
            body.push((NodeKind::CurrentWord, NodeText::uniform(word)));
        }

        let mut words = 0_usize;
        for candidate in candidates {
            let kind = match candidate.kind {
                CandidateKind::Letter => NodeKind::Letter,
                CandidateKind::Word => {
                    if settings.vocab_history != 0 && words >= settings.vocab_history {
                        continue;
                    }
                    words += 1;
                    NodeKind::PredictedWord
                }
            };
            body.push((kind, NodeText::uniform(candidate.text)));
        }

        let mut top: SmallVec<[(NodeKind, NodeText); 3]> = SmallVec::new();
        let mut bottom: SmallVec<[(NodeKind, NodeText); 3]> = SmallVec::new();

        let controls: SmallVec<[(NodeKind, NodeText); 2]> = smallvec![
            (NodeKind::Backspace, NodeText::uniform(BACKSPACE_LABEL)),
            (NodeKind::Clear, NodeText::uniform(CLEAR_LABEL)),
        ];
        if settings.control_command_position == ListPosition::Top {
            top.extend(controls);
        } else {
            bottom.extend(controls.into_iter().rev());
        }
        if !in_root && settings.show_back_in_list {
            let back = (NodeKind::Back, NodeText::uniform(BACK_LABEL));
            match settings.back_button_position {
                ListPosition::Top => top.push(back),
                ListPosition::Bottom => bottom.push(back),
            }
        }

        let leading = top.len();
        let focus = body
            .iter()
            .position(|(kind, _)| *kind == NodeKind::CurrentSentence)
            .or_else(|| {
                body.iter()
                    .position(|(kind, _)| *kind == NodeKind::CurrentWord)
            })
            .map_or(if body.is_empty() { 0 } else { leading }, |pos| pos + leading);

        let mut entries: Vec<(NodeKind, NodeText)> = top.into_iter().collect();
        entries.extend(body);
        entries.extend(bottom.into_iter().rev());

        Self {
            entries,
            entry: focus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn kinds(plan: &SpellingPlan) -> Vec<NodeKind> {
        plan.entries.iter().map(|(kind, _)| *kind).collect()
    }

    fn letters() -> Vec<Candidate> {
        vec![Candidate::letter("a"), Candidate::letter("b")]
    }

    #[test]
    fn empty_text_focuses_first_candidate() {
        let plan = SpellingPlan::assemble("", letters(), false, &Settings::default());
        assert_eq!(
            kinds(&plan),
            vec![
                NodeKind::Back,
                NodeKind::Letter,
                NodeKind::Letter,
                NodeKind::Backspace,
                NodeKind::Clear,
            ]
        );
        assert_eq!(plan.entry, 1);
    }

    #[test]
    fn sentence_wins_over_word() {
        let plan = SpellingPlan::assemble("hi the", letters(), true, &Settings::default());
        assert_eq!(plan.entries[0].0, NodeKind::CurrentSentence);
        assert_eq!(plan.entries[0].1.display, "hi the");
        assert_eq!(plan.entries[1].0, NodeKind::CurrentWord);
        assert_eq!(plan.entries[1].1.display, "the");
        assert_eq!(plan.entry, 0);
    }

    #[test]
    fn trailing_space_drops_current_word() {
        let plan = SpellingPlan::assemble("hi ", letters(), true, &Settings::default());
        assert!(!kinds(&plan).contains(&NodeKind::CurrentWord));
        assert!(kinds(&plan).contains(&NodeKind::CurrentSentence));
    }

    #[test]
    fn combined_root_has_no_back_entry() {
        let plan = SpellingPlan::assemble("", letters(), true, &Settings::default());
        assert!(!kinds(&plan).contains(&NodeKind::Back));
        assert_eq!(plan.entry, 0);
    }

    #[test]
    fn controls_and_back_follow_position_policy() {
        let settings = Settings {
            control_command_position: ListPosition::Top,
            back_button_position: ListPosition::Bottom,
            ..Settings::default()
        };
        let plan = SpellingPlan::assemble("", letters(), false, &settings);
        assert_eq!(
            kinds(&plan),
            vec![
                NodeKind::Backspace,
                NodeKind::Clear,
                NodeKind::Letter,
                NodeKind::Letter,
                NodeKind::Back,
            ]
        );
        assert_eq!(plan.entry, 2);
    }

    #[test]
    fn back_entry_is_inserted_by_default() {
        for position in [ListPosition::Top, ListPosition::Bottom] {
            let settings = Settings {
                back_button_position: position,
                ..Settings::default()
            };
            let plan = SpellingPlan::assemble("ab", letters(), false, &settings);
            let backs = kinds(&plan)
                .into_iter()
                .filter(|kind| *kind == NodeKind::Back)
                .count();
            assert_eq!(backs, 1);
        }
    }

    #[test]
    fn hidden_back_entry_is_omitted() {
        let settings = Settings {
            show_back_in_list: false,
            ..Settings::default()
        };
        let plan = SpellingPlan::assemble("", letters(), false, &settings);
        assert!(!kinds(&plan).contains(&NodeKind::Back));
    }

    #[test]
    fn predicted_words_are_capped_by_vocab_history() {
        let settings = Settings {
            vocab_history: 1,
            ..Settings::default()
        };
        let candidates = vec![
            Candidate::word("one"),
            Candidate::word("two"),
            Candidate::letter("a"),
        ];
        let plan = SpellingPlan::assemble("", candidates, true, &settings);
        let words: Vec<_> = plan
            .entries
            .iter()
            .filter(|(kind, _)| *kind == NodeKind::PredictedWord)
            .map(|(_, text)| text.display.as_str())
            .collect();
        assert_eq!(words, vec!["one"]);
    }

    #[test]
    fn no_candidates_focuses_first_control() {
        let plan = SpellingPlan::assemble("", Vec::new(), true, &Settings::default());
        assert_eq!(kinds(&plan), vec![NodeKind::Backspace, NodeKind::Clear]);
        assert_eq!(plan.entry, 0);
    }
}

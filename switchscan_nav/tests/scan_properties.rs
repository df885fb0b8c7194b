// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for movement, fast scan, and timer bookkeeping.

use proptest::prelude::*;
use switchscan_nav::{
    Action, ManualScheduler, Navigator, NodeId, NodeKind, Playback, Settings, SpeechCollaborator,
    SpeechTicket, Tree, Utterance, WordListSpeller,
};

/// Speech that finishes at once and counts cues.
#[derive(Debug, Default)]
struct CountingSpeech {
    cues: Vec<String>,
}

impl SpeechCollaborator for CountingSpeech {
    fn speak(&mut self, utterance: Utterance<'_>, _ticket: SpeechTicket) -> Playback {
        self.cues.push(utterance.text.to_owned());
        Playback::Finished
    }

    fn stop(&mut self) {}
}

type Nav = Navigator<CountingSpeech, WordListSpeller, ManualScheduler>;

/// A flat vocabulary of `len` phrases.
fn flat(len: usize, settings: Settings) -> (Nav, Vec<NodeId>) {
    let mut tree = Tree::new();
    let root = tree.insert(None, NodeKind::Root, "home");
    let items = (0..len)
        .map(|i| tree.insert(Some(root), NodeKind::Phrase, format!("item {i}")))
        .collect();
    let nav = Navigator::new(
        tree,
        root,
        CountingSpeech::default(),
        WordListSpeller::new(["hello", "help"]).with_alphabet(["h", "e"]),
        ManualScheduler::new(),
    )
    .with_settings(settings);
    (nav, items)
}

/// A vocabulary with branches, phrases, and a spelling node.
fn nested(shape: &[usize]) -> (Nav, Vec<NodeId>) {
    let mut tree = Tree::new();
    let root = tree.insert(None, NodeKind::Root, "home");
    let mut all = Vec::new();
    for (b, &leaves) in shape.iter().enumerate() {
        let branch = tree.insert(Some(root), NodeKind::Branch, format!("branch {b}"));
        all.push(branch);
        for l in 0..leaves {
            all.push(tree.insert(Some(branch), NodeKind::Phrase, format!("phrase {b}.{l}")));
        }
    }
    all.push(tree.insert(Some(root), NodeKind::Spelling, "spell"));
    let nav = Navigator::new(
        tree,
        root,
        CountingSpeech::default(),
        WordListSpeller::new(["hello", "help"]).with_alphabet(["h", "e"]),
        ManualScheduler::new(),
    );
    (nav, all)
}

#[derive(Debug, Clone)]
enum Op {
    Act(Action),
    FireTimer,
    Remove(usize),
    Detach(usize),
    Appear,
    Disappear,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::None),
        Just(Action::NextNode),
        Just(Action::PrevNode),
        Just(Action::Select),
        Just(Action::Fast),
        Just(Action::Clear),
        Just(Action::GoBack),
        Just(Action::StartScanning),
        Just(Action::GoToHome),
        Just(Action::GoToStartOfBranch),
        Just(Action::PauseScan),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => action_strategy().prop_map(Op::Act),
        4 => Just(Op::FireTimer),
        1 => (0usize..32).prop_map(Op::Remove),
        1 => (0usize..32).prop_map(Op::Detach),
        1 => Just(Op::Appear),
        1 => Just(Op::Disappear),
    ]
}

proptest! {
    #[test]
    fn stepping_wraps_around(len in 1usize..12, start in 0usize..12, steps in 0usize..30) {
        let start = start % len;
        let (mut nav, items) = flat(len, Settings::manual());
        nav.hover_node(items[start], false).unwrap();

        for _ in 0..len {
            nav.next_node().unwrap();
        }
        prop_assert_eq!(nav.hovered(), Some(items[start]));

        for _ in 0..steps {
            nav.next_node().unwrap();
        }
        for _ in 0..steps {
            nav.prev_node().unwrap();
        }
        prop_assert_eq!(nav.hovered(), Some(items[start]));

        nav.prev_node().unwrap();
        prop_assert_eq!(nav.hovered(), Some(items[(start + len - 1) % len]));
    }

    #[test]
    fn fast_scan_visits_each_sibling_once(len in 1usize..12, start in 0usize..12) {
        let start = start % len;
        let (mut nav, items) = flat(len, Settings::manual());
        nav.hover_node(items[start], false).unwrap();
        let before = nav.speech().cues.len();

        nav.start_fast_scan().unwrap();

        let cues = &nav.speech().cues[before..];
        let expected: Vec<String> = (0..len)
            .map(|i| format!("item {}", (start + i) % len))
            .collect();
        prop_assert_eq!(cues, expected.as_slice());
        prop_assert!(!nav.is_fast_scanning());
        prop_assert_eq!(nav.hovered(), Some(items[(start + len - 1) % len]));
        prop_assert!(!nav.has_pending_timer());
    }

    #[test]
    fn at_most_one_timer_is_ever_armed(
        shape in prop::collection::vec(0usize..4, 1..5),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let (mut nav, nodes) = nested(&shape);
        let _ = nav.on_appear();
        for op in ops {
            match op {
                Op::Act(action) => {
                    let _ = nav.do_action(action);
                }
                Op::FireTimer => {
                    if let Some(token) = nav.scheduler_mut().fire_next() {
                        let _ = nav.on_timer(token);
                    }
                }
                Op::Remove(i) => nav.tree_mut().remove(nodes[i % nodes.len()]),
                Op::Detach(i) => nav.tree_mut().detach(nodes[i % nodes.len()]),
                Op::Appear => {
                    let _ = nav.on_appear();
                }
                Op::Disappear => nav.on_disappear(),
            }
            let armed = nav.scheduler().armed_count();
            prop_assert!(armed <= 1);
            prop_assert_eq!(armed == 1, nav.has_pending_timer());
            if let Some(hovered) = nav.hovered() {
                prop_assert_ne!(nav.tree().kind(hovered), Some(NodeKind::Root));
            }
        }
    }

    #[test]
    fn scanning_stops_after_the_loop_cap(len in 1usize..8, loops in 1u32..5) {
        let (mut nav, _) = flat(len, Settings { scan_loops: loops, ..Settings::default() });
        nav.on_appear().unwrap();
        let mut fires = 0usize;
        while let Some(token) = nav.scheduler_mut().fire_next() {
            nav.on_timer(token).unwrap();
            fires += 1;
            prop_assert!(fires <= len * loops as usize);
        }
        prop_assert_eq!(nav.scan_loops(), loops);
        // From the first item: reach the end once, then one full pass per further loop.
        prop_assert_eq!(fires, (len - 1) + len * (loops as usize - 1));
    }
}

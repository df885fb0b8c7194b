// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Switchscan Nav: the scan and navigation state machine for switch-access communication.
//!
//! People who cannot use a touchscreen or keyboard often drive a communication board with one or
//! two switches. The board announces items one at a time ("scanning"), and a switch press selects
//! the announced item. This crate models that interaction as:
//!
//! - **Actions** ([`Action`]): the input-agnostic vocabulary every input subsystem maps into.
//! - **A navigator** ([`Navigator`]): owns the focus, the typed text, and at most one pending timer
//!   and utterance; dispatches selections by [`NodeKind`]; drives automatic scanning with a
//!   loop-count cap and a single-pass "fast scan".
//! - **Collaborator seams**: [`SpeechCollaborator`] for speech, [`PredictionProvider`] for spelling
//!   candidates, and [`Scheduler`] for the scan delay. The navigator never blocks and never stores
//!   closures; collaborators report back through [`Navigator::on_speech_complete`] and
//!   [`Navigator::on_timer`] with the ticket or token they were handed.
//!
//! ## Minimal example
//!
//! Two phrases, scanned automatically:
//!
//! ```rust
//! use switchscan_nav::{
//!     Action, ManualScheduler, Navigator, NodeKind, SilentSpeech, Tree, WordListSpeller,
//! };
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, NodeKind::Root, "home");
//! let yes = tree.insert(Some(root), NodeKind::Phrase, "yes");
//! let no = tree.insert(Some(root), NodeKind::Phrase, "no");
//!
//! let mut nav = Navigator::new(
//!     tree,
//!     root,
//!     SilentSpeech,
//!     WordListSpeller::default(),
//!     ManualScheduler::new(),
//! );
//! nav.on_appear().unwrap();
//! assert_eq!(nav.hovered(), Some(yes));
//!
//! // Silent speech finishes each cue at once, so the scan step is already armed…
//! let token = nav.scheduler_mut().fire_next().unwrap();
//! nav.on_timer(token).unwrap();
//! assert_eq!(nav.hovered(), Some(no));
//!
//! // …and explicit input moves focus directly.
//! nav.do_action(Action::PrevNode).unwrap();
//! assert_eq!(nav.hovered(), Some(yes));
//! ```
//!
//! ## Recovery
//!
//! The tree may be edited while the navigator runs ([`Navigator::tree_mut`]). Whenever an
//! operation finds the focused node orphaned, stale, or otherwise structurally out of place, the
//! navigator cancels its timer, stops speech, re-enters the vocabulary root, and only then returns
//! a [`ScanError`] describing what it found.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Settings`] and [`ListPosition`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod cycle;
mod error;
mod navigator;
mod predict;
mod settings;
mod speech;
mod spelling;
mod text;
mod timer;

#[cfg(test)]
mod testing;

pub use action::Action;
pub use error::ScanError;
pub use navigator::Navigator;
pub use predict::{Candidate, CandidateKind, PredictionProvider, WordListSpeller};
pub use settings::{ListPosition, Settings};
pub use speech::{Playback, SilentSpeech, SpeechCollaborator, SpeechIntent, SpeechTicket, Utterance};
pub use spelling::{BACK_LABEL, BACKSPACE_LABEL, CLEAR_LABEL};
pub use timer::{ManualScheduler, Scheduler, TimerToken};

pub use switchscan_tree::{NodeId, NodeKind, NodeText, Tree};

// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation engine: focus, dispatch, scanning, and recovery.

use alloc::string::String;
use core::time::Duration;

use switchscan_tree::{NodeId, NodeKind, Tree};
use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::cycle::{Step, wrap_index};
use crate::error::ScanError;
use crate::predict::PredictionProvider;
use crate::settings::Settings;
use crate::spelling::SpellingPlan;
use crate::speech::{Playback, SpeechCollaborator, SpeechIntent, SpeechTicket, Utterance};
use crate::text::replace_last_token;
use crate::timer::{Scheduler, TimerToken};

/// What happens after a cue for a hovered node finishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum AfterCue {
    /// Nothing; focus stays put.
    Idle,
    /// Arm the auto-scan timer.
    Scan,
    /// Advance the fast-scan pass.
    FastScan,
}

/// Work deferred until an utterance completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Continuation {
    Cue { node: NodeId, mode: AfterCue },
    /// A phrase was spoken; go home.
    Phrase,
    /// The typed sentence was spoken; clear it and go home.
    Sentence,
}

#[derive(Copy, Clone, Debug)]
struct PendingSpeech {
    ticket: SpeechTicket,
    continuation: Continuation,
}

#[derive(Copy, Clone, Debug)]
struct FastScan {
    start_index: usize,
}

/// Scan and navigation state machine over a vocabulary [`Tree`].
///
/// The navigator owns the tree, the focused ("hovered") node, the typed-text buffer, and at most
/// one pending timer and one pending utterance. It is driven from a single logical thread through
/// three kinds of entry points:
///
/// - user input: [`Navigator::do_action`] and the lifecycle hooks;
/// - speech completion: [`Navigator::on_speech_complete`];
/// - timer fire: [`Navigator::on_timer`].
///
/// Every public entry point recovers from structural faults before returning them: it cancels the
/// timer, stops speech, and re-enters the vocabulary root.
///
/// The type parameters are the speech collaborator `S`, the prediction provider `P`, and the
/// scheduler `C`.
pub struct Navigator<S, P, C> {
    tree: Tree,
    root: NodeId,
    settings: Settings,
    speech: S,
    predictor: P,
    scheduler: C,
    hovered: Option<NodeId>,
    entered_text: String,
    scan_loops: u32,
    pending_timer: Option<TimerToken>,
    next_timer: u64,
    pending_speech: Option<PendingSpeech>,
    next_ticket: u64,
    fast_scan: Option<FastScan>,
    dont_queue_next_item: bool,
}

impl<S, P, C> core::fmt::Debug for Navigator<S, P, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("tree", &self.tree)
            .field("root", &self.root)
            .field("settings", &self.settings)
            .field("hovered", &self.hovered)
            .field("entered_text", &self.entered_text)
            .field("scan_loops", &self.scan_loops)
            .field("pending_timer", &self.pending_timer)
            .field("pending_speech", &self.pending_speech)
            .field("fast_scan", &self.fast_scan)
            .field("dont_queue_next_item", &self.dont_queue_next_item)
            .finish_non_exhaustive()
    }
}

impl<S, P, C> Navigator<S, P, C>
where
    S: SpeechCollaborator,
    P: PredictionProvider,
    C: Scheduler,
{
    /// Create a navigator over `tree` with `root` as the vocabulary root and default settings.
    ///
    /// Nothing is hovered until [`Navigator::on_appear`] (or any action) enters the root.
    pub fn new(tree: Tree, root: NodeId, speech: S, predictor: P, scheduler: C) -> Self {
        Self {
            tree,
            root,
            settings: Settings::default(),
            speech,
            predictor,
            scheduler,
            hovered: None,
            entered_text: String::new(),
            scan_loops: 0,
            pending_timer: None,
            next_timer: 0,
            pending_speech: None,
            next_ticket: 0,
            fast_scan: None,
            dont_queue_next_item: false,
        }
    }

    /// Replace the settings at construction time.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    // --- accessors ---

    /// The vocabulary root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The focused node, if any.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// The typed text.
    pub fn entered_text(&self) -> &str {
        &self.entered_text
    }

    /// Completed passes in the current scan session.
    pub fn scan_loops(&self) -> u32 {
        self.scan_loops
    }

    /// Whether a fast-scan pass is in progress.
    pub fn is_fast_scanning(&self) -> bool {
        self.fast_scan.is_some()
    }

    /// Whether the auto-scan timer is armed.
    pub fn has_pending_timer(&self) -> bool {
        self.pending_timer.is_some()
    }

    /// Whether an utterance is in flight.
    pub fn is_speaking(&self) -> bool {
        self.pending_speech.is_some()
    }

    /// The vocabulary tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Mutable access for editors. The navigator tolerates any edit, including removing or
    /// detaching the focused node; the next operation that notices recovers to the root.
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swap settings. Takes effect at the next scanning decision.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// The speech collaborator.
    pub fn speech(&self) -> &S {
        &self.speech
    }

    /// Mutable access to the speech collaborator.
    pub fn speech_mut(&mut self) -> &mut S {
        &mut self.speech
    }

    /// The prediction provider.
    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    /// Mutable access to the scheduler, for hosts that drive its clock.
    pub fn scheduler_mut(&mut self) -> &mut C {
        &mut self.scheduler
    }

    /// Skip arming the auto-scan timer once, at the next scanning decision.
    pub fn suppress_next_scan(&mut self) {
        self.dont_queue_next_item = true;
    }

    // --- entry points ---

    /// Handle one input action.
    pub fn do_action(&mut self, action: Action) -> Result<(), ScanError> {
        debug!(?action, "action");
        if action.is_explicit() {
            self.scan_loops = 0;
            if action != Action::Fast {
                self.stop_fast_scan();
            }
        }
        self.guarded(|nav| match action {
            Action::None => Ok(()),
            Action::NextNode => nav.try_step(Step::Forward, "next_node"),
            Action::PrevNode => nav.try_step(Step::Backward, "prev_node"),
            Action::Select => match nav.hovered {
                Some(node) => nav.try_click(node, false),
                None => nav.try_click(nav.root, false),
            },
            Action::Fast => {
                if nav.fast_scan.is_some() {
                    nav.stop_fast_scan();
                    Ok(())
                } else {
                    nav.try_start_fast_scan()
                }
            }
            Action::Clear => nav.try_replace_text(String::new()),
            Action::GoBack => nav.try_go_back(),
            Action::StartScanning => match nav.hovered {
                Some(node) => nav.try_hover(node, nav.scan_mode(true)),
                None => nav.try_click(nav.root, false),
            },
            Action::GoToHome => nav.try_click(nav.root, false),
            Action::GoToStartOfBranch => nav.try_go_to_start_of_branch(),
            Action::PauseScan => {
                nav.pause_scan();
                Ok(())
            }
        })
    }

    /// Report that the utterance identified by `ticket` finished.
    ///
    /// Completions for utterances that were stopped or superseded are ignored.
    pub fn on_speech_complete(&mut self, ticket: SpeechTicket) -> Result<(), ScanError> {
        let Some(pending) = self.pending_speech.take_if(|p| p.ticket == ticket) else {
            trace!(?ticket, "ignoring stale speech completion");
            return Ok(());
        };
        self.guarded(|nav| nav.resume(pending.continuation))
    }

    /// Report that the timer identified by `token` fired.
    ///
    /// Tokens that were cancelled or replaced are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> Result<(), ScanError> {
        if self.pending_timer != Some(token) {
            trace!(?token, "ignoring cancelled timer");
            return Ok(());
        }
        self.pending_timer = None;
        self.guarded(|nav| nav.try_step(Step::Forward, "scan_timer"))
    }

    /// The vocabulary became visible: enter the root and scan if configured to on launch.
    pub fn on_appear(&mut self) -> Result<(), ScanError> {
        self.reset_session();
        self.guarded(|nav| nav.try_click(nav.root, true))
    }

    /// The vocabulary became visible in edit mode: enter the root without scanning.
    pub fn on_appear_edit(&mut self) -> Result<(), ScanError> {
        self.reset_session();
        self.dont_queue_next_item = true;
        self.guarded(|nav| nav.try_click(nav.root, true))
    }

    /// The vocabulary was hidden: cancel the timer, stop speech, and end fast scan.
    pub fn on_disappear(&mut self) {
        self.reset_session();
        debug!("navigator hidden");
    }

    // --- operations ---

    /// Activate `node` according to its kind.
    ///
    /// `is_startup` picks the scan policy for the resulting focus: scan on launch rather than
    /// scan after selection.
    pub fn click_node(&mut self, node: NodeId, is_startup: bool) -> Result<(), ScanError> {
        self.guarded(|nav| nav.try_click(node, is_startup))
    }

    /// Focus `node` and announce it, optionally arming the auto-scan once the cue finishes.
    pub fn hover_node(&mut self, node: NodeId, scan: bool) -> Result<(), ScanError> {
        self.guarded(|nav| nav.try_hover(node, nav.scan_mode(scan)))
    }

    /// Move focus to the next sibling, wrapping at the end.
    pub fn next_node(&mut self) -> Result<(), ScanError> {
        self.guarded(|nav| nav.try_step(Step::Forward, "next_node"))
    }

    /// Move focus to the previous sibling, wrapping at the start.
    pub fn prev_node(&mut self) -> Result<(), ScanError> {
        self.guarded(|nav| nav.try_step(Step::Backward, "prev_node"))
    }

    /// Start a single rapid pass over the focused node's siblings.
    pub fn start_fast_scan(&mut self) -> Result<(), ScanError> {
        self.guarded(Self::try_start_fast_scan)
    }

    /// End the fast-scan pass in progress. Does nothing if none is running.
    pub fn stop_fast_scan(&mut self) {
        if self.fast_scan.take().is_some() {
            debug!("fast scan stopped");
        }
    }

    /// Rebuild the children of spelling node `parent` from the typed text.
    ///
    /// Returns the child that should receive focus.
    pub fn reset_spelling_nodes(&mut self, parent: NodeId) -> Result<NodeId, ScanError> {
        self.guarded(|nav| nav.try_reset_spelling(parent))
    }

    /// Replace the typed text, rebuilding the spelling list if focus is inside one.
    pub fn set_entered_text(&mut self, text: impl Into<String>) -> Result<(), ScanError> {
        let text = text.into();
        self.guarded(|nav| nav.try_replace_text(text))
    }

    // --- internals ---

    fn guarded<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ScanError>,
    ) -> Result<T, ScanError> {
        let result = f(self);
        if let Err(error) = &result {
            self.recover(error);
        }
        result
    }

    /// Return to a clean state at the top of the vocabulary.
    fn recover(&mut self, error: &ScanError) {
        warn!(%error, "recovering to vocabulary root");
        self.reset_session();
        if let Err(again) = self.try_click(self.root, true) {
            warn!(error = %again, "vocabulary root cannot be entered");
            self.reset_session();
            self.hovered = None;
        }
    }

    fn reset_session(&mut self) {
        self.cancel_timer();
        self.silence();
        self.fast_scan = None;
        self.scan_loops = 0;
        self.dont_queue_next_item = false;
    }

    fn pause_scan(&mut self) {
        self.cancel_timer();
        self.stop_fast_scan();
        if let Some(PendingSpeech {
            continuation: Continuation::Cue { mode, .. },
            ..
        }) = &mut self.pending_speech
        {
            *mode = AfterCue::Idle;
        }
    }

    fn scan_mode(&self, requested: bool) -> AfterCue {
        if requested && self.settings.scanning {
            AfterCue::Scan
        } else {
            AfterCue::Idle
        }
    }

    fn selection_mode(&self, is_startup: bool) -> AfterCue {
        self.scan_mode(if is_startup {
            self.settings.scan_on_app_launch
        } else {
            self.settings.scan_after_selection
        })
    }

    fn try_click(&mut self, node: NodeId, is_startup: bool) -> Result<(), ScanError> {
        self.cancel_timer();
        let kind = self.live_kind(node, "click_node")?;
        let mode = self.selection_mode(is_startup);
        debug!(node = %self.tree.describe(node), is_startup, "click");
        match kind {
            NodeKind::Root => {
                if node != self.root {
                    return Err(self.unhandled(node, kind));
                }
                let first = self
                    .tree
                    .first_child(node)
                    .ok_or_else(|| ScanError::NoChildren {
                        node: self.tree.describe(node),
                    })?;
                self.try_hover(first, mode)
            }
            NodeKind::RootAndSpelling | NodeKind::Spelling => {
                if kind == NodeKind::RootAndSpelling && node != self.root {
                    return Err(self.unhandled(node, kind));
                }
                self.enter_spelling(node, mode)
            }
            NodeKind::Branch => match self.tree.first_child(node) {
                Some(first) => self.try_hover(first, mode),
                None => self.try_hover(node, mode),
            },
            NodeKind::Phrase => {
                let text = self.speak_text(node);
                self.speak(text, SpeechIntent::Spoken, Continuation::Phrase)
            }
            NodeKind::Back => {
                let parent = self
                    .tree
                    .parent_of(node)
                    .ok_or_else(|| ScanError::NoParent {
                        node: self.tree.describe(node),
                    })?;
                self.try_hover(parent, mode)
            }
            NodeKind::PredictedWord | NodeKind::CurrentWord => {
                let parent = self.spelling_parent(node, kind)?;
                let word = self.display_text(node);
                replace_last_token(&mut self.entered_text, &word);
                self.enter_spelling(parent, mode)
            }
            NodeKind::Letter => {
                let parent = self.spelling_parent(node, kind)?;
                let letter = self.display_text(node);
                self.entered_text.push_str(&letter);
                self.enter_spelling(parent, mode)
            }
            NodeKind::Backspace => {
                let parent = self.spelling_parent(node, kind)?;
                self.entered_text.pop();
                self.enter_spelling(parent, mode)
            }
            NodeKind::Clear => {
                let parent = self.spelling_parent(node, kind)?;
                self.entered_text.clear();
                self.enter_spelling(parent, mode)
            }
            NodeKind::CurrentSentence => {
                let text = self.entered_text.clone();
                self.speak(text, SpeechIntent::Spoken, Continuation::Sentence)
            }
        }
    }

    fn enter_spelling(&mut self, parent: NodeId, mode: AfterCue) -> Result<(), ScanError> {
        let entry = self.rebuild_spelling(parent)?;
        self.try_hover(entry, mode)
    }

    fn try_reset_spelling(&mut self, parent: NodeId) -> Result<NodeId, ScanError> {
        let entry = self.rebuild_spelling(parent)?;
        // The previous generation of entries is gone; do not leave focus on one of them.
        if let Some(hovered) = self.hovered
            && self.tree.parent_of(hovered).is_none()
        {
            debug!(node = %self.tree.describe(hovered), "re-pointing stranded hover");
            let mode = match self.pending_speech {
                Some(PendingSpeech {
                    continuation: Continuation::Cue { node, mode },
                    ..
                }) if node == hovered => mode,
                _ => self.scan_mode(true),
            };
            self.try_hover(entry, mode)?;
        }
        Ok(entry)
    }

    fn rebuild_spelling(&mut self, parent: NodeId) -> Result<NodeId, ScanError> {
        let attached = parent == self.root || self.tree.is_descendant_of(parent, self.root);
        let kind = match self.tree.kind(parent) {
            Some(kind) if attached => kind,
            _ => {
                return Err(ScanError::NoParent {
                    node: self.tree.describe(parent),
                });
            }
        };
        if !kind.is_spelling() {
            return Err(self.unhandled(parent, kind));
        }
        let candidates = self.predictor.predict(&self.entered_text);
        let plan = SpellingPlan::assemble(
            &self.entered_text,
            candidates,
            kind == NodeKind::RootAndSpelling,
            &self.settings,
        );
        let entry_index = plan.entry;
        let children = self.tree.replace_children(parent, plan.entries);
        let entry = children
            .get(entry_index)
            .copied()
            .ok_or_else(|| ScanError::NoChildren {
                node: self.tree.describe(parent),
            })?;
        debug!(
            parent = %self.tree.describe(parent),
            children = children.len(),
            "spelling list rebuilt"
        );
        Ok(entry)
    }

    fn try_hover(&mut self, node: NodeId, mode: AfterCue) -> Result<(), ScanError> {
        let kind = self.live_kind(node, "hover_node")?;
        match kind {
            NodeKind::Root => {
                return Err(ScanError::HoveredRootNode {
                    node: self.tree.describe(node),
                });
            }
            NodeKind::RootAndSpelling => {
                return Err(ScanError::HoveredInvalidKind {
                    kind,
                    node: self.tree.describe(node),
                });
            }
            _ => {}
        }
        self.cancel_timer();
        self.hovered = Some(node);
        debug!(node = %self.tree.describe(node), ?mode, "hover");
        let cue = self
            .tree
            .text(node)
            .map(|t| t.cue.clone())
            .unwrap_or_default();
        self.speak(cue, SpeechIntent::Cue, Continuation::Cue { node, mode })
    }

    fn try_step(&mut self, step: Step, call_site: &'static str) -> Result<(), ScanError> {
        self.cancel_timer();
        let current = self.hovered_or_orphan(call_site)?;
        let target = {
            let siblings = self.siblings(current, call_site)?;
            let origin = siblings.iter().position(|&c| c == current);
            let len = siblings.len();
            let index = wrap_index(origin, len, step).unwrap_or(len);
            *siblings
                .get(index)
                .ok_or(ScanError::InvalidNodeIndex { index, len })?
        };
        self.try_hover(target, self.scan_mode(true))
    }

    fn try_go_back(&mut self) -> Result<(), ScanError> {
        let current = self.hovered_or_orphan("go_back")?;
        // Validates attachment to the vocabulary root.
        self.siblings(current, "go_back")?;
        let mode = self.scan_mode(true);
        match self.tree.parent_of(current) {
            Some(parent) if parent != self.root => self.try_hover(parent, mode),
            _ => self.try_hover(current, mode),
        }
    }

    fn try_go_to_start_of_branch(&mut self) -> Result<(), ScanError> {
        let current = self.hovered_or_orphan("go_to_start_of_branch")?;
        let first = self.siblings(current, "go_to_start_of_branch")?[0];
        self.try_hover(first, self.scan_mode(true))
    }

    fn try_replace_text(&mut self, text: String) -> Result<(), ScanError> {
        self.entered_text = text;
        let spelling = self
            .hovered
            .and_then(|h| self.tree.parent_of(h))
            .filter(|&p| self.tree.kind(p).is_some_and(NodeKind::is_spelling));
        match spelling {
            Some(parent) => self.enter_spelling(parent, self.selection_mode(false)),
            None => Ok(()),
        }
    }

    fn try_start_fast_scan(&mut self) -> Result<(), ScanError> {
        self.cancel_timer();
        let current = self.hovered_or_orphan("start_fast_scan")?;
        let start_index = self
            .siblings(current, "start_fast_scan")?
            .iter()
            .position(|&c| c == current)
            .ok_or_else(|| ScanError::NoSiblings {
                node: self.tree.describe(current),
                call_site: "start_fast_scan",
            })?;
        debug!(start_index, "fast scan started");
        self.fast_scan = Some(FastScan { start_index });
        self.try_hover(current, AfterCue::FastScan)
    }

    fn continue_fast_scan(&mut self, node: NodeId) -> Result<(), ScanError> {
        let Some(FastScan { start_index }) = self.fast_scan else {
            return Ok(());
        };
        let target = {
            let siblings = self.siblings(node, "continue_fast_scan")?;
            let len = siblings.len();
            let origin = siblings.iter().position(|&c| c == node);
            match wrap_index(origin, len, Step::Forward) {
                Some(next) if start_index < len && next != start_index => Some(siblings[next]),
                _ => None,
            }
        };
        match target {
            Some(next) => self.try_hover(next, AfterCue::FastScan),
            None => {
                self.stop_fast_scan();
                Ok(())
            }
        }
    }

    /// Decide whether to arm the auto-scan timer after `node`'s cue.
    fn set_next_move_timer(&mut self, node: NodeId) -> Result<(), ScanError> {
        self.cancel_timer();
        if !self.settings.scanning {
            return Ok(());
        }
        let is_last = self.siblings(node, "set_next_move_timer")?.last() == Some(&node);
        if is_last {
            self.scan_loops = self.scan_loops.saturating_add(1);
        }
        let max = self.settings.scan_loops;
        if max != 0 && self.scan_loops >= max {
            debug!(loops = self.scan_loops, "scan loop limit reached");
            return Ok(());
        }
        let delay = if self.settings.fast_first_loop && self.scan_loops == 0 {
            Duration::ZERO
        } else {
            self.settings.scan_wait_time
        };
        self.arm_timer(delay);
        Ok(())
    }

    fn resume(&mut self, continuation: Continuation) -> Result<(), ScanError> {
        match continuation {
            Continuation::Cue { node, mode } => {
                if self.hovered != Some(node) {
                    return Ok(());
                }
                match mode {
                    AfterCue::FastScan => self.continue_fast_scan(node),
                    AfterCue::Idle => Ok(()),
                    AfterCue::Scan => {
                        if core::mem::take(&mut self.dont_queue_next_item) {
                            debug!("scan suppressed once");
                            return Ok(());
                        }
                        self.set_next_move_timer(node)
                    }
                }
            }
            Continuation::Phrase => self.try_click(self.root, false),
            Continuation::Sentence => {
                self.entered_text.clear();
                self.try_click(self.root, false)
            }
        }
    }

    fn speak(
        &mut self,
        text: String,
        intent: SpeechIntent,
        continuation: Continuation,
    ) -> Result<(), ScanError> {
        self.silence();
        if text.trim().is_empty() {
            return self.resume(continuation);
        }
        let ticket = SpeechTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let utterance = Utterance {
            text: &text,
            intent,
        };
        match self.speech.speak(utterance, ticket) {
            Playback::Started => {
                self.pending_speech = Some(PendingSpeech {
                    ticket,
                    continuation,
                });
                Ok(())
            }
            Playback::Finished => self.resume(continuation),
        }
    }

    fn silence(&mut self) {
        if self.pending_speech.take().is_some() {
            self.speech.stop();
        }
    }

    fn arm_timer(&mut self, delay: Duration) {
        self.cancel_timer();
        let token = TimerToken(self.next_timer);
        self.next_timer = self.next_timer.wrapping_add(1);
        trace!(?token, ?delay, "arming scan timer");
        self.scheduler.arm(delay, token);
        self.pending_timer = Some(token);
    }

    fn cancel_timer(&mut self) {
        if let Some(token) = self.pending_timer.take() {
            self.scheduler.cancel(token);
        }
    }

    fn hovered_or_orphan(&self, call_site: &'static str) -> Result<NodeId, ScanError> {
        self.hovered.ok_or_else(|| ScanError::NoSiblings {
            node: String::from("no hovered node"),
            call_site,
        })
    }

    /// Sibling list of a node that is still reachable from the vocabulary root.
    fn siblings(&self, node: NodeId, call_site: &'static str) -> Result<&[NodeId], ScanError> {
        let attached = self.tree.is_descendant_of(node, self.root);
        match self.tree.siblings_of(node) {
            Some(siblings) if attached && !siblings.is_empty() => Ok(siblings),
            _ => Err(ScanError::NoSiblings {
                node: self.tree.describe(node),
                call_site,
            }),
        }
    }

    /// Parent of a synthesized spelling entry.
    fn spelling_parent(&self, node: NodeId, kind: NodeKind) -> Result<NodeId, ScanError> {
        let parent = self
            .tree
            .parent_of(node)
            .ok_or_else(|| ScanError::NoParent {
                node: self.tree.describe(node),
            })?;
        match self.tree.kind(parent) {
            Some(parent_kind) if parent_kind.is_spelling() => Ok(parent),
            _ => Err(self.unhandled(node, kind)),
        }
    }

    fn live_kind(&self, node: NodeId, call_site: &'static str) -> Result<NodeKind, ScanError> {
        self.tree.kind(node).ok_or_else(|| ScanError::StaleNode {
            node: self.tree.describe(node),
            call_site,
        })
    }

    fn unhandled(&self, node: NodeId, kind: NodeKind) -> ScanError {
        ScanError::UnhandledNodeKind {
            kind,
            node: self.tree.describe(node),
        }
    }

    fn display_text(&self, node: NodeId) -> String {
        self.tree
            .text(node)
            .map(|t| t.display.clone())
            .unwrap_or_default()
    }

    fn speak_text(&self, node: NodeId) -> String {
        self.tree
            .text(node)
            .map(|t| t.speak.clone())
            .unwrap_or_default()
    }
}

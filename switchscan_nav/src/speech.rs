// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The speech collaborator seam.
//!
//! Speech is asynchronous. The navigator hands every utterance a fresh [`SpeechTicket`] and keeps
//! a record of what to do when it finishes. A collaborator either reports right away that the
//! utterance is already over ([`Playback::Finished`], for example when audio is unavailable) or
//! returns [`Playback::Started`] and later has the host call
//! [`Navigator::on_speech_complete`](crate::Navigator::on_speech_complete) with the same ticket,
//! exactly once.
//!
//! After [`SpeechCollaborator::stop`] the navigator forgets the ticket, so a completion that
//! races the stop is ignored.

/// Why something is being said.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpeechIntent {
    /// Announcing the focused item, usually in a quieter or distinct voice.
    Cue,
    /// Output meant for the conversation partner.
    Spoken,
}

/// A single request to the speech collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Utterance<'a> {
    /// Text to say.
    pub text: &'a str,
    /// Voice to say it in.
    pub intent: SpeechIntent,
}

/// Identifies one utterance so its completion can be matched up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpeechTicket(pub(crate) u64);

/// What happened when an utterance was requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Playback {
    /// Playback is under way; completion will be reported through the host.
    Started,
    /// The utterance is already over, or could not start. No completion will follow.
    Finished,
}

/// Produces speech on behalf of the navigator.
pub trait SpeechCollaborator {
    /// Begin saying `utterance`.
    fn speak(&mut self, utterance: Utterance<'_>, ticket: SpeechTicket) -> Playback;

    /// Cancel whatever is being said. No completion may be reported for it afterwards.
    fn stop(&mut self);
}

/// A collaborator that never makes a sound and finishes every utterance immediately.
///
/// Handy for headless hosts and tests: every cue completes synchronously, so scanning decisions
/// are taken inside the call that hovered the node.
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentSpeech;

impl SpeechCollaborator for SilentSpeech {
    fn speak(&mut self, _utterance: Utterance<'_>, _ticket: SpeechTicket) -> Playback {
        Playback::Finished
    }

    fn stop(&mut self) {}
}

// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles shared by unit tests.

use alloc::{string::String, vec::Vec};

use crate::speech::{Playback, SpeechCollaborator, SpeechIntent, SpeechTicket, Utterance};

/// Speech that records every request and leaves completion to the test.
#[derive(Debug, Default)]
pub(crate) struct RecordingSpeech {
    pub(crate) spoken: Vec<(String, SpeechIntent, SpeechTicket)>,
    pub(crate) stops: usize,
}

impl RecordingSpeech {
    /// Ticket and text of the most recent request.
    pub(crate) fn last(&self) -> Option<(&str, SpeechIntent, SpeechTicket)> {
        self.spoken
            .last()
            .map(|(text, intent, ticket)| (text.as_str(), *intent, *ticket))
    }

    pub(crate) fn texts(&self) -> Vec<&str> {
        self.spoken.iter().map(|(text, _, _)| text.as_str()).collect()
    }
}

impl SpeechCollaborator for RecordingSpeech {
    fn speak(&mut self, utterance: Utterance<'_>, ticket: SpeechTicket) -> Playback {
        self.spoken.push((String::from(utterance.text), utterance.intent, ticket));
        Playback::Started
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}
